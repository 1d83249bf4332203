// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/mod.rs
//
// Pure domain models, free of rendering and I/O.

pub mod crop;
pub mod geometry;
