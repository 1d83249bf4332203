// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/mod.rs
//
// View-side helpers: overlay geometry and preview rendering.

pub mod crop;
