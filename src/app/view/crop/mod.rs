// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/mod.rs
//
// Crop overlay module: hit testing, shade geometry and preview rendering.

mod overlay;
pub mod preview;

pub use overlay::{DragTarget, handle_rect, handle_rects, hit_test, shade_rects};
