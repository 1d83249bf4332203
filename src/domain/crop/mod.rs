// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop/mod.rs
//
// Crop domain: display bounds, square selection, gestures and pixel mapping.

pub mod bounds;
pub mod gesture;
pub mod region;
pub mod selection;

pub use bounds::DisplayBounds;
pub use gesture::{Corner, DragAction, DragKind};
pub use region::{CropRegion, Placement, SourceRegion};
pub use selection::CropSelection;
