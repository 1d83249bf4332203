// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/document/mod.rs
//
// Document module root: the image being cropped and where it comes from.

pub mod raster;

pub use raster::{ImageSource, RasterDocument};
