// SPDX-License-Identifier: GPL-3.0-or-later
// src/lib.rs
//
// Interactive square-crop editor: pointer-driven selection over a displayed
// image, rasterized into a fixed-size JPEG square.

pub mod app;
pub mod config;
pub mod constant;
pub mod domain;

pub use app::document::{ImageSource, RasterDocument};
pub use app::layout::{ContainLayout, Surface};
pub use app::rasterize::{CroppedFile, Rasterizer};
pub use app::{CropEditor, EditorMessage, EditorPhase};
pub use domain::crop::{Corner, CropSelection, DisplayBounds, DragAction, DragKind};
pub use domain::geometry::{Point, Rect};
