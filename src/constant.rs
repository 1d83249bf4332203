// SPDX-License-Identifier: GPL-3.0-or-later
// src/constant.rs
//
// Editor constants that should not be changed by the user.

/// Smallest edge length of the crop square, in display pixels.
pub const MIN_SELECTION_SIZE: f32 = 40.0;

/// Edge length of a corner handle's hit area, in display pixels.
pub const HANDLE_SIZE: f32 = 20.0;

/// Width of the selection border drawn in previews.
pub const BORDER_WIDTH: f32 = 2.0;

/// Opacity of the shade drawn outside the selection (0.4 = 40% black).
pub const SHADE_ALPHA: f32 = 0.4;

/// File name handed to the caller for every rasterized crop.
pub const OUTPUT_FILE_NAME: &str = "avatar.jpg";

/// MIME type of the rasterized crop.
pub const OUTPUT_MIME: &str = "image/jpeg";

/// Default edge length of the output square in pixels.
pub const DEFAULT_OUTPUT_SIZE: u32 = 512;

/// Default JPEG quality (0-100).
pub const DEFAULT_JPEG_QUALITY: u8 = 92;
