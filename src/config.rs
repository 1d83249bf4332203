// SPDX-License-Identifier: GPL-3.0-or-later
// src/config.rs
//
// Global configuration for the editor and its command-line driver.

use std::path::PathBuf;

use crate::constant::{DEFAULT_JPEG_QUALITY, DEFAULT_OUTPUT_SIZE};

/// Global configuration for the editor.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Edge length of the rasterized square in pixels.
    pub output_size: u32,
    /// JPEG quality used when encoding the crop (0-100).
    pub jpeg_quality: u8,
    /// Width of the crop container in display pixels.
    pub container_width: f32,
    /// Minimum container height in display pixels.
    pub min_container_height: f32,
    /// Maximum container (and image) height in display pixels.
    pub max_container_height: f32,
    /// Directory the command-line driver writes the crop into.
    pub output_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_size: DEFAULT_OUTPUT_SIZE,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            container_width: 640.0,
            min_container_height: 320.0,
            max_container_height: 480.0,
            output_dir: dirs::picture_dir()
                .or_else(dirs::home_dir)
                .unwrap_or_else(|| PathBuf::from(".")),
        }
    }
}
