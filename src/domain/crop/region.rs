// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop/region.rs
//
// Mapping of the display selection onto the image's native pixel grid.

use crate::domain::crop::bounds::DisplayBounds;
use crate::domain::crop::selection::CropSelection;

/// Integer pixel rectangle.
///
/// Pure domain model, no UI concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRegion {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if region has valid dimensions.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// The selection expressed in native pixels, before clipping.
///
/// Both the X and Y origin use their own axis scale, but the side length uses
/// the X scale only. When the image is displayed with unequal axis scales the
/// region is therefore not square in native pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceRegion {
    pub x: f32,
    pub y: f32,
    pub side: f32,
}

/// Which source pixels land where in the output square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Pixels read from the source image.
    pub source: CropRegion,
    /// Rectangle of the output square they are resampled into.
    pub target: CropRegion,
}

impl SourceRegion {
    pub fn map(bounds: &DisplayBounds, selection: &CropSelection) -> Self {
        let scale_x = bounds.scale_x();
        let scale_y = bounds.scale_y();
        Self {
            x: (selection.x - bounds.x) * scale_x,
            y: (selection.y - bounds.y) * scale_y,
            side: selection.size * scale_x,
        }
    }

    /// Clip against an image of `width`×`height` and place the surviving part
    /// inside an `output`-sized square.
    ///
    /// Parts of the region outside the image leave their share of the output
    /// unpainted. Returns `None` if nothing of the region overlaps the image.
    pub fn place(&self, width: u32, height: u32, output: u32) -> Option<Placement> {
        if self.side <= 0.0 || output == 0 {
            return None;
        }
        let scale = output as f32 / self.side;

        let (src_x, dst_x) = clip_axis(self.x, self.side, width, scale, output)?;
        let (src_y, dst_y) = clip_axis(self.y, self.side, height, scale, output)?;

        Some(Placement {
            source: CropRegion::new(src_x.0, src_y.0, src_x.1, src_y.1),
            target: CropRegion::new(dst_x.0, dst_y.0, dst_x.1, dst_y.1),
        })
    }
}

/// Clip one axis. Returns `(start, len)` in source pixels and in output pixels.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clip_axis(
    start: f32,
    side: f32,
    limit: u32,
    scale: f32,
    output: u32,
) -> Option<((u32, u32), (u32, u32))> {
    let lo = start.max(0.0).round();
    let hi = (start + side).min(limit as f32).round();
    if hi <= lo {
        return None;
    }
    let src_start = lo as u32;
    let src_len = (hi - lo) as u32;

    let dst_start = (((lo - start) * scale).round() as u32).min(output - 1);
    let dst_len = (((hi - lo) * scale).round() as u32).clamp(1, output - dst_start);

    Some(((src_start, src_len), (dst_start, dst_len)))
}
