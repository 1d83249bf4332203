// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop/selection.rs
//
// Square crop selection in container coordinates.

use crate::domain::crop::bounds::DisplayBounds;
use crate::domain::geometry::{Point, Rect};

/// A square region: top-left corner plus edge length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropSelection {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

impl CropSelection {
    pub const fn new(x: f32, y: f32, size: f32) -> Self {
        Self { x, y, size }
    }

    /// The largest square that fits the bounds, centered in them.
    pub fn centered(bounds: &DisplayBounds) -> Self {
        let side = bounds.w.min(bounds.h);
        Self {
            x: bounds.x + (bounds.w - side) / 2.0,
            y: bounds.y + (bounds.h - side) / 2.0,
            size: side,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.size
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.size
    }

    pub fn center(&self) -> Point {
        let half = self.size / 2.0;
        Point::new(self.x + half, self.y + half)
    }

    pub fn as_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.size, self.size)
    }

    /// Whether the whole square lies inside `bounds`.
    ///
    /// Allows a small epsilon for float drift accumulated by clamping.
    pub fn fits_within(&self, bounds: &DisplayBounds) -> bool {
        const EPS: f32 = 0.001;
        self.x >= bounds.x - EPS
            && self.y >= bounds.y - EPS
            && self.right() <= bounds.right() + EPS
            && self.bottom() <= bounds.bottom() + EPS
    }
}
