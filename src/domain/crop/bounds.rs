// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop/bounds.rs
//
// On-screen placement of the rendered image inside the crop container.

use crate::domain::geometry::Rect;

/// Where the image is drawn inside its container, plus its native size.
///
/// `x` and `y` are relative to the container's top-left corner. A snapshot is
/// never edited in place; the editor swaps in a new one on every recompute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayBounds {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub natural_width: f32,
    pub natural_height: f32,
}

impl DisplayBounds {
    /// Derive bounds from the client rectangles of the image and its container.
    ///
    /// An image whose intrinsic size is not known yet (`0`) falls back to its
    /// displayed size, so the mapping to native pixels degrades to identity.
    pub fn resolve(image: Rect, container: Rect, natural: (u32, u32)) -> Self {
        let (nw, nh) = natural;
        Self {
            x: image.x - container.x,
            y: image.y - container.y,
            w: image.width,
            h: image.height,
            natural_width: if nw > 0 { nw as f32 } else { image.width },
            natural_height: if nh > 0 { nh as f32 } else { image.height },
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Native pixels per display pixel along X.
    pub fn scale_x(&self) -> f32 {
        self.natural_width / self.w
    }

    /// Native pixels per display pixel along Y.
    pub fn scale_y(&self) -> f32 {
        self.natural_height / self.h
    }

    /// Whether the image occupies any area at all.
    pub fn is_visible(&self) -> bool {
        self.w > 0.0 && self.h > 0.0
    }

    pub fn as_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_to_container() {
        let container = Rect::new(100.0, 50.0, 640.0, 320.0);
        let image = Rect::new(220.0, 60.0, 400.0, 300.0);
        let bounds = DisplayBounds::resolve(image, container, (1200, 900));

        assert_eq!(bounds.x, 120.0);
        assert_eq!(bounds.y, 10.0);
        assert_eq!(bounds.scale_x(), 3.0);
        assert_eq!(bounds.scale_y(), 3.0);
    }

    #[test]
    fn test_unknown_natural_size_falls_back_to_display() {
        let rect = Rect::new(0.0, 0.0, 200.0, 100.0);
        let bounds = DisplayBounds::resolve(rect, rect, (0, 0));
        assert_eq!(bounds.natural_width, 200.0);
        assert_eq!(bounds.natural_height, 100.0);
        assert_eq!(bounds.scale_x(), 1.0);
    }
}
