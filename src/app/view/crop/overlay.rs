// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/overlay.rs
//
// Crop overlay geometry: hit testing, shade bands and corner handles.

use crate::constant::HANDLE_SIZE;
use crate::domain::crop::{Corner, CropSelection};
use crate::domain::geometry::{Point, Rect};

/// What a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragTarget {
    #[default]
    None,
    /// Inside the selection but not on a handle.
    Body,
    Corner(Corner),
}

/// Hit area of the handle on `corner`, centered on the corner itself.
pub fn handle_rect(selection: &CropSelection, corner: Corner) -> Rect {
    Rect::centered_square(corner.position_on(selection), HANDLE_SIZE)
}

/// All four corner handles, in `Corner::ALL` order.
pub fn handle_rects(selection: &CropSelection) -> [(Corner, Rect); 4] {
    Corner::ALL.map(|corner| (corner, handle_rect(selection, corner)))
}

/// Resolve a container-relative point. Handles win over the body.
pub fn hit_test(selection: &CropSelection, point: Point) -> DragTarget {
    for (corner, rect) in handle_rects(selection) {
        if rect.contains(point) {
            return DragTarget::Corner(corner);
        }
    }

    if selection.as_rect().contains(point) {
        return DragTarget::Body;
    }

    DragTarget::None
}

/// The shaded regions around the selection inside a `width`×`height` container.
///
/// Top and bottom bands span the full width; the side bands only cover the
/// selection's rows. Empty bands are omitted.
pub fn shade_rects(width: f32, height: f32, selection: &CropSelection) -> Vec<Rect> {
    let candidates = [
        // Top
        Rect::new(0.0, 0.0, width, selection.y),
        // Left
        Rect::new(0.0, selection.y, selection.x, selection.size),
        // Right
        Rect::new(
            selection.right(),
            selection.y,
            width - selection.right(),
            selection.size,
        ),
        // Bottom
        Rect::new(0.0, selection.bottom(), width, height - selection.bottom()),
    ];

    candidates
        .into_iter()
        .filter(|r| r.width > 0.0 && r.height > 0.0)
        .collect()
}
