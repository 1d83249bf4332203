// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop/gesture.rs
//
// Drag gestures over the crop square: moving it and resizing it from a corner.

use crate::constant::MIN_SELECTION_SIZE;
use crate::domain::crop::bounds::DisplayBounds;
use crate::domain::crop::selection::CropSelection;
use crate::domain::geometry::{Point, clamp};

/// A corner of the selection square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// The diagonally opposite corner.
    pub fn opposite(self) -> Corner {
        match self {
            Corner::TopLeft => Corner::BottomRight,
            Corner::TopRight => Corner::BottomLeft,
            Corner::BottomLeft => Corner::TopRight,
            Corner::BottomRight => Corner::TopLeft,
        }
    }

    /// Position of this corner on `selection`.
    pub fn position_on(self, selection: &CropSelection) -> Point {
        match self {
            Corner::TopLeft => Point::new(selection.x, selection.y),
            Corner::TopRight => Point::new(selection.right(), selection.y),
            Corner::BottomLeft => Point::new(selection.x, selection.bottom()),
            Corner::BottomRight => Point::new(selection.right(), selection.bottom()),
        }
    }

    /// Direction this corner lies in, seen from its anchor: -1.0 or 1.0 per axis.
    fn direction(self) -> (f32, f32) {
        match self {
            Corner::TopLeft => (-1.0, -1.0),
            Corner::TopRight => (1.0, -1.0),
            Corner::BottomLeft => (-1.0, 1.0),
            Corner::BottomRight => (1.0, 1.0),
        }
    }
}

/// What an active drag does to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    Move,
    /// Resize by dragging the given corner; its opposite corner stays put.
    ResizeCorner(Corner),
}

/// An in-progress pointer gesture.
///
/// Every update is computed from the state captured at pointer-down, never
/// from the previous update, so repeated moves do not accumulate error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragAction {
    pub kind: DragKind,
    pub start_pointer: Point,
    pub start_selection: CropSelection,
    pub bounds: DisplayBounds,
}

impl DragAction {
    pub fn new(
        kind: DragKind,
        start_pointer: Point,
        start_selection: CropSelection,
        bounds: DisplayBounds,
    ) -> Self {
        Self {
            kind,
            start_pointer,
            start_selection,
            bounds,
        }
    }

    /// The selection that results from the pointer being at `pointer`.
    ///
    /// `pointer` is in container coordinates and may lie outside the container.
    pub fn apply(&self, pointer: Point) -> CropSelection {
        match self.kind {
            DragKind::Move => self.apply_move(pointer),
            DragKind::ResizeCorner(corner) => self.apply_resize(corner, pointer),
        }
    }

    fn apply_move(&self, pointer: Point) -> CropSelection {
        let b = &self.bounds;
        let sc = &self.start_selection;
        let dx = pointer.x - self.start_pointer.x;
        let dy = pointer.y - self.start_pointer.y;

        CropSelection {
            x: clamp(sc.x + dx, b.x, b.right() - sc.size),
            y: clamp(sc.y + dy, b.y, b.bottom() - sc.size),
            size: sc.size,
        }
    }

    fn apply_resize(&self, corner: Corner, pointer: Point) -> CropSelection {
        let b = &self.bounds;
        let anchor = corner.opposite().position_on(&self.start_selection);
        let (dir_x, dir_y) = corner.direction();

        let px = clamp(pointer.x, b.x, b.right());
        let py = clamp(pointer.y, b.y, b.bottom());

        // Room between the anchor and the bounds edge the dragged corner faces.
        let room_x = if dir_x < 0.0 { anchor.x - b.x } else { b.right() - anchor.x };
        let room_y = if dir_y < 0.0 { anchor.y - b.y } else { b.bottom() - anchor.y };
        let max_size = room_x.min(room_y);

        let candidate = ((px - anchor.x) * dir_x).min((py - anchor.y) * dir_y);
        // Containment wins over the floor when the image is tinier than it.
        let size = clamp(candidate, MIN_SELECTION_SIZE.min(max_size), max_size);

        CropSelection {
            x: if dir_x < 0.0 { anchor.x - size } else { anchor.x },
            y: if dir_y < 0.0 { anchor.y - size } else { anchor.y },
            size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn bounds_400x300() -> DisplayBounds {
        DisplayBounds {
            x: 0.0,
            y: 0.0,
            w: 400.0,
            h: 300.0,
            natural_width: 1200.0,
            natural_height: 900.0,
        }
    }

    fn resize(corner: Corner, start: CropSelection) -> DragAction {
        let grab = corner.position_on(&start);
        DragAction::new(DragKind::ResizeCorner(corner), grab, start, bounds_400x300())
    }

    /// Pointer positions on a coarse grid reaching well outside the container.
    fn pointer_grid() -> impl Iterator<Item = Point> {
        (-4..=12).flat_map(|i| (-4..=12).map(move |j| Point::new(i as f32 * 50.0, j as f32 * 37.0)))
    }

    #[test]
    fn test_bottom_right_past_bounds_keeps_max_size() {
        let start = CropSelection::centered(&bounds_400x300());
        assert_eq!(start, CropSelection::new(50.0, 0.0, 300.0));

        let sel = resize(Corner::BottomRight, start).apply(Point::new(500.0, 500.0));
        assert_eq!(sel, CropSelection::new(50.0, 0.0, 300.0));
    }

    #[test]
    fn test_bottom_right_shrinks_around_top_left_anchor() {
        let start = CropSelection::new(50.0, 0.0, 300.0);
        let sel = resize(Corner::BottomRight, start).apply(Point::new(250.0, 200.0));
        assert_eq!(sel, CropSelection::new(50.0, 0.0, 200.0));
    }

    #[test]
    fn test_top_left_uses_smaller_axis_distance() {
        let start = CropSelection::new(100.0, 100.0, 150.0);
        // Anchor is (250, 250); distances are 100 on X and 180 on Y.
        let sel = resize(Corner::TopLeft, start).apply(Point::new(150.0, 70.0));
        assert_eq!(sel, CropSelection::new(150.0, 150.0, 100.0));
    }

    #[test]
    fn test_resize_floor_is_min_selection_size() {
        let start = CropSelection::new(100.0, 100.0, 150.0);
        let sel = resize(Corner::TopRight, start).apply(Point::new(90.0, 400.0));
        assert_eq!(sel.size, MIN_SELECTION_SIZE);
        // Anchor is the bottom-left corner (100, 250).
        assert_eq!(sel.x, 100.0);
        assert_eq!(sel.bottom(), 250.0);
    }

    #[test]
    fn test_resize_invariants_hold_everywhere() {
        let b = bounds_400x300();
        let starts = [
            CropSelection::new(50.0, 0.0, 300.0),
            CropSelection::new(10.0, 20.0, 120.0),
            CropSelection::new(300.0, 200.0, 60.0),
        ];

        for start in starts {
            for corner in Corner::ALL {
                let action = resize(corner, start);
                let anchor = corner.opposite().position_on(&start);
                for pointer in pointer_grid() {
                    let sel = action.apply(pointer);
                    let moved_anchor = corner.opposite().position_on(&sel);
                    assert!((moved_anchor.x - anchor.x).abs() < EPS, "{corner:?} {pointer:?}");
                    assert!((moved_anchor.y - anchor.y).abs() < EPS, "{corner:?} {pointer:?}");
                    assert!(sel.size >= MIN_SELECTION_SIZE - EPS);
                    assert!(sel.fits_within(&b), "{corner:?} {pointer:?} -> {sel:?}");
                }
            }
        }
    }

    #[test]
    fn test_move_keeps_size_and_stays_inside() {
        let b = bounds_400x300();
        let start = CropSelection::new(120.0, 40.0, 150.0);
        let action = DragAction::new(DragKind::Move, Point::new(200.0, 100.0), start, b);

        for pointer in pointer_grid() {
            let sel = action.apply(pointer);
            assert_eq!(sel.size, 150.0);
            assert!(sel.fits_within(&b), "{pointer:?} -> {sel:?}");
        }
    }

    #[test]
    fn test_move_follows_pointer_delta() {
        let start = CropSelection::new(50.0, 0.0, 200.0);
        let action = DragAction::new(DragKind::Move, Point::new(100.0, 100.0), start, bounds_400x300());

        assert_eq!(action.apply(Point::new(130.0, 150.0)), CropSelection::new(80.0, 50.0, 200.0));
        // Pinned against the right and bottom edges.
        assert_eq!(action.apply(Point::new(900.0, 900.0)), CropSelection::new(200.0, 100.0, 200.0));
        // Pinned against the left and top edges.
        assert_eq!(action.apply(Point::new(-900.0, -900.0)), CropSelection::new(0.0, 0.0, 200.0));
    }

    #[test]
    fn test_opposite_is_involution() {
        for corner in Corner::ALL {
            assert_eq!(corner.opposite().opposite(), corner);
            assert_ne!(corner.opposite(), corner);
        }
    }
}
