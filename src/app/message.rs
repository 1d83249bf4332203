// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/message.rs
//
// Editor messages: lifecycle events, layout signals and pointer input.

use crate::app::document::{ImageSource, RasterDocument};
use crate::domain::geometry::Point;

#[derive(Debug, Clone)]
pub enum EditorMessage {
    // Lifecycle.
    /// The image to crop changed (or was cleared).
    SetSource(Option<ImageSource>),
    /// The dialog was opened; a frame callback is requested.
    Open,
    /// The requested frame callback fired, layout has settled.
    FrameReady,
    /// The image for the given source finished loading.
    ImageLoaded(ImageSource, RasterDocument),
    /// The container changed size.
    ContainerResized,
    /// The user dismissed the dialog.
    Cancel,

    // Pointer input, in client coordinates.
    PointerDown(Point),
    PointerMove(Point),
    PointerUp,
    PointerLeave,
}
