// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/model.rs
//
// Editor state.

use crate::app::document::{ImageSource, RasterDocument};
use crate::domain::crop::{CropSelection, DisplayBounds, DragAction};

// =============================================================================
// Enums
// =============================================================================

/// How the last editing session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Confirmed,
    Cancelled,
}

/// Editor lifecycle, derived from the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorPhase {
    /// No image loaded for the current source.
    Unloaded,
    /// Image loaded, bounds pending.
    BoundsReady,
    /// Bounds and selection known, no gesture in progress.
    SelectionReady,
    /// A move or resize gesture is active.
    Dragging,
    Confirmed,
    Cancelled,
}

// =============================================================================
// Model
// =============================================================================

#[derive(Debug, Default)]
pub struct EditorModel {
    // Dialog.
    pub open: bool,
    pub frame_requested: bool,
    pub outcome: Option<Outcome>,

    // Image.
    pub source: Option<ImageSource>,
    pub document: Option<RasterDocument>,

    // Crop.
    pub bounds: Option<DisplayBounds>,
    pub selection: Option<CropSelection>,
    pub drag: Option<DragAction>,
}

impl EditorModel {
    pub fn phase(&self) -> EditorPhase {
        match self.outcome {
            Some(Outcome::Confirmed) => return EditorPhase::Confirmed,
            Some(Outcome::Cancelled) => return EditorPhase::Cancelled,
            None => {}
        }

        if self.document.is_none() {
            EditorPhase::Unloaded
        } else if self.bounds.is_none() || self.selection.is_none() {
            EditorPhase::BoundsReady
        } else if self.drag.is_some() {
            EditorPhase::Dragging
        } else {
            EditorPhase::SelectionReady
        }
    }

    /// Forget everything tied to the current image, including how the last
    /// session on it ended.
    pub fn reset_image(&mut self) {
        self.outcome = None;
        self.document = None;
        self.bounds = None;
        self.selection = None;
        self.drag = None;
    }

    /// Drop transient state and mark the session finished.
    pub fn close(&mut self, outcome: Outcome) {
        self.open = false;
        self.frame_requested = false;
        self.drag = None;
        self.outcome = Some(outcome);
    }
}
