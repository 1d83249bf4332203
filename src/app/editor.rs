// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/editor.rs
//
// The square-crop editor: message handling, bounds resolution and confirmation.

use crate::app::document::RasterDocument;
use crate::app::layout::{ContainLayout, Surface};
use crate::app::message::EditorMessage;
use crate::app::model::{EditorModel, EditorPhase, Outcome};
use crate::app::rasterize::{CroppedFile, Rasterizer};
use crate::app::view::crop::{DragTarget, hit_test};
use crate::domain::crop::{CropSelection, DisplayBounds, DragAction, DragKind};
use crate::domain::geometry::Point;

/// Interactive square-crop editor over a layout [`Surface`].
pub struct CropEditor<S: Surface = ContainLayout> {
    model: EditorModel,
    surface: S,
    rasterizer: Rasterizer,
}

impl<S: Surface> CropEditor<S> {
    pub fn new(surface: S, rasterizer: Rasterizer) -> Self {
        Self {
            model: EditorModel::default(),
            surface,
            rasterizer,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn phase(&self) -> EditorPhase {
        self.model.phase()
    }

    pub fn is_open(&self) -> bool {
        self.model.open
    }

    pub fn bounds(&self) -> Option<DisplayBounds> {
        self.model.bounds
    }

    pub fn selection(&self) -> Option<CropSelection> {
        self.model.selection
    }

    pub fn document(&self) -> Option<&RasterDocument> {
        self.model.document.as_ref()
    }

    pub fn rasterizer(&self) -> Rasterizer {
        self.rasterizer
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable layout access. Follow changes with [`EditorMessage::ContainerResized`].
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Whether the confirm action is available.
    pub fn can_confirm(&self) -> bool {
        self.model.open
            && self.model.document.is_some()
            && self.model.bounds.is_some()
            && self.model.selection.is_some()
    }

    // =========================================================================
    // Update
    // =========================================================================

    pub fn update(&mut self, message: EditorMessage) {
        match message {
            EditorMessage::SetSource(source) => {
                if self.model.source == source {
                    return;
                }
                log::info!(
                    "Crop source changed to {}",
                    source.as_ref().map_or_else(|| "nothing".to_string(), |s| s.describe())
                );
                self.model.source = source;
                self.model.reset_image();
                self.surface.detach();
            }

            EditorMessage::Open => {
                log::debug!("Crop editor opened");
                self.model.open = true;
                self.model.outcome = None;
                self.model.frame_requested = true;
            }

            EditorMessage::FrameReady => {
                if self.model.frame_requested {
                    self.model.frame_requested = false;
                    self.resolve_bounds();
                }
            }

            EditorMessage::ImageLoaded(source, document) => {
                if self.model.source.as_ref() != Some(&source) {
                    log::debug!("Dropped stale image load for {}", source.describe());
                    return;
                }
                let dims = document.dimensions();
                log::info!("Crop image loaded ({}x{})", dims.0, dims.1);
                self.model.document = Some(document);
                self.surface.attach(dims);
                self.resolve_bounds();
            }

            EditorMessage::ContainerResized => {
                if self.model.document.is_some() {
                    self.resolve_bounds();
                }
            }

            EditorMessage::Cancel => {
                log::info!("Crop cancelled");
                self.model.close(Outcome::Cancelled);
            }

            EditorMessage::PointerDown(client) => self.begin_drag(client),

            EditorMessage::PointerMove(client) => {
                let Some(action) = self.model.drag else {
                    return;
                };
                let Some(local) = self.to_container(client) else {
                    return;
                };
                self.model.selection = Some(action.apply(local));
            }

            EditorMessage::PointerUp | EditorMessage::PointerLeave => {
                let Some(action) = self.model.drag.take() else {
                    return;
                };
                log::debug!("Crop gesture ended at {:?}", self.model.selection);
                // The container may have been resized while the gesture ran.
                match self.model.bounds {
                    Some(bounds) if bounds != action.bounds => self.fit_selection(bounds),
                    _ => {}
                }
            }
        }
    }

    /// Rasterize the current selection.
    ///
    /// Returns `None`, leaving the editor open, when it is not ready or the
    /// encoder fails. On success the editor closes.
    pub async fn confirm(&mut self) -> Option<CroppedFile> {
        if !self.model.open {
            log::debug!("Confirm ignored: editor is closed");
            return None;
        }
        let (Some(document), Some(bounds), Some(selection)) = (
            self.model.document.as_ref(),
            self.model.bounds,
            self.model.selection,
        ) else {
            log::debug!("Confirm ignored: image, bounds or selection missing");
            return None;
        };

        match self
            .rasterizer
            .rasterize_async(document.image(), bounds, selection)
            .await
        {
            Ok(file) => {
                log::info!("Crop confirmed: {} ({} bytes)", file.name, file.bytes.len());
                self.model.close(Outcome::Confirmed);
                Some(file)
            }
            Err(e) => {
                log::warn!("Failed to rasterize crop: {e:#}");
                None
            }
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Convert a client point to container coordinates.
    fn to_container(&self, client: Point) -> Option<Point> {
        let container = self.surface.container_rect()?;
        Some(client.offset_from(container.origin()))
    }

    fn begin_drag(&mut self, client: Point) {
        // Pointer capture keeps a second pointer-down from reaching us.
        if !self.model.open || self.model.drag.is_some() {
            return;
        }
        let (Some(selection), Some(bounds)) = (self.model.selection, self.model.bounds) else {
            return;
        };
        let Some(local) = self.to_container(client) else {
            return;
        };

        let kind = match hit_test(&selection, local) {
            DragTarget::Corner(corner) => DragKind::ResizeCorner(corner),
            DragTarget::Body => DragKind::Move,
            DragTarget::None => return,
        };
        log::debug!("Crop gesture {kind:?} started at {local:?}");
        self.model.drag = Some(DragAction::new(kind, local, selection, bounds));
    }

    /// Recompute display bounds from the surface.
    ///
    /// Does nothing until both the container and the image are mounted.
    fn resolve_bounds(&mut self) {
        if !self.model.open || self.model.document.is_none() {
            log::debug!("Bounds not resolved: editor closed or image not loaded");
            return;
        }
        let (Some(image), Some(container)) = (self.surface.image_rect(), self.surface.container_rect())
        else {
            log::debug!("Bounds not resolved: surface not mounted");
            return;
        };

        let bounds = DisplayBounds::resolve(image, container, self.surface.natural_size());
        if !bounds.is_visible() {
            log::debug!("Bounds not resolved: image has no area");
            return;
        }
        self.model.bounds = Some(bounds);

        // An active gesture keeps working against its own snapshot.
        if self.model.drag.is_some() {
            return;
        }
        self.fit_selection(bounds);
    }

    /// Keep the selection if it fits `bounds`, otherwise re-center it.
    fn fit_selection(&mut self, bounds: DisplayBounds) {
        match self.model.selection {
            Some(selection) if selection.fits_within(&bounds) => {}
            _ => {
                let selection = CropSelection::centered(&bounds);
                log::debug!("Crop selection initialised to {selection:?}");
                self.model.selection = Some(selection);
            }
        }
    }
}
