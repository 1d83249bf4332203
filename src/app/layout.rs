// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/layout.rs
//
// Layout source for the bounds resolver, plus a headless implementation.

use crate::config::AppConfig;
use crate::domain::geometry::{Point, Rect};

/// Something that knows where the crop container and the rendered image are.
///
/// Rectangles are in client coordinates. `None` means the element is not
/// mounted yet.
pub trait Surface {
    /// Bounding rectangle of the crop container.
    fn container_rect(&self) -> Option<Rect>;

    /// Bounding rectangle of the rendered image.
    fn image_rect(&self) -> Option<Rect>;

    /// Intrinsic pixel size of the image, `(0, 0)` while unknown.
    fn natural_size(&self) -> (u32, u32);

    /// An image of the given natural size was loaded into the surface.
    fn attach(&mut self, natural: (u32, u32));

    /// The image element was dropped (source changed or editor closed).
    fn detach(&mut self);
}

/// Headless layout of the crop dialog.
///
/// The container has a fixed width and a height between `min_height` and
/// `max_height`; the image is scaled down to fit both (never up), then
/// centered in the container.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainLayout {
    origin: Point,
    width: f32,
    min_height: f32,
    max_height: f32,
    natural: Option<(u32, u32)>,
}

impl ContainLayout {
    pub fn new(width: f32, min_height: f32, max_height: f32) -> Self {
        Self {
            origin: Point::default(),
            width,
            min_height,
            max_height: max_height.max(min_height),
            natural: None,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.container_width,
            config.min_container_height,
            config.max_container_height,
        )
    }

    /// Place the container at `origin` in client coordinates.
    #[must_use]
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// Change the available width and height, as a window resize would.
    pub fn resize(&mut self, width: f32, max_height: f32) {
        self.width = width;
        self.max_height = max_height.max(self.min_height);
    }

    /// Display size of the image after fitting.
    fn fitted_size(&self) -> Option<(f32, f32)> {
        let (nw, nh) = self.natural?;
        if nw == 0 || nh == 0 {
            return None;
        }
        let (nw, nh) = (nw as f32, nh as f32);
        let scale = (self.width / nw).min(self.max_height / nh).min(1.0);
        Some((nw * scale, nh * scale))
    }

    fn container_height(&self) -> f32 {
        match self.fitted_size() {
            Some((_, h)) => h.clamp(self.min_height, self.max_height),
            None => self.min_height,
        }
    }
}

impl Surface for ContainLayout {
    fn container_rect(&self) -> Option<Rect> {
        Some(Rect::new(
            self.origin.x,
            self.origin.y,
            self.width,
            self.container_height(),
        ))
    }

    fn image_rect(&self) -> Option<Rect> {
        let (w, h) = self.fitted_size()?;
        let container = self.container_rect()?;
        Some(Rect::new(
            container.x + (container.width - w) / 2.0,
            container.y + (container.height - h) / 2.0,
            w,
            h,
        ))
    }

    fn natural_size(&self) -> (u32, u32) {
        self.natural.unwrap_or((0, 0))
    }

    fn attach(&mut self, natural: (u32, u32)) {
        self.natural = Some(natural);
    }

    fn detach(&mut self) {
        self.natural = None;
    }
}
