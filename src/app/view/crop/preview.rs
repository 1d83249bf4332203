// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/preview.rs
//
// Software rendering of the crop dialog, for previews and debugging.

use image::{DynamicImage, Rgba, RgbaImage, imageops};

use super::overlay::{handle_rects, shade_rects};
use crate::constant::{BORDER_WIDTH, SHADE_ALPHA};
use crate::domain::crop::{CropSelection, DisplayBounds};
use crate::domain::geometry::Rect;

const BACKGROUND_COLOR: Rgba<u8> = Rgba([235, 235, 238, 255]);
const BORDER_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);
const HANDLE_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Render the container as the user sees it: image, shade, border, handles.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn render(
    image: &DynamicImage,
    container: (f32, f32),
    bounds: &DisplayBounds,
    selection: &CropSelection,
) -> RgbaImage {
    let (width, height) = container;
    let mut canvas = RgbaImage::from_pixel(
        width.round().max(1.0) as u32,
        height.round().max(1.0) as u32,
        BACKGROUND_COLOR,
    );

    if bounds.is_visible() {
        let scaled = image.resize_exact(
            bounds.w.round().max(1.0) as u32,
            bounds.h.round().max(1.0) as u32,
            imageops::FilterType::Triangle,
        );
        imageops::overlay(
            &mut canvas,
            &scaled.to_rgba8(),
            bounds.x.round() as i64,
            bounds.y.round() as i64,
        );
    }

    for rect in shade_rects(width, height, selection) {
        shade(&mut canvas, rect, SHADE_ALPHA);
    }

    let sel = selection.as_rect();
    let borders = [
        Rect::new(sel.x, sel.y, sel.width, BORDER_WIDTH),
        Rect::new(sel.x, sel.bottom() - BORDER_WIDTH, sel.width, BORDER_WIDTH),
        Rect::new(sel.x, sel.y, BORDER_WIDTH, sel.height),
        Rect::new(sel.right() - BORDER_WIDTH, sel.y, BORDER_WIDTH, sel.height),
    ];
    for rect in borders {
        fill(&mut canvas, rect, BORDER_COLOR);
    }

    for (_, rect) in handle_rects(selection) {
        fill(&mut canvas, rect, HANDLE_COLOR);
    }

    canvas
}

/// Pixel span of `rect` clipped to the canvas, as `(x0, y0, x1, y1)`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn pixel_span(canvas: &RgbaImage, rect: Rect) -> (u32, u32, u32, u32) {
    let clip = |v: f32, max: u32| v.round().clamp(0.0, max as f32) as u32;
    (
        clip(rect.x, canvas.width()),
        clip(rect.y, canvas.height()),
        clip(rect.right(), canvas.width()),
        clip(rect.bottom(), canvas.height()),
    )
}

fn fill(canvas: &mut RgbaImage, rect: Rect, color: Rgba<u8>) {
    let (x0, y0, x1, y1) = pixel_span(canvas, rect);
    for y in y0..y1 {
        for x in x0..x1 {
            canvas.put_pixel(x, y, color);
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn shade(canvas: &mut RgbaImage, rect: Rect, alpha: f32) {
    let keep = 1.0 - alpha.clamp(0.0, 1.0);
    let (x0, y0, x1, y1) = pixel_span(canvas, rect);
    for y in y0..y1 {
        for x in x0..x1 {
            let px = canvas.get_pixel_mut(x, y);
            for channel in &mut px.0[..3] {
                *channel = (f32::from(*channel) * keep).round() as u8;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_render_shades_outside_and_keeps_inside() {
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(400, 300, Rgb([200, 200, 200])));
        let bounds = DisplayBounds {
            x: 0.0,
            y: 0.0,
            w: 400.0,
            h: 300.0,
            natural_width: 400.0,
            natural_height: 300.0,
        };
        let selection = CropSelection::new(100.0, 50.0, 200.0);
        let canvas = render(&image, (400.0, 300.0), &bounds, &selection);

        assert_eq!(canvas.dimensions(), (400, 300));
        // Inside the selection, away from border and handles.
        assert_eq!(canvas.get_pixel(200, 150).0, [200, 200, 200, 255]);
        // Shaded: 200 * 0.6.
        assert_eq!(canvas.get_pixel(20, 150).0, [120, 120, 120, 255]);
        // Corner handle.
        assert_eq!(canvas.get_pixel(100, 50).0, HANDLE_COLOR.0);
    }
}
