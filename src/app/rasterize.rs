// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/rasterize.rs
//
// Turn the display selection into a fixed-size square JPEG.

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, anyhow};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, GenericImageView, Rgb, RgbImage, RgbaImage, imageops};

use crate::constant::{DEFAULT_JPEG_QUALITY, DEFAULT_OUTPUT_SIZE, OUTPUT_FILE_NAME, OUTPUT_MIME};
use crate::domain::crop::{CropSelection, DisplayBounds, SourceRegion};

/// An encoded crop ready to hand to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CroppedFile {
    pub name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl CroppedFile {
    /// Write the file into `dir` under its own name.
    pub async fn write_into(&self, dir: &Path) -> anyhow::Result<PathBuf> {
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("Failed to create {}", dir.display()))?;
        let path = dir.join(&self.name);
        tokio::fs::write(&path, &self.bytes)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }
}

/// Resamples and encodes crops at a fixed output size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rasterizer {
    pub output_size: u32,
    pub quality: u8,
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self {
            output_size: DEFAULT_OUTPUT_SIZE,
            quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl Rasterizer {
    pub fn new(output_size: u32, quality: u8) -> Self {
        Self {
            output_size,
            quality: quality.clamp(1, 100),
        }
    }

    /// Draw the selected part of `image` into the output square and encode it.
    pub fn rasterize(
        &self,
        image: &DynamicImage,
        bounds: &DisplayBounds,
        selection: &CropSelection,
    ) -> anyhow::Result<CroppedFile> {
        let pixels = self.render(image, bounds, selection)?;
        let bytes = self.encode(&pixels)?;
        log::debug!(
            "Rasterized {:?} into {}x{} JPEG ({} bytes)",
            selection,
            self.output_size,
            self.output_size,
            bytes.len()
        );

        Ok(CroppedFile {
            name: OUTPUT_FILE_NAME.to_string(),
            mime: OUTPUT_MIME,
            bytes,
        })
    }

    /// Same as [`Rasterizer::rasterize`], run on the blocking pool.
    pub async fn rasterize_async(
        self,
        image: Arc<DynamicImage>,
        bounds: DisplayBounds,
        selection: CropSelection,
    ) -> anyhow::Result<CroppedFile> {
        tokio::task::spawn_blocking(move || self.rasterize(&image, &bounds, &selection))
            .await
            .context("Rasterizer task failed")?
    }

    /// Resample into an RGB square. Areas the selection maps outside the
    /// image stay black, matching a transparent canvas encoded as JPEG.
    fn render(
        &self,
        image: &DynamicImage,
        bounds: &DisplayBounds,
        selection: &CropSelection,
    ) -> anyhow::Result<RgbImage> {
        if self.output_size == 0 {
            return Err(anyhow!("Output size must be positive"));
        }
        if !bounds.is_visible() {
            return Err(anyhow!("Image has no visible area"));
        }

        let mut canvas = RgbImage::new(self.output_size, self.output_size);
        let (width, height) = image.dimensions();
        let region = SourceRegion::map(bounds, selection);

        let Some(placement) = region.place(width, height, self.output_size) else {
            log::warn!("Selection {:?} maps outside the image; output is blank", selection);
            return Ok(canvas);
        };

        let src = placement.source;
        let dst = placement.target;
        if !src.is_valid() || !dst.is_valid() {
            return Ok(canvas);
        }
        let resampled = image
            .crop_imm(src.x, src.y, src.width, src.height)
            .resize_exact(dst.width, dst.height, imageops::FilterType::Lanczos3)
            .to_rgba8();
        let flattened = flatten_on_black(&resampled);
        imageops::replace(&mut canvas, &flattened, i64::from(dst.x), i64::from(dst.y));

        Ok(canvas)
    }

    fn encode(&self, pixels: &RgbImage) -> anyhow::Result<Vec<u8>> {
        let mut buf = Cursor::new(Vec::new());
        let encoder = JpegEncoder::new_with_quality(&mut buf, self.quality);
        pixels
            .write_with_encoder(encoder)
            .context("Failed to encode JPEG")?;
        Ok(buf.into_inner())
    }
}

/// Composite over an opaque black background, as a JPEG export of a canvas does.
#[allow(clippy::cast_possible_truncation)]
fn flatten_on_black(pixels: &RgbaImage) -> RgbImage {
    RgbImage::from_fn(pixels.width(), pixels.height(), |x, y| {
        let [r, g, b, a] = pixels.get_pixel(x, y).0;
        let scale = |c: u8| ((u16::from(c) * u16::from(a) + 127) / 255) as u8;
        Rgb([scale(r), scale(g), scale(b)])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

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

    /// Left third red, rest blue, at 1200x900.
    fn split_image() -> DynamicImage {
        let img = RgbImage::from_fn(1200, 900, |x, _| {
            if x < 400 { Rgb([255, 0, 0]) } else { Rgb([0, 0, 255]) }
        });
        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn test_default_selection_produces_512_jpeg() {
        let file = Rasterizer::default()
            .rasterize(&split_image(), &bounds_400x300(), &CropSelection::new(50.0, 0.0, 300.0))
            .unwrap();

        assert_eq!(file.name, "avatar.jpg");
        assert_eq!(file.mime, "image/jpeg");
        let decoded = image::load_from_memory(&file.bytes).unwrap();
        assert_eq!(decoded.dimensions(), (512, 512));
    }

    #[test]
    fn test_source_region_lands_in_output() {
        // Source square is x 150..1050: red for 150..400, blue after.
        let canvas = Rasterizer::default()
            .render(&split_image(), &bounds_400x300(), &CropSelection::new(50.0, 0.0, 300.0))
            .unwrap();

        let left = canvas.get_pixel(20, 256);
        let right = canvas.get_pixel(490, 256);
        assert!(left[0] > 200 && left[2] < 50, "{left:?}");
        assert!(right[2] > 200 && right[0] < 50, "{right:?}");
    }

    #[test]
    fn test_translucent_pixels_are_composited_over_black() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(1200, 900, Rgba([255, 200, 0, 128])));
        let canvas = Rasterizer::new(64, 92)
            .render(&img, &bounds_400x300(), &CropSelection::new(50.0, 0.0, 300.0))
            .unwrap();

        let pixel = canvas.get_pixel(32, 32);
        assert!((126..=130).contains(&pixel[0]), "{pixel:?}");
        assert!((98..=102).contains(&pixel[1]), "{pixel:?}");
        assert_eq!(pixel[2], 0);
    }

    #[test]
    fn test_opaque_pixels_keep_their_color() {
        let flat = flatten_on_black(&RgbaImage::from_pixel(2, 2, Rgba([10, 20, 255, 255])));
        assert_eq!(*flat.get_pixel(1, 1), Rgb([10, 20, 255]));
    }

    #[test]
    fn test_zero_output_size_is_an_error() {
        let result = Rasterizer::new(0, 92).rasterize(
            &split_image(),
            &bounds_400x300(),
            &CropSelection::new(50.0, 0.0, 300.0),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_quality_is_clamped() {
        assert_eq!(Rasterizer::new(64, 0).quality, 1);
        assert_eq!(Rasterizer::new(64, 255).quality, 100);
    }

    #[tokio::test]
    async fn test_rasterize_async_matches_output_size() {
        let file = Rasterizer::new(128, 80)
            .rasterize_async(
                Arc::new(split_image()),
                bounds_400x300(),
                CropSelection::new(0.0, 0.0, 100.0),
            )
            .await
            .unwrap();
        let decoded = image::load_from_memory(&file.bytes).unwrap();
        assert_eq!(decoded.dimensions(), (128, 128));
    }

    #[tokio::test]
    async fn test_write_into_creates_named_file() {
        let dir = std::env::temp_dir().join(format!("squarecrop-test-{}", std::process::id()));
        let file = CroppedFile {
            name: OUTPUT_FILE_NAME.to_string(),
            mime: OUTPUT_MIME,
            bytes: vec![1, 2, 3],
        };
        let path = file.write_into(&dir).await.unwrap();
        assert_eq!(path, dir.join("avatar.jpg"));
        assert_eq!(tokio::fs::read(&path).await.unwrap(), vec![1, 2, 3]);
        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }
}
