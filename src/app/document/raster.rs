// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/document/raster.rs
//
// Decoded source image shown in the crop editor.

use std::io::Cursor;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use image::{DynamicImage, GenericImageView, ImageReader, imageops};

/// Where the image to crop comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// A file on disk.
    Path(PathBuf),
    /// Encoded bytes already in memory (e.g. a picked upload).
    Bytes(Vec<u8>),
}

impl ImageSource {
    /// Short description for log output.
    pub fn describe(&self) -> String {
        match self {
            ImageSource::Path(path) => path.display().to_string(),
            ImageSource::Bytes(bytes) => format!("<{} bytes in memory>", bytes.len()),
        }
    }
}

/// Represents a decoded raster image (PNG, JPEG, WebP, ...).
#[derive(Clone)]
pub struct RasterDocument {
    /// The decoded image, upright according to its EXIF orientation.
    document: Arc<DynamicImage>,
}

impl std::fmt::Debug for RasterDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (w, h) = self.dimensions();
        write!(f, "RasterDocument({w}x{h})")
    }
}

impl RasterDocument {
    /// Read and decode `source` off the async executor.
    pub async fn load(source: &ImageSource) -> anyhow::Result<Self> {
        let bytes = match source {
            ImageSource::Path(path) => tokio::fs::read(path)
                .await
                .with_context(|| format!("Failed to read {}", path.display()))?,
            ImageSource::Bytes(bytes) => bytes.clone(),
        };

        tokio::task::spawn_blocking(move || Self::from_bytes(&bytes))
            .await
            .context("Decoder task failed")?
    }

    /// Decode an encoded image held in memory.
    pub fn from_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        let decoded = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .context("Failed to detect image format")?
            .decode()
            .context("Failed to decode image")?;

        let orientation = read_orientation(bytes);
        Ok(Self::from_image(apply_orientation(decoded, orientation)))
    }

    /// Wrap an already decoded image.
    pub fn from_image(image: DynamicImage) -> Self {
        Self {
            document: Arc::new(image),
        }
    }

    /// Returns the native pixel dimensions (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        self.document.dimensions()
    }

    /// Shared handle to the decoded pixels.
    pub fn image(&self) -> Arc<DynamicImage> {
        Arc::clone(&self.document)
    }
}

/// EXIF orientation tag value (1-8), `1` when absent.
#[cfg(feature = "exif")]
fn read_orientation(bytes: &[u8]) -> u32 {
    let Ok(exif) = exif::Reader::new().read_from_container(&mut Cursor::new(bytes)) else {
        return 1;
    };
    exif.get_field(exif::Tag::Orientation, exif::In::PRIMARY)
        .and_then(|field| field.value.get_uint(0))
        .unwrap_or(1)
}

#[cfg(not(feature = "exif"))]
fn read_orientation(_bytes: &[u8]) -> u32 {
    1
}

/// Turn the stored pixels upright, the way browsers render them.
fn apply_orientation(image: DynamicImage, orientation: u32) -> DynamicImage {
    match orientation {
        2 => DynamicImage::ImageRgba8(imageops::flip_horizontal(&image)),
        3 => DynamicImage::ImageRgba8(imageops::rotate180(&image)),
        4 => DynamicImage::ImageRgba8(imageops::flip_vertical(&image)),
        5 => DynamicImage::ImageRgba8(imageops::flip_horizontal(&imageops::rotate90(&image))),
        6 => DynamicImage::ImageRgba8(imageops::rotate90(&image)),
        7 => DynamicImage::ImageRgba8(imageops::flip_horizontal(&imageops::rotate270(&image))),
        8 => DynamicImage::ImageRgba8(imageops::rotate270(&image)),
        _ => image,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage};

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_pixel(width, height, Rgb([10, 20, 30]));
        let mut buf = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(img)
            .write_to(&mut buf, ImageFormat::Png)
            .unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_from_bytes_reports_dimensions() {
        let doc = RasterDocument::from_bytes(&png_bytes(30, 20)).unwrap();
        assert_eq!(doc.dimensions(), (30, 20));
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        assert!(RasterDocument::from_bytes(b"definitely not an image").is_err());
    }

    #[test]
    fn test_quarter_turn_orientations_swap_axes() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(30, 20));
        for orientation in [5, 6, 7, 8] {
            assert_eq!(apply_orientation(img.clone(), orientation).dimensions(), (20, 30));
        }
        for orientation in [1, 2, 3, 4, 9] {
            assert_eq!(apply_orientation(img.clone(), orientation).dimensions(), (30, 20));
        }
    }

    #[tokio::test]
    async fn test_load_from_memory_source() {
        let source = ImageSource::Bytes(png_bytes(12, 8));
        let doc = RasterDocument::load(&source).await.unwrap();
        assert_eq!(doc.dimensions(), (12, 8));
    }

    #[tokio::test]
    async fn test_load_missing_file_fails() {
        let source = ImageSource::Path(PathBuf::from("/nonexistent/squarecrop/photo.jpg"));
        let err = RasterDocument::load(&source).await.unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
