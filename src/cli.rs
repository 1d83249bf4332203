// SPDX-License-Identifier: GPL-3.0-or-later
// src/cli.rs
//
// Command-line arguments and scripted gestures for the headless driver.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, anyhow, bail};
use clap::Parser;

use squarecrop::config::AppConfig;
use squarecrop::{ContainLayout, Corner, CropEditor, EditorMessage, Point, Surface};

/// Crop an image to a square avatar.
#[derive(Debug, Clone, Parser)]
#[command(name = "squarecrop", version, about)]
pub struct Args {
    /// Image to crop.
    pub file: PathBuf,

    /// Edge length of the output square in pixels.
    #[arg(long)]
    pub output_size: Option<u32>,

    /// JPEG quality (1-100).
    #[arg(long)]
    pub quality: Option<u8>,

    /// Directory to write avatar.jpg into.
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Width of the crop container in display pixels.
    #[arg(long)]
    pub container_width: Option<f32>,

    /// Maximum height of the crop container in display pixels.
    #[arg(long)]
    pub max_height: Option<f32>,

    /// Gesture to replay, in order: `move:DX,DY`, `tl|tr|bl|br:X,Y` or `cancel`.
    #[arg(long = "gesture", value_name = "GESTURE")]
    pub gestures: Vec<Gesture>,

    /// Also write a PNG of the editor as it looks before confirming.
    #[arg(long, value_name = "PNG")]
    pub preview: Option<PathBuf>,
}

impl Args {
    /// Apply command-line overrides on top of `config`.
    pub fn apply_to(&self, mut config: AppConfig) -> AppConfig {
        if let Some(size) = self.output_size {
            config.output_size = size;
        }
        if let Some(quality) = self.quality {
            config.jpeg_quality = quality;
        }
        if let Some(dir) = &self.out_dir {
            config.output_dir = dir.clone();
        }
        if let Some(width) = self.container_width {
            config.container_width = width;
        }
        if let Some(height) = self.max_height {
            config.max_container_height = height;
        }
        config
    }
}

/// A scripted pointer gesture. Coordinates are container-relative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Drag the selection body by a delta.
    Move { dx: f32, dy: f32 },
    /// Drag a corner handle to a point.
    Resize { corner: Corner, to: Point },
    /// Dismiss the editor.
    Cancel,
}

impl FromStr for Gesture {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "cancel" {
            return Ok(Gesture::Cancel);
        }

        let (verb, coords) = s
            .split_once(':')
            .ok_or_else(|| anyhow!("Expected VERB:X,Y, got {s:?}"))?;
        let (x, y) = coords
            .split_once(',')
            .ok_or_else(|| anyhow!("Expected two comma-separated numbers, got {coords:?}"))?;
        let x: f32 = x.trim().parse().with_context(|| format!("Bad number {x:?}"))?;
        let y: f32 = y.trim().parse().with_context(|| format!("Bad number {y:?}"))?;

        let corner = match verb {
            "move" => return Ok(Gesture::Move { dx: x, dy: y }),
            "tl" => Corner::TopLeft,
            "tr" => Corner::TopRight,
            "bl" => Corner::BottomLeft,
            "br" => Corner::BottomRight,
            other => bail!("Unknown gesture {other:?}"),
        };
        Ok(Gesture::Resize {
            corner,
            to: Point::new(x, y),
        })
    }
}

impl Gesture {
    /// Feed the pointer events of this gesture into `editor`.
    ///
    /// Does nothing when the editor has no selection yet.
    pub fn replay(&self, editor: &mut CropEditor<ContainLayout>) {
        if let Gesture::Cancel = self {
            editor.update(EditorMessage::Cancel);
            return;
        }

        let (Some(selection), Some(container)) =
            (editor.selection(), editor.surface().container_rect())
        else {
            log::warn!("Gesture {self:?} skipped: no selection yet");
            return;
        };
        let origin = container.origin();
        let client = |p: Point| Point::new(p.x + origin.x, p.y + origin.y);

        let (from, to) = match *self {
            Gesture::Move { dx, dy } => {
                let center = selection.center();
                (center, Point::new(center.x + dx, center.y + dy))
            }
            Gesture::Resize { corner, to } => (corner.position_on(&selection), to),
            Gesture::Cancel => return,
        };

        editor.update(EditorMessage::PointerDown(client(from)));
        editor.update(EditorMessage::PointerMove(client(to)));
        editor.update(EditorMessage::PointerUp);
        log::debug!("Gesture {self:?} -> {:?}", editor.selection());
    }
}
