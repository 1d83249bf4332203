// SPDX-License-Identifier: GPL-3.0-or-later
// src/main.rs
//
// Headless driver: load an image, replay gestures, write the square crop.

mod cli;

use anyhow::{Context, anyhow};
use clap::Parser;

use squarecrop::app::view::crop::preview;
use squarecrop::config::AppConfig;
use squarecrop::{
    ContainLayout, CropEditor, EditorMessage, EditorPhase, ImageSource, RasterDocument,
    Rasterizer, Surface,
};

use cli::Args;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.apply_to(AppConfig::default());

    let mut editor = CropEditor::new(
        ContainLayout::from_config(&config),
        Rasterizer::new(config.output_size, config.jpeg_quality),
    );

    let source = ImageSource::Path(args.file.clone());
    editor.update(EditorMessage::SetSource(Some(source.clone())));
    editor.update(EditorMessage::Open);

    let document = RasterDocument::load(&source)
        .await
        .with_context(|| format!("Failed to open {}", args.file.display()))?;
    editor.update(EditorMessage::ImageLoaded(source, document));
    editor.update(EditorMessage::FrameReady);

    for gesture in &args.gestures {
        gesture.replay(&mut editor);
    }

    if editor.phase() == EditorPhase::Cancelled {
        log::info!("Editor cancelled, nothing written");
        return Ok(());
    }

    if let Some(path) = &args.preview {
        write_preview(&editor, path)?;
    }

    let file = editor
        .confirm()
        .await
        .ok_or_else(|| anyhow!("Nothing to crop: the image could not be laid out or encoded"))?;
    let written = file.write_into(&config.output_dir).await?;
    log::info!("Wrote {}", written.display());

    Ok(())
}

fn write_preview(editor: &CropEditor<ContainLayout>, path: &std::path::Path) -> anyhow::Result<()> {
    let (Some(document), Some(bounds), Some(selection), Some(container)) = (
        editor.document(),
        editor.bounds(),
        editor.selection(),
        editor.surface().container_rect(),
    ) else {
        log::warn!("No preview written: editor is not ready");
        return Ok(());
    };

    let canvas = preview::render(
        &document.image(),
        (container.width, container.height),
        &bounds,
        &selection,
    );
    canvas
        .save(path)
        .with_context(|| format!("Failed to write preview {}", path.display()))?;
    log::info!("Wrote preview {}", path.display());
    Ok(())
}
