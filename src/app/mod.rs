// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/mod.rs
//
// Editor application layer: state, messages, layout and output.

pub mod document;
pub mod editor;
pub mod layout;
pub mod message;
pub mod model;
pub mod rasterize;
pub mod view;

pub use editor::CropEditor;
pub use message::EditorMessage;
pub use model::{EditorModel, EditorPhase, Outcome};
