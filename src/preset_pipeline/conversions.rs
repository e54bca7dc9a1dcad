//! Pipeline conversions module
//!
//! This module contains the orchestration that turns a host scene into
//! renderer presets and hands them to the renderer.

mod launcher;
mod scene_to_preset;
pub mod types;


pub use launcher::{ProcessLauncher, RendererLauncher};
pub use scene_to_preset::{ScenePresetPipeline, ScenePresets, SendSummary};
pub use types::{
    APPEARANCE_PRESETS_FILE, CAMERA_PRESETS_FILE, LinkConfig, LinkConfigBuilder, NodeNames, Transport,
};
