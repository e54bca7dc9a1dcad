//! Preset XML writing module
//!
//! This module provides writers for the renderer's appearance and camera
//! preset documents, plus the configuration that shapes them.

mod writer;
mod standard_xml_writer;
pub mod types;

pub use writer::PresetWriter;
pub use standard_xml_writer::StandardXmlWriter;
pub use types::{CameraNormalization, FilmSettings, PresetConfig, PresetConfigBuilder, SamplePolicy};
