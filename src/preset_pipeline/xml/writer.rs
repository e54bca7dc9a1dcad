use std::io::Write;
use crate::preset_pipeline::appearance::AppearancePreset;
use crate::preset_pipeline::camera::CameraPreset;
use crate::preset_pipeline::common::error::Result;
use crate::preset_pipeline::xml::types::PresetConfig;

pub trait PresetWriter {
    fn write_appearance(&self, preset: &AppearancePreset, output: &mut dyn Write, config: &PresetConfig) -> Result<()>;
    fn write_camera(&self, preset: &CameraPreset, output: &mut dyn Write, config: &PresetConfig) -> Result<()>;
}
