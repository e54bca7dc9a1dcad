//! In-memory [`HostScene`] backed by plain maps.
//!
//! Scenes round-trip through JSON so the command line tool can operate on a
//! snapshot of the host's nodes.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::preset_pipeline::common::error::{PresetError, Result};
use crate::preset_pipeline::host::curves::{
    ColorCurve, OpacityCurve, PiecewiseColorCurve, PiecewiseOpacityCurve,
};
use crate::preset_pipeline::host::scene::{HostScene, require};
use crate::preset_pipeline::host::types::{
    CameraPose, ColorPoint, OpacityPoint, ShadingParams, VolumeGeometry,
};

/// Colour and scalar opacity curves of one volume property node
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VolumeProperty {
    pub color: PiecewiseColorCurve,
    pub opacity: PiecewiseOpacityCurve,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryScene {
    #[serde(default)]
    pub volumes: BTreeMap<String, VolumeGeometry>,
    #[serde(default)]
    pub volume_properties: BTreeMap<String, VolumeProperty>,
    #[serde(default)]
    pub shading: BTreeMap<String, ShadingParams>,
    #[serde(default)]
    pub cameras: BTreeMap<String, CameraPose>,
}

impl MemoryScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_volume(mut self, name: impl Into<String>, geometry: VolumeGeometry) -> Self {
        self.volumes.insert(name.into(), geometry);
        self
    }

    pub fn with_volume_property(mut self, name: impl Into<String>, property: VolumeProperty) -> Self {
        self.volume_properties.insert(name.into(), property);
        self
    }

    pub fn with_shading(mut self, name: impl Into<String>, shading: ShadingParams) -> Self {
        self.shading.insert(name.into(), shading);
        self
    }

    pub fn with_camera(mut self, name: impl Into<String>, camera: CameraPose) -> Self {
        self.cameras.insert(name.into(), camera);
        self
    }

    pub fn volume_property(&self, name: &str) -> Option<&VolumeProperty> {
        self.volume_properties.get(name)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| PresetError::InvalidScene(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PresetError::OutputWriteError(format!("scene serialization: {}", e)))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading scene");
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?).map_err(|e| {
            PresetError::OutputWriteError(format!("{}: {}", path.display(), e))
        })
    }
}

impl HostScene for MemoryScene {
    fn color_curve(&self, property_node: &str) -> Option<&dyn ColorCurve> {
        self.volume_properties
            .get(property_node)
            .map(|p| &p.color as &dyn ColorCurve)
    }

    fn opacity_curve(&self, property_node: &str) -> Option<&dyn OpacityCurve> {
        self.volume_properties
            .get(property_node)
            .map(|p| &p.opacity as &dyn OpacityCurve)
    }

    fn shading(&self, display_node: &str) -> Option<ShadingParams> {
        self.shading.get(display_node).copied()
    }

    fn camera(&self, camera_node: &str) -> Option<CameraPose> {
        self.cameras.get(camera_node).copied()
    }

    fn volume_geometry(&self, volume_node: &str) -> Option<VolumeGeometry> {
        self.volumes.get(volume_node).copied()
    }

    fn replace_transfer_function(
        &mut self,
        property_node: &str,
        color: &[ColorPoint],
        opacity: &[OpacityPoint],
    ) -> Result<()> {
        let property = require(
            self.volume_properties.get_mut(property_node),
            "volume property",
            property_node,
        )?;

        property.color.remove_all_points();
        for point in color {
            property.color.add_point(*point);
        }

        property.opacity.remove_all_points();
        for point in opacity {
            property.opacity.add_point(*point);
        }

        debug!(
            node = property_node,
            color_points = property.color.len(),
            opacity_points = property.opacity.len(),
            "Transfer function replaced"
        );
        Ok(())
    }
}
