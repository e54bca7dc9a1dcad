use crate::preset_pipeline::common::error::{PresetError, Result};
use crate::preset_pipeline::host::curves::{ColorCurve, OpacityCurve};
use crate::preset_pipeline::host::types::{
    CameraPose, ColorPoint, OpacityPoint, ShadingParams, VolumeGeometry,
};

/// Narrow view of the host application's scene, looked up by node name.
///
/// Implementations are passed explicitly into every operation; nothing in
/// this crate reaches for a process-wide scene.
pub trait HostScene {
    fn color_curve(&self, property_node: &str) -> Option<&dyn ColorCurve>;

    fn opacity_curve(&self, property_node: &str) -> Option<&dyn OpacityCurve>;

    fn shading(&self, display_node: &str) -> Option<ShadingParams>;

    fn camera(&self, camera_node: &str) -> Option<CameraPose>;

    fn volume_geometry(&self, volume_node: &str) -> Option<VolumeGeometry>;

    /// Replaces every point of both curves of `property_node` in one step.
    fn replace_transfer_function(
        &mut self,
        property_node: &str,
        color: &[ColorPoint],
        opacity: &[OpacityPoint],
    ) -> Result<()>;
}

pub(crate) fn require<T>(value: Option<T>, kind: &str, name: &str) -> Result<T> {
    value.ok_or_else(|| PresetError::MissingHostObject(format!("{} '{}'", kind, name)))
}
