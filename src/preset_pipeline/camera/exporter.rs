use tracing::{debug, instrument};

use crate::preset_pipeline::camera::types::CameraPreset;
use crate::preset_pipeline::common::error::{PresetError, Result};
use crate::preset_pipeline::host::{CameraPose, VolumeGeometry};
use crate::preset_pipeline::xml::{CameraNormalization, PresetConfig, StandardXmlWriter};

/// Per-axis divisors used to bring world positions into volume space.
fn axis_bounds(geometry: &VolumeGeometry, normalization: CameraNormalization) -> Result<[f64; 3]> {
    let upper = geometry.extent_upper();
    if upper.contains(&0) {
        return Err(PresetError::InvalidExtent(geometry.extent));
    }

    let bounds = match normalization {
        CameraNormalization::ExtentUpperBounds => upper.map(f64::from),
        CameraNormalization::PhysicalBounds => [0, 1, 2].map(|axis| {
            geometry.origin[axis] + f64::from(upper[axis]) * geometry.spacing[axis]
        }),
    };

    if bounds.iter().any(|b| *b == 0.0 || !b.is_finite()) {
        return Err(PresetError::InvalidExtent(geometry.extent));
    }
    Ok(bounds)
}

fn divide(v: [f64; 3], bounds: [f64; 3]) -> [f64; 3] {
    [v[0] / bounds[0], v[1] / bounds[1], v[2] / bounds[2]]
}

/// Converts the host camera into a camera preset. The up vector is passed
/// through unchanged.
#[instrument(skip(pose, geometry))]
pub fn export_camera(
    pose: &CameraPose,
    geometry: &VolumeGeometry,
    normalization: CameraNormalization,
) -> Result<CameraPreset> {
    let bounds = axis_bounds(geometry, normalization)?;
    debug!(?bounds, "Camera normalization bounds");

    Ok(CameraPreset {
        field_of_view: pose.view_angle,
        focal_distance: pose.distance,
        from: divide(pose.position, bounds),
        target: divide(pose.focal_point, bounds),
        up: pose.view_up,
    })
}

/// Exports the host camera straight to a camera preset document.
pub fn export_camera_xml(pose: &CameraPose, geometry: &VolumeGeometry, config: &PresetConfig) -> Result<String> {
    let preset = export_camera(pose, geometry, config.camera_normalization)?;
    StandardXmlWriter.camera_xml(&preset, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset_pipeline::common::range::IntensityRange;

    fn geometry(extent: [i32; 6]) -> VolumeGeometry {
        VolumeGeometry {
            scalar_range: IntensityRange::new(0.0, 1.0),
            extent,
            spacing: [2.0, 2.0, 2.0],
            origin: [0.0, 0.0, 0.0],
        }
    }

    fn pose() -> CameraPose {
        CameraPose {
            position: [100.0, 50.0, 200.0],
            focal_point: [50.0, 25.0, 25.0],
            view_up: [0.0, 0.0, 1.0],
            view_angle: 30.0,
            distance: 180.0,
        }
    }

    #[test]
    fn test_positions_divided_by_extent_upper_bounds() {
        let preset = export_camera(
            &pose(),
            &geometry([0, 100, 0, 50, 0, 100]),
            CameraNormalization::ExtentUpperBounds,
        )
        .unwrap();

        assert_eq!(preset.from, [1.0, 1.0, 2.0]);
        assert_eq!(preset.target, [0.5, 0.5, 0.25]);
        assert_eq!(preset.up, [0.0, 0.0, 1.0]);
        assert_eq!(preset.field_of_view, 30.0);
        assert_eq!(preset.focal_distance, 180.0);
    }

    #[test]
    fn test_physical_bounds_account_for_spacing() {
        let preset = export_camera(
            &pose(),
            &geometry([0, 100, 0, 50, 0, 100]),
            CameraNormalization::PhysicalBounds,
        )
        .unwrap();

        assert_eq!(preset.from, [0.5, 0.5, 1.0]);
        assert_eq!(preset.target, [0.25, 0.25, 0.125]);
    }

    #[test]
    fn test_zero_upper_bound_fails() {
        let extent = [0, 100, 0, 0, 0, 100];
        let result = export_camera(&pose(), &geometry(extent), CameraNormalization::ExtentUpperBounds);
        assert!(matches!(result, Err(PresetError::InvalidExtent(e)) if e == extent));
    }

    #[test]
    fn test_zero_physical_bound_fails() {
        let extent = [0, 100, 0, 50, 0, 100];
        let mut geometry = geometry(extent);
        geometry.origin = [0.0, -100.0, 0.0];

        let result = export_camera(&pose(), &geometry, CameraNormalization::PhysicalBounds);
        assert!(matches!(result, Err(PresetError::InvalidExtent(e)) if e == extent));

        let preset = export_camera(&pose(), &geometry, CameraNormalization::ExtentUpperBounds).unwrap();
        assert_eq!(preset.from, [1.0, 1.0, 2.0]);
    }

    #[test]
    fn test_camera_xml_layout() {
        let xml = export_camera_xml(
            &pose(),
            &geometry([0, 100, 0, 50, 0, 100]),
            &PresetConfig::default(),
        )
        .unwrap();

        assert!(xml.starts_with("<!DOCTYPE Camera>\n<Presets>\n  <Preset Name=\"volume\">\n"));
        assert!(xml.contains(r#"<Width Value="400"/>"#));
        assert!(xml.contains(r#"<Height Value="500"/>"#));
        assert!(xml.contains(r#"<Exposure Value="0.75"/>"#));
        assert!(xml.contains(r#"<Size Value="0"/>"#));
        assert!(xml.contains(r#"<FieldOfView Value="30"/>"#));
        assert!(xml.contains(r#"<FocalDistance Value="180"/>"#));
        assert!(xml.contains(r#"<From X="1" Y="1" Z="2"/>"#));
        assert!(xml.contains(r#"<Target X="0.5" Y="0.5" Z="0.25"/>"#));
        assert!(xml.contains(r#"<Up X="0" Y="0" Z="1"/>"#));
    }
}
