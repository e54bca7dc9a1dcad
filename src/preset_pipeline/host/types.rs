//! Value types exchanged with the host scene

use serde::{Deserialize, Serialize};

use crate::preset_pipeline::common::range::IntensityRange;

/// A colour transfer function control point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorPoint {
    /// Position in the curve's native scalar units
    pub x: f64,
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl ColorPoint {
    pub fn new(x: f64, r: f64, g: f64, b: f64) -> Self {
        Self { x, r, g, b }
    }

    pub fn black(x: f64) -> Self {
        Self::new(x, 0.0, 0.0, 0.0)
    }

    pub fn rgb(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
}

/// A scalar opacity transfer function control point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpacityPoint {
    /// Position in the curve's native scalar units
    pub x: f64,
    /// Opacity in [0, 1]
    pub value: f64,
}

impl OpacityPoint {
    pub fn new(x: f64, value: f64) -> Self {
        Self { x, value }
    }
}

/// Material shading scalars of the host's volume rendering display node
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShadingParams {
    pub ambient: f64,
    pub diffuse: f64,
    pub specular: f64,
    /// Specular exponent. Exported as `1 - roughness`.
    pub specular_power: f64,
}

impl Default for ShadingParams {
    fn default() -> Self {
        Self {
            ambient: 0.1,
            diffuse: 0.9,
            specular: 0.2,
            specular_power: 1.0,
        }
    }
}

/// World-space pose of the host's active 3D camera
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: [f64; 3],
    pub focal_point: [f64; 3],
    pub view_up: [f64; 3],
    /// Vertical field of view in degrees
    pub view_angle: f64,
    /// Distance from position to focal point
    pub distance: f64,
}

impl CameraPose {
    /// Builds a pose whose distance is derived from position and focal point.
    pub fn looking_at(position: [f64; 3], focal_point: [f64; 3], view_up: [f64; 3], view_angle: f64) -> Self {
        let distance = position
            .iter()
            .zip(focal_point.iter())
            .map(|(p, f)| (p - f) * (p - f))
            .sum::<f64>()
            .sqrt();
        Self {
            position,
            focal_point,
            view_up,
            view_angle,
            distance,
        }
    }
}

/// Geometry and voxel statistics of a scalar volume
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeGeometry {
    /// Minimum and maximum voxel value
    pub scalar_range: IntensityRange,
    /// Voxel index extent `[xmin, xmax, ymin, ymax, zmin, zmax]`
    pub extent: [i32; 6],
    #[serde(default = "unit_spacing")]
    pub spacing: [f64; 3],
    #[serde(default)]
    pub origin: [f64; 3],
}

fn unit_spacing() -> [f64; 3] {
    [1.0, 1.0, 1.0]
}

impl VolumeGeometry {
    /// Upper extent bounds `(xmax, ymax, zmax)`
    pub fn extent_upper(&self) -> [i32; 3] {
        [self.extent[1], self.extent[3], self.extent[5]]
    }
}
