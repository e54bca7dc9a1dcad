//! Camera preset data types

/// Camera pose mapped into the renderer's normalized volume space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPreset {
    /// Field of view in degrees
    pub field_of_view: f64,
    pub focal_distance: f64,
    pub from: [f64; 3],
    pub target: [f64; 3],
    pub up: [f64; 3],
}
