//! Camera preset module
//!
//! Maps the host's active camera into the renderer's camera preset.

mod exporter;
pub mod types;

pub use exporter::{export_camera, export_camera_xml};
pub use types::CameraPreset;
