//! Host scene access module
//!
//! This module defines the narrow interface through which the pipeline reads
//! and replaces the host application's transfer functions, shading and camera.

pub mod curves;
mod memory_scene;
mod scene;
pub mod types;

pub use curves::{ColorCurve, OpacityCurve, PiecewiseColorCurve, PiecewiseOpacityCurve};
pub use memory_scene::{MemoryScene, VolumeProperty};
pub use scene::HostScene;
pub(crate) use scene::require;
pub use types::{CameraPose, ColorPoint, OpacityPoint, ShadingParams, VolumeGeometry};
