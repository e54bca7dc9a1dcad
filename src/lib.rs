//! Transfer function and camera link between a volume visualization host and
//! an external path-tracing renderer.
//!
//! The host's colour/opacity curves, shading scalars and camera are exported
//! as the renderer's `AppearancePresets.xml` and `CameraPresets.xml`, and
//! control points edited in a browser-based editor are written back into the
//! host's curves. All host access goes through [`preset_pipeline::HostScene`].

pub mod logger;
pub mod preset_pipeline;
