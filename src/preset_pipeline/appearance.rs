//! Appearance preset module
//!
//! Converts colour/opacity transfer functions and shading scalars into the
//! renderer's appearance preset nodes.

mod exporter;
pub mod types;

pub use exporter::{export_appearance, export_appearance_xml, roughness, unified_positions};
pub use types::{AppearanceNode, AppearancePreset};

#[cfg(test)]
mod tests;
