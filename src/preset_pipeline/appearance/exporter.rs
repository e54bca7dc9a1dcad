//! Transfer function to appearance preset conversion.
//!
//! Control point positions of the colour and opacity curves are merged into a
//! single ascending list. Each position becomes one appearance node whose
//! intensity is normalized against the volume's scalar range.

use tracing::{debug, instrument, warn};

use crate::preset_pipeline::appearance::types::{AppearanceNode, AppearancePreset};
use crate::preset_pipeline::common::error::{PresetError, Result};
use crate::preset_pipeline::common::range::IntensityRange;
use crate::preset_pipeline::host::{ColorCurve, OpacityCurve, ShadingParams};
use crate::preset_pipeline::xml::{PresetConfig, SamplePolicy, StandardXmlWriter};

const EMISSION: [u8; 3] = [0, 0, 0];

/// Distinct control point positions of both curves, ascending.
pub fn unified_positions(
    color: &dyn ColorCurve,
    opacity: &dyn OpacityCurve,
    policy: SamplePolicy,
) -> Vec<f64> {
    let color_xs: Vec<f64> = color.control_points().iter().map(|p| p.x).collect();
    let opacity_xs: Vec<f64> = opacity.control_points().iter().map(|p| p.x).collect();

    let mut positions: Vec<f64> = match policy {
        SamplePolicy::Evaluate => color_xs.into_iter().chain(opacity_xs).collect(),
        SamplePolicy::SharedOnly => color_xs
            .into_iter()
            .filter(|x| opacity_xs.contains(x))
            .collect(),
    };

    positions.sort_by(f64::total_cmp);
    positions.dedup();
    positions
}

/// Roughness percentage derived from the specular power.
pub fn roughness(specular_power: f64) -> u32 {
    ((1.0 - specular_power) * 100.0).round().clamp(0.0, 100.0) as u32
}

/// Scales a unit channel value to an 8-bit integer, truncating.
fn to_channel(value: f64) -> u8 {
    (value * 255.0).clamp(0.0, 255.0) as u8
}

#[instrument(skip(color, opacity, shading))]
pub fn export_appearance(
    color: &dyn ColorCurve,
    opacity: &dyn OpacityCurve,
    shading: &ShadingParams,
    range: IntensityRange,
    policy: SamplePolicy,
) -> Result<AppearancePreset> {
    range.ensure_nonzero()?;

    let positions = {
        let _span = tracing::info_span!("collect_positions").entered();
        unified_positions(color, opacity, policy)
    };
    if let Some(&x) = positions.iter().find(|x| !x.is_finite()) {
        return Err(PresetError::NonFiniteControlPoint(x));
    }

    let specular = [to_channel(shading.specular); 3];
    let roughness = roughness(shading.specular_power);
    let mut nodes: Vec<AppearanceNode> = Vec::with_capacity(positions.len());

    for x in positions {
        let mut normalized = range.normalize(x)?;
        if normalized < 0.0 {
            normalized = 0.0;
        } else if normalized > 1.0 {
            normalized = 1.0;
            if nodes.last().is_some_and(|n| n.normalized_intensity == 1.0) {
                warn!(position = x, "Position beyond scalar range after upper boundary node, stopping");
                break;
            }
        }

        let [r, g, b] = color.color_at(x);
        let node = AppearanceNode {
            normalized_intensity: normalized,
            opacity: opacity.value_at(x),
            diffuse: [to_channel(r), to_channel(g), to_channel(b)],
            specular,
            emission: EMISSION,
            roughness,
        };
        debug!(position = x, normalized, opacity = node.opacity, "Appearance node");

        // Later positions clamped onto the same intensity replace the earlier node.
        match nodes.last_mut() {
            Some(last) if last.normalized_intensity == normalized => *last = node,
            _ => nodes.push(node),
        }
    }

    Ok(AppearancePreset { nodes })
}

/// Exports the transfer function straight to an appearance preset document.
pub fn export_appearance_xml(
    color: &dyn ColorCurve,
    opacity: &dyn OpacityCurve,
    shading: &ShadingParams,
    range: IntensityRange,
    config: &PresetConfig,
) -> Result<String> {
    let preset = export_appearance(color, opacity, shading, range, config.sample_policy)?;
    StandardXmlWriter.appearance_xml(&preset, config)
}
