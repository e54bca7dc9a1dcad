//! Edited control points to host curve conversion.

use tracing::{debug, instrument};

use crate::preset_pipeline::common::error::{PresetError, Result};
use crate::preset_pipeline::common::range::IntensityRange;
use crate::preset_pipeline::editor::types::{EditedPoint, StagedTransferFunction};
use crate::preset_pipeline::host::{ColorPoint, OpacityPoint};

fn validate(index: usize, point: &EditedPoint) -> Result<()> {
    let c = point.color;
    let fields = [("x", point.x), ("r", c.r), ("g", c.g), ("b", c.b), ("a", c.a)];
    match fields.iter().find(|(_, v)| !v.is_finite()) {
        Some((name, value)) => Err(PresetError::InvalidEditedPoint {
            index,
            reason: format!("{} is not a finite number ({})", name, value),
        }),
        None => Ok(()),
    }
}

/// Builds the full replacement contents of both curves from edited points.
///
/// Both curves always begin with a black, fully transparent point at each end
/// of their range. Every entry is validated before anything is staged.
#[instrument(skip(points), fields(count = points.len()))]
pub fn apply_edited_transfer_function(
    points: &[EditedPoint],
    color_range: IntensityRange,
    opacity_range: IntensityRange,
) -> Result<StagedTransferFunction> {
    for (index, point) in points.iter().enumerate() {
        validate(index, point)?;
    }

    let mut staged = StagedTransferFunction {
        color: Vec::with_capacity(points.len() + 2),
        opacity: Vec::with_capacity(points.len() + 2),
    };

    staged.color.push(ColorPoint::black(color_range.min));
    staged.color.push(ColorPoint::black(color_range.max));
    staged.opacity.push(OpacityPoint::new(opacity_range.min, 0.0));
    staged.opacity.push(OpacityPoint::new(opacity_range.max, 0.0));

    for point in points {
        let x = point.x.clamp(0.0, 1.0);
        let xc = color_range.denormalize(x);
        let xo = opacity_range.denormalize(x);
        let c = point.color;

        staged.color.push(ColorPoint::new(xc, c.r / 255.0, c.g / 255.0, c.b / 255.0));
        staged.opacity.push(OpacityPoint::new(xo, c.a));
    }

    debug!(
        color_points = staged.color.len(),
        opacity_points = staged.opacity.len(),
        "Staged transfer function"
    );
    Ok(staged)
}
