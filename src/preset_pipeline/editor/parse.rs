use serde_json::Value;
use tracing::debug;

use crate::preset_pipeline::common::error::{PresetError, Result};
use crate::preset_pipeline::editor::types::EditedPoint;

/// Parses the editor's transfer function payload.
///
/// The payload must be a JSON array of `[x, {"r", "g", "b", "a"}]` entries.
/// The first malformed entry fails the whole parse.
pub fn parse_edited_points(json: &str) -> Result<Vec<EditedPoint>> {
    let entries: Vec<Value> = serde_json::from_str(json).map_err(|e| PresetError::InvalidEditedPoint {
        index: 0,
        reason: format!("payload is not an array of points: {}", e),
    })?;

    let points = entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_json::from_value::<EditedPoint>(entry)
                .map_err(|e| PresetError::InvalidEditedPoint {
                    index,
                    reason: e.to_string(),
                })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!("Parsed {} edited points", points.len());
    Ok(points)
}
