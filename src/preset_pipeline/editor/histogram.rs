//! Intensity histogram in the shape the editor widget displays.

use serde::{Deserialize, Serialize};

use crate::preset_pipeline::common::error::{PresetError, Result};
use crate::preset_pipeline::common::range::IntensityRange;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Histogram {
    pub num_bins: usize,
    pub bins: Vec<u64>,
    pub max_bin_value: u64,
}

impl Histogram {
    /// Counts `samples` into `num_bins` equal bins spanning `range`.
    ///
    /// Samples outside the range and NaNs are ignored; `range.max` falls in
    /// the last bin.
    pub fn from_samples(samples: &[f64], range: IntensityRange, num_bins: usize) -> Result<Self> {
        range.ensure_nonzero()?;
        let num_bins = num_bins.max(1);
        let mut bins = vec![0u64; num_bins];

        for &sample in samples {
            if !(range.min..=range.max).contains(&sample) {
                continue;
            }
            let t = range.normalize(sample)?;
            let bin = ((t * num_bins as f64) as usize).min(num_bins - 1);
            bins[bin] += 1;
        }

        let max_bin_value = bins.iter().copied().max().unwrap_or(0);
        Ok(Self {
            num_bins,
            bins,
            max_bin_value,
        })
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| PresetError::OutputWriteError(e.to_string()))
    }
}
