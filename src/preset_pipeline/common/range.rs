//! Scalar ranges shared by the exporter and the editor merge-back.

use serde::{Deserialize, Serialize};

use crate::preset_pipeline::common::error::{PresetError, Result};

/// Closed scalar interval `[min, max]` in a curve's or volume's native units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntensityRange {
    pub min: f64,
    pub max: f64,
}

impl IntensityRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Maps `x` into the unit interval relative to this range.
    ///
    /// The result is not clamped. Fails with [`PresetError::InvalidRange`]
    /// when the range has zero width.
    pub fn normalize(&self, x: f64) -> Result<f64> {
        self.ensure_nonzero()?;
        Ok((x - self.min) / self.width())
    }

    /// Fails unless the range has a finite, nonzero width.
    pub fn ensure_nonzero(&self) -> Result<()> {
        let width = self.width();
        if width == 0.0 || !width.is_finite() {
            return Err(PresetError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Maps a unit-interval value back into this range. Zero-width ranges
    /// collapse every value onto `min`.
    pub fn denormalize(&self, t: f64) -> f64 {
        self.min + t * self.width()
    }
}

impl From<(f64, f64)> for IntensityRange {
    fn from((min, max): (f64, f64)) -> Self {
        Self { min, max }
    }
}

#[cfg(test)]
mod tests {
    use super::{IntensityRange, PresetError};
    use proptest::prelude::*;

    #[test]
    fn test_zero_width_range_is_rejected() {
        let range = IntensityRange::new(5.0, 5.0);
        let result = range.normalize(5.0);
        assert!(matches!(
            result,
            Err(PresetError::InvalidRange { min, max }) if min == 5.0 && max == 5.0
        ));
    }

    #[test]
    fn test_normalize_is_unclamped() {
        let range = IntensityRange::new(0.0, 100.0);
        assert!((range.normalize(150.0).unwrap() - 1.5).abs() < 1e-12);
        assert!((range.normalize(-50.0).unwrap() + 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_denormalize_zero_width_collapses_to_min() {
        let range = IntensityRange::new(3.0, 3.0);
        assert_eq!(range.denormalize(0.75), 3.0);
    }

    proptest! {
        #[test]
        fn normalize_then_denormalize_round_trips(
            a in -1.0e4f64..1.0e4,
            width in 1.0e-3f64..1.0e4,
            t in 0.0f64..=1.0,
        ) {
            let range = IntensityRange::new(a, a + width);
            let p = range.denormalize(t);
            let back = range.denormalize(range.normalize(p).unwrap());
            prop_assert!((back - p).abs() <= 1e-9 * (1.0 + p.abs()));
        }
    }
}
