//! Transfer function curve access and piecewise-linear in-memory curves.
//!
//! The host owns its colour and opacity curves; the exporter only needs to
//! list their control points and evaluate them at arbitrary positions. The
//! [`PiecewiseColorCurve`] and [`PiecewiseOpacityCurve`] types behave like the
//! host's native curves: one point per position, linear interpolation between
//! points and constant extrapolation beyond the end points.

use serde::{Deserialize, Serialize};

use crate::preset_pipeline::common::range::IntensityRange;
use crate::preset_pipeline::host::types::{ColorPoint, OpacityPoint};

pub trait ColorCurve {
    /// Control points ordered by position
    fn control_points(&self) -> Vec<ColorPoint>;

    /// Evaluated RGB colour at `x`
    fn color_at(&self, x: f64) -> [f64; 3];

    /// Range spanned by the control points
    fn range(&self) -> IntensityRange;
}

pub trait OpacityCurve {
    /// Control points ordered by position
    fn control_points(&self) -> Vec<OpacityPoint>;

    /// Evaluated opacity at `x`
    fn value_at(&self, x: f64) -> f64;

    /// Range spanned by the control points
    fn range(&self) -> IntensityRange;
}

trait Positioned: Copy {
    fn position(&self) -> f64;
}

impl Positioned for ColorPoint {
    fn position(&self) -> f64 {
        self.x
    }
}

impl Positioned for OpacityPoint {
    fn position(&self) -> f64 {
        self.x
    }
}

fn insert_point<P: Positioned>(points: &mut Vec<P>, point: P) {
    let x = point.position();
    match points.binary_search_by(|p| p.position().total_cmp(&x)) {
        Ok(index) => points[index] = point,
        Err(index) => points.insert(index, point),
    }
}

fn span<P: Positioned>(points: &[P]) -> IntensityRange {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) => IntensityRange::new(first.position(), last.position()),
        _ => IntensityRange::new(0.0, 0.0),
    }
}

/// Locates the segment containing `x` and returns the bracketing points with
/// the interpolation weight of the upper one. `None` for an empty curve or a
/// NaN position.
fn bracket<P: Positioned>(points: &[P], x: f64) -> Option<(P, P, f64)> {
    if x.is_nan() {
        return None;
    }
    let first = *points.first()?;
    let last = *points.last()?;
    if x <= first.position() {
        return Some((first, first, 0.0));
    }
    if x >= last.position() {
        return Some((last, last, 0.0));
    }
    let upper = points.partition_point(|p| p.position() <= x);
    let lo = points[upper - 1];
    let hi = points[upper];
    let width = hi.position() - lo.position();
    let t = if width > 0.0 {
        (x - lo.position()) / width
    } else {
        0.0
    };
    Some((lo, hi, t))
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<ColorPoint>", into = "Vec<ColorPoint>")]
pub struct PiecewiseColorCurve {
    points: Vec<ColorPoint>,
}

impl PiecewiseColorCurve {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a point, replacing any existing point at the same position.
    pub fn add_point(&mut self, point: ColorPoint) {
        insert_point(&mut self.points, point);
    }

    pub fn remove_all_points(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[ColorPoint] {
        &self.points
    }
}

impl From<Vec<ColorPoint>> for PiecewiseColorCurve {
    fn from(points: Vec<ColorPoint>) -> Self {
        let mut curve = Self::new();
        for point in points {
            curve.add_point(point);
        }
        curve
    }
}

impl From<PiecewiseColorCurve> for Vec<ColorPoint> {
    fn from(curve: PiecewiseColorCurve) -> Self {
        curve.points
    }
}

impl ColorCurve for PiecewiseColorCurve {
    fn control_points(&self) -> Vec<ColorPoint> {
        self.points.clone()
    }

    fn color_at(&self, x: f64) -> [f64; 3] {
        match bracket(&self.points, x) {
            Some((lo, hi, t)) => [lerp(lo.r, hi.r, t), lerp(lo.g, hi.g, t), lerp(lo.b, hi.b, t)],
            None => [0.0, 0.0, 0.0],
        }
    }

    fn range(&self) -> IntensityRange {
        span(&self.points)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<OpacityPoint>", into = "Vec<OpacityPoint>")]
pub struct PiecewiseOpacityCurve {
    points: Vec<OpacityPoint>,
}

impl PiecewiseOpacityCurve {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a point, replacing any existing point at the same position.
    pub fn add_point(&mut self, point: OpacityPoint) {
        insert_point(&mut self.points, point);
    }

    pub fn remove_all_points(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[OpacityPoint] {
        &self.points
    }
}

impl From<Vec<OpacityPoint>> for PiecewiseOpacityCurve {
    fn from(points: Vec<OpacityPoint>) -> Self {
        let mut curve = Self::new();
        for point in points {
            curve.add_point(point);
        }
        curve
    }
}

impl From<PiecewiseOpacityCurve> for Vec<OpacityPoint> {
    fn from(curve: PiecewiseOpacityCurve) -> Self {
        curve.points
    }
}

impl OpacityCurve for PiecewiseOpacityCurve {
    fn control_points(&self) -> Vec<OpacityPoint> {
        self.points.clone()
    }

    fn value_at(&self, x: f64) -> f64 {
        match bracket(&self.points, x) {
            Some((lo, hi, t)) => lerp(lo.value, hi.value, t),
            None => 0.0,
        }
    }

    fn range(&self) -> IntensityRange {
        span(&self.points)
    }
}
