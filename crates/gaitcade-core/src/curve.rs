//! Cubic Bézier curve evaluation for gait shaping.
//!
//! A [`Curve`] is four control points. Only the `y` components are blended;
//! `x` records where in the gait cycle the author placed each point and is
//! kept for documentation and export only.

use serde::{Deserialize, Serialize};

use crate::error::{GaitError, GaitResult};

/// Number of control points in a cubic curve.
pub const CONTROL_POINT_COUNT: usize = 4;

/// A single curve control point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ControlPoint {
    /// Position in the gait-phase domain (informative only).
    pub x: f64,
    /// Dimensionless curve value, later scaled by an amplitude.
    pub y: f64,
}

impl ControlPoint {
    /// Creates a new control point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A cubic curve defined by exactly four control points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ControlPoint>", into = "Vec<ControlPoint>")]
pub struct Curve {
    points: [ControlPoint; CONTROL_POINT_COUNT],
}

impl Curve {
    /// Creates a curve from four control points.
    pub const fn new(points: [ControlPoint; CONTROL_POINT_COUNT]) -> Self {
        Self { points }
    }

    /// Creates a curve from a slice, failing unless it has exactly four points.
    pub fn from_points(name: &str, points: &[ControlPoint]) -> GaitResult<Self> {
        let points: [ControlPoint; CONTROL_POINT_COUNT] =
            points.try_into().map_err(|_| GaitError::MalformedCurve {
                name: name.to_string(),
                count: points.len(),
            })?;
        Ok(Self { points })
    }

    /// Returns the control points.
    pub fn points(&self) -> &[ControlPoint; CONTROL_POINT_COUNT] {
        &self.points
    }

    /// Evaluates the curve at `phase`. See [`evaluate`].
    pub fn evaluate(&self, phase: f64) -> f64 {
        evaluate(self, phase)
    }

    /// Checks that every control point is finite.
    pub fn validate(&self, name: &str) -> GaitResult<()> {
        for (i, p) in self.points.iter().enumerate() {
            if !p.x.is_finite() || !p.y.is_finite() {
                return Err(GaitError::invalid_param(
                    name,
                    format!("control point {} is not finite: ({}, {})", i, p.x, p.y),
                ));
            }
        }
        Ok(())
    }
}

impl TryFrom<Vec<ControlPoint>> for Curve {
    type Error = GaitError;

    fn try_from(points: Vec<ControlPoint>) -> Result<Self, Self::Error> {
        Curve::from_points("curve", &points)
    }
}

impl From<Curve> for Vec<ControlPoint> {
    fn from(curve: Curve) -> Self {
        curve.points.to_vec()
    }
}

/// Evaluates the cubic Bernstein blend of the curve's `y` values at `phase`.
///
/// `phase` is expected in [0, 1]. Values outside that range extrapolate the
/// cubic rather than failing.
pub fn evaluate(curve: &Curve, phase: f64) -> f64 {
    let [p0, p1, p2, p3] = curve.points.map(|p| p.y);
    let u = 1.0 - phase;
    u * u * u * p0 + 3.0 * u * u * phase * p1 + 3.0 * u * phase * phase * p2 + phase * phase * phase * p3
}
