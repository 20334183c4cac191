//! Gait parameters and curve tables.

use serde::{Deserialize, Serialize};

use crate::curve::{ControlPoint, Curve};
use crate::error::{ensure_finite, GaitError, GaitResult};

// =============================================================================
// Amplitudes and Timing
// =============================================================================

/// Cycle time and amplitude scalars for a gait engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GaitParameters {
    /// Duration of one full gait cycle in seconds.
    #[serde(default = "default_cycle_time")]
    pub cycle_time: f64,
    /// Hip swing amplitude in degrees.
    #[serde(default = "default_hip_amplitude")]
    pub hip_amplitude: f64,
    /// Knee bend amplitude in degrees.
    #[serde(default = "default_knee_amplitude")]
    pub knee_amplitude: f64,
    /// Ankle flex amplitude in degrees.
    #[serde(default = "default_ankle_amplitude")]
    pub ankle_amplitude: f64,
    /// Body-height bob amplitude in scene length units.
    #[serde(default = "default_height_amplitude")]
    pub height_amplitude: f64,
}

fn default_cycle_time() -> f64 {
    1.0
}

fn default_hip_amplitude() -> f64 {
    25.0
}

fn default_knee_amplitude() -> f64 {
    60.0
}

fn default_ankle_amplitude() -> f64 {
    20.0
}

fn default_height_amplitude() -> f64 {
    0.04
}

impl Default for GaitParameters {
    fn default() -> Self {
        Self {
            cycle_time: default_cycle_time(),
            hip_amplitude: default_hip_amplitude(),
            knee_amplitude: default_knee_amplitude(),
            ankle_amplitude: default_ankle_amplitude(),
            height_amplitude: default_height_amplitude(),
        }
    }
}

impl GaitParameters {
    /// Sets the cycle time.
    pub fn with_cycle_time(mut self, cycle_time: f64) -> Self {
        self.cycle_time = cycle_time;
        self
    }

    /// Sets the hip, knee and ankle amplitudes in degrees.
    pub fn with_leg_amplitudes(mut self, hip: f64, knee: f64, ankle: f64) -> Self {
        self.hip_amplitude = hip;
        self.knee_amplitude = knee;
        self.ankle_amplitude = ankle;
        self
    }

    /// Sets the body-height amplitude.
    pub fn with_height_amplitude(mut self, amplitude: f64) -> Self {
        self.height_amplitude = amplitude;
        self
    }

    /// Validates the parameters.
    ///
    /// The cycle time must be positive and finite; amplitudes must be finite.
    pub fn validate(&self) -> GaitResult<()> {
        if !self.cycle_time.is_finite() || self.cycle_time <= 0.0 {
            return Err(GaitError::InvalidCycleTime {
                cycle_time: self.cycle_time,
            });
        }
        ensure_finite("hip_amplitude", self.hip_amplitude)?;
        ensure_finite("knee_amplitude", self.knee_amplitude)?;
        ensure_finite("ankle_amplitude", self.ankle_amplitude)?;
        ensure_finite("height_amplitude", self.height_amplitude)?;
        Ok(())
    }
}

// =============================================================================
// Curve Tables
// =============================================================================

/// The four shaping curves driving a gait cycle.
///
/// Phase 0 is heel-strike of the leg being evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GaitCurves {
    /// Hip forward/back swing.
    #[serde(default = "default_hip_curve")]
    pub hip: Curve,
    /// Knee bend.
    #[serde(default = "default_knee_curve")]
    pub knee: Curve,
    /// Ankle flex.
    #[serde(default = "default_ankle_curve")]
    pub ankle: Curve,
    /// Pelvis height offset.
    #[serde(default = "default_body_height_curve")]
    pub body_height: Curve,
}

const fn curve(y: [f64; 4]) -> Curve {
    Curve::new([
        ControlPoint::new(-0.9, y[0]),
        ControlPoint::new(-0.3, y[1]),
        ControlPoint::new(0.3, y[2]),
        ControlPoint::new(0.9, y[3]),
    ])
}

/// Hip flexed at heel-strike, extends through stance, swings forward again.
const HIP_CURVE: Curve = curve([0.8, -2.8, 2.6, 0.8]);

/// Near-straight at contact, peak flexion mid-swing.
const KNEE_CURVE: Curve = curve([0.1, 0.2, 1.7, 0.1]);

/// Plantar flex through stance, dorsiflex for toe clearance in swing.
const ANKLE_CURVE: Curve = curve([0.0, -1.0, 1.0, 0.0]);

/// Pelvis rises over the stance leg and returns at the next contact.
const BODY_HEIGHT_CURVE: Curve = curve([0.0, 1.0, 1.0, 0.0]);

fn default_hip_curve() -> Curve {
    HIP_CURVE
}

fn default_knee_curve() -> Curve {
    KNEE_CURVE
}

fn default_ankle_curve() -> Curve {
    ANKLE_CURVE
}

fn default_body_height_curve() -> Curve {
    BODY_HEIGHT_CURVE
}

impl Default for GaitCurves {
    fn default() -> Self {
        Self {
            hip: HIP_CURVE,
            knee: KNEE_CURVE,
            ankle: ANKLE_CURVE,
            body_height: BODY_HEIGHT_CURVE,
        }
    }
}

impl GaitCurves {
    /// Checks that every curve has finite control points.
    pub fn validate(&self) -> GaitResult<()> {
        self.hip.validate("hip")?;
        self.knee.validate("knee")?;
        self.ankle.validate("ankle")?;
        self.body_height.validate("body_height")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters() {
        let params = GaitParameters::default();
        assert_eq!(params.cycle_time, 1.0);
        assert_eq!(params.hip_amplitude, 25.0);
        assert_eq!(params.knee_amplitude, 60.0);
        assert_eq!(params.ankle_amplitude, 20.0);
        assert_eq!(params.height_amplitude, 0.04);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_validate_cycle_time() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let params = GaitParameters::default().with_cycle_time(bad);
            assert!(matches!(
                params.validate(),
                Err(GaitError::InvalidCycleTime { .. })
            ));
        }
    }

    #[test]
    fn test_validate_amplitudes() {
        let params = GaitParameters::default().with_leg_amplitudes(f64::NAN, 60.0, 20.0);
        let err = params.validate().unwrap_err();
        assert!(err.to_string().contains("hip_amplitude"));

        let params = GaitParameters::default().with_height_amplitude(f64::INFINITY);
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_parameters_serde_defaults() {
        let parsed: GaitParameters = serde_json::from_str(r#"{"cycle_time":1.2}"#).unwrap();
        assert_eq!(parsed.cycle_time, 1.2);
        assert_eq!(parsed.knee_amplitude, 60.0);

        let err = serde_json::from_str::<GaitParameters>(r#"{"speed":1.0}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_default_curves_are_periodic() {
        let curves = GaitCurves::default();
        for c in [curves.hip, curves.knee, curves.ankle, curves.body_height] {
            assert_eq!(c.evaluate(0.0), c.evaluate(1.0));
        }
    }

    #[test]
    fn test_default_knee_curve_never_hyperextends() {
        let knee = GaitCurves::default().knee;
        for i in 0..=100 {
            assert!(knee.evaluate(i as f64 / 100.0) >= 0.0);
        }
    }

    #[test]
    fn test_curves_serde_partial_override() {
        let json = r#"{"knee":[{"x":0,"y":0},{"x":0.3,"y":0.5},{"x":0.6,"y":1.0},{"x":1,"y":0}]}"#;
        let parsed: GaitCurves = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.hip, GaitCurves::default().hip);
        assert_eq!(parsed.knee.points()[2].y, 1.0);
        assert!(parsed.validate().is_ok());
    }
}
