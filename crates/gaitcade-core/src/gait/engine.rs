//! Phase-based gait synthesis.

use crate::curve::evaluate;
use crate::error::GaitResult;

use super::params::{GaitCurves, GaitParameters};
use super::sample::{JointAngleSample, LegAngles};

/// Bipedal walk-cycle generator.
///
/// The engine is immutable after construction. [`GaitEngine::sample`] is a pure
/// function of time: the same `t` always yields a bit-identical sample.
#[derive(Debug, Clone, PartialEq)]
pub struct GaitEngine {
    params: GaitParameters,
    curves: GaitCurves,
    hip_amp_rad: f64,
    knee_amp_rad: f64,
    ankle_amp_rad: f64,
}

impl GaitEngine {
    /// Creates an engine, validating parameters and curves.
    pub fn new(params: GaitParameters, curves: GaitCurves) -> GaitResult<Self> {
        params.validate()?;
        curves.validate()?;
        Ok(Self {
            params,
            curves,
            hip_amp_rad: params.hip_amplitude.to_radians(),
            knee_amp_rad: params.knee_amplitude.to_radians(),
            ankle_amp_rad: params.ankle_amplitude.to_radians(),
        })
    }

    /// Creates an engine with the default curves and the given parameters.
    pub fn with_params(params: GaitParameters) -> GaitResult<Self> {
        Self::new(params, GaitCurves::default())
    }

    /// Returns the engine parameters.
    pub fn params(&self) -> &GaitParameters {
        &self.params
    }

    /// Returns the engine curves.
    pub fn curves(&self) -> &GaitCurves {
        &self.curves
    }

    /// Returns the cycle time in seconds.
    pub fn cycle_time(&self) -> f64 {
        self.params.cycle_time
    }

    /// Returns the offset applied to the right leg (half a cycle).
    pub fn right_leg_offset(&self) -> f64 {
        self.params.cycle_time / 2.0
    }

    /// Returns the normalized phase in [0, 1) of `t + offset`.
    ///
    /// Negative times wrap into the previous cycle. Non-finite input yields 0.
    pub fn phase(&self, t: f64, offset: f64) -> f64 {
        let cycle = self.params.cycle_time;
        let phase = (t + offset).rem_euclid(cycle) / cycle;
        // rem_euclid can round up to exactly `cycle` for tiny negative inputs.
        if phase.is_finite() && phase < 1.0 {
            phase
        } else {
            0.0
        }
    }

    /// Returns the (left, right) leg phases at time `t`.
    pub fn leg_phases(&self, t: f64) -> (f64, f64) {
        (self.phase(t, 0.0), self.phase(t, self.right_leg_offset()))
    }

    /// Samples joint angles and body height at time `t`.
    pub fn sample(&self, t: f64) -> JointAngleSample {
        let (phase_l, phase_r) = self.leg_phases(t);

        let height_l = evaluate(&self.curves.body_height, phase_l);
        let height_r = evaluate(&self.curves.body_height, phase_r);

        JointAngleSample {
            left: self.leg_at(phase_l),
            right: self.leg_at(phase_r),
            body_height: (height_l + height_r) * 0.5 * self.params.height_amplitude,
        }
    }

    fn leg_at(&self, phase: f64) -> LegAngles {
        LegAngles {
            hip: evaluate(&self.curves.hip, phase) * self.hip_amp_rad,
            knee: evaluate(&self.curves.knee, phase) * self.knee_amp_rad,
            ankle: evaluate(&self.curves.ankle, phase) * self.ankle_amp_rad,
        }
    }
}

impl Default for GaitEngine {
    fn default() -> Self {
        let params = GaitParameters::default();
        Self {
            params,
            curves: GaitCurves::default(),
            hip_amp_rad: params.hip_amplitude.to_radians(),
            knee_amp_rad: params.knee_amplitude.to_radians(),
            ankle_amp_rad: params.ankle_amplitude.to_radians(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GaitError;
    use pretty_assertions::assert_eq;

    fn engine(cycle_time: f64) -> GaitEngine {
        GaitEngine::with_params(GaitParameters::default().with_cycle_time(cycle_time)).unwrap()
    }

    #[test]
    fn test_rejects_bad_cycle_time() {
        for bad in [0.0, -0.5, f64::NAN] {
            let err = GaitEngine::with_params(GaitParameters::default().with_cycle_time(bad))
                .unwrap_err();
            assert!(matches!(err, GaitError::InvalidCycleTime { .. }));
        }
    }

    #[test]
    fn test_phase_wraps() {
        let e = engine(2.0);
        assert_eq!(e.phase(0.0, 0.0), 0.0);
        assert_eq!(e.phase(1.0, 0.0), 0.5);
        assert_eq!(e.phase(2.0, 0.0), 0.0);
        assert_eq!(e.phase(5.0, 0.0), 0.5);
        assert_eq!(e.phase(-0.5, 0.0), 0.75);
    }

    #[test]
    fn test_phase_tiny_negative_stays_below_one() {
        let e = engine(1.0);
        let p = e.phase(-1e-20, 0.0);
        assert!((0.0..1.0).contains(&p));
    }

    #[test]
    fn test_phase_non_finite_is_zero() {
        let e = engine(1.0);
        assert_eq!(e.phase(f64::NAN, 0.0), 0.0);
        assert_eq!(e.phase(f64::INFINITY, 0.0), 0.0);
    }

    #[test]
    fn test_leg_phases_antiphase() {
        let e = engine(1.0);
        assert_eq!(e.leg_phases(0.0), (0.0, 0.5));
        assert_eq!(e.leg_phases(0.25), (0.25, 0.75));
    }

    #[test]
    fn test_sample_at_zero_matches_curves() {
        let e = engine(1.0);
        let s = e.sample(0.0);
        let knee_rad = e.params().knee_amplitude.to_radians();
        assert_eq!(s.left.knee, e.curves().knee.evaluate(0.0) * knee_rad);
        assert_eq!(s.right.knee, e.curves().knee.evaluate(0.5) * knee_rad);
    }

    #[test]
    fn test_half_cycle_symmetry() {
        let e = engine(1.0);
        assert_eq!(e.sample(0.5).left, e.sample(0.0).right);
        assert_eq!(e.sample(0.5).right, e.sample(0.0).left);
    }

    #[test]
    fn test_sample_is_idempotent() {
        let e = engine(1.3);
        for t in [0.0, 0.1, 7.77, -3.2, 1e6] {
            assert_eq!(e.sample(t), e.sample(t));
        }
    }

    #[test]
    fn test_body_height_shared_and_symmetric() {
        let e = engine(1.0);
        let a = e.sample(0.2).body_height;
        let b = e.sample(0.7).body_height;
        assert!((a - b).abs() < 1e-12);
        assert!(a >= 0.0);
        assert!(a <= e.params().height_amplitude);
    }

    #[test]
    fn test_default_matches_validated_construction() {
        let built = GaitEngine::new(GaitParameters::default(), GaitCurves::default()).unwrap();
        assert_eq!(GaitEngine::default(), built);
    }
}
