//! Per-mode motion generators.
//!
//! Each motion writes raw, unclamped values onto a [`PoseTarget`] as a closed
//! form function of the time spent in the mode. The selector resets the pose
//! before a mode starts and clamps after every write.

use std::f64::consts::TAU;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::mode::AnimationMode;
use crate::error::{ensure_finite, ensure_non_negative, GaitResult};
use crate::gait::GaitEngine;
use crate::skeleton::{Axis, JointId, PoseTarget, Side};

fn ensure_all_finite(prefix: &str, fields: &[(&str, f64)]) -> GaitResult<()> {
    for (name, value) in fields {
        ensure_finite(&format!("motions.{}.{}", prefix, name), *value)?;
    }
    Ok(())
}

fn ensure_all_non_negative(prefix: &str, fields: &[(&str, f64)]) -> GaitResult<()> {
    for (name, value) in fields {
        ensure_non_negative(&format!("motions.{}.{}", prefix, name), *value)?;
    }
    Ok(())
}

/// Swings each arm against the same-side leg and holds a constant elbow bend.
fn swing_arms<T: PoseTarget + ?Sized>(rig: &mut T, side: Side, hip: f64, swing: f64, elbow: f64) {
    rig.apply_rotation(JointId::shoulder(side), Axis::X, -swing * hip);
    rig.apply_rotation(JointId::elbow(side), Axis::X, elbow);
}

// =============================================================================
// Idle
// =============================================================================

/// Standing idle: torso breathing bob and a slow nod.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct IdleMotion {
    /// Vertical torso bob amplitude (scene units).
    pub breath_amplitude: f64,
    /// Bob angular rate (rad/s).
    pub breath_rate: f64,
    /// Neck pitch amplitude (radians).
    pub nod_amplitude: f64,
    /// Neck pitch angular rate (rad/s).
    pub nod_rate: f64,
}

impl Default for IdleMotion {
    fn default() -> Self {
        Self {
            breath_amplitude: 0.02,
            breath_rate: 2.0,
            nod_amplitude: 0.05,
            nod_rate: 1.5,
        }
    }
}

impl IdleMotion {
    /// Writes the idle pose at time `t`.
    pub fn apply<T: PoseTarget + ?Sized>(&self, rig: &mut T, t: f64) {
        let bob = self.breath_amplitude * (self.breath_rate * t).sin();
        rig.set_root_offset(DVec3::new(0.0, bob, 0.0), DVec3::ZERO);
        rig.apply_rotation(
            JointId::Neck,
            Axis::X,
            self.nod_amplitude * (self.nod_rate * t).sin(),
        );
    }

    fn validate(&self) -> GaitResult<()> {
        ensure_all_finite(
            "idle",
            &[
                ("breath_amplitude", self.breath_amplitude),
                ("breath_rate", self.breath_rate),
                ("nod_amplitude", self.nod_amplitude),
                ("nod_rate", self.nod_rate),
            ],
        )
    }
}

// =============================================================================
// Walk
// =============================================================================

/// Walk: legs and pelvis height from the gait engine, constant forward drift.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct WalkMotion {
    /// Multiplier from mode time to gait-engine time.
    pub time_scale: f64,
    /// Forward (+Z) root speed in scene units per second.
    pub forward_speed: f64,
    /// Shoulder swing as a fraction of the same-side hip angle.
    pub arm_swing: f64,
    /// Constant elbow bend (radians).
    pub elbow_bend: f64,
}

impl Default for WalkMotion {
    fn default() -> Self {
        Self {
            time_scale: 0.6,
            forward_speed: 0.3,
            arm_swing: 0.6,
            elbow_bend: 0.25,
        }
    }
}

impl WalkMotion {
    /// Writes the walk pose at time `t`, sampling `engine`.
    pub fn apply<T: PoseTarget + ?Sized>(&self, engine: &GaitEngine, rig: &mut T, t: f64) {
        let sample = engine.sample(self.time_scale * t);

        for (side, leg) in [(Side::Left, sample.left), (Side::Right, sample.right)] {
            rig.apply_rotation(JointId::hip(side), Axis::X, leg.hip);
            rig.apply_rotation(JointId::knee(side), Axis::X, leg.knee);
            // Gait curves use flex-positive; the skeleton ankle uses extend-positive.
            rig.apply_rotation(JointId::ankle(side), Axis::X, -leg.ankle);
            swing_arms(rig, side, leg.hip, self.arm_swing, self.elbow_bend);
        }

        rig.set_root_offset(
            DVec3::new(0.0, sample.body_height, self.forward_speed * t),
            DVec3::ZERO,
        );
    }

    fn validate(&self) -> GaitResult<()> {
        ensure_all_finite(
            "walk",
            &[
                ("time_scale", self.time_scale),
                ("forward_speed", self.forward_speed),
                ("arm_swing", self.arm_swing),
                ("elbow_bend", self.elbow_bend),
            ],
        )
    }
}

// =============================================================================
// Run
// =============================================================================

/// Run: antiphase sine legs, one-sided knees, forward lean and bounce.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct RunMotion {
    /// Leg cycle angular rate (rad/s).
    pub frequency: f64,
    /// Hip swing amplitude (radians).
    pub hip_amplitude: f64,
    /// Peak knee bend (radians).
    pub knee_amplitude: f64,
    /// Fixed root pitch (radians, negative leans forward).
    pub lean: f64,
    /// Vertical bounce amplitude (scene units).
    pub bob_amplitude: f64,
    /// Forward (+Z) root speed in scene units per second.
    pub forward_speed: f64,
    /// Shoulder swing as a fraction of the same-side hip angle.
    pub arm_swing: f64,
    /// Constant elbow bend (radians).
    pub elbow_bend: f64,
}

impl Default for RunMotion {
    fn default() -> Self {
        Self {
            frequency: 10.0,
            hip_amplitude: 0.8,
            knee_amplitude: 1.6,
            lean: -0.2,
            bob_amplitude: 0.06,
            forward_speed: 1.2,
            arm_swing: 1.0,
            elbow_bend: 1.3,
        }
    }
}

impl RunMotion {
    /// Writes the run pose at time `t`.
    pub fn apply<T: PoseTarget + ?Sized>(&self, rig: &mut T, t: f64) {
        let s = (self.frequency * t).sin();

        for side in Side::BOTH {
            let swing = side.sign() * s;
            let hip = self.hip_amplitude * swing;
            rig.apply_rotation(JointId::hip(side), Axis::X, hip);
            rig.apply_rotation(
                JointId::knee(side),
                Axis::X,
                self.knee_amplitude * (-swing).max(0.0),
            );
            swing_arms(rig, side, hip, self.arm_swing, self.elbow_bend);
        }

        let bob = (2.0 * self.frequency * t).sin().abs() * self.bob_amplitude;
        rig.set_root_offset(
            DVec3::new(0.0, bob, self.forward_speed * t),
            DVec3::new(self.lean, 0.0, 0.0),
        );
    }

    fn validate(&self) -> GaitResult<()> {
        ensure_all_finite(
            "run",
            &[
                ("frequency", self.frequency),
                ("hip_amplitude", self.hip_amplitude),
                ("knee_amplitude", self.knee_amplitude),
                ("lean", self.lean),
                ("bob_amplitude", self.bob_amplitude),
                ("forward_speed", self.forward_speed),
                ("arm_swing", self.arm_swing),
                ("elbow_bend", self.elbow_bend),
            ],
        )?;
        ensure_all_non_negative(
            "run",
            &[
                ("knee_amplitude", self.knee_amplitude),
                ("bob_amplitude", self.bob_amplitude),
            ],
        )
    }
}

// =============================================================================
// Head Turn
// =============================================================================

/// Head turn: neck yaw sweep with a slower pitch sway. Legs and root stay put.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct HeadTurnMotion {
    /// Neck yaw amplitude (radians).
    pub yaw_amplitude: f64,
    /// Yaw angular rate (rad/s); pitch runs at half this rate.
    pub turn_speed: f64,
    /// Neck pitch amplitude (radians).
    pub pitch_amplitude: f64,
}

impl Default for HeadTurnMotion {
    fn default() -> Self {
        Self {
            yaw_amplitude: 1.0,
            turn_speed: 1.5,
            pitch_amplitude: 0.2,
        }
    }
}

impl HeadTurnMotion {
    /// Writes the head-turn pose at time `t`.
    pub fn apply<T: PoseTarget + ?Sized>(&self, rig: &mut T, t: f64) {
        rig.apply_rotation(
            JointId::Neck,
            Axis::Y,
            self.yaw_amplitude * (self.turn_speed * t).sin(),
        );
        rig.apply_rotation(
            JointId::Neck,
            Axis::X,
            self.pitch_amplitude * (0.5 * self.turn_speed * t).sin(),
        );
    }

    fn validate(&self) -> GaitResult<()> {
        ensure_all_finite(
            "head_turn",
            &[
                ("yaw_amplitude", self.yaw_amplitude),
                ("turn_speed", self.turn_speed),
                ("pitch_amplitude", self.pitch_amplitude),
            ],
        )
    }
}

// =============================================================================
// Jump
// =============================================================================

/// Root lift and leg angles at one point of the jump cycle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct JumpPose {
    /// Root height above rest (scene units).
    pub lift: f64,
    /// Knee bend (radians).
    pub knee: f64,
    /// Ankle angle (radians).
    pub ankle: f64,
}

/// Jump: lift on the positive half of a sine, grounded on the negative half.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct JumpMotion {
    /// Jump cycle angular rate (rad/s).
    pub speed: f64,
    /// Peak root lift (scene units).
    pub height: f64,
    /// Knee bend at peak lift (radians).
    pub knee_bend: f64,
    /// Ankle flex at peak lift (radians, applied opposite to the knee).
    pub ankle_flex: f64,
}

impl Default for JumpMotion {
    fn default() -> Self {
        Self {
            speed: 3.0,
            height: 0.5,
            knee_bend: 1.2,
            ankle_flex: 0.4,
        }
    }
}

impl JumpMotion {
    /// Returns the jump phase in [0, 2π) at time `t`.
    pub fn phase(&self, t: f64) -> f64 {
        (self.speed * t).rem_euclid(TAU)
    }

    /// Returns the pose at a jump phase.
    pub fn pose_at_phase(&self, phase: f64) -> JumpPose {
        let rise = phase.sin().max(0.0);
        JumpPose {
            lift: rise * self.height,
            knee: rise * self.knee_bend,
            ankle: -rise * self.ankle_flex,
        }
    }

    /// Writes the jump pose at time `t`.
    pub fn apply<T: PoseTarget + ?Sized>(&self, rig: &mut T, t: f64) {
        let pose = self.pose_at_phase(self.phase(t));
        for side in Side::BOTH {
            rig.apply_rotation(JointId::knee(side), Axis::X, pose.knee);
            rig.apply_rotation(JointId::ankle(side), Axis::X, pose.ankle);
        }
        rig.set_root_offset(DVec3::new(0.0, pose.lift, 0.0), DVec3::ZERO);
    }

    fn validate(&self) -> GaitResult<()> {
        ensure_all_finite(
            "jump",
            &[
                ("speed", self.speed),
                ("height", self.height),
                ("knee_bend", self.knee_bend),
                ("ankle_flex", self.ankle_flex),
            ],
        )?;
        // Lift never goes below rest.
        ensure_all_non_negative(
            "jump",
            &[
                ("height", self.height),
                ("knee_bend", self.knee_bend),
                ("ankle_flex", self.ankle_flex),
            ],
        )
    }
}

// =============================================================================
// Dispatch
// =============================================================================

/// One playable animation, holding only the state it needs.
#[derive(Debug, Clone, PartialEq)]
pub enum Animation {
    /// Idle motion.
    Idle(IdleMotion),
    /// Walk motion and the gait engine it samples.
    Walk {
        /// Walk tuning.
        motion: WalkMotion,
        /// Gait engine.
        engine: GaitEngine,
    },
    /// Run motion.
    Run(RunMotion),
    /// Head-turn motion.
    HeadTurn(HeadTurnMotion),
    /// Jump motion.
    Jump(JumpMotion),
}

impl Animation {
    /// Returns the mode this animation plays.
    pub fn mode(&self) -> AnimationMode {
        match self {
            Animation::Idle(_) => AnimationMode::Idle,
            Animation::Walk { .. } => AnimationMode::Walk,
            Animation::Run(_) => AnimationMode::Run,
            Animation::HeadTurn(_) => AnimationMode::HeadTurn,
            Animation::Jump(_) => AnimationMode::Jump,
        }
    }

    /// Writes this animation's raw pose at mode time `t`.
    pub fn apply<T: PoseTarget + ?Sized>(&self, rig: &mut T, t: f64) {
        match self {
            Animation::Idle(m) => m.apply(rig, t),
            Animation::Walk { motion, engine } => motion.apply(engine, rig, t),
            Animation::Run(m) => m.apply(rig, t),
            Animation::HeadTurn(m) => m.apply(rig, t),
            Animation::Jump(m) => m.apply(rig, t),
        }
    }
}

/// Tuning for every mode.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct MotionSet {
    /// Idle tuning.
    pub idle: IdleMotion,
    /// Walk tuning.
    pub walk: WalkMotion,
    /// Run tuning.
    pub run: RunMotion,
    /// Head-turn tuning.
    pub head_turn: HeadTurnMotion,
    /// Jump tuning.
    pub jump: JumpMotion,
}

impl MotionSet {
    /// Builds the animation for a mode.
    pub fn animation(&self, mode: AnimationMode, engine: &GaitEngine) -> Animation {
        match mode {
            AnimationMode::Idle => Animation::Idle(self.idle),
            AnimationMode::Walk => Animation::Walk {
                motion: self.walk,
                engine: engine.clone(),
            },
            AnimationMode::Run => Animation::Run(self.run),
            AnimationMode::HeadTurn => Animation::HeadTurn(self.head_turn),
            AnimationMode::Jump => Animation::Jump(self.jump),
        }
    }

    /// Checks every tuning value is finite.
    pub fn validate(&self) -> GaitResult<()> {
        self.idle.validate()?;
        self.walk.validate()?;
        self.run.validate()?;
        self.head_turn.validate()?;
        self.jump.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[derive(Default)]
    struct Recorder {
        rotations: Vec<(JointId, Axis, f64)>,
        root: Option<(DVec3, DVec3)>,
    }

    impl Recorder {
        fn get(&self, joint: JointId, axis: Axis) -> Option<f64> {
            self.rotations
                .iter()
                .rev()
                .find(|(j, a, _)| *j == joint && *a == axis)
                .map(|(_, _, v)| *v)
        }
    }

    impl PoseTarget for Recorder {
        fn apply_rotation(&mut self, joint: JointId, axis: Axis, radians: f64) {
            self.rotations.push((joint, axis, radians));
        }

        fn set_root_offset(&mut self, position: DVec3, rotation: DVec3) {
            self.root = Some((position, rotation));
        }

        fn clamp_all(&mut self) {}

        fn reset_pose(&mut self) {}
    }

    #[test]
    fn test_idle_at_zero_is_neutral() {
        let mut rig = Recorder::default();
        IdleMotion::default().apply(&mut rig, 0.0);
        assert_eq!(rig.root, Some((DVec3::ZERO, DVec3::ZERO)));
        assert_eq!(rig.get(JointId::Neck, Axis::X), Some(0.0));
    }

    #[test]
    fn test_idle_bob() {
        let idle = IdleMotion::default();
        let mut rig = Recorder::default();
        let t = PI / 4.0; // sin(2t) == 1
        idle.apply(&mut rig, t);
        let (pos, _) = rig.root.unwrap();
        assert!((pos.y - idle.breath_amplitude).abs() < 1e-12);
        assert_eq!(pos.x, 0.0);
        assert_eq!(pos.z, 0.0);
    }

    #[test]
    fn test_walk_uses_engine_sample() {
        let engine = GaitEngine::default();
        let walk = WalkMotion::default();
        let mut rig = Recorder::default();
        walk.apply(&engine, &mut rig, 1.0);

        let sample = engine.sample(0.6);
        assert_eq!(rig.get(JointId::HipL, Axis::X), Some(sample.left.hip));
        assert_eq!(rig.get(JointId::KneeR, Axis::X), Some(sample.right.knee));
        assert_eq!(rig.get(JointId::AnkleL, Axis::X), Some(-sample.left.ankle));
        assert_eq!(
            rig.get(JointId::ShoulderR, Axis::X),
            Some(-walk.arm_swing * sample.right.hip)
        );

        let (pos, rot) = rig.root.unwrap();
        assert_eq!(pos.y, sample.body_height);
        assert!((pos.z - 0.3).abs() < 1e-12);
        assert_eq!(rot, DVec3::ZERO);
    }

    #[test]
    fn test_run_knees_one_sided_and_antiphase() {
        let run = RunMotion::default();
        for i in 0..50 {
            let t = i as f64 * 0.037;
            let mut rig = Recorder::default();
            run.apply(&mut rig, t);
            let hip_l = rig.get(JointId::HipL, Axis::X).unwrap();
            let hip_r = rig.get(JointId::HipR, Axis::X).unwrap();
            assert_eq!(hip_l, -hip_r);
            assert!(rig.get(JointId::KneeL, Axis::X).unwrap() >= 0.0);
            assert!(rig.get(JointId::KneeR, Axis::X).unwrap() >= 0.0);

            let (pos, rot) = rig.root.unwrap();
            assert!(pos.y >= 0.0);
            assert_eq!(rot.x, run.lean);
        }
    }

    #[test]
    fn test_run_faster_than_walk() {
        assert!(RunMotion::default().forward_speed > WalkMotion::default().forward_speed);
    }

    #[test]
    fn test_head_turn_moves_only_neck() {
        let mut rig = Recorder::default();
        HeadTurnMotion::default().apply(&mut rig, 0.8);
        assert!(rig.root.is_none());
        assert!(rig.rotations.iter().all(|(j, _, _)| *j == JointId::Neck));
        assert_eq!(rig.rotations.len(), 2);
    }

    #[test]
    fn test_jump_peak_and_trough() {
        let jump = JumpMotion::default();

        let peak = jump.pose_at_phase(FRAC_PI_2);
        assert_eq!(peak.lift, jump.height);
        assert_eq!(peak.knee, jump.knee_bend);
        assert_eq!(peak.ankle, -jump.ankle_flex);

        let trough = jump.pose_at_phase(3.0 * FRAC_PI_2);
        assert_eq!(trough.lift, 0.0);
        assert_eq!(trough.knee, 0.0);
    }

    #[test]
    fn test_jump_phase_wraps() {
        let jump = JumpMotion::default();
        let p = jump.phase(100.0);
        assert!((0.0..TAU).contains(&p));
    }

    #[test]
    fn test_animation_dispatch_modes() {
        let engine = GaitEngine::default();
        let motions = MotionSet::default();
        for mode in AnimationMode::ALL {
            assert_eq!(motions.animation(mode, &engine).mode(), mode);
        }
    }

    #[test]
    fn test_motion_set_serde_partial() {
        let json = r#"{"run":{"frequency":12.0},"jump":{"height":0.8}}"#;
        let parsed: MotionSet = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.run.frequency, 12.0);
        assert_eq!(parsed.run.lean, RunMotion::default().lean);
        assert_eq!(parsed.jump.height, 0.8);
        assert_eq!(parsed.idle, IdleMotion::default());
        assert!(parsed.validate().is_ok());
    }

    #[test]
    fn test_motion_set_validate_rejects_nan() {
        let mut motions = MotionSet::default();
        motions.head_turn.turn_speed = f64::NAN;
        let err = motions.validate().unwrap_err();
        assert!(err.to_string().contains("motions.head_turn.turn_speed"));
    }

    #[test]
    fn test_negative_lift_amplitudes_rejected() {
        let mut motions = MotionSet::default();
        motions.jump.height = -0.5;
        let err = motions.validate().unwrap_err();
        assert!(err.to_string().contains("motions.jump.height"));

        let mut motions = MotionSet::default();
        motions.run.bob_amplitude = -0.06;
        let err = motions.validate().unwrap_err();
        assert!(err.to_string().contains("motions.run.bob_amplitude"));
        assert_eq!(err.code(), "GAIT_003");

        let mut motions = MotionSet::default();
        motions.jump.height = 0.0;
        assert!(motions.validate().is_ok());
    }
}
