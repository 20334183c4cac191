//! Gaitcade Procedural Locomotion Core
//!
//! This crate synthesizes bipedal locomotion for a humanoid joint tree without
//! keyframe assets. Every pose is a closed-form function of time.
//!
//! # Overview
//!
//! - **Gait engine**: four cubic curves (hip, knee, ankle, body height) sampled
//!   per leg at a normalized phase, with the right leg half a cycle behind the left
//! - **Skeleton**: an indexed joint tree with per-axis rotation limits applied
//!   after every frame
//! - **Animation selector**: a timed state machine cycling Idle, Walk, Run,
//!   Head Turn and Jump
//!
//! # Example
//!
//! ```
//! use gaitcade_core::{AnimationSelector, GaitEngine, Skeleton};
//!
//! let engine = GaitEngine::default();
//! let sample = engine.sample(0.25);
//! assert!(sample.left.knee.is_finite());
//!
//! let mut skeleton = Skeleton::humanoid();
//! let mut selector = AnimationSelector::new(engine);
//! for _ in 0..60 {
//!     selector.update(&mut skeleton, 1.0 / 60.0);
//! }
//! assert!(skeleton.is_within_limits());
//! assert_eq!(selector.current_name(), "Idle");
//! ```
//!
//! # Modules
//!
//! - [`curve`]: Control points and cubic curve evaluation
//! - [`gait`]: Gait parameters, curve tables and the engine
//! - [`skeleton`]: Joint tree, limits and the pose-writing trait
//! - [`animation`]: Per-mode motions and the selector
//! - [`config`]: Serializable animator configuration
//! - [`bake`]: Fixed-rate pose clips with a determinism hash
//! - [`error`]: Error types

pub mod animation;
pub mod bake;
pub mod config;
pub mod curve;
pub mod error;
pub mod gait;
pub mod skeleton;

// Re-export commonly used types at the crate root
pub use animation::{
    Animation, AnimationMode, AnimationSelector, HeadTurnMotion, IdleMotion, JumpMotion, JumpPose,
    ModeTransition, MotionSet, RunMotion, WalkMotion, DEFAULT_MODE_DURATION,
};
pub use bake::{bake, BakeSettings, BakedClip, PoseFrame, MAX_BAKE_DURATION, MAX_BAKE_FPS};
pub use config::AnimatorConfig;
pub use curve::{evaluate, ControlPoint, Curve};
pub use error::{GaitError, GaitResult};
pub use gait::{GaitCurves, GaitEngine, GaitParameters, JointAngleSample, LegAngles};
pub use skeleton::{
    clamp, Axis, AxisLimits, JointClass, JointId, JointLimit, JointLimits, PoseSnapshot,
    PoseTarget, Side, Skeleton,
};
