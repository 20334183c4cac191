//! Animator configuration.
//!
//! A single document carries everything needed to build an
//! [`AnimationSelector`](crate::animation::AnimationSelector): gait parameters
//! and curves, joint limits, per-mode tuning and the playlist. Every field is
//! optional and falls back to the built-in humanoid defaults.

use serde::{Deserialize, Serialize};

use crate::animation::{AnimationMode, MotionSet, DEFAULT_MODE_DURATION};
use crate::error::{ensure_positive, GaitError, GaitResult};
use crate::gait::{GaitCurves, GaitEngine, GaitParameters};
use crate::skeleton::{JointLimits, Skeleton};

/// Complete animator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnimatorConfig {
    /// Gait engine parameters.
    #[serde(default)]
    pub gait: GaitParameters,
    /// Gait curve table.
    #[serde(default)]
    pub curves: GaitCurves,
    /// Seconds spent in each mode.
    #[serde(default = "default_mode_duration")]
    pub mode_duration: f64,
    /// Modes in playback order. Repeats are allowed.
    #[serde(default = "default_playlist")]
    pub playlist: Vec<AnimationMode>,
    /// Upper bound applied to each frame delta. `None` leaves deltas unbounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_frame_delta: Option<f64>,
    /// Per-mode motion tuning.
    #[serde(default)]
    pub motions: MotionSet,
    /// Joint rotation limits.
    #[serde(default)]
    pub limits: JointLimits,
}

fn default_mode_duration() -> f64 {
    DEFAULT_MODE_DURATION
}

fn default_playlist() -> Vec<AnimationMode> {
    AnimationMode::ALL.to_vec()
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            gait: GaitParameters::default(),
            curves: GaitCurves::default(),
            mode_duration: default_mode_duration(),
            playlist: default_playlist(),
            max_frame_delta: None,
            motions: MotionSet::default(),
            limits: JointLimits::default(),
        }
    }
}

impl AnimatorConfig {
    /// Parses a config from JSON.
    pub fn from_json(json: &str) -> GaitResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the config to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> GaitResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Sets the mode duration.
    pub fn with_mode_duration(mut self, seconds: f64) -> Self {
        self.mode_duration = seconds;
        self
    }

    /// Sets the playlist.
    pub fn with_playlist(mut self, playlist: Vec<AnimationMode>) -> Self {
        self.playlist = playlist;
        self
    }

    /// Sets the per-frame delta bound.
    pub fn with_max_frame_delta(mut self, seconds: f64) -> Self {
        self.max_frame_delta = Some(seconds);
        self
    }

    /// Validates every section.
    pub fn validate(&self) -> GaitResult<()> {
        self.gait.validate()?;
        self.curves.validate()?;

        if !(self.mode_duration.is_finite() && self.mode_duration > 0.0) {
            return Err(GaitError::InvalidModeDuration {
                duration: self.mode_duration,
            });
        }
        if self.playlist.is_empty() {
            return Err(GaitError::EmptyPlaylist);
        }
        if let Some(max) = self.max_frame_delta {
            ensure_positive("max_frame_delta", max)?;
        }

        self.motions.validate()?;
        self.limits.validate()?;
        Ok(())
    }

    /// Builds the gait engine described by this config.
    pub fn engine(&self) -> GaitResult<GaitEngine> {
        GaitEngine::new(self.gait, self.curves)
    }

    /// Builds a rest-pose humanoid skeleton using this config's limits.
    pub fn skeleton(&self) -> Skeleton {
        Skeleton::humanoid().with_limits(self.limits)
    }
}
