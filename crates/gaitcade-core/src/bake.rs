//! Offline baking of an animator run into a fixed-rate pose clip.
//!
//! Baking drives a fresh [`AnimationSelector`] and [`Skeleton`] with a constant
//! frame delta and records a [`PoseSnapshot`] per frame. The clip carries a
//! BLAKE3 hash of its frames so two bakes of the same config can be compared
//! byte for byte.

use serde::{Deserialize, Serialize};

use crate::animation::{AnimationMode, AnimationSelector};
use crate::config::AnimatorConfig;
use crate::error::{GaitError, GaitResult};
use crate::skeleton::PoseSnapshot;

/// Highest supported bake rate.
pub const MAX_BAKE_FPS: u32 = 240;

/// Longest supported bake, in seconds.
pub const MAX_BAKE_DURATION: f64 = 3600.0;

/// Frame rate and length of a bake.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BakeSettings {
    /// Frames per second, 1 to 240.
    pub fps: u32,
    /// Clip length in seconds.
    pub duration: f64,
}

impl Default for BakeSettings {
    fn default() -> Self {
        Self {
            fps: 30,
            duration: 20.0,
        }
    }
}

impl BakeSettings {
    /// Creates bake settings.
    pub fn new(fps: u32, duration: f64) -> Self {
        Self { fps, duration }
    }

    /// Checks the rate and duration are in range.
    pub fn validate(&self) -> GaitResult<()> {
        if self.fps == 0 || self.fps > MAX_BAKE_FPS {
            return Err(GaitError::invalid_bake(format!(
                "fps must be between 1 and {}, got {}",
                MAX_BAKE_FPS, self.fps
            )));
        }
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(GaitError::invalid_bake(format!(
                "duration must be positive and finite, got {}",
                self.duration
            )));
        }
        if self.duration > MAX_BAKE_DURATION {
            return Err(GaitError::invalid_bake(format!(
                "duration {} exceeds the {} second limit",
                self.duration, MAX_BAKE_DURATION
            )));
        }
        Ok(())
    }

    /// Seconds between frames.
    pub fn frame_delta(&self) -> f64 {
        1.0 / self.fps as f64
    }

    /// Number of frames, including both the first and the last instant.
    pub fn frame_count(&self) -> usize {
        (self.duration * self.fps as f64).round() as usize + 1
    }
}

/// One baked frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoseFrame {
    /// Frame number, starting at 0.
    pub index: usize,
    /// Clip time in seconds.
    pub time: f64,
    /// Mode playing on this frame.
    pub mode: AnimationMode,
    /// True if the mode changed on this frame, including repeats of the
    /// same mode in the playlist.
    #[serde(default)]
    pub transition: bool,
    /// Clamped pose after the frame's update.
    pub pose: PoseSnapshot,
}

/// A baked pose clip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BakedClip {
    /// Frames per second.
    pub fps: u32,
    /// Clip length in seconds.
    pub duration: f64,
    /// Frames in time order.
    pub frames: Vec<PoseFrame>,
    /// Hex BLAKE3 hash of the serialized frames.
    pub pose_hash: String,
}

impl BakedClip {
    /// Returns the number of mode changes across the clip.
    pub fn transition_count(&self) -> usize {
        self.frames.iter().filter(|f| f.transition).count()
    }

    /// Recomputes the frame hash and compares it with the stored one.
    pub fn verify(&self) -> GaitResult<bool> {
        Ok(frames_hash(&self.frames)? == self.pose_hash)
    }
}

/// Computes the hex BLAKE3 hash of a frame list.
pub fn frames_hash(frames: &[PoseFrame]) -> GaitResult<String> {
    let bytes = serde_json::to_vec(frames)?;
    Ok(blake3::hash(&bytes).to_hex().to_string())
}

/// Bakes a config into a clip.
///
/// The first frame is sampled with a zero delta, every later frame with
/// `1 / fps`.
pub fn bake(config: &AnimatorConfig, settings: BakeSettings) -> GaitResult<BakedClip> {
    settings.validate()?;
    let mut selector = AnimationSelector::from_config(config)?;
    let mut skeleton = config.skeleton();

    let count = settings.frame_count();
    let dt = settings.frame_delta();
    log::debug!(
        "baking {} frames at {} fps ({}s)",
        count,
        settings.fps,
        settings.duration
    );

    let mut frames = Vec::with_capacity(count);
    for index in 0..count {
        let delta = if index == 0 { 0.0 } else { dt };
        let transition = selector.update(&mut skeleton, delta);
        frames.push(PoseFrame {
            index,
            time: index as f64 * dt,
            mode: selector.current_mode(),
            transition: transition.is_some(),
            pose: skeleton.snapshot(),
        });
    }

    let pose_hash = frames_hash(&frames)?;
    Ok(BakedClip {
        fps: settings.fps,
        duration: settings.duration,
        frames,
        pose_hash,
    })
}
