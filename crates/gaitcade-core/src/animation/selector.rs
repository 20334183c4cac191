//! Timed animation state machine.

use super::mode::{AnimationMode, DEFAULT_MODE_DURATION};
use super::motions::{Animation, MotionSet};
use crate::config::AnimatorConfig;
use crate::error::GaitResult;
use crate::gait::GaitEngine;
use crate::skeleton::PoseTarget;

/// Elapsed time below which a mode counts as freshly entered.
pub const ENTRY_EPSILON: f64 = 1e-3;

/// A mode change reported by [`AnimationSelector::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeTransition {
    /// Mode that just finished.
    pub from: AnimationMode,
    /// Mode that starts this frame.
    pub to: AnimationMode,
}

/// Cycles through a playlist of animations on a fixed timer.
///
/// Drive it with one [`update`](Self::update) per rendered frame. Each call
/// advances the in-mode clock, switches mode when the clock reaches the mode
/// duration, writes the current animation's pose and clamps it.
#[derive(Debug, Clone)]
pub struct AnimationSelector {
    playlist: Vec<Animation>,
    current: usize,
    elapsed: f64,
    mode_duration: f64,
    max_frame_delta: Option<f64>,
    transitions: u64,
    clock: f64,
    pending_reset: bool,
}

impl AnimationSelector {
    /// Creates a selector over all five modes with default tuning.
    pub fn new(engine: GaitEngine) -> Self {
        let motions = MotionSet::default();
        let playlist = AnimationMode::ALL
            .iter()
            .map(|&mode| motions.animation(mode, &engine))
            .collect();
        Self {
            playlist,
            current: 0,
            elapsed: 0.0,
            mode_duration: DEFAULT_MODE_DURATION,
            max_frame_delta: None,
            transitions: 0,
            clock: 0.0,
            pending_reset: false,
        }
    }

    /// Builds a selector from a validated config.
    pub fn from_config(config: &AnimatorConfig) -> GaitResult<Self> {
        config.validate()?;
        let engine = config.engine()?;
        let playlist = config
            .playlist
            .iter()
            .map(|&mode| config.motions.animation(mode, &engine))
            .collect();
        Ok(Self {
            playlist,
            current: 0,
            elapsed: 0.0,
            mode_duration: config.mode_duration,
            max_frame_delta: config.max_frame_delta,
            transitions: 0,
            clock: 0.0,
            pending_reset: false,
        })
    }

    /// Advances by `delta` seconds and writes the frame's pose onto `rig`.
    ///
    /// Negative or non-finite deltas are treated as zero. Returns the mode
    /// change if one happened this frame.
    pub fn update<T: PoseTarget + ?Sized>(
        &mut self,
        rig: &mut T,
        delta: f64,
    ) -> Option<ModeTransition> {
        let delta = self.sanitize_delta(delta);
        self.elapsed += delta;
        self.clock += delta;

        let mut transition = None;
        if self.elapsed >= self.mode_duration {
            let from = self.current_mode();
            let ended_at = self.elapsed;
            self.elapsed = 0.0;
            self.current = (self.current + 1) % self.playlist.len();
            self.transitions += 1;
            let to = self.current_mode();
            log::debug!("mode transition: {} -> {} after {:.3}s", from, to, ended_at);
            transition = Some(ModeTransition { from, to });
        }

        let pending = std::mem::take(&mut self.pending_reset);
        if pending || transition.is_some() || self.elapsed < ENTRY_EPSILON {
            rig.reset_pose();
        }

        let t = self.elapsed;
        self.current_animation().apply(rig, t);
        rig.clamp_all();

        log::trace!("frame: mode={} t={:.4}", self.current_mode(), t);
        transition
    }

    fn sanitize_delta(&self, delta: f64) -> f64 {
        if !delta.is_finite() || delta < 0.0 {
            log::warn!("ignoring invalid frame delta {}", delta);
            return 0.0;
        }
        match self.max_frame_delta {
            Some(max) if delta > max => {
                log::warn!("clamping frame delta {:.4}s to {:.4}s", delta, max);
                max
            }
            _ => delta,
        }
    }

    /// Returns to the first playlist entry with zeroed clocks.
    ///
    /// The next [`update`](Self::update) resets the pose before writing.
    pub fn restart(&mut self) {
        self.current = 0;
        self.elapsed = 0.0;
        self.clock = 0.0;
        self.pending_reset = true;
    }

    /// Returns the animation currently playing.
    pub fn current_animation(&self) -> &Animation {
        &self.playlist[self.current]
    }

    /// Returns the mode currently playing.
    pub fn current_mode(&self) -> AnimationMode {
        self.current_animation().mode()
    }

    /// Returns the display name of the current mode.
    pub fn current_name(&self) -> &'static str {
        self.current_mode().display_name()
    }

    /// Returns the time spent in the current mode.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Returns the total time advanced since construction or the last restart.
    ///
    /// Only sanitized deltas count, so this lags the caller's clock when
    /// frames are capped or rejected.
    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// Returns the seconds each mode plays for.
    pub fn mode_duration(&self) -> f64 {
        self.mode_duration
    }

    /// Returns the number of mode changes since construction.
    pub fn transitions(&self) -> u64 {
        self.transitions
    }

    /// Returns the playlist length.
    pub fn len(&self) -> usize {
        self.playlist.len()
    }

    /// Returns true if the playlist is empty. Never true for a constructed selector.
    pub fn is_empty(&self) -> bool {
        self.playlist.is_empty()
    }
}
