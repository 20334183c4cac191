//! Animation modes.

use serde::{Deserialize, Serialize};

/// Seconds spent in each mode before the selector advances.
pub const DEFAULT_MODE_DURATION: f64 = 4.0;

/// The locomotion animations the selector cycles through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationMode {
    /// Standing idle with breathing and a slight nod.
    Idle,
    /// Gait-engine walk cycle.
    Walk,
    /// Sine-driven run.
    Run,
    /// Head turning side to side.
    HeadTurn,
    /// Repeated vertical jumps.
    Jump,
}

impl AnimationMode {
    /// All modes in default playlist order.
    pub const ALL: [AnimationMode; 5] = [
        AnimationMode::Idle,
        AnimationMode::Walk,
        AnimationMode::Run,
        AnimationMode::HeadTurn,
        AnimationMode::Jump,
    ];

    /// Returns the identifier used in configs (e.g. "head_turn").
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationMode::Idle => "idle",
            AnimationMode::Walk => "walk",
            AnimationMode::Run => "run",
            AnimationMode::HeadTurn => "head_turn",
            AnimationMode::Jump => "jump",
        }
    }

    /// Returns the display name (e.g. "Head Turn").
    pub fn display_name(&self) -> &'static str {
        match self {
            AnimationMode::Idle => "Idle",
            AnimationMode::Walk => "Walk",
            AnimationMode::Run => "Run",
            AnimationMode::HeadTurn => "Head Turn",
            AnimationMode::Jump => "Jump",
        }
    }

    /// Returns whether the mode moves the figure forward.
    pub fn translates_root(&self) -> bool {
        matches!(self, AnimationMode::Walk | AnimationMode::Run)
    }
}

impl std::fmt::Display for AnimationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
