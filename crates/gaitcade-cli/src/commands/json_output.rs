//! JSON output types for machine-readable CLI output.
//!
//! These types back the `--json` flag on every command. Field names are
//! stable so scripts can parse the output.

use gaitcade_core::{AnimationMode, JointAngleSample, PoseSnapshot};
use serde::{Deserialize, Serialize};

use crate::input::InputError;

/// Error codes for CLI operations.
///
/// Config validation failures pass through the core `GAIT_XXX` codes.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// Unknown file extension
    pub const UNKNOWN_EXTENSION: &str = "CLI_002";
    /// JSON or YAML parse error
    pub const PARSE: &str = "CLI_003";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "GAIT_005")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new JSON error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
        }
    }

    /// Attaches a file path.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// Converts an input error into a JSON error.
pub fn input_error_to_json(err: &InputError, file: &str) -> JsonError {
    JsonError::new(err.code(), err.to_string()).with_file(file)
}

/// Output of `gaitcade validate --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateOutput {
    /// Whether the config is valid
    pub success: bool,
    /// Config file path
    pub file: String,
    /// Source format, when the extension was recognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_kind: Option<String>,
    /// BLAKE3 hash of the source file, when it was read
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_hash: Option<String>,
    /// Errors (empty when valid)
    pub errors: Vec<JsonError>,
}

/// Output of `gaitcade sample --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleOutput {
    /// Sample time in seconds
    pub time: f64,
    /// Gait cycle time in seconds
    pub cycle_time: f64,
    /// Left leg phase in [0, 1)
    pub left_phase: f64,
    /// Right leg phase in [0, 1)
    pub right_phase: f64,
    /// Raw joint angles and body height
    pub sample: JointAngleSample,
}

/// A mode change observed during `gaitcade play`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// Frame on which the change happened
    pub frame: usize,
    /// Playback time in seconds
    pub time: f64,
    /// Mode that finished
    pub from: AnimationMode,
    /// Mode that started
    pub to: AnimationMode,
}

/// Output of `gaitcade play --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayOutput {
    /// Frames per second
    pub fps: u32,
    /// Playback length in seconds
    pub seconds: f64,
    /// Frames simulated
    pub frames: usize,
    /// Mode changes in order
    pub transitions: Vec<TransitionRecord>,
    /// Mode playing on the last frame
    pub final_mode: AnimationMode,
    /// Pose on the last frame
    pub final_pose: PoseSnapshot,
}

/// Output of `gaitcade bake --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BakeOutput {
    /// Whether the clip was written
    pub success: bool,
    /// Output file path
    pub out: String,
    /// Frames per second
    pub fps: u32,
    /// Clip length in seconds
    pub duration: f64,
    /// Number of frames written
    pub frames: usize,
    /// Hex BLAKE3 hash of the frames
    pub pose_hash: String,
}

/// One row of `gaitcade limits --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LimitRow {
    /// Joint class and axis (e.g. "kneeX")
    pub key: String,
    /// Lower bound in radians
    pub min: f64,
    /// Upper bound in radians
    pub max: f64,
    /// Whether the axis is held at zero
    pub locked: bool,
}
