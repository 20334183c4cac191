//! Test fixtures: a call-recording pose target and on-disk config files.

use std::fs;
use std::path::{Path, PathBuf};

use gaitcade_core::{AnimatorConfig, Axis, JointId, PoseTarget};
use glam::DVec3;
use tempfile::TempDir;

/// One call made on a [`RecordingRig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RigCall {
    Rotate {
        joint: JointId,
        axis: Axis,
        radians: f64,
    },
    RootOffset {
        position: DVec3,
        rotation: DVec3,
    },
    Clamp,
    Reset,
}

/// A pose target that records every call in order.
#[derive(Debug, Default)]
pub struct RecordingRig {
    pub calls: Vec<RigCall>,
}

impl RecordingRig {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `reset_pose` calls seen.
    pub fn reset_count(&self) -> usize {
        self.calls.iter().filter(|c| **c == RigCall::Reset).count()
    }

    /// Number of `clamp_all` calls seen.
    pub fn clamp_count(&self) -> usize {
        self.calls.iter().filter(|c| **c == RigCall::Clamp).count()
    }

    /// Drops recorded calls.
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl PoseTarget for RecordingRig {
    fn apply_rotation(&mut self, joint: JointId, axis: Axis, radians: f64) {
        self.calls.push(RigCall::Rotate {
            joint,
            axis,
            radians,
        });
    }

    fn set_root_offset(&mut self, position: DVec3, rotation: DVec3) {
        self.calls.push(RigCall::RootOffset { position, rotation });
    }

    fn clamp_all(&mut self) {
        self.calls.push(RigCall::Clamp);
    }

    fn reset_pose(&mut self) {
        self.calls.push(RigCall::Reset);
    }
}

/// A temp directory for config and clip files.
pub struct ConfigFixture {
    pub root: TempDir,
}

impl ConfigFixture {
    /// Creates an empty fixture directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        Self { root }
    }

    /// Get the fixture root path.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Writes raw content to a file under the root.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(name);
        fs::write(&path, content).expect("Failed to write fixture file");
        path
    }

    /// Writes a config as JSON.
    pub fn write_json(&self, name: &str, config: &AnimatorConfig) -> PathBuf {
        let json = config.to_json_pretty().expect("Failed to serialize config");
        self.write(name, &json)
    }

    /// Writes a config as YAML.
    pub fn write_yaml(&self, name: &str, config: &AnimatorConfig) -> PathBuf {
        let yaml = serde_yaml::to_string(config).expect("Failed to serialize config");
        self.write(name, &yaml)
    }
}

impl Default for ConfigFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A short-cycle config that visits every mode quickly.
pub fn fast_cycle_config() -> AnimatorConfig {
    AnimatorConfig::default().with_mode_duration(0.5)
}
