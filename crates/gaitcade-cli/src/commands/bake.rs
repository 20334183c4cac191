//! Bake command implementation
//!
//! Writes a fixed-rate pose clip as JSON.

use anyhow::{Context, Result};
use colored::Colorize;
use gaitcade_core::{bake, BakeSettings, BakedClip};
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::BakeOutput;
use crate::input::load_or_default;

/// Run the bake command
///
/// # Arguments
/// * `out` - Output clip path
/// * `config_path` - Optional config file (JSON or YAML)
/// * `fps` - Bake frame rate
/// * `seconds` - Clip length
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(
    out: &str,
    config_path: Option<&str>,
    fps: u32,
    seconds: f64,
    json_output: bool,
) -> Result<ExitCode> {
    if !json_output {
        println!("{} {}", "Baking:".cyan().bold(), out);
    }

    let clip = bake_to_file(Path::new(out), config_path, BakeSettings::new(fps, seconds))?;

    if json_output {
        let output = BakeOutput {
            success: true,
            out: out.to_string(),
            fps: clip.fps,
            duration: clip.duration,
            frames: clip.frames.len(),
            pose_hash: clip.pose_hash.clone(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "{} {} frames at {} fps, {} mode changes",
            "Wrote".green().bold(),
            clip.frames.len(),
            clip.fps,
            clip.transition_count()
        );
        println!("{} {}", "Pose hash:".dimmed(), clip.pose_hash);
    }
    Ok(ExitCode::SUCCESS)
}

/// Bakes a clip and writes it to `out` as pretty JSON.
pub fn bake_to_file(
    out: &Path,
    config_path: Option<&str>,
    settings: BakeSettings,
) -> Result<BakedClip> {
    let config = load_or_default(config_path).context("Failed to load config")?;
    let clip = bake(&config, settings)?;

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(&clip)?;
    fs::write(out, json).with_context(|| format!("Failed to write clip: {}", out.display()))?;

    log::debug!("wrote {} frames to {}", clip.frames.len(), out.display());
    Ok(clip)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bake_to_file_writes_clip() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("clips").join("walk.json");
        let clip = bake_to_file(&out, None, BakeSettings::new(10, 1.0)).unwrap();

        let written: BakedClip =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(written.pose_hash, clip.pose_hash);
        assert_eq!(written.frames.len(), 11);
        assert!(written.verify().unwrap());
    }

    #[test]
    fn test_bake_rejects_bad_fps() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("clip.json");
        assert!(bake_to_file(&out, None, BakeSettings::new(0, 1.0)).is_err());
        assert!(!out.exists());
    }
}
