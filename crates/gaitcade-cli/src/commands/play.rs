//! Play command implementation
//!
//! Runs the animation selector headless at a fixed frame rate and reports
//! each mode change.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use gaitcade_core::{AnimationSelector, MAX_BAKE_DURATION};
use std::process::ExitCode;

use super::json_output::{PlayOutput, TransitionRecord};
use crate::input::load_or_default;

/// Run the play command
///
/// # Arguments
/// * `config_path` - Optional config file (JSON or YAML)
/// * `fps` - Simulated frame rate
/// * `seconds` - Playback length
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(config_path: Option<&str>, fps: u32, seconds: f64, json_output: bool) -> Result<ExitCode> {
    let output = play(config_path, fps, seconds)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{} {}s at {} fps ({} frames)",
        "Playing:".cyan().bold(),
        output.seconds,
        output.fps,
        output.frames
    );
    for t in &output.transitions {
        println!(
            "  {} {:>8.3}s  {} {} {}",
            "->".dimmed(),
            t.time,
            t.from.display_name(),
            "->".dimmed(),
            t.to.display_name().bold()
        );
    }
    println!(
        "{} {} ({} transitions)",
        "Final mode:".green().bold(),
        output.final_mode,
        output.transitions.len()
    );
    let root = output.final_pose.root_position;
    println!(
        "  {} ({:.3}, {:.3}, {:.3})",
        "root".dimmed(),
        root[0],
        root[1],
        root[2]
    );
    Ok(ExitCode::SUCCESS)
}

/// Simulates playback and collects the report.
pub fn play(config_path: Option<&str>, fps: u32, seconds: f64) -> Result<PlayOutput> {
    if fps == 0 {
        bail!("fps must be at least 1");
    }
    if !(seconds.is_finite() && seconds >= 0.0) {
        bail!("seconds must be finite and non-negative, got {}", seconds);
    }
    if seconds > MAX_BAKE_DURATION {
        bail!(
            "seconds {} exceeds the {} second limit",
            seconds,
            MAX_BAKE_DURATION
        );
    }

    let config = load_or_default(config_path).context("Failed to load config")?;
    let mut selector = AnimationSelector::from_config(&config)?;
    let mut skeleton = config.skeleton();

    let dt = 1.0 / fps as f64;
    let frames = (seconds * fps as f64).round() as usize;
    let mut transitions = Vec::new();

    for frame in 0..frames {
        if let Some(change) = selector.update(&mut skeleton, dt) {
            transitions.push(TransitionRecord {
                frame,
                time: selector.clock(),
                from: change.from,
                to: change.to,
            });
        }
    }

    Ok(PlayOutput {
        fps,
        seconds,
        frames,
        transitions,
        final_mode: selector.current_mode(),
        final_pose: skeleton.snapshot(),
    })
}
