//! Sample command implementation
//!
//! Prints the raw gait-engine output at one instant.

use anyhow::{Context, Result};
use colored::Colorize;
use gaitcade_core::LegAngles;
use std::process::ExitCode;

use super::json_output::SampleOutput;
use crate::input::load_or_default;

/// Run the sample command
///
/// # Arguments
/// * `time` - Gait time in seconds
/// * `config_path` - Optional config file (JSON or YAML)
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(time: f64, config_path: Option<&str>, json_output: bool) -> Result<ExitCode> {
    let output = sample(time, config_path)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{} t={}s (cycle {}s)",
        "Sample:".cyan().bold(),
        output.time,
        output.cycle_time
    );
    print_leg("left", output.left_phase, &output.sample.left);
    print_leg("right", output.right_phase, &output.sample.right);
    println!(
        "  {:<6} {:.4}",
        "height".dimmed(),
        output.sample.body_height
    );
    Ok(ExitCode::SUCCESS)
}

/// Computes the sample reported by the command.
pub fn sample(time: f64, config_path: Option<&str>) -> Result<SampleOutput> {
    let config = load_or_default(config_path).context("Failed to load config")?;
    let engine = config.engine()?;
    let (left_phase, right_phase) = engine.leg_phases(time);

    Ok(SampleOutput {
        time,
        cycle_time: engine.cycle_time(),
        left_phase,
        right_phase,
        sample: engine.sample(time),
    })
}

fn print_leg(label: &str, phase: f64, leg: &LegAngles) {
    println!(
        "  {:<6} phase {:.3}  hip {:+.4}  knee {:+.4}  ankle {:+.4}",
        label.bold(),
        phase,
        leg.hip,
        leg.knee,
        leg.ankle
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_default_phases() {
        let out = sample(0.0, None).unwrap();
        assert_eq!(out.left_phase, 0.0);
        assert_eq!(out.right_phase, 0.5);
        assert_eq!(out.cycle_time, 1.0);
    }

    #[test]
    fn test_sample_missing_config() {
        assert!(sample(0.0, Some("/nonexistent/config.json")).is_err());
    }
}
