//! Limits command implementation
//!
//! Prints the joint-limit table in effect for a config.

use anyhow::{Context, Result};
use colored::Colorize;
use gaitcade_core::JointLimits;
use std::process::ExitCode;

use super::json_output::LimitRow;
use crate::input::load_or_default;

/// Run the limits command
pub fn run(config_path: Option<&str>, json_output: bool) -> Result<ExitCode> {
    let config = load_or_default(config_path).context("Failed to load config")?;
    let rows = limit_rows(&config.limits);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Joint limits (radians)".cyan().bold());
    for row in &rows {
        if row.locked {
            println!("  {:<10} {}", row.key, "locked".dimmed());
        } else {
            println!("  {:<10} [{:+.2}, {:+.2}]", row.key, row.min, row.max);
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Flattens a limit table into report rows.
pub fn limit_rows(limits: &JointLimits) -> Vec<LimitRow> {
    limits
        .entries()
        .into_iter()
        .map(|(key, limit)| LimitRow {
            key,
            min: limit.min,
            max: limit.max,
            locked: limit.min == 0.0 && limit.max == 0.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_rows_cover_every_axis() {
        let rows = limit_rows(&JointLimits::default());
        assert_eq!(rows.len(), 18);

        let knee = rows.iter().find(|r| r.key == "kneeX").unwrap();
        assert_eq!((knee.min, knee.max), (0.0, 2.5));
        assert!(!knee.locked);

        let neck_z = rows.iter().find(|r| r.key == "neckZ").unwrap();
        assert!(neck_z.locked);
    }
}
