//! Validate command implementation
//!
//! Loads a config document and reports whether it is usable.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{input_error_to_json, ValidateOutput};
use crate::input::{load_config, LoadResult, SourceKind};

/// Run the validate command
///
/// # Arguments
/// * `config_path` - Path to the config file (JSON or YAML)
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(config_path: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(config_path)
    } else {
        run_human(config_path)
    }
}

fn run_human(config_path: &str) -> Result<ExitCode> {
    println!("{} {}", "Validating:".cyan().bold(), config_path);

    match load_config(Path::new(config_path)) {
        Ok(LoadResult {
            config,
            source_kind,
            source_hash,
        }) => {
            println!(
                "{} {} ({})",
                "Source:".dimmed(),
                source_kind.as_str(),
                &source_hash[..16]
            );
            println!(
                "{} {} modes, {}s each",
                "Playlist:".dimmed(),
                config.playlist.len(),
                config.mode_duration
            );
            println!("{} config is valid", "OK".green().bold());
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("  {} [{}]: {}", "x".red(), e.code(), e);
            println!("{} config is invalid", "FAILED".red().bold());
            Ok(ExitCode::from(1))
        }
    }
}

fn run_json(config_path: &str) -> Result<ExitCode> {
    let path = Path::new(config_path);
    let output = match load_config(path) {
        Ok(loaded) => ValidateOutput {
            success: true,
            file: config_path.to_string(),
            source_kind: Some(loaded.source_kind.as_str().to_string()),
            source_hash: Some(loaded.source_hash),
            errors: Vec::new(),
        },
        Err(e) => ValidateOutput {
            success: false,
            file: config_path.to_string(),
            source_kind: SourceKind::from_path(path)
                .ok()
                .map(|k| k.as_str().to_string()),
            source_hash: None,
            errors: vec![input_error_to_json(&e, config_path)],
        },
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}
