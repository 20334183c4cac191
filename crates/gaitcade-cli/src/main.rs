//! Gaitcade CLI - Command-line interface for procedural locomotion
//!
//! This binary samples the gait engine, plays the animation selector
//! headless, bakes pose clips and validates animator configs.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use gaitcade_cli::commands;

/// Gaitcade - Procedural Humanoid Locomotion
#[derive(Parser)]
#[command(name = "gaitcade")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the raw gait sample and leg phases at one instant
    Sample {
        /// Gait time in seconds
        #[arg(short, long, allow_hyphen_values = true)]
        time: f64,

        /// Path to an animator config (JSON or YAML)
        #[arg(short, long)]
        config: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Run the animation selector headless and report mode changes
    Play {
        /// Path to an animator config (JSON or YAML)
        #[arg(short, long)]
        config: Option<String>,

        /// Simulated frame rate
        #[arg(long, default_value_t = 60)]
        fps: u32,

        /// Playback length in seconds
        #[arg(short, long, default_value_t = 20.0)]
        seconds: f64,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Bake a fixed-rate pose clip to a JSON file
    Bake {
        /// Output clip path
        #[arg(short, long)]
        out: String,

        /// Path to an animator config (JSON or YAML)
        #[arg(short, long)]
        config: Option<String>,

        /// Bake frame rate (1-240)
        #[arg(long, default_value_t = 30)]
        fps: u32,

        /// Clip length in seconds
        #[arg(short, long, default_value_t = 20.0)]
        seconds: f64,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the joint-limit table
    Limits {
        /// Path to an animator config (JSON or YAML)
        #[arg(short, long)]
        config: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Validate an animator config without running it
    Validate {
        /// Path to the animator config (JSON or YAML)
        #[arg(short, long)]
        config: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Sample { time, config, json } => {
            commands::sample::run(time, config.as_deref(), json)
        }
        Commands::Play {
            config,
            fps,
            seconds,
            json,
        } => commands::play::run(config.as_deref(), fps, seconds, json),
        Commands::Bake {
            out,
            config,
            fps,
            seconds,
            json,
        } => commands::bake::run(&out, config.as_deref(), fps, seconds, json),
        Commands::Limits { config, json } => commands::limits::run(config.as_deref(), json),
        Commands::Validate { config, json } => commands::validate::run(&config, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_sample() {
        let cli = Cli::try_parse_from(["gaitcade", "sample", "--time", "0.25"]).unwrap();
        match cli.command {
            Commands::Sample { time, config, json } => {
                assert_eq!(time, 0.25);
                assert!(config.is_none());
                assert!(!json);
            }
            _ => panic!("expected sample command"),
        }
    }

    #[test]
    fn test_cli_parses_negative_time() {
        let cli = Cli::try_parse_from(["gaitcade", "sample", "--time", "-1.5"]).unwrap();
        match cli.command {
            Commands::Sample { time, .. } => assert_eq!(time, -1.5),
            _ => panic!("expected sample command"),
        }
    }

    #[test]
    fn test_cli_parses_bake_defaults() {
        let cli = Cli::try_parse_from(["gaitcade", "bake", "--out", "clip.json"]).unwrap();
        match cli.command {
            Commands::Bake {
                out, fps, seconds, ..
            } => {
                assert_eq!(out, "clip.json");
                assert_eq!(fps, 30);
                assert_eq!(seconds, 20.0);
            }
            _ => panic!("expected bake command"),
        }
    }

    #[test]
    fn test_cli_parses_global_verbose() {
        let cli = Cli::try_parse_from(["gaitcade", "limits", "--json", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Limits { json: true, .. }));
    }

    #[test]
    fn test_cli_validate_requires_config() {
        assert!(Cli::try_parse_from(["gaitcade", "validate"]).is_err());
    }
}
