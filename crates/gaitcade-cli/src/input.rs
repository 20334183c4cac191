//! Config loading from JSON or YAML sources.
//!
//! The format is chosen by file extension. Every loaded document is validated
//! before it is handed to a command.

use gaitcade_core::{AnimatorConfig, GaitError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Recognized JSON extensions.
pub const JSON_EXTENSIONS: &[&str] = &["json"];

/// Recognized YAML extensions.
pub const YAML_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// Identifies the source format of a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// JSON document.
    Json,
    /// YAML document.
    Yaml,
}

impl SourceKind {
    /// Returns the string representation for reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Json => "json",
            SourceKind::Yaml => "yaml",
        }
    }

    /// Picks the format from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self, InputError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_lowercase());

        match extension.as_deref() {
            Some(ext) if JSON_EXTENSIONS.contains(&ext) => Ok(SourceKind::Json),
            Some(ext) if YAML_EXTENSIONS.contains(&ext) => Ok(SourceKind::Yaml),
            _ => Err(InputError::UnknownExtension { extension }),
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A loaded and validated config with its provenance.
#[derive(Debug)]
pub struct LoadResult {
    /// The parsed config.
    pub config: AnimatorConfig,
    /// Source format.
    pub source_kind: SourceKind,
    /// BLAKE3 hash of the source file content (hex string).
    pub source_hash: String,
}

/// Errors that can occur while loading a config.
#[derive(Debug, Error)]
pub enum InputError {
    /// File could not be read.
    #[error("failed to read file '{}': {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Unknown file extension.
    #[error("{}", unknown_extension_message(.extension))]
    UnknownExtension { extension: Option<String> },

    /// The document could not be parsed.
    #[error("{kind} parse error: {message}")]
    Parse { kind: SourceKind, message: String },

    /// The document parsed but failed validation.
    #[error("invalid config: {0}")]
    Invalid(#[from] GaitError),
}

fn unknown_extension_message(extension: &Option<String>) -> String {
    match extension {
        Some(ext) => format!(
            "unknown file extension '.{}' (expected .json, .yaml or .yml)",
            ext
        ),
        None => "file has no extension (expected .json, .yaml or .yml)".to_string(),
    }
}

impl InputError {
    /// Returns the stable CLI error code.
    pub fn code(&self) -> &'static str {
        use crate::commands::json_output::error_codes;
        match self {
            InputError::FileRead { .. } => error_codes::FILE_READ,
            InputError::UnknownExtension { .. } => error_codes::UNKNOWN_EXTENSION,
            InputError::Parse { .. } => error_codes::PARSE,
            InputError::Invalid(e) => e.code(),
        }
    }
}

/// Parses a config document of the given format without validating it.
pub fn parse_config(content: &str, kind: SourceKind) -> Result<AnimatorConfig, InputError> {
    match kind {
        SourceKind::Json => serde_json::from_str(content).map_err(|e| InputError::Parse {
            kind,
            message: e.to_string(),
        }),
        SourceKind::Yaml => serde_yaml::from_str(content).map_err(|e| InputError::Parse {
            kind,
            message: e.to_string(),
        }),
    }
}

/// Loads and validates a config, dispatching on extension.
///
/// # Example
/// ```no_run
/// use std::path::Path;
/// use gaitcade_cli::input::load_config;
///
/// let loaded = load_config(Path::new("animator.yaml")).unwrap();
/// println!("Loaded {} config", loaded.source_kind);
/// ```
pub fn load_config(path: &Path) -> Result<LoadResult, InputError> {
    let source_kind = SourceKind::from_path(path)?;

    let content = std::fs::read_to_string(path).map_err(|e| InputError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let source_hash = blake3::hash(content.as_bytes()).to_hex().to_string();

    let config = parse_config(&content, source_kind)?;
    config.validate()?;

    log::debug!(
        "loaded {} config from {} ({})",
        source_kind,
        path.display(),
        &source_hash[..16]
    );

    Ok(LoadResult {
        config,
        source_kind,
        source_hash,
    })
}

/// Loads a config if a path is given, otherwise returns the defaults.
pub fn load_or_default(path: Option<&str>) -> Result<AnimatorConfig, InputError> {
    match path {
        Some(p) => Ok(load_config(Path::new(p))?.config),
        None => Ok(AnimatorConfig::default()),
    }
}
