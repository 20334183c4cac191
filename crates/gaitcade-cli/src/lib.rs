//! Gaitcade CLI library.
//!
//! This crate provides the command implementations behind the `gaitcade`
//! binary, along with config loading from JSON or YAML files.

pub mod commands;
pub mod input;
