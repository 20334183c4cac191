//! CLI command implementations

pub mod bake;
pub mod json_output;
pub mod limits;
pub mod play;
pub mod sample;
pub mod validate;
