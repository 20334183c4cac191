//! Gait synthesis: curve tables, parameters and the phase-based engine.
//!
//! Each leg runs the same curves; the right leg is offset by half a cycle so
//! the two legs are always in exact antiphase. Body height is an explicit
//! function of both leg phases rather than a result of inverse kinematics.

mod engine;
mod params;
mod sample;

pub use engine::*;
pub use params::*;
pub use sample::*;
