//! Animation modes, their motion generators and the selector that cycles them.
//!
//! Walk samples the gait engine. Every other mode is a closed-form function of
//! the time spent in the mode.

mod mode;
mod motions;
mod selector;

pub use mode::*;
pub use motions::*;
pub use selector::*;
