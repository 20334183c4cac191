//! Gaitcade Integration Test Infrastructure
//!
//! This crate holds cross-crate tests for the gait engine, the animation
//! selector and clip baking:
//!
//! - **Scenarios**: fixed-input checks of sampling, cycling and clamping
//! - **Properties**: `proptest` invariants over arbitrary times and angles
//! - **Determinism**: repeated bakes must hash identically
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p gaitcade-tests
//! ```

pub mod determinism;
pub mod fixtures;

pub use determinism::{compute_hash, verify_determinism, DeterminismResult};
pub use fixtures::{fast_cycle_config, ConfigFixture, RecordingRig, RigCall};
