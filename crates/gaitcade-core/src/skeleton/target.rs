//! The pose-writing interface animations drive.

use glam::DVec3;

use super::joint::{Axis, JointId};

/// Anything an animation can write a pose onto.
///
/// [`Skeleton`](super::Skeleton) is the production implementation; tests use
/// recording targets to observe call order.
pub trait PoseTarget {
    /// Sets one axis of one joint's local rotation, in radians.
    ///
    /// May be called for joints in any order. The value is not clamped until
    /// [`PoseTarget::clamp_all`] runs.
    fn apply_rotation(&mut self, joint: JointId, axis: Axis, radians: f64);

    /// Sets the world-space root translation and Euler rotation directly.
    fn set_root_offset(&mut self, position: DVec3, rotation: DVec3);

    /// Clamps every limited joint axis into its range.
    fn clamp_all(&mut self);

    /// Zeroes every joint rotation and the root transform.
    fn reset_pose(&mut self);
}
