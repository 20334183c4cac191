//! Per-axis joint rotation limits.
//!
//! Limits are static configuration. Clamping is a single-step min/max with no
//! history, reapplied every frame after all pose writes.

use serde::{Deserialize, Serialize};

use super::joint::{Axis, JointClass};
use crate::error::{GaitError, GaitResult};

// =============================================================================
// Single-Axis Limit
// =============================================================================

/// Permitted rotation range for one axis, in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JointLimit {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl JointLimit {
    /// A limit that holds the axis at zero.
    pub const LOCKED: JointLimit = JointLimit::fixed(0.0, 0.0);

    /// Creates a limit without validation. Used for built-in tables.
    pub const fn fixed(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Creates a validated limit.
    pub fn new(key: &str, min: f64, max: f64) -> GaitResult<Self> {
        let limit = Self { min, max };
        limit.validate(key)?;
        Ok(limit)
    }

    /// Returns true if both bounds are finite and `min <= max`.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }

    /// Fails with [`GaitError::InvalidJointLimit`] unless the limit is valid.
    pub fn validate(&self, key: &str) -> GaitResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(GaitError::InvalidJointLimit {
                joint: key.to_string(),
                min: self.min,
                max: self.max,
            })
        }
    }

    /// Returns true if the limit only allows motion on one side of zero.
    pub fn is_one_directional(&self) -> bool {
        self.min >= 0.0 || self.max <= 0.0
    }

    /// Returns true if `angle` is inside the range.
    pub fn contains(&self, angle: f64) -> bool {
        (self.min..=self.max).contains(&angle)
    }

    /// Clamps an angle into this range. See [`clamp`].
    pub fn clamp(&self, angle: f64) -> f64 {
        clamp(angle, self)
    }
}

/// Clamps `angle` into `[limit.min, limit.max]`.
///
/// A NaN angle is treated as 0 before clamping so a bad upstream value cannot
/// leak into the pose.
pub fn clamp(angle: f64, limit: &JointLimit) -> f64 {
    let angle = if angle.is_nan() { 0.0 } else { angle };
    limit.min.max(limit.max.min(angle))
}

// =============================================================================
// Per-Class Limit Table
// =============================================================================

/// Limits for the three axes of one joint class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AxisLimits {
    /// X axis limit.
    pub x: JointLimit,
    /// Y axis limit.
    pub y: JointLimit,
    /// Z axis limit.
    pub z: JointLimit,
}

impl AxisLimits {
    /// Creates limits from three (min, max) pairs.
    pub const fn new(x: (f64, f64), y: (f64, f64), z: (f64, f64)) -> Self {
        Self {
            x: JointLimit::fixed(x.0, x.1),
            y: JointLimit::fixed(y.0, y.1),
            z: JointLimit::fixed(z.0, z.1),
        }
    }

    /// Returns the limit for an axis.
    pub fn get(&self, axis: Axis) -> JointLimit {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    fn get_mut(&mut self, axis: Axis) -> &mut JointLimit {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }
}

const LOCK: (f64, f64) = (0.0, 0.0);

/// Joint limit table keyed by joint class.
///
/// Every axis of every limited class has a range. Axes a joint does not move
/// on are locked to `[0, 0]`. The root is driven through the root offset and
/// has no entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JointLimits {
    /// Hip: forward/back swing (X), rotation (Y), tilt (Z).
    #[serde(default = "default_hip")]
    pub hip: AxisLimits,
    /// Knee: bend only, never hyperextends.
    #[serde(default = "default_knee")]
    pub knee: AxisLimits,
    /// Ankle: flex (X) and tilt (Z).
    #[serde(default = "default_ankle")]
    pub ankle: AxisLimits,
    /// Shoulder: swing (X), rotation (Y), raise (Z).
    #[serde(default = "default_shoulder")]
    pub shoulder: AxisLimits,
    /// Elbow: bend only.
    #[serde(default = "default_elbow")]
    pub elbow: AxisLimits,
    /// Neck: pitch (X) and yaw (Y).
    #[serde(default = "default_neck")]
    pub neck: AxisLimits,
}

const HIP: AxisLimits = AxisLimits::new((-1.0, 1.0), (-0.3, 0.3), (-0.3, 0.3));
const KNEE: AxisLimits = AxisLimits::new((0.0, 2.5), LOCK, LOCK);
const ANKLE: AxisLimits = AxisLimits::new((-0.5, 0.8), LOCK, (-0.3, 0.3));
const SHOULDER: AxisLimits = AxisLimits::new((-2.8, 2.8), (-1.0, 1.0), (-1.5, 1.5));
const ELBOW: AxisLimits = AxisLimits::new((0.0, 2.8), LOCK, LOCK);
const NECK: AxisLimits = AxisLimits::new((-0.5, 0.5), (-1.2, 1.2), LOCK);

fn default_hip() -> AxisLimits {
    HIP
}

fn default_knee() -> AxisLimits {
    KNEE
}

fn default_ankle() -> AxisLimits {
    ANKLE
}

fn default_shoulder() -> AxisLimits {
    SHOULDER
}

fn default_elbow() -> AxisLimits {
    ELBOW
}

fn default_neck() -> AxisLimits {
    NECK
}

impl Default for JointLimits {
    fn default() -> Self {
        Self::humanoid()
    }
}

impl JointLimits {
    /// Joint classes that carry limits, in table order.
    pub const LIMITED_CLASSES: [JointClass; 6] = [
        JointClass::Hip,
        JointClass::Knee,
        JointClass::Ankle,
        JointClass::Shoulder,
        JointClass::Elbow,
        JointClass::Neck,
    ];

    /// Plausible human range of motion.
    pub const fn humanoid() -> Self {
        Self {
            hip: HIP,
            knee: KNEE,
            ankle: ANKLE,
            shoulder: SHOULDER,
            elbow: ELBOW,
            neck: NECK,
        }
    }

    fn class_limits(&self, class: JointClass) -> Option<&AxisLimits> {
        match class {
            JointClass::Root => None,
            JointClass::Hip => Some(&self.hip),
            JointClass::Knee => Some(&self.knee),
            JointClass::Ankle => Some(&self.ankle),
            JointClass::Shoulder => Some(&self.shoulder),
            JointClass::Elbow => Some(&self.elbow),
            JointClass::Neck => Some(&self.neck),
        }
    }

    /// Returns the limit for a class and axis, or `None` for the root.
    pub fn get(&self, class: JointClass, axis: Axis) -> Option<JointLimit> {
        self.class_limits(class).map(|l| l.get(axis))
    }

    /// Replaces the limit for a class and axis after validating it.
    pub fn set(&mut self, class: JointClass, axis: Axis, limit: JointLimit) -> GaitResult<()> {
        let key = class.limit_key(axis);
        limit.validate(&key)?;
        let slot = match class {
            JointClass::Root => {
                return Err(GaitError::invalid_param(key, "the root joint is not limited"))
            }
            JointClass::Hip => &mut self.hip,
            JointClass::Knee => &mut self.knee,
            JointClass::Ankle => &mut self.ankle,
            JointClass::Shoulder => &mut self.shoulder,
            JointClass::Elbow => &mut self.elbow,
            JointClass::Neck => &mut self.neck,
        };
        *slot.get_mut(axis) = limit;
        Ok(())
    }

    /// Returns every (key, limit) pair, e.g. ("kneeX", [0, 2.5]).
    pub fn entries(&self) -> Vec<(String, JointLimit)> {
        let mut entries = Vec::with_capacity(Self::LIMITED_CLASSES.len() * 3);
        for class in Self::LIMITED_CLASSES {
            for axis in Axis::ALL {
                if let Some(limit) = self.get(class, axis) {
                    entries.push((class.limit_key(axis), limit));
                }
            }
        }
        entries
    }

    /// Validates every range, and that knee and elbow bend stay non-negative.
    pub fn validate(&self) -> GaitResult<()> {
        for (key, limit) in self.entries() {
            limit.validate(&key)?;
        }
        for class in [JointClass::Knee, JointClass::Elbow] {
            let bend = self.class_limits(class).map(|l| l.x).unwrap_or(JointLimit::LOCKED);
            if bend.min < 0.0 {
                return Err(GaitError::invalid_param(
                    class.limit_key(Axis::X),
                    format!("bend minimum must be >= 0, got {}", bend.min),
                ));
            }
        }
        Ok(())
    }
}
