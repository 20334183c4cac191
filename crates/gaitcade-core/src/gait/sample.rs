//! Gait sample output types.

use serde::{Deserialize, Serialize};

/// Hip, knee and ankle angles for one leg, in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LegAngles {
    /// Hip forward/back swing.
    pub hip: f64,
    /// Knee bend.
    pub knee: f64,
    /// Ankle flex.
    pub ankle: f64,
}

/// Joint angles for both legs plus the shared pelvis height offset.
///
/// Angles are unclamped; joint limits are applied by the skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct JointAngleSample {
    /// Left leg angles.
    pub left: LegAngles,
    /// Right leg angles.
    pub right: LegAngles,
    /// Pelvis height offset in scene length units.
    pub body_height: f64,
}
