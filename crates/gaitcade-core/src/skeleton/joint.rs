//! Joint identifiers, joint classes and rotation axes.

use serde::{Deserialize, Serialize};

// =============================================================================
// Axis Types
// =============================================================================

/// Local rotation axis of a joint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Axis {
    /// X axis (pitch: swing, bend, flex).
    #[default]
    X,
    /// Y axis (yaw: twist, turn).
    Y,
    /// Z axis (roll: tilt, raise).
    Z,
}

impl Axis {
    /// All axes in X, Y, Z order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Returns the axis name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }

    /// Converts to a component index (0=X, 1=Y, 2=Z).
    pub fn to_index(&self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Body side of a limb joint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Left side (+X in skeleton space).
    Left,
    /// Right side (-X in skeleton space).
    Right,
}

impl Side {
    /// Both sides, left first.
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    /// Returns the bone-name suffix for this side.
    pub fn suffix(&self) -> &'static str {
        match self {
            Side::Left => "_l",
            Side::Right => "_r",
        }
    }

    /// Returns +1.0 for the left side and -1.0 for the right.
    pub fn sign(&self) -> f64 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

// =============================================================================
// Joint Classes
// =============================================================================

/// Joint class: joints of the same class share rotation limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JointClass {
    /// Skeleton root (pelvis). Driven through the root offset, never clamped.
    Root,
    /// Hip ball joint.
    Hip,
    /// Knee hinge.
    Knee,
    /// Ankle.
    Ankle,
    /// Shoulder ball joint.
    Shoulder,
    /// Elbow hinge.
    Elbow,
    /// Neck.
    Neck,
}

impl JointClass {
    /// Returns the class name used in limit keys (e.g. "hip" in "hipX").
    pub fn as_str(&self) -> &'static str {
        match self {
            JointClass::Root => "root",
            JointClass::Hip => "hip",
            JointClass::Knee => "knee",
            JointClass::Ankle => "ankle",
            JointClass::Shoulder => "shoulder",
            JointClass::Elbow => "elbow",
            JointClass::Neck => "neck",
        }
    }

    /// Returns the limit key for an axis of this class (e.g. "kneeX").
    pub fn limit_key(&self, axis: Axis) -> String {
        format!("{}{}", self.as_str(), axis.as_str())
    }
}

// =============================================================================
// Joint Identifiers
// =============================================================================

/// A joint of the humanoid skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JointId {
    /// Pelvis / skeleton root.
    Root,
    /// Neck.
    Neck,
    /// Left shoulder.
    ShoulderL,
    /// Left elbow.
    ElbowL,
    /// Right shoulder.
    ShoulderR,
    /// Right elbow.
    ElbowR,
    /// Left hip.
    HipL,
    /// Left knee.
    KneeL,
    /// Left ankle.
    AnkleL,
    /// Right hip.
    HipR,
    /// Right knee.
    KneeR,
    /// Right ankle.
    AnkleR,
}

impl JointId {
    /// Number of joints in the humanoid skeleton.
    pub const COUNT: usize = 12;

    /// All joints, parents before children.
    pub const ALL: [JointId; JointId::COUNT] = [
        JointId::Root,
        JointId::Neck,
        JointId::ShoulderL,
        JointId::ElbowL,
        JointId::ShoulderR,
        JointId::ElbowR,
        JointId::HipL,
        JointId::KneeL,
        JointId::AnkleL,
        JointId::HipR,
        JointId::KneeR,
        JointId::AnkleR,
    ];

    /// Returns the index of this joint in [`JointId::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Returns the joint name (e.g. "knee_l").
    pub fn name(&self) -> &'static str {
        match self {
            JointId::Root => "root",
            JointId::Neck => "neck",
            JointId::ShoulderL => "shoulder_l",
            JointId::ElbowL => "elbow_l",
            JointId::ShoulderR => "shoulder_r",
            JointId::ElbowR => "elbow_r",
            JointId::HipL => "hip_l",
            JointId::KneeL => "knee_l",
            JointId::AnkleL => "ankle_l",
            JointId::HipR => "hip_r",
            JointId::KneeR => "knee_r",
            JointId::AnkleR => "ankle_r",
        }
    }

    /// Looks up a joint by name.
    pub fn from_name(name: &str) -> Option<JointId> {
        JointId::ALL.into_iter().find(|j| j.name() == name)
    }

    /// Returns the joint class.
    pub fn class(&self) -> JointClass {
        match self {
            JointId::Root => JointClass::Root,
            JointId::Neck => JointClass::Neck,
            JointId::ShoulderL | JointId::ShoulderR => JointClass::Shoulder,
            JointId::ElbowL | JointId::ElbowR => JointClass::Elbow,
            JointId::HipL | JointId::HipR => JointClass::Hip,
            JointId::KneeL | JointId::KneeR => JointClass::Knee,
            JointId::AnkleL | JointId::AnkleR => JointClass::Ankle,
        }
    }

    /// Returns the body side, or `None` for midline joints.
    pub fn side(&self) -> Option<Side> {
        match self {
            JointId::Root | JointId::Neck => None,
            JointId::ShoulderL
            | JointId::ElbowL
            | JointId::HipL
            | JointId::KneeL
            | JointId::AnkleL => Some(Side::Left),
            _ => Some(Side::Right),
        }
    }

    /// Hip joint on the given side.
    pub fn hip(side: Side) -> JointId {
        match side {
            Side::Left => JointId::HipL,
            Side::Right => JointId::HipR,
        }
    }

    /// Knee joint on the given side.
    pub fn knee(side: Side) -> JointId {
        match side {
            Side::Left => JointId::KneeL,
            Side::Right => JointId::KneeR,
        }
    }

    /// Ankle joint on the given side.
    pub fn ankle(side: Side) -> JointId {
        match side {
            Side::Left => JointId::AnkleL,
            Side::Right => JointId::AnkleR,
        }
    }

    /// Shoulder joint on the given side.
    pub fn shoulder(side: Side) -> JointId {
        match side {
            Side::Left => JointId::ShoulderL,
            Side::Right => JointId::ShoulderR,
        }
    }

    /// Elbow joint on the given side.
    pub fn elbow(side: Side) -> JointId {
        match side {
            Side::Left => JointId::ElbowL,
            Side::Right => JointId::ElbowR,
        }
    }
}

impl std::fmt::Display for JointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_serde_and_index() {
        let axes = [(Axis::X, "\"X\""), (Axis::Y, "\"Y\""), (Axis::Z, "\"Z\"")];
        for (axis, expected) in axes {
            assert_eq!(serde_json::to_string(&axis).unwrap(), expected);
        }
        assert_eq!(Axis::default(), Axis::X);
        assert_eq!(Axis::Z.to_index(), 2);
    }

    #[test]
    fn test_joint_index_matches_all_order() {
        for (i, joint) in JointId::ALL.iter().enumerate() {
            assert_eq!(joint.index(), i);
        }
    }

    #[test]
    fn test_joint_names_round_trip() {
        for joint in JointId::ALL {
            assert_eq!(JointId::from_name(joint.name()), Some(joint));
            let json = serde_json::to_string(&joint).unwrap();
            assert_eq!(json, format!("\"{}\"", joint.name()));
        }
        assert_eq!(JointId::from_name("tail"), None);
    }

    #[test]
    fn test_sided_helpers() {
        for side in Side::BOTH {
            assert_eq!(JointId::hip(side).side(), Some(side));
            assert_eq!(JointId::knee(side).class(), JointClass::Knee);
            assert_eq!(JointId::ankle(side).class(), JointClass::Ankle);
            assert_eq!(JointId::shoulder(side).class(), JointClass::Shoulder);
            assert!(JointId::elbow(side).name().ends_with(side.suffix()));
        }
        assert_eq!(JointId::Neck.side(), None);
    }

    #[test]
    fn test_limit_key() {
        assert_eq!(JointClass::Hip.limit_key(Axis::X), "hipX");
        assert_eq!(JointClass::Neck.limit_key(Axis::Y), "neckY");
    }
}
