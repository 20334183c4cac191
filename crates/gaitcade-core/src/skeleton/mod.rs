//! Humanoid skeleton: an indexed joint tree with per-axis rotation limits.
//!
//! Joints are stored flat, parents before children, each holding a parent
//! index, a rest offset from its parent and a local Euler rotation. World
//! transforms are composed from the ancestor chain on demand.

mod joint;
mod limits;
mod target;

pub use joint::*;
pub use limits::*;
pub use target::*;

use std::collections::BTreeMap;

use glam::{DAffine3, DQuat, DVec3, EulerRot};
use serde::{Deserialize, Serialize};

/// Pelvis height above the ground in the rest pose.
pub const PELVIS_HEIGHT: f64 = 1.0;

/// A joint in the skeleton tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointNode {
    /// Joint identifier.
    pub id: JointId,
    /// Index of the parent node, `None` for the root.
    pub parent: Option<usize>,
    /// Rest translation relative to the parent.
    pub offset: DVec3,
    /// Local Euler rotation (XYZ order), in radians.
    pub rotation: DVec3,
}

impl JointNode {
    fn new(id: JointId, parent: Option<JointId>, offset: [f64; 3]) -> Self {
        Self {
            id,
            parent: parent.map(|p| p.index()),
            offset: DVec3::from_array(offset),
            rotation: DVec3::ZERO,
        }
    }

    /// Returns the local rest-offset-plus-rotation transform.
    pub fn local_transform(&self) -> DAffine3 {
        DAffine3::from_rotation_translation(euler_quat(self.rotation), self.offset)
    }
}

fn euler_quat(rotation: DVec3) -> DQuat {
    DQuat::from_euler(EulerRot::XYZ, rotation.x, rotation.y, rotation.z)
}

fn component_mut(v: &mut DVec3, axis: Axis) -> &mut f64 {
    match axis {
        Axis::X => &mut v.x,
        Axis::Y => &mut v.y,
        Axis::Z => &mut v.z,
    }
}

/// Serializable copy of a skeleton pose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoseSnapshot {
    /// Local rotation of every non-root joint, keyed by joint name.
    pub joints: BTreeMap<String, [f64; 3]>,
    /// Root translation offset.
    pub root_position: [f64; 3],
    /// Root Euler rotation.
    pub root_rotation: [f64; 3],
}

/// The humanoid skeleton and its current pose.
#[derive(Debug, Clone, PartialEq)]
pub struct Skeleton {
    nodes: Vec<JointNode>,
    root_position: DVec3,
    limits: JointLimits,
}

impl Default for Skeleton {
    fn default() -> Self {
        Self::humanoid()
    }
}

impl Skeleton {
    /// Builds the default humanoid with the default joint limits.
    ///
    /// Left limbs sit on +X, the figure faces +Z and Y is up.
    pub fn humanoid() -> Self {
        use JointId::*;
        let nodes = vec![
            JointNode::new(Root, None, [0.0, PELVIS_HEIGHT, 0.0]),
            JointNode::new(Neck, Some(Root), [0.0, 0.55, 0.0]),
            JointNode::new(ShoulderL, Some(Root), [0.2, 0.45, 0.0]),
            JointNode::new(ElbowL, Some(ShoulderL), [0.0, -0.28, 0.0]),
            JointNode::new(ShoulderR, Some(Root), [-0.2, 0.45, 0.0]),
            JointNode::new(ElbowR, Some(ShoulderR), [0.0, -0.28, 0.0]),
            JointNode::new(HipL, Some(Root), [0.1, -0.05, 0.0]),
            JointNode::new(KneeL, Some(HipL), [0.0, -0.45, 0.0]),
            JointNode::new(AnkleL, Some(KneeL), [0.0, -0.45, 0.0]),
            JointNode::new(HipR, Some(Root), [-0.1, -0.05, 0.0]),
            JointNode::new(KneeR, Some(HipR), [0.0, -0.45, 0.0]),
            JointNode::new(AnkleR, Some(KneeR), [0.0, -0.45, 0.0]),
        ];
        Self {
            nodes,
            root_position: DVec3::ZERO,
            limits: JointLimits::humanoid(),
        }
    }

    /// Replaces the joint limit table.
    pub fn with_limits(mut self, limits: JointLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Returns the joint limit table.
    pub fn limits(&self) -> &JointLimits {
        &self.limits
    }

    /// Returns all joint nodes, parents before children.
    pub fn nodes(&self) -> &[JointNode] {
        &self.nodes
    }

    /// Returns the node for a joint.
    pub fn node(&self, joint: JointId) -> &JointNode {
        &self.nodes[joint.index()]
    }

    /// Returns the parent joint, `None` for the root.
    pub fn parent(&self, joint: JointId) -> Option<JointId> {
        self.node(joint).parent.map(|i| self.nodes[i].id)
    }

    /// Returns the local rotation of a joint.
    pub fn rotation(&self, joint: JointId) -> DVec3 {
        self.node(joint).rotation
    }

    /// Returns the root translation offset.
    pub fn root_position(&self) -> DVec3 {
        self.root_position
    }

    /// Returns the root Euler rotation.
    pub fn root_rotation(&self) -> DVec3 {
        self.node(JointId::Root).rotation
    }

    /// Returns the chain from the root down to `joint`, inclusive.
    pub fn chain(&self, joint: JointId) -> Vec<JointId> {
        let mut chain = vec![joint];
        let mut current = self.node(joint).parent;
        while let Some(index) = current {
            chain.push(self.nodes[index].id);
            current = self.nodes[index].parent;
        }
        chain.reverse();
        chain
    }

    /// Composes the world transform of a joint from its ancestor chain.
    pub fn world_transform(&self, joint: JointId) -> DAffine3 {
        self.chain(joint)
            .into_iter()
            .fold(DAffine3::IDENTITY, |world, id| {
                let node = self.node(id);
                let local = if node.parent.is_none() {
                    DAffine3::from_rotation_translation(
                        euler_quat(node.rotation),
                        node.offset + self.root_position,
                    )
                } else {
                    node.local_transform()
                };
                world * local
            })
    }

    /// Returns the world-space position of a joint.
    pub fn world_position(&self, joint: JointId) -> DVec3 {
        self.world_transform(joint).translation
    }

    /// Returns true if every limited axis is inside its range.
    pub fn is_within_limits(&self) -> bool {
        self.nodes.iter().all(|node| {
            Axis::ALL.iter().all(|&axis| {
                match self.limits.get(node.id.class(), axis) {
                    Some(limit) => limit.contains(node.rotation[axis.to_index()]),
                    None => true,
                }
            })
        })
    }

    /// Copies the current pose into a serializable snapshot.
    pub fn snapshot(&self) -> PoseSnapshot {
        let joints = self
            .nodes
            .iter()
            .filter(|n| n.parent.is_some())
            .map(|n| (n.id.name().to_string(), n.rotation.to_array()))
            .collect();
        PoseSnapshot {
            joints,
            root_position: self.root_position.to_array(),
            root_rotation: self.root_rotation().to_array(),
        }
    }
}

impl PoseTarget for Skeleton {
    fn apply_rotation(&mut self, joint: JointId, axis: Axis, radians: f64) {
        let node = &mut self.nodes[joint.index()];
        *component_mut(&mut node.rotation, axis) = radians;
    }

    fn set_root_offset(&mut self, position: DVec3, rotation: DVec3) {
        self.root_position = position;
        self.nodes[JointId::Root.index()].rotation = rotation;
    }

    fn clamp_all(&mut self) {
        for node in self.nodes.iter_mut() {
            for axis in Axis::ALL {
                if let Some(limit) = self.limits.get(node.id.class(), axis) {
                    let value = component_mut(&mut node.rotation, axis);
                    *value = limit.clamp(*value);
                }
            }
        }
    }

    fn reset_pose(&mut self) {
        for node in self.nodes.iter_mut() {
            node.rotation = DVec3::ZERO;
        }
        self.root_position = DVec3::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: DVec3, b: DVec3) -> bool {
        (a - b).length() < 1e-9
    }

    #[test]
    fn test_humanoid_topology() {
        let skeleton = Skeleton::humanoid();
        assert_eq!(skeleton.nodes().len(), JointId::COUNT);
        for (i, node) in skeleton.nodes().iter().enumerate() {
            assert_eq!(node.id.index(), i);
            if let Some(parent) = node.parent {
                assert!(parent < i, "parent must precede child");
            }
        }
        assert_eq!(skeleton.parent(JointId::Root), None);
        assert_eq!(skeleton.parent(JointId::KneeL), Some(JointId::HipL));
        assert_eq!(skeleton.parent(JointId::ElbowR), Some(JointId::ShoulderR));
        assert_eq!(
            skeleton.chain(JointId::AnkleR),
            vec![JointId::Root, JointId::HipR, JointId::KneeR, JointId::AnkleR]
        );
    }

    #[test]
    fn test_rest_pose_world_positions() {
        let skeleton = Skeleton::humanoid();
        assert!(approx(
            skeleton.world_position(JointId::Root),
            DVec3::new(0.0, 1.0, 0.0)
        ));
        assert!(approx(
            skeleton.world_position(JointId::AnkleL),
            DVec3::new(0.1, 0.05, 0.0)
        ));
        assert!(approx(
            skeleton.world_position(JointId::ElbowR),
            DVec3::new(-0.2, 1.17, 0.0)
        ));
    }

    #[test]
    fn test_knee_bend_moves_ankle_backward() {
        let mut skeleton = Skeleton::humanoid();
        skeleton.apply_rotation(JointId::KneeL, Axis::X, std::f64::consts::FRAC_PI_2);
        let ankle = skeleton.world_position(JointId::AnkleL);
        // Rotating the shin 90 degrees about X swings it out of the vertical.
        assert!((ankle.y - 0.5).abs() < 1e-9);
        assert!((ankle.z.abs() - 0.45).abs() < 1e-9);
    }

    #[test]
    fn test_root_offset_translates_children() {
        let mut skeleton = Skeleton::humanoid();
        skeleton.set_root_offset(DVec3::new(0.0, 0.1, 2.0), DVec3::ZERO);
        assert!(approx(
            skeleton.world_position(JointId::AnkleL),
            DVec3::new(0.1, 0.15, 2.0)
        ));
    }

    #[test]
    fn test_apply_rotation_any_order() {
        let mut a = Skeleton::humanoid();
        a.apply_rotation(JointId::HipL, Axis::X, 0.3);
        a.apply_rotation(JointId::Neck, Axis::Y, -0.2);

        let mut b = Skeleton::humanoid();
        b.apply_rotation(JointId::Neck, Axis::Y, -0.2);
        b.apply_rotation(JointId::HipL, Axis::X, 0.3);

        assert_eq!(a, b);
        assert_eq!(a.rotation(JointId::HipL), DVec3::new(0.3, 0.0, 0.0));
    }

    #[test]
    fn test_clamp_all() {
        let mut skeleton = Skeleton::humanoid();
        skeleton.apply_rotation(JointId::KneeL, Axis::X, -1.0);
        skeleton.apply_rotation(JointId::KneeR, Axis::X, 5.0);
        skeleton.apply_rotation(JointId::ElbowL, Axis::X, -0.4);
        skeleton.apply_rotation(JointId::Neck, Axis::Z, 0.7);
        skeleton.apply_rotation(JointId::HipL, Axis::X, 0.4);
        assert!(!skeleton.is_within_limits());

        skeleton.clamp_all();

        assert_eq!(skeleton.rotation(JointId::KneeL).x, 0.0);
        assert_eq!(skeleton.rotation(JointId::KneeR).x, 2.5);
        assert_eq!(skeleton.rotation(JointId::ElbowL).x, 0.0);
        assert_eq!(skeleton.rotation(JointId::Neck).z, 0.0);
        assert_eq!(skeleton.rotation(JointId::HipL).x, 0.4);
        assert!(skeleton.is_within_limits());
    }

    #[test]
    fn test_clamp_leaves_root_alone() {
        let mut skeleton = Skeleton::humanoid();
        skeleton.set_root_offset(DVec3::new(0.0, 5.0, 0.0), DVec3::new(-3.0, 0.0, 0.0));
        skeleton.clamp_all();
        assert_eq!(skeleton.root_rotation(), DVec3::new(-3.0, 0.0, 0.0));
        assert_eq!(skeleton.root_position(), DVec3::new(0.0, 5.0, 0.0));
    }

    #[test]
    fn test_reset_pose() {
        let mut skeleton = Skeleton::humanoid();
        skeleton.apply_rotation(JointId::ShoulderL, Axis::Z, 1.0);
        skeleton.set_root_offset(DVec3::ONE, DVec3::ONE);
        skeleton.reset_pose();
        assert_eq!(skeleton, Skeleton::humanoid());
    }

    #[test]
    fn test_custom_limits() {
        let mut limits = JointLimits::humanoid();
        limits.neck.y = JointLimit::fixed(-0.1, 0.1);
        let mut skeleton = Skeleton::humanoid().with_limits(limits);
        skeleton.apply_rotation(JointId::Neck, Axis::Y, 1.0);
        skeleton.clamp_all();
        assert_eq!(skeleton.rotation(JointId::Neck).y, 0.1);
    }

    #[test]
    fn test_snapshot() {
        let mut skeleton = Skeleton::humanoid();
        skeleton.apply_rotation(JointId::KneeR, Axis::X, 0.5);
        skeleton.set_root_offset(DVec3::new(0.0, 0.02, 0.3), DVec3::new(-0.1, 0.0, 0.0));
        let snap = skeleton.snapshot();
        assert_eq!(snap.joints.len(), JointId::COUNT - 1);
        assert_eq!(snap.joints["knee_r"], [0.5, 0.0, 0.0]);
        assert_eq!(snap.root_position, [0.0, 0.02, 0.3]);
        assert_eq!(snap.root_rotation, [-0.1, 0.0, 0.0]);
        assert!(!snap.joints.contains_key("root"));
    }
}
