use crate::core::{lerp, lerp_angle, Vec2};

/// One joint relative to its rest placement.
///
/// Offsets are fractions of the actor's height. `rotation` is the upper
/// segment angle (0 = hanging straight down) and `lower` the bend of the
/// lower segment relative to it. Only the torso uses `scale`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JointTransform {
    pub offset: Vec2,
    pub rotation: f32,
    pub lower: f32,
    pub scale: Vec2,
}

impl JointTransform {
    pub const REST: JointTransform = JointTransform {
        offset: Vec2::ZERO,
        rotation: 0.0,
        lower: 0.0,
        scale: Vec2::new(1.0, 1.0),
    };

    pub const fn limb(rotation: f32, lower: f32) -> Self {
        Self { rotation, lower, ..Self::REST }
    }

    fn approach(&mut self, target: &JointTransform, t: f32) {
        self.offset = Vec2::new(
            lerp(self.offset.x, target.offset.x, t),
            lerp(self.offset.y, target.offset.y, t),
        );
        self.rotation = lerp_angle(self.rotation, target.rotation, t);
        self.lower = lerp_angle(self.lower, target.lower, t);
        self.scale = Vec2::new(
            lerp(self.scale.x, target.scale.x, t),
            lerp(self.scale.y, target.scale.y, t),
        );
    }
}

impl Default for JointTransform {
    fn default() -> Self {
        Self::REST
    }
}

/// Target joint values for one animation state. Pure data; see `pose.rs`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose {
    pub head: JointTransform,
    pub torso: JointTransform,
    pub left_arm: JointTransform,
    pub right_arm: JointTransform,
    pub left_leg: JointTransform,
    pub right_leg: JointTransform,
}

/// Live joint values, chased toward a [`Pose`] every frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Skeleton {
    pub head: JointTransform,
    pub torso: JointTransform,
    pub left_arm: JointTransform,
    pub right_arm: JointTransform,
    pub left_leg: JointTransform,
    pub right_leg: JointTransform,
}

impl Skeleton {
    /// Move every joint a fraction `t` of the way to `pose`.
    pub fn approach(&mut self, pose: &Pose, t: f32) {
        self.head.approach(&pose.head, t);
        self.torso.approach(&pose.torso, t);
        self.left_arm.approach(&pose.left_arm, t);
        self.right_arm.approach(&pose.right_arm, t);
        self.left_leg.approach(&pose.left_leg, t);
        self.right_leg.approach(&pose.right_leg, t);
    }

    pub fn snap_to(&mut self, pose: &Pose) {
        self.approach(pose, 1.0);
    }
}
