//! Target poses per animation state.
//!
//! Every function here is pure: the same inputs always give the same pose.
//! Angles are in the facing-right frame (0 = limb hanging straight down,
//! positive swings the limb backwards); the controller mirrors them when the
//! actor faces left.

use std::f32::consts::TAU;

use crate::core::Vec2;

use super::skeleton::{JointTransform, Pose};
use super::state::AnimState;

/// Breathing cycles per second while idle
const BREATH_RATE: f32 = 0.4;
/// Walk cycle phase speed, radians per second
const STRIDE_RATE: f32 = 10.0;

pub fn idle(t: f32) -> Pose {
    let breath = (t * BREATH_RATE * TAU).sin();
    let mut torso = JointTransform::REST;
    torso.offset = Vec2::new(0.0, breath * 0.006);
    torso.scale = Vec2::new(1.0, 1.0 + breath * 0.015);

    let mut head = JointTransform::REST;
    head.offset = Vec2::new(0.0, breath * 0.008);

    Pose {
        head,
        torso,
        left_arm: JointTransform::limb(0.08 + breath * 0.03, -0.1),
        right_arm: JointTransform::limb(-0.08 - breath * 0.03, -0.1),
        left_leg: JointTransform::limb(0.04, 0.0),
        right_leg: JointTransform::limb(-0.04, 0.0),
    }
}

pub fn walk(t: f32) -> Pose {
    let phase = t * STRIDE_RATE;
    let swing = phase.sin();
    // Knees only bend on the back swing.
    let left_knee = (-phase.cos()).max(0.0) * 0.7;
    let right_knee = phase.cos().max(0.0) * 0.7;
    let bob = (phase * 2.0).sin().abs() * 0.015;

    let mut torso = JointTransform::limb(-0.08, 0.0);
    torso.offset = Vec2::new(0.0, -bob);

    let mut head = JointTransform::REST;
    head.offset = Vec2::new(0.01, -bob);

    Pose {
        head,
        torso,
        left_arm: JointTransform::limb(-swing * 0.7, -0.4),
        right_arm: JointTransform::limb(swing * 0.7, -0.4),
        left_leg: JointTransform::limb(swing * 0.6, left_knee),
        right_leg: JointTransform::limb(-swing * 0.6, right_knee),
    }
}

pub fn jump_up() -> Pose {
    let mut torso = JointTransform::REST;
    torso.scale = Vec2::new(0.92, 1.08);

    let mut head = JointTransform::REST;
    head.offset = Vec2::new(0.0, -0.02);

    Pose {
        head,
        torso,
        left_arm: JointTransform::limb(-2.6, 0.2),
        right_arm: JointTransform::limb(-2.3, 0.3),
        left_leg: JointTransform::limb(-0.5, 0.9),
        right_leg: JointTransform::limb(0.15, 0.3),
    }
}

pub fn peak() -> Pose {
    Pose {
        head: JointTransform::REST,
        torso: JointTransform::REST,
        left_arm: JointTransform::limb(-1.5, -0.3),
        right_arm: JointTransform::limb(1.5, 0.3),
        left_leg: JointTransform::limb(-0.35, 0.6),
        right_leg: JointTransform::limb(0.1, 0.5),
    }
}

pub fn fall() -> Pose {
    let mut torso = JointTransform::REST;
    torso.scale = Vec2::new(0.96, 1.04);

    let mut head = JointTransform::REST;
    head.offset = Vec2::new(0.0, 0.01);

    Pose {
        head,
        torso,
        left_arm: JointTransform::limb(-2.2, -0.4),
        right_arm: JointTransform::limb(2.0, 0.4),
        left_leg: JointTransform::limb(-0.15, 0.1),
        right_leg: JointTransform::limb(0.2, 0.15),
    }
}

/// Crouch proportional to `squash` (0 = standing, 1 = full impact).
pub fn land(squash: f32) -> Pose {
    let s = squash.clamp(0.0, 1.0);

    let mut torso = JointTransform::REST;
    torso.offset = Vec2::new(0.0, 0.06 * s);
    torso.scale = Vec2::new(1.0 + 0.2 * s, 1.0 - 0.2 * s);

    let mut head = JointTransform::REST;
    head.offset = Vec2::new(0.0, 0.1 * s);

    Pose {
        head,
        torso,
        left_arm: JointTransform::limb(-0.5 * s, -0.3 * s),
        right_arm: JointTransform::limb(0.5 * s, 0.3 * s),
        left_leg: JointTransform::limb(-0.6 * s, 1.1 * s),
        right_leg: JointTransform::limb(-0.4 * s, 0.9 * s),
    }
}

/// Pose for `state` at controller time `t` with the current squash intensity
pub fn target_pose(state: AnimState, t: f32, squash: f32) -> Pose {
    match state {
        AnimState::Idle => idle(t),
        AnimState::Walk => walk(t),
        AnimState::JumpUp => jump_up(),
        AnimState::Peak => peak(),
        AnimState::Fall => fall(),
        AnimState::Land => land(squash),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poses_are_pure() {
        assert_eq!(idle(1.3), idle(1.3));
        assert_eq!(walk(0.7), walk(0.7));
        assert_eq!(target_pose(AnimState::Land, 5.0, 0.4), land(0.4));
        assert_eq!(target_pose(AnimState::Fall, 0.0, 1.0), target_pose(AnimState::Fall, 9.0, 0.0));
    }

    #[test]
    fn walk_legs_swing_opposite() {
        let p = walk(0.15);
        assert!((p.left_leg.rotation + p.right_leg.rotation).abs() < 1e-6);
        assert!((p.left_arm.rotation + p.right_arm.rotation).abs() < 1e-6);
        assert!(p.left_leg.rotation.abs() > 0.1);
    }

    #[test]
    fn zero_squash_is_neutral() {
        let p = land(0.0);
        assert_eq!(p.torso.scale, Vec2::new(1.0, 1.0));
        assert_eq!(p.left_leg.lower, 0.0);
        let full = land(1.0);
        assert!(full.torso.scale.y < 1.0 && full.torso.scale.x > 1.0);
        assert_eq!(land(3.0), full);
    }
}
