use crate::core::{smoothing_factor, Vec2};
use crate::domain::{AnimationConfig, Color, Drawable, Shape};

use super::pose::target_pose;
use super::skeleton::{JointTransform, Skeleton};
use super::state::{determine_state, ActorState, AnimState};

const SKIN: Color = [0.96, 0.8, 0.66, 1.0];
const SHIRT: Color = [0.2, 0.45, 0.85, 1.0];
const SLEEVE: Color = [0.16, 0.36, 0.7, 1.0];
const TROUSERS: Color = [0.22, 0.22, 0.3, 1.0];
const EYE: Color = [0.08, 0.08, 0.1, 1.0];

// Rig layout, as fractions of actor height relative to the actor center.
const TORSO_W: f32 = 0.3;
const TORSO_H: f32 = 0.4;
const TORSO_Y: f32 = -0.05;
const SHOULDER_Y: f32 = -0.22;
const SHOULDER_X: f32 = 0.1;
const HIP_X: f32 = 0.06;
const ARM_SEGMENT: f32 = 0.15;
const ARM_WIDTH: f32 = 0.08;
const LEG_UPPER: f32 = 0.17;
const LEG_LOWER: f32 = 0.18;
const LEG_WIDTH: f32 = 0.1;
const HEAD_D: f32 = 0.26;
const EYE_D: f32 = 0.05;

/// Drives one actor's skeleton from its physical state.
///
/// Call [`update`](Self::update) once per rendered frame, then
/// [`drawables`](Self::drawables) to get the primitives to draw.
pub struct AnimationController {
    config: AnimationConfig,
    skeleton: Skeleton,
    state: AnimState,
    previous_state: AnimState,
    state_time: f32,
    total_time: f32,
    /// Drawn center; lags the physical center
    visual: Vec2,
    facing_right: bool,
    turn_progress: f32,
    squash: f32,
}

impl AnimationController {
    pub fn new(config: AnimationConfig, actor: &ActorState) -> Self {
        let (cx, cy) = actor.center();
        let mut skeleton = Skeleton::default();
        skeleton.snap_to(&target_pose(AnimState::Idle, 0.0, 0.0));
        Self {
            config,
            skeleton,
            state: AnimState::Idle,
            previous_state: AnimState::Idle,
            state_time: 0.0,
            total_time: 0.0,
            visual: Vec2::new(cx, cy),
            facing_right: true,
            turn_progress: 0.0,
            squash: 0.0,
        }
    }

    pub fn state(&self) -> AnimState { self.state }

    pub fn previous_state(&self) -> AnimState { self.previous_state }

    pub fn state_time(&self) -> f32 { self.state_time }

    pub fn facing_right(&self) -> bool { self.facing_right }

    pub fn turn_progress(&self) -> f32 { self.turn_progress }

    pub fn squash(&self) -> f32 { self.squash }

    pub fn visual_center(&self) -> Vec2 { self.visual }

    pub fn skeleton(&self) -> &Skeleton { &self.skeleton }

    pub fn config(&self) -> &AnimationConfig { &self.config }

    pub fn set_config(&mut self, config: AnimationConfig) {
        self.config = config;
    }

    /// Jump the drawn center onto the actor, e.g. after a teleport
    pub fn reset_visual(&mut self, actor: &ActorState) {
        let (cx, cy) = actor.center();
        self.visual = Vec2::new(cx, cy);
    }

    /// Advance by one frame of `dt` seconds.
    pub fn update(&mut self, actor: &ActorState, dt: f32) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.total_time += dt;
        self.state_time += dt;

        let next = determine_state(actor, self.state, self.state_time, &self.config);
        if next != self.state {
            if next == AnimState::Land {
                self.squash = self.config.land_squash;
            }
            self.previous_state = self.state;
            self.state = next;
            self.state_time = 0.0;
        }
        self.squash *= 1.0 - smoothing_factor(dt, self.config.land_decay);

        self.update_facing(actor.vx, dt);

        let (cx, cy) = actor.center();
        let k = smoothing_factor(dt, self.config.visual_lag);
        self.visual += (Vec2::new(cx, cy) - self.visual) * k;

        let pose = target_pose(self.state, self.total_time, self.squash);
        self.skeleton
            .approach(&pose, smoothing_factor(dt, self.config.interpolation_speed));
    }

    fn update_facing(&mut self, vx: f32, dt: f32) {
        let wants_right = if vx > self.config.walk_threshold {
            Some(true)
        } else if vx < -self.config.walk_threshold {
            Some(false)
        } else {
            None
        };

        match wants_right {
            Some(right) if right != self.facing_right => {
                self.turn_progress += dt * self.config.turn_speed;
                if self.turn_progress >= 1.0 {
                    self.facing_right = right;
                    self.turn_progress = 0.0;
                }
            }
            _ => self.turn_progress = 0.0,
        }
    }

    /// Skeleton as primitives around the lagged center.
    ///
    /// Order: torso, left arm, right arm, left leg, right leg (upper then
    /// lower segment each), head, two eyes.
    pub fn drawables(&self, actor: &ActorState) -> Vec<Drawable> {
        let rig = Rig {
            origin: self.visual,
            unit: actor.h,
            side: if self.facing_right { 1.0 } else { -1.0 },
        };
        let skel = &self.skeleton;
        let torso = &skel.torso;
        let mut out = Vec::with_capacity(12);

        let torso_center = Vec2::new(0.0, TORSO_Y) + torso.offset;
        out.push(rig.rect(
            torso_center,
            TORSO_W * torso.scale.x,
            TORSO_H * torso.scale.y,
            torso.rotation,
            SHIRT,
        ));

        // Attachment points follow the torso's vertical squash.
        let shoulder_y = TORSO_Y + torso.offset.y + (SHOULDER_Y - TORSO_Y) * torso.scale.y;
        let hip_y = TORSO_Y + torso.offset.y + TORSO_H * 0.5 * torso.scale.y;

        for (arm, x) in [(&skel.left_arm, -SHOULDER_X), (&skel.right_arm, SHOULDER_X)] {
            rig.limb(&mut out, Vec2::new(x, shoulder_y), arm, [ARM_SEGMENT, ARM_SEGMENT], ARM_WIDTH, [SLEEVE, SKIN]);
        }
        for (leg, x) in [(&skel.left_leg, -HIP_X), (&skel.right_leg, HIP_X)] {
            rig.limb(&mut out, Vec2::new(x, hip_y), leg, [LEG_UPPER, LEG_LOWER], LEG_WIDTH, [TROUSERS, TROUSERS]);
        }

        let torso_top = TORSO_Y + torso.offset.y - TORSO_H * 0.5 * torso.scale.y;
        let head_center = Vec2::new(0.0, torso_top - HEAD_D * 0.5) + skel.head.offset;
        out.push(rig.circle(head_center, HEAD_D, SKIN));
        for dx in [0.03, 0.08] {
            out.push(rig.circle(head_center + Vec2::new(dx, -0.02), EYE_D, EYE));
        }

        out
    }
}

/// Maps the unit rig (facing right, height 1) into world pixels
struct Rig {
    origin: Vec2,
    unit: f32,
    side: f32,
}

impl Rig {
    fn point(&self, local: Vec2) -> Vec2 {
        self.origin + Vec2::new(local.x * self.side, local.y) * self.unit
    }

    fn rect(&self, center: Vec2, w: f32, h: f32, rotation: f32, color: Color) -> Drawable {
        let c = self.point(center);
        Drawable::centered(c.x, c.y, w * self.unit, h * self.unit, Shape::Rect, color, rotation * self.side)
    }

    fn circle(&self, center: Vec2, d: f32, color: Color) -> Drawable {
        let c = self.point(center);
        Drawable::centered(c.x, c.y, d * self.unit, d * self.unit, Shape::Circle, color, 0.0)
    }

    /// Two segments hanging from `pivot`, upper then lower
    fn limb(
        &self,
        out: &mut Vec<Drawable>,
        pivot: Vec2,
        joint: &JointTransform,
        lengths: [f32; 2],
        width: f32,
        colors: [Color; 2],
    ) {
        let pivot = pivot + joint.offset;
        let upper = joint.rotation;
        let lower = joint.rotation + joint.lower;

        let elbow = pivot + Vec2::new(0.0, lengths[0]).rotate(upper);
        out.push(self.rect(
            pivot + Vec2::new(0.0, lengths[0] * 0.5).rotate(upper),
            width,
            lengths[0],
            upper,
            colors[0],
        ));
        out.push(self.rect(
            elbow + Vec2::new(0.0, lengths[1] * 0.5).rotate(lower),
            width,
            lengths[1],
            lower,
            colors[1],
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn actor(x: f32, y: f32, vx: f32, vy: f32, on_ground: bool) -> ActorState {
        ActorState { x, y, w: 32.0, h: 48.0, vx, vy, on_ground }
    }

    fn controller(a: &ActorState) -> AnimationController {
        AnimationController::new(AnimationConfig::default(), a)
    }

    #[test]
    fn landing_latches_squash_and_records_previous() {
        let falling = actor(0.0, 0.0, 0.0, 300.0, false);
        let mut anim = controller(&falling);
        anim.update(&falling, DT);
        assert_eq!(anim.state(), AnimState::Fall);

        let standing = actor(0.0, 0.0, 0.0, 0.0, true);
        anim.update(&standing, DT);
        assert_eq!(anim.state(), AnimState::Land);
        assert_eq!(anim.previous_state(), AnimState::Fall);
        assert!(anim.squash() > 0.8 && anim.squash() <= 1.0);

        for _ in 0..6 {
            anim.update(&standing, DT);
        }
        assert_eq!(anim.state(), AnimState::Land);
        for _ in 0..6 {
            anim.update(&standing, DT);
        }
        assert_eq!(anim.state(), AnimState::Idle);
        assert!(anim.squash() < 0.5);
    }

    #[test]
    fn facing_flip_is_debounced() {
        let left = actor(0.0, 0.0, -200.0, 0.0, true);
        let mut anim = controller(&left);
        assert!(anim.facing_right());

        // 8/s turn speed needs 1/8 s of sustained input.
        for _ in 0..7 {
            anim.update(&left, DT);
        }
        assert!(anim.facing_right());
        assert!(anim.turn_progress() > 0.9);

        anim.update(&left, DT);
        assert!(!anim.facing_right());
        assert_eq!(anim.turn_progress(), 0.0);
    }

    #[test]
    fn brief_reversal_does_not_turn() {
        let left = actor(0.0, 0.0, -200.0, 0.0, true);
        let still = actor(0.0, 0.0, 0.0, 0.0, true);
        let mut anim = controller(&still);
        for _ in 0..4 {
            anim.update(&left, DT);
        }
        anim.update(&still, DT);
        assert_eq!(anim.turn_progress(), 0.0);
        for _ in 0..4 {
            anim.update(&left, DT);
        }
        assert!(anim.facing_right());
    }

    #[test]
    fn visual_center_follows_through() {
        let start = actor(0.0, 0.0, 0.0, 0.0, true);
        let mut anim = controller(&start);
        let moved = actor(100.0, 0.0, 0.0, 0.0, true);

        anim.update(&moved, DT);
        // One frame closes 18/60 of the gap.
        let expected = 16.0 + 100.0 * 0.3;
        assert!((anim.visual_center().x - expected).abs() < 1e-3);

        for _ in 0..120 {
            anim.update(&moved, DT);
        }
        assert!((anim.visual_center().x - 116.0).abs() < 1e-2);
    }

    #[test]
    fn skeleton_converges_at_interpolation_rate() {
        let rising = actor(0.0, 0.0, 0.0, -400.0, false);
        let mut anim = controller(&rising);
        let start = anim.skeleton().left_arm.rotation;
        anim.update(&rising, DT);
        let target = target_pose(AnimState::JumpUp, DT, 0.0).left_arm.rotation;
        let expected = start + (target - start) * 0.2;
        assert!((anim.skeleton().left_arm.rotation - expected).abs() < 1e-4);
    }

    #[test]
    fn emits_twelve_primitives_in_order() {
        let a = actor(50.0, 100.0, 0.0, 0.0, true);
        let anim = controller(&a);
        let parts = anim.drawables(&a);
        assert_eq!(parts.len(), 12);
        assert_eq!(parts[0].shape, Shape::Rect);
        assert!(parts[1..9].iter().all(|d| d.shape == Shape::Rect));
        assert!(parts[9..].iter().all(|d| d.shape == Shape::Circle));

        let (hx, hy) = parts[9].center();
        assert!((hx - 66.0).abs() < 1e-3);
        assert!(hy < 124.0);
        // Eyes sit on the facing side.
        assert!(parts[10].center().0 > hx && parts[11].center().0 > hx);
    }

    #[test]
    fn facing_left_mirrors_the_eyes() {
        let left = actor(50.0, 100.0, -200.0, 0.0, true);
        let mut anim = controller(&left);
        for _ in 0..30 {
            anim.update(&left, DT);
        }
        assert!(!anim.facing_right());
        let parts = anim.drawables(&left);
        let hx = parts[9].center().0;
        assert!(parts[10].center().0 < hx);
    }
}
