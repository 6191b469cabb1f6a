use serde::Serialize;

use crate::domain::{AnimationConfig, Body};

/// The minimal physical view an animated actor must provide
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ActorState {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub vx: f32,
    pub vy: f32,
    pub on_ground: bool,
}

impl ActorState {
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w * 0.5, self.y + self.h * 0.5)
    }
}

impl From<&Body> for ActorState {
    fn from(body: &Body) -> Self {
        Self {
            x: body.pos.x,
            y: body.pos.y,
            w: body.w,
            h: body.h,
            vx: body.velocity.x,
            vy: body.velocity.y,
            on_ground: body.grounded,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimState {
    #[default]
    Idle,
    Walk,
    JumpUp,
    Peak,
    Fall,
    Land,
}

impl AnimState {
    pub fn is_airborne(self) -> bool {
        matches!(self, AnimState::JumpUp | AnimState::Peak | AnimState::Fall)
    }

    pub fn name(self) -> &'static str {
        match self {
            AnimState::Idle => "idle",
            AnimState::Walk => "walk",
            AnimState::JumpUp => "jump_up",
            AnimState::Peak => "peak",
            AnimState::Fall => "fall",
            AnimState::Land => "land",
        }
    }
}

/// Transition function.
///
/// `current` is the state shown last frame and `state_time` how long it has
/// been shown.
pub fn determine_state(
    actor: &ActorState,
    current: AnimState,
    state_time: f32,
    cfg: &AnimationConfig,
) -> AnimState {
    if current.is_airborne() && actor.on_ground {
        return AnimState::Land;
    }
    if current == AnimState::Land && state_time < cfg.land_hold {
        return AnimState::Land;
    }

    if !actor.on_ground {
        if actor.vy < cfg.jump_up_threshold {
            AnimState::JumpUp
        } else if actor.vy < cfg.peak_threshold {
            AnimState::Peak
        } else {
            AnimState::Fall
        }
    } else if actor.vx.abs() > cfg.walk_threshold {
        AnimState::Walk
    } else {
        AnimState::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor(vx: f32, vy: f32, on_ground: bool) -> ActorState {
        ActorState { x: 0.0, y: 0.0, w: 32.0, h: 48.0, vx, vy, on_ground }
    }

    fn state_of(a: ActorState) -> AnimState {
        determine_state(&a, AnimState::Idle, 1.0, &AnimationConfig::default())
    }

    #[test]
    fn velocity_picks_the_state() {
        assert_eq!(state_of(actor(0.0, -150.0, false)), AnimState::JumpUp);
        assert_eq!(state_of(actor(0.0, 50.0, false)), AnimState::Peak);
        assert_eq!(state_of(actor(0.0, 150.0, false)), AnimState::Fall);
        assert_eq!(state_of(actor(50.0, 0.0, true)), AnimState::Walk);
        assert_eq!(state_of(actor(0.0, 0.0, true)), AnimState::Idle);
    }

    #[test]
    fn touching_down_lands_then_holds() {
        let cfg = AnimationConfig::default();
        let standing = actor(0.0, 0.0, true);
        assert_eq!(determine_state(&standing, AnimState::Fall, 0.5, &cfg), AnimState::Land);
        assert_eq!(determine_state(&standing, AnimState::Land, 0.1, &cfg), AnimState::Land);
        assert_eq!(determine_state(&standing, AnimState::Land, 0.2, &cfg), AnimState::Idle);

        let running = actor(200.0, 0.0, true);
        assert_eq!(determine_state(&running, AnimState::Land, 0.05, &cfg), AnimState::Land);
        assert_eq!(determine_state(&running, AnimState::Land, 0.15, &cfg), AnimState::Walk);
    }

    #[test]
    fn jumping_out_of_land_is_held_too() {
        let cfg = AnimationConfig::default();
        let jumping = actor(0.0, -300.0, false);
        assert_eq!(determine_state(&jumping, AnimState::Land, 0.05, &cfg), AnimState::Land);
    }
}
