//! Player - input-driven velocity on top of a dynamic body
//!
//! Feel helpers:
//! - coyote time: a jump is still honored shortly after walking off a ledge
//! - jump buffer: a press shortly before landing fires on touchdown
//! - jump cut: releasing jump while rising trims the ascent once

use serde::{Deserialize, Serialize};

use crate::domain::{AnimationConfig, Body, BodyId, Drawable, PlayerConfig};

use super::animation::{ActorState, AnimationController};

/// One frame of player intent
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerInput {
    /// Horizontal intent in [-1, 1]
    pub move_x: f32,
    /// Jump went down this frame
    pub jump_pressed: bool,
    /// Jump is currently held
    pub jump_held: bool,
}

impl PlayerInput {
    /// Same input with the press edge removed; later sub-steps of a frame
    /// must not re-buffer the jump.
    pub fn without_press(self) -> Self {
        Self { jump_pressed: false, ..self }
    }

    fn move_axis(&self) -> f32 {
        if self.move_x.is_finite() {
            self.move_x.clamp(-1.0, 1.0)
        } else {
            0.0
        }
    }
}

pub struct Player {
    body: BodyId,
    config: PlayerConfig,
    coyote: f32,
    jump_buffer: f32,
    can_cut: bool,
    animation: AnimationController,
}

impl Player {
    /// `actor` seeds the animation's lagged center.
    pub fn new(body: BodyId, actor: &ActorState, config: PlayerConfig, animation: AnimationConfig) -> Self {
        Self {
            body,
            config,
            coyote: 0.0,
            jump_buffer: 0.0,
            can_cut: false,
            animation: AnimationController::new(animation, actor),
        }
    }

    pub fn body_id(&self) -> BodyId {
        self.body
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: PlayerConfig) {
        self.config = config;
    }

    pub fn animation(&self) -> &AnimationController {
        &self.animation
    }

    pub fn animation_mut(&mut self) -> &mut AnimationController {
        &mut self.animation
    }

    pub fn coyote_remaining(&self) -> f32 {
        self.coyote
    }

    pub fn jump_buffer_remaining(&self) -> f32 {
        self.jump_buffer
    }

    /// Apply one sub-step of input to the body, before the world steps.
    /// Returns true if a jump fired.
    pub fn apply_input(&mut self, body: &mut Body, input: &PlayerInput, dt: f32) -> bool {
        let cfg = &self.config;

        let target = input.move_axis() * cfg.move_speed;
        let accel = if body.grounded { cfg.ground_acceleration } else { cfg.air_acceleration };
        let max_dv = accel * dt;
        body.velocity.x += (target - body.velocity.x).clamp(-max_dv, max_dv);

        if body.grounded {
            self.coyote = cfg.coyote_time;
            self.can_cut = false;
        } else {
            self.coyote = (self.coyote - dt).max(0.0);
        }

        if input.jump_pressed {
            self.jump_buffer = cfg.jump_buffer;
        } else {
            self.jump_buffer = (self.jump_buffer - dt).max(0.0);
        }

        if self.jump_buffer > 0.0 && self.coyote > 0.0 {
            body.velocity.y = -cfg.jump_speed;
            body.grounded = false;
            self.jump_buffer = 0.0;
            self.coyote = 0.0;
            self.can_cut = true;
            log::debug!("player {:?} jumped", self.body);
            return true;
        }

        if self.can_cut && !input.jump_held && body.velocity.y < 0.0 {
            body.velocity.y *= cfg.jump_cut;
            self.can_cut = false;
        }
        false
    }

    /// Advance the animation once per rendered frame
    pub fn animate(&mut self, body: &Body, dt: f32) {
        self.animation.update(&ActorState::from(body), dt);
    }

    pub fn drawables(&self, body: &Body) -> Vec<Drawable> {
        self.animation.drawables(&ActorState::from(body))
    }
}
