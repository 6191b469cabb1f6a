//! Per-body integration stages of the world step.
//!
//! Each stage only touches dynamic bodies; callers skip statics.

use std::f32::consts::PI;

use crate::core::normalize_angle;
use crate::domain::{Body, PhysicsConfig};

/// Gravity, air damping, position/rotation integration. Clears `grounded`.
pub fn integrate(body: &mut Body, cfg: &PhysicsConfig, dt: f32) {
    body.velocity.y += cfg.gravity * dt;

    if cfg.air_resistance > 0.0 {
        if !body.grounded {
            let damping = (1.0 - cfg.air_resistance * dt).max(0.0);
            body.velocity = body.velocity * damping;
        }
        body.angular_velocity *= (1.0 - cfg.angular_damping * dt).max(0.0);
        if body.angular_velocity.abs() < cfg.angular_threshold {
            body.angular_velocity = 0.0;
        }
    }

    body.pos += body.velocity * dt;
    if body.angular_velocity != 0.0 {
        body.rotation = normalize_angle(body.rotation + body.angular_velocity * dt);
    }
    debug_assert!(body.rotation > -PI - 1e-6 && body.rotation <= PI + 1e-6);

    body.grounded = false;
}

/// Keep the body inside [0, width - w]. Bounces off the sides when the
/// resolver bounces, otherwise stops.
pub fn clamp_to_world_sides(body: &mut Body, width: f32, cfg: &PhysicsConfig) {
    let max_x = (width - body.w).max(0.0);
    let hit = if body.pos.x < 0.0 {
        body.pos.x = 0.0;
        body.velocity.x < 0.0
    } else if body.pos.x > max_x {
        body.pos.x = max_x;
        body.velocity.x > 0.0
    } else {
        return;
    };

    if hit {
        body.velocity.x = if cfg.bounces() && body.velocity.x.abs() >= cfg.resting_speed {
            -body.velocity.x * body.restitution
        } else {
            0.0
        };
    }
}

/// Floor sits `floor_height` above the bottom of the world. Friction decays
/// vx at `ground_friction` per second unless a controller drives the body.
pub fn clamp_to_floor(body: &mut Body, height: f32, cfg: &PhysicsConfig, dt: f32) {
    let floor_y = height - cfg.floor_height;
    if body.bottom() < floor_y {
        return;
    }

    body.pos.y = floor_y - body.h;
    if body.velocity.y > 0.0 {
        body.velocity.y = if cfg.bounces() && body.velocity.y >= cfg.resting_speed {
            -body.velocity.y * body.restitution
        } else {
            0.0
        };
    }
    body.grounded = true;
    if !body.driven {
        body.velocity.x *= (1.0 - cfg.ground_friction * dt).max(0.0);
    }
}

/// Zero out residual velocities so resting bodies stop jittering.
/// Vertical velocity is only snapped while grounded.
pub fn snap_small_velocities(body: &mut Body, cfg: &PhysicsConfig) {
    if body.velocity.x.abs() < cfg.velocity_threshold {
        body.velocity.x = 0.0;
    }
    if body.grounded && body.velocity.y.abs() < cfg.velocity_threshold {
        body.velocity.y = 0.0;
    }
}
