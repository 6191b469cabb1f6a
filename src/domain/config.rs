//! Tunables for physics, animation and player control.
//!
//! All three structs deserialize from partial JSON: missing fields keep
//! their defaults.

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// Which collision response contract the resolver follows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolverMode {
    /// Impulse response with restitution, friction and cosmetic torque.
    #[default]
    Impulse,
    /// Positional push-out and normal-velocity removal only. Never bounces.
    Kinematic,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// px/s²
    pub gravity: f32,
    pub floor_height: f32,
    /// Fixed sub-step in seconds
    pub fixed_dt: f32,
    pub max_substeps: u32,
    /// Frame deltas above this are clamped before accumulation
    pub max_frame_dt: f32,
    pub collision_iterations: u32,
    /// |v| below this snaps to zero after a step
    pub velocity_threshold: f32,
    pub angular_threshold: f32,
    /// Linear damping per second while airborne; 0 disables damping entirely
    pub air_resistance: f32,
    /// Angular damping per second, applied only when air resistance is on
    pub angular_damping: f32,
    /// vx decay per second while touching the floor (9 is about 0.85 per 1/60 s step)
    pub ground_friction: f32,
    /// Coulomb coefficient for ground contacts against bodies
    pub contact_friction: f32,
    /// Multiplier on remaining upward velocity after a ceiling hit
    pub ceiling_damping: f32,
    pub torque_scale: f32,
    /// Approach speeds below this resolve with zero restitution
    pub resting_speed: f32,
    pub resolver: ResolverMode,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 1500.0,
            floor_height: 60.0,
            fixed_dt: 1.0 / 60.0,
            max_substeps: 8,
            max_frame_dt: 0.25,
            collision_iterations: 4,
            velocity_threshold: 1.0,
            angular_threshold: 0.01,
            air_resistance: 0.5,
            angular_damping: 2.0,
            ground_friction: 9.0,
            contact_friction: 0.4,
            ceiling_damping: 0.5,
            torque_scale: 0.002,
            resting_speed: 60.0,
            resolver: ResolverMode::Impulse,
        }
    }
}

impl PhysicsConfig {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Higher-precision variant stepping at 1/120 s.
    pub fn high_precision() -> Self {
        Self {
            fixed_dt: 1.0 / 120.0,
            max_substeps: 16,
            ..Self::default()
        }
    }

    #[inline]
    pub fn bounces(&self) -> bool {
        self.resolver == ResolverMode::Impulse
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Skeleton chase speed toward the target pose, per second
    pub interpolation_speed: f32,
    /// Rate at which `turn_progress` fills before the facing flips
    pub turn_speed: f32,
    /// Chase speed of the drawn center toward the physical center
    pub visual_lag: f32,
    /// Minimum time spent in `land`
    pub land_hold: f32,
    pub land_squash: f32,
    pub land_decay: f32,
    pub walk_threshold: f32,
    /// vy below this (moving up fast) is `jump_up`
    pub jump_up_threshold: f32,
    /// vy below this (but not `jump_up`) is `peak`; anything else airborne is `fall`
    pub peak_threshold: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            interpolation_speed: 12.0,
            turn_speed: 8.0,
            visual_lag: 18.0,
            land_hold: 0.15,
            land_squash: 1.0,
            land_decay: 6.0,
            walk_threshold: 10.0,
            jump_up_threshold: -100.0,
            peak_threshold: 100.0,
        }
    }
}

impl AnimationConfig {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub move_speed: f32,
    pub ground_acceleration: f32,
    pub air_acceleration: f32,
    pub jump_speed: f32,
    pub coyote_time: f32,
    pub jump_buffer: f32,
    /// Multiplier on upward velocity when jump is released early
    pub jump_cut: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            move_speed: 300.0,
            ground_acceleration: 2400.0,
            air_acceleration: 1200.0,
            jump_speed: 720.0,
            coyote_time: 0.1,
            jump_buffer: 0.12,
            jump_cut: 0.5,
        }
    }
}

impl PlayerConfig {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(json)?)
    }
}
