use wasm_bindgen::prelude::*;

use crate::domain::{AnimationConfig, Body, BodyId, BodyOptions, EngineError, PhysicsConfig, PlayerConfig, Shape};

use super::runtime::{PlayerInput, Runtime};
use super::step_stats::StepStats;

fn js_err(e: EngineError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn options(shape: &str, rotation: f32, z: i32) -> BodyOptions {
    BodyOptions::default()
        .shape(Shape::from_tag(shape))
        .rotation(rotation)
        .z(z)
}

/// Browser-facing handle over one play session
#[wasm_bindgen]
pub struct Engine {
    runtime: Runtime,
}

#[wasm_bindgen]
impl Engine {
    /// Create a session with default tunables
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            runtime: Runtime::new(width, height),
        }
    }

    /// Create a session from partial JSON configs; empty strings keep defaults
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(
        width: f32,
        height: f32,
        physics_json: &str,
        animation_json: &str,
        player_json: &str,
    ) -> Result<Engine, JsValue> {
        let physics = if physics_json.is_empty() {
            PhysicsConfig::default()
        } else {
            PhysicsConfig::from_json(physics_json).map_err(js_err)?
        };
        let animation = if animation_json.is_empty() {
            AnimationConfig::default()
        } else {
            AnimationConfig::from_json(animation_json).map_err(js_err)?
        };
        let player = if player_json.is_empty() {
            PlayerConfig::default()
        } else {
            PlayerConfig::from_json(player_json).map_err(js_err)?
        };
        Ok(Self {
            runtime: Runtime::with_configs(width, height, physics, animation, player),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 { self.runtime.world().width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 { self.runtime.world().height() }

    #[wasm_bindgen(getter)]
    pub fn floor_y(&self) -> f32 { self.runtime.world().floor_y() }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize { self.runtime.world().body_count() }

    #[wasm_bindgen(getter)]
    pub fn brick_count(&self) -> usize { self.runtime.world().bricks().len() }

    pub fn set_gravity(&mut self, gravity: f32) {
        self.runtime.world_mut().set_gravity(gravity);
    }

    // === BODY API ===

    /// Add a brick; `shape` is "rect", "circle" or "triangle". Returns the body id.
    pub fn create_static_body(
        &mut self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        shape: &str,
        rotation: f32,
        z: i32,
    ) -> Result<u32, JsValue> {
        self.runtime
            .world_mut()
            .create_static_body(x, y, w, h, &options(shape, rotation, z))
            .map(|id| id.0)
            .map_err(js_err)
    }

    pub fn create_dynamic_body(
        &mut self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        shape: &str,
        rotation: f32,
        z: i32,
    ) -> Result<u32, JsValue> {
        self.runtime
            .world_mut()
            .create_dynamic_body(x, y, w, h, &options(shape, rotation, z))
            .map(|id| id.0)
            .map_err(js_err)
    }

    pub fn set_body_color(&mut self, id: u32, r: f32, g: f32, b: f32, a: f32) -> bool {
        match self.runtime.world_mut().body_mut(BodyId(id)) {
            Some(body) => {
                body.color = [r, g, b, a];
                true
            }
            None => false,
        }
    }

    pub fn remove_body(&mut self, id: u32) -> bool {
        self.runtime.remove_body(BodyId(id))
    }

    pub fn clear_bricks(&mut self) {
        self.runtime.world_mut().clear_bricks();
    }

    /// Topmost body under the cursor, if any
    pub fn pick_body(&self, x: f32, y: f32) -> Option<u32> {
        self.runtime.world().pick_body(x, y).map(|id| id.0)
    }

    // === SIMULATION ===

    /// One raw world step of `dt` seconds, bypassing input and the accumulator
    pub fn step(&mut self, dt: f32) {
        self.runtime.world_mut().step(dt);
    }

    /// One rendered frame; returns the sub-steps run
    pub fn frame(&mut self, dt: f32, move_x: f32, jump_pressed: bool, jump_held: bool) -> u32 {
        let input = PlayerInput { move_x, jump_pressed, jump_held };
        self.runtime.frame(dt, &input)
    }

    /// Enable or disable per-frame stats (adds timing overhead when enabled)
    pub fn enable_stats(&mut self, enabled: bool) {
        self.runtime.enable_stats(enabled);
    }

    /// Last frame's stats (zeros when disabled)
    pub fn get_stats(&self) -> StepStats {
        self.runtime.stats().clone()
    }

    // === LEVEL ===

    pub fn save_level_json(&self) -> Result<String, JsValue> {
        self.runtime.world().level_to_json().map_err(js_err)
    }

    /// Replace all bricks; returns how many records were usable
    pub fn load_level_json(&mut self, json: &str) -> Result<usize, JsValue> {
        self.runtime.world_mut().level_from_json(json).map_err(js_err)
    }

    // === PLAYER ===

    #[wasm_bindgen(getter)]
    pub fn player_id(&self) -> u32 { self.runtime.player_body_id().0 }

    #[wasm_bindgen(getter)]
    pub fn player_x(&self) -> f32 { self.player_body().map_or(0.0, |b| b.pos.x) }

    #[wasm_bindgen(getter)]
    pub fn player_y(&self) -> f32 { self.player_body().map_or(0.0, |b| b.pos.y) }

    #[wasm_bindgen(getter)]
    pub fn player_vx(&self) -> f32 { self.player_body().map_or(0.0, |b| b.velocity.x) }

    #[wasm_bindgen(getter)]
    pub fn player_vy(&self) -> f32 { self.player_body().map_or(0.0, |b| b.velocity.y) }

    #[wasm_bindgen(getter)]
    pub fn player_grounded(&self) -> bool { self.player_body().is_some_and(|b| b.grounded) }

    #[wasm_bindgen(getter)]
    pub fn player_facing_right(&self) -> bool { self.runtime.player().animation().facing_right() }

    /// Current animation state tag, e.g. "jump_up"
    #[wasm_bindgen(getter)]
    pub fn player_state(&self) -> String {
        self.runtime.player().animation().state().name().to_string()
    }

    // === RENDER DATA ===

    /// `[{x, y, w, h, shape, color, rotation}, ...]`, world then player
    pub fn drawables_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.runtime.drawables())
            .map_err(|e| js_err(EngineError::from(e)))
    }

    /// Editor view: every body as a box, back to front
    pub fn world_drawables_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.runtime.world().drawables_by_depth())
            .map_err(|e| js_err(EngineError::from(e)))
    }
}

impl Engine {
    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    fn player_body(&self) -> Option<&Body> {
        self.runtime.world().body(self.runtime.player_body_id())
    }
}
