//! World - the single mutable simulation state of a session
//!
//! Orchestration only; the physics lives in `systems/`:
//! - body factories and editor queries in bodies/
//! - the fixed-step world stepper in step/
//! - the persisted brick format in level/
//! - the frame loop composition root in runtime/

use crate::domain::{Body, BodyId, BodyOptions, Drawable, EngineError, PhysicsConfig};

#[path = "bodies/bodies.rs"]
mod bodies;
#[path = "perf/frame_timer.rs"]
mod frame_timer;
#[path = "level/level.rs"]
mod level;
#[path = "perf/step_stats.rs"]
mod step_stats;
#[path = "runtime/runtime.rs"]
mod runtime;
#[path = "step/step.rs"]
mod step;
mod facade;

pub use bodies::{create_dynamic_body, create_static_body, remove_body};
pub use facade::Engine;
pub use level::LevelRecord;
pub use runtime::{PlayerInput, Runtime};
pub use step::{step, StepReport};
pub use step_stats::StepStats;

/// Bodies plus world bounds.
///
/// `bodies` holds everything in creation order; `bricks` lists the static
/// obstacles that make up the editable level.
pub struct World {
    width: f32,
    height: f32,
    bodies: Vec<Body>,
    bricks: Vec<BodyId>,
    next_id: u32,
    config: PhysicsConfig,
}

impl World {
    /// Create an empty world with default physics
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_config(width, height, PhysicsConfig::default())
    }

    pub fn with_config(width: f32, height: f32, config: PhysicsConfig) -> Self {
        Self {
            width,
            height,
            bodies: Vec::new(),
            bricks: Vec::new(),
            next_id: 1,
            config,
        }
    }

    pub fn width(&self) -> f32 { self.width }

    pub fn height(&self) -> f32 { self.height }

    /// Top of the floor strip
    pub fn floor_y(&self) -> f32 {
        self.height - self.config.floor_height
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: PhysicsConfig) {
        self.config = config;
    }

    pub fn set_gravity(&mut self, gravity: f32) {
        self.config.gravity = gravity;
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn bricks(&self) -> &[BodyId] {
        &self.bricks
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    /// Like [`World::body`], for callers that need an error
    pub fn try_body(&self, id: BodyId) -> Result<&Body, EngineError> {
        self.body(id).ok_or(EngineError::UnknownBody(id))
    }

    /// Static bodies referenced by the brick list, in brick order
    pub fn brick_bodies(&self) -> impl Iterator<Item = &Body> + '_ {
        self.bricks.iter().filter_map(move |id| self.body(*id))
    }

    // === BODY API ===

    /// Fails with [`EngineError::InvalidGeometry`] for non-finite values or
    /// a non-positive size
    pub fn create_static_body(&mut self, x: f32, y: f32, w: f32, h: f32, opts: &BodyOptions) -> Result<BodyId, EngineError> {
        bodies::create_static_body(self, x, y, w, h, opts)
    }

    pub fn create_dynamic_body(&mut self, x: f32, y: f32, w: f32, h: f32, opts: &BodyOptions) -> Result<BodyId, EngineError> {
        bodies::create_dynamic_body(self, x, y, w, h, opts)
    }

    /// Returns false if no such body exists
    pub fn remove_body(&mut self, id: BodyId) -> bool {
        bodies::remove_body(self, id)
    }

    pub fn clear_bricks(&mut self) {
        bodies::clear_bricks(self)
    }

    /// Topmost body under the point: highest `z`, then most recently created
    pub fn pick_body(&self, x: f32, y: f32) -> Option<BodyId> {
        bodies::pick_body(self, x, y)
    }

    /// Every body as a drawable, back to front
    pub fn drawables_by_depth(&self) -> Vec<Drawable> {
        bodies::drawables_by_depth(self)
    }

    // === LEVEL API ===

    pub fn save_level(&self) -> Vec<LevelRecord> {
        level::save_level(self)
    }

    /// Replace all bricks. Malformed records are skipped; returns bricks loaded.
    pub fn load_level(&mut self, records: &[serde_json::Value]) -> usize {
        level::load_level(self, records)
    }

    pub fn level_to_json(&self) -> Result<String, EngineError> {
        level::level_to_json(self)
    }

    pub fn level_from_json(&mut self, json: &str) -> Result<usize, EngineError> {
        level::level_from_json(self, json)
    }

    /// Advance every dynamic body by one fixed sub-step
    pub fn step(&mut self, dt: f32) -> StepReport {
        step::step(self, dt)
    }
}

/// Empty world with default physics; one per session
pub fn create_world(width: f32, height: f32) -> World {
    World::new(width, height)
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
