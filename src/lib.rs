//! Platformer Engine - 2D platformer physics core in WASM
//!
//! Fixed-step rigid bodies (rect, circle, triangle) with SAT collision and
//! impulse response, plus a state-driven skeleton animator for the player.
//!
//! Architecture:
//! - core/          - Vector math and smoothing helpers
//! - domain/        - Bodies, shapes, configs, errors
//! - systems/       - Geometry, collision, resolution, animation, player
//! - simulation/    - World orchestration, level format, runtime, wasm facade

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine: panic hook, console logging, banner.
/// Safe to call more than once.
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    // Already-installed logger is fine on re-init.
    let _ = console_log::init_with_level(log::Level::Info);

    web_sys::console::log_1(&"🦀 Platformer WASM Engine initialized!".into());
}

/// Raise or lower log verbosity: "error", "warn", "info", "debug" or "trace".
#[wasm_bindgen]
pub fn set_log_level(level: &str) {
    match level.parse::<log::LevelFilter>() {
        Ok(filter) => log::set_max_level(filter),
        Err(_) => log::warn!("unknown log level {level:?}"),
    }
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::{AnimationConfig, Body, BodyId, BodyOptions, Drawable, EngineError, PhysicsConfig, PlayerConfig, Shape};
pub use simulation::{create_world, Engine, PlayerInput, Runtime, World};
