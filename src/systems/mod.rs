//! Per-body physics and per-actor animation
//!
//! Everything here operates on plain domain values; orchestration lives in
//! `simulation/`.

pub mod animation;
pub mod collision;
pub mod geometry;
pub mod integrate;
pub mod player;
pub mod resolve;
