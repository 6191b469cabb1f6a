//! Core math shared by every system

mod smoothing;
mod vec2;

pub use smoothing::{lerp, lerp_angle, normalize_angle, smoothing_factor};
pub use vec2::Vec2;
