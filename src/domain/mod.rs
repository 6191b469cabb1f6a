pub mod body;
pub mod config;
pub mod drawable;
pub mod error;
pub mod shape;

pub use body::{check_geometry, Body, BodyId, BodyOptions, Color, DEFAULT_BRICK_COLOR};
pub use drawable::Drawable;
pub use config::{AnimationConfig, PhysicsConfig, PlayerConfig, ResolverMode};
pub use error::EngineError;
pub use shape::{effective_radius, Shape};
