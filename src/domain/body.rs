use serde::{Deserialize, Serialize};

use crate::core::{normalize_angle, Vec2};

use super::error::EngineError;
use super::shape::Shape;

/// RGBA, each channel in [0, 1]
pub type Color = [f32; 4];

pub const DEFAULT_BRICK_COLOR: Color = [0.8, 0.4, 0.2, 1.0];
pub const DEFAULT_DENSITY: f32 = 1.0;
pub const DEFAULT_STATIC_RESTITUTION: f32 = 0.2;
pub const DEFAULT_DYNAMIC_RESTITUTION: f32 = 0.0;

/// Stable handle for a body inside its `World`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BodyId(pub u32);

/// Optional creation parameters shared by the static and dynamic factories
#[derive(Clone, Debug)]
pub struct BodyOptions {
    pub shape: Shape,
    pub color: Color,
    pub rotation: f32,
    pub z: i32,
    pub density: Option<f32>,
    pub restitution: Option<f32>,
    pub driven: bool,
}

impl Default for BodyOptions {
    fn default() -> Self {
        Self {
            shape: Shape::Rect,
            color: DEFAULT_BRICK_COLOR,
            rotation: 0.0,
            z: 0,
            density: None,
            restitution: None,
            driven: false,
        }
    }
}

impl BodyOptions {
    pub fn shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    pub fn rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn z(mut self, z: i32) -> Self {
        self.z = z;
        self
    }

    pub fn density(mut self, density: f32) -> Self {
        self.density = Some(density);
        self
    }

    pub fn restitution(mut self, restitution: f32) -> Self {
        self.restitution = Some(restitution);
        self
    }

    /// Mark the body as steered by a controller (see [`Body::driven`])
    pub fn driven(mut self, driven: bool) -> Self {
        self.driven = driven;
        self
    }
}

/// Shared gate for every way a body enters a world: finite placement and a
/// strictly positive size.
pub fn check_geometry(x: f32, y: f32, w: f32, h: f32, rotation: f32) -> Result<(), EngineError> {
    let finite = [x, y, w, h, rotation].iter().all(|v| v.is_finite());
    if finite && w > 0.0 && h > 0.0 {
        Ok(())
    } else {
        Err(EngineError::InvalidGeometry { w, h })
    }
}

/// A physical entity in the world.
///
/// Position is the top-left of the unrotated bounding box; rotation happens
/// about the box center.
#[derive(Clone, Debug)]
pub struct Body {
    pub id: BodyId,

    // === Transform ===
    pub pos: Vec2,
    pub w: f32,
    pub h: f32,
    /// Radians, kept in (-π, π]
    pub rotation: f32,

    // === Motion ===
    /// Pixels per second
    pub velocity: Vec2,
    /// Radians per second
    pub angular_velocity: f32,

    pub shape: Shape,
    pub is_static: bool,
    pub grounded: bool,
    /// Horizontal speed belongs to a controller; floor and contact friction
    /// leave it alone.
    pub driven: bool,

    // === Material ===
    pub mass: f32,
    /// 0 means infinite mass
    pub inv_mass: f32,
    /// Bounciness (0.0 = no bounce, 1.0 = full elastic)
    pub restitution: f32,
    /// As given at creation, kept for the level format
    pub density: Option<f32>,

    // === Editor-only ===
    pub color: Color,
    /// Depth layer for sorting and pick disambiguation
    pub z: i32,
}

impl Body {
    /// Immovable obstacle. Always infinite mass.
    pub fn new_static(id: BodyId, x: f32, y: f32, w: f32, h: f32, opts: &BodyOptions) -> Self {
        let density = opts.density.unwrap_or(DEFAULT_DENSITY);
        Self {
            id,
            pos: Vec2::new(x, y),
            w,
            h,
            rotation: normalize_angle(opts.rotation),
            velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            shape: opts.shape,
            is_static: true,
            grounded: false,
            driven: false,
            mass: density * opts.shape.area(w, h),
            inv_mass: 0.0,
            restitution: opts
                .restitution
                .unwrap_or(DEFAULT_STATIC_RESTITUTION)
                .clamp(0.0, 1.0),
            density: opts.density,
            color: opts.color,
            z: opts.z,
        }
    }

    /// Simulated body; mass comes from density times shape area.
    pub fn new_dynamic(id: BodyId, x: f32, y: f32, w: f32, h: f32, opts: &BodyOptions) -> Self {
        let density = opts.density.unwrap_or(DEFAULT_DENSITY).max(0.0);
        let mass = density * opts.shape.area(w, h);
        Self {
            id,
            pos: Vec2::new(x, y),
            w,
            h,
            rotation: normalize_angle(opts.rotation),
            velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            shape: opts.shape,
            is_static: false,
            grounded: false,
            driven: opts.driven,
            mass,
            inv_mass: if mass > 0.0 { 1.0 / mass } else { 0.0 },
            restitution: opts
                .restitution
                .unwrap_or(DEFAULT_DYNAMIC_RESTITUTION)
                .clamp(0.0, 1.0),
            density: opts.density,
            color: opts.color,
            z: opts.z,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.w * 0.5, self.pos.y + self.h * 0.5)
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.h
    }

    /// Linear impulse through the center; statics absorb it.
    pub fn apply_impulse(&mut self, impulse: Vec2) {
        self.velocity += impulse * self.inv_mass;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_bodies_have_infinite_mass() {
        let b = Body::new_static(BodyId(1), 0.0, 0.0, 10.0, 10.0, &BodyOptions::default());
        assert_eq!(b.inv_mass, 0.0);
        assert!(b.is_static);
        assert_eq!(b.restitution, DEFAULT_STATIC_RESTITUTION);
    }

    #[test]
    fn dynamic_mass_follows_density_and_area() {
        let opts = BodyOptions::default().density(2.0);
        let b = Body::new_dynamic(BodyId(1), 0.0, 0.0, 10.0, 5.0, &opts);
        assert_eq!(b.mass, 100.0);
        assert!((b.inv_mass - 0.01).abs() < 1e-7);

        let tri = Body::new_dynamic(BodyId(2), 0.0, 0.0, 10.0, 5.0, &opts.shape(Shape::Triangle));
        assert_eq!(tri.mass, 50.0);
    }

    #[test]
    fn impulse_ignored_by_static() {
        let mut b = Body::new_static(BodyId(1), 0.0, 0.0, 10.0, 10.0, &BodyOptions::default());
        b.apply_impulse(Vec2::new(100.0, 100.0));
        assert_eq!(b.velocity, Vec2::ZERO);
    }

    #[test]
    fn degenerate_geometry_is_rejected() {
        assert!(check_geometry(0.0, 0.0, 10.0, 10.0, 0.0).is_ok());
        assert!(matches!(check_geometry(0.0, 0.0, 0.0, 10.0, 0.0), Err(EngineError::InvalidGeometry { .. })));
        assert!(check_geometry(0.0, 0.0, 10.0, -1.0, 0.0).is_err());
        assert!(check_geometry(f32::NAN, 0.0, 10.0, 10.0, 0.0).is_err());
        assert!(check_geometry(0.0, 0.0, 10.0, 10.0, f32::INFINITY).is_err());
    }

    #[test]
    fn only_dynamic_bodies_can_be_driven() {
        let opts = BodyOptions::default().driven(true);
        assert!(Body::new_dynamic(BodyId(1), 0.0, 0.0, 10.0, 10.0, &opts).driven);
        assert!(!Body::new_static(BodyId(2), 0.0, 0.0, 10.0, 10.0, &opts).driven);
    }

    #[test]
    fn rotation_is_normalized_on_creation() {
        let opts = BodyOptions::default().rotation(3.0 * std::f32::consts::PI);
        let b = Body::new_static(BodyId(1), 0.0, 0.0, 10.0, 10.0, &opts);
        assert!(b.rotation > -std::f32::consts::PI && b.rotation <= std::f32::consts::PI);
    }
}
