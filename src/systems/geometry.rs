//! Geometry kernel - world-space outlines of bodies
//!
//! Polygon shapes are defined in a normalized unit box, rotated about the
//! box center (0.5, 0.5), then scaled by (w, h) and translated by (x, y).
//! The renderer uses the exact same transform for a given rotation value, so
//! collision outlines and drawn sprites never drift apart.

use crate::core::Vec2;
use crate::domain::{effective_radius, Body, Shape};

const RECT_UNIT: [Vec2; 4] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(0.0, 1.0),
];

/// Flat-bottomed: apex at top center
const TRIANGLE_UNIT: [Vec2; 3] = [
    Vec2::new(0.5, 0.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(0.0, 1.0),
];

/// Collision outline of a body
#[derive(Clone, Debug, PartialEq)]
pub enum Outline {
    Circle { center: Vec2, radius: f32 },
    Polygon(Vec<Vec2>),
    /// Unknown shape tag: nothing to collide with
    Empty,
}

/// Map a normalized point through the body transform.
#[inline]
pub fn transform_unit_point(p: Vec2, pos: Vec2, w: f32, h: f32, rotation: f32) -> Vec2 {
    let local = Vec2::new(p.x - 0.5, p.y - 0.5).rotate(rotation);
    Vec2::new(pos.x + (local.x + 0.5) * w, pos.y + (local.y + 0.5) * h)
}

fn unit_vertices(shape: Shape) -> &'static [Vec2] {
    match shape {
        Shape::Rect => &RECT_UNIT,
        Shape::Triangle => &TRIANGLE_UNIT,
        Shape::Circle | Shape::Unknown => &[],
    }
}

/// World-space vertices for rect and triangle bodies; empty for everything else.
pub fn vertices(body: &Body) -> Vec<Vec2> {
    shape_vertices(body.shape, body.pos, body.w, body.h, body.rotation)
}

pub fn shape_vertices(shape: Shape, pos: Vec2, w: f32, h: f32, rotation: f32) -> Vec<Vec2> {
    unit_vertices(shape)
        .iter()
        .map(|&p| transform_unit_point(p, pos, w, h, rotation))
        .collect()
}

pub fn outline(body: &Body) -> Outline {
    match body.shape {
        Shape::Circle => Outline::Circle {
            center: body.center(),
            radius: effective_radius(body.w, body.h),
        },
        Shape::Rect | Shape::Triangle => Outline::Polygon(vertices(body)),
        Shape::Unknown => Outline::Empty,
    }
}

/// Hit test for editor picking, using the collision geometry.
pub fn point_in_shape(body: &Body, x: f32, y: f32) -> bool {
    let p = Vec2::new(x, y);
    match outline(body) {
        Outline::Circle { center, radius } => (p - center).length_squared() <= radius * radius,
        Outline::Polygon(verts) => point_in_convex(&verts, p),
        Outline::Empty => false,
    }
}

/// Works for either winding: the point must sit on the same side of every edge.
fn point_in_convex(verts: &[Vec2], p: Vec2) -> bool {
    if verts.len() < 3 {
        return false;
    }
    let mut sign = 0.0f32;
    for i in 0..verts.len() {
        let a = verts[i];
        let b = verts[(i + 1) % verts.len()];
        let c = (b - a).cross(p - a);
        if c == 0.0 {
            continue;
        }
        if sign == 0.0 {
            sign = c.signum();
        } else if c.signum() != sign {
            return false;
        }
    }
    true
}
