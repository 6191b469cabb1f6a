//! Collision detector - pairwise shape tests
//!
//! Circle vs circle is a distance test. Everything involving a polygon uses
//! the Separating Axis Theorem: any axis on which the projections do not
//! overlap proves separation; otherwise the axis with the smallest overlap
//! becomes the contact normal.
//!
//! Convention: the normal points from `b` toward `a`, and `overlap` is the
//! distance `a` must move along it to separate.

mod sat;

use crate::core::Vec2;
use crate::domain::Body;
use crate::systems::geometry::{outline, Outline};

use sat::{edge_normals, min_overlap_axis, project_circle, project_polygon};

/// Result of a successful overlap test
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    /// Minimum translation distance
    pub overlap: f32,
    /// Unit vector from `b` toward `a`
    pub normal: Vec2,
}

/// Test two bodies for overlap. Touching shapes are not colliding.
pub fn detect(a: &Body, b: &Body) -> Option<Contact> {
    match (outline(a), outline(b)) {
        (Outline::Circle { center: ca, radius: ra }, Outline::Circle { center: cb, radius: rb }) => {
            circle_circle(ca, ra, cb, rb)
        }
        (Outline::Circle { center, radius }, Outline::Polygon(verts)) => {
            circle_polygon(center, radius, &verts, b.center())
        }
        (Outline::Polygon(verts), Outline::Circle { center, radius }) => {
            circle_polygon(center, radius, &verts, a.center()).map(|c| Contact {
                overlap: c.overlap,
                normal: -c.normal,
            })
        }
        (Outline::Polygon(va), Outline::Polygon(vb)) => {
            polygon_polygon(&va, a.center(), &vb, b.center())
        }
        _ => None,
    }
}

fn circle_circle(ca: Vec2, ra: f32, cb: Vec2, rb: f32) -> Option<Contact> {
    let delta = ca - cb;
    let dist = delta.length();
    let sum_r = ra + rb;
    if dist >= sum_r {
        return None;
    }
    Some(Contact {
        overlap: sum_r - dist,
        normal: delta.normalize_or(Vec2::DEFAULT_NORMAL),
    })
}

/// Normal points from the polygon toward the circle.
fn circle_polygon(center: Vec2, radius: f32, verts: &[Vec2], poly_center: Vec2) -> Option<Contact> {
    if verts.len() < 3 {
        return None;
    }

    // Edge normals alone miss corner contacts; add the axis to the nearest vertex.
    let nearest = verts
        .iter()
        .copied()
        .min_by(|p, q| {
            (*p - center)
                .length_squared()
                .total_cmp(&(*q - center).length_squared())
        })
        .unwrap_or(poly_center);
    let vertex_axis = (nearest - center).normalize_or(Vec2::DEFAULT_NORMAL);

    let axes = edge_normals(verts).chain(std::iter::once(vertex_axis));
    let (overlap, axis) = min_overlap_axis(axes, |axis| {
        (project_circle(center, radius, axis), project_polygon(verts, axis))
    })?;

    Some(Contact {
        overlap,
        normal: orient(axis, center - poly_center),
    })
}

fn polygon_polygon(va: &[Vec2], ca: Vec2, vb: &[Vec2], cb: Vec2) -> Option<Contact> {
    if va.len() < 3 || vb.len() < 3 {
        return None;
    }

    let axes = edge_normals(va).chain(edge_normals(vb));
    let (overlap, axis) = min_overlap_axis(axes, |axis| {
        (project_polygon(va, axis), project_polygon(vb, axis))
    })?;

    // Whichever edge produced the axis, point it from b toward a.
    Some(Contact {
        overlap,
        normal: orient(axis, ca - cb),
    })
}

#[inline]
fn orient(axis: Vec2, b_to_a: Vec2) -> Vec2 {
    if axis.dot(b_to_a) < 0.0 {
        -axis
    } else {
        axis
    }
}
