use crate::core::Vec2;

/// Projection interval of a shape onto an axis
#[derive(Clone, Copy, Debug)]
pub(super) struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Penetration along the axis, or `None` if the intervals are separated.
    /// Touching intervals count as separated.
    #[inline]
    pub fn overlap(&self, other: &Interval) -> Option<f32> {
        if self.max <= other.min || other.max <= self.min {
            return None;
        }
        Some((self.max - other.min).min(other.max - self.min))
    }
}

pub(super) fn project_polygon(verts: &[Vec2], axis: Vec2) -> Interval {
    let mut min = verts[0].dot(axis);
    let mut max = min;
    for v in verts.iter().skip(1) {
        let p = v.dot(axis);
        if p < min {
            min = p;
        }
        if p > max {
            max = p;
        }
    }
    Interval { min, max }
}

pub(super) fn project_circle(center: Vec2, radius: f32, axis: Vec2) -> Interval {
    let c = center.dot(axis);
    Interval { min: c - radius, max: c + radius }
}

/// Unit edge normals of a polygon, one per edge.
pub(super) fn edge_normals(verts: &[Vec2]) -> impl Iterator<Item = Vec2> + '_ {
    let n = verts.len();
    (0..n).map(move |i| {
        let edge = verts[(i + 1) % n] - verts[i];
        edge.perp().normalize_or(Vec2::DEFAULT_NORMAL)
    })
}

/// Smallest penetration over all axes, or `None` as soon as one separates.
pub(super) fn min_overlap_axis<F>(axes: impl Iterator<Item = Vec2>, mut project: F) -> Option<(f32, Vec2)>
where
    F: FnMut(Vec2) -> (Interval, Interval),
{
    let mut best: Option<(f32, Vec2)> = None;
    for axis in axes {
        let (a, b) = project(axis);
        let depth = a.overlap(&b)?;
        match best {
            Some((d, _)) if d <= depth => {}
            _ => best = Some((depth, axis)),
        }
    }
    best
}
