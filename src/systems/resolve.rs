//! Collision resolver - impulse response for a detected contact
//!
//! Positional correction pushes bodies apart by exactly the overlap (no
//! slop, no iteration here; the stepper re-runs detection instead). A body
//! standing on a static slope is lifted straight up instead of along the
//! normal, so resting bodies do not creep downhill. Velocity
//! is resolved with a single normal impulse, then contacts are classified by
//! normal direction for friction, ceiling damping and cosmetic torque.

use crate::core::Vec2;
use crate::domain::{Body, PhysicsConfig, ResolverMode};
use crate::systems::collision::Contact;
use crate::systems::geometry::vertices;

/// |normal.y| beyond this separates floors and ceilings from walls
const SURFACE_SLOPE: f32 = 0.3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactKind {
    /// `a` is standing on `b`
    Ground,
    /// `a` hit the underside of `b`
    Ceiling,
    Wall,
}

impl ContactKind {
    pub fn classify(normal: Vec2) -> Self {
        if normal.y < -SURFACE_SLOPE {
            ContactKind::Ground
        } else if normal.y > SURFACE_SLOPE {
            ContactKind::Ceiling
        } else {
            ContactKind::Wall
        }
    }
}

/// Resolve `contact` (normal pointing from `b` toward `a`) by mutating both
/// bodies. Static bodies are never moved.
pub fn resolve(a: &mut Body, b: &mut Body, contact: &Contact, cfg: &PhysicsConfig) -> ContactKind {
    let n = contact.normal;
    let kind = ContactKind::classify(n);
    let inv_sum = a.inv_mass + b.inv_mass;
    if inv_sum <= 0.0 {
        return kind;
    }

    // === Positional correction ===
    if kind == ContactKind::Ground && b.inv_mass == 0.0 {
        // Same separation along n; |n.y| > SURFACE_SLOPE here
        a.pos.y += contact.overlap / n.y;
    } else {
        let share_a = a.inv_mass / inv_sum;
        let share_b = b.inv_mass / inv_sum;
        a.pos += n * (contact.overlap * share_a);
        b.pos -= n * (contact.overlap * share_b);
    }

    match kind {
        ContactKind::Ground => {
            a.grounded = !a.is_static;
        }
        ContactKind::Ceiling => {
            b.grounded = !b.is_static;
        }
        ContactKind::Wall => {}
    }

    // === Normal impulse ===
    let rv = a.velocity - b.velocity;
    let vn = rv.dot(n);
    if vn > 0.0 {
        // Already separating
        return kind;
    }

    let restitution = if cfg.resolver == ResolverMode::Kinematic || -vn < cfg.resting_speed {
        0.0
    } else {
        a.restitution.min(b.restitution)
    };
    let j = -(1.0 + restitution) * vn / inv_sum;
    let impulse = n * j;
    a.apply_impulse(impulse);
    b.apply_impulse(-impulse);

    if cfg.resolver == ResolverMode::Kinematic {
        return kind;
    }

    match kind {
        // Controllers own the horizontal speed of driven bodies
        ContactKind::Ground if a.driven || b.driven => {}
        ContactKind::Ground => apply_friction(a, b, n, j, inv_sum, cfg.contact_friction),
        ContactKind::Ceiling => {
            if a.velocity.y < 0.0 {
                a.velocity.y *= cfg.ceiling_damping;
            }
            apply_torque(a, b, n, impulse, cfg.torque_scale);
        }
        ContactKind::Wall => apply_torque(a, b, n, impulse, cfg.torque_scale),
    }

    kind
}

/// Coulomb friction: cancel tangential slip, capped at `mu * j`.
fn apply_friction(a: &mut Body, b: &mut Body, n: Vec2, j: f32, inv_sum: f32, mu: f32) {
    let tangent = Vec2::new(-n.y, n.x);
    let vt = (a.velocity - b.velocity).dot(tangent);
    let max_jt = mu * j.abs();
    let jt = (-vt / inv_sum).clamp(-max_jt, max_jt);
    let friction = tangent * jt;
    a.apply_impulse(friction);
    b.apply_impulse(-friction);
}

/// Cosmetic spin for bodies that are already rotating. No inertia tensor:
/// the contact point is approximated by the body's support vertex.
fn apply_torque(a: &mut Body, b: &mut Body, n: Vec2, impulse: Vec2, scale: f32) {
    if a.angular_velocity != 0.0 && !a.is_static {
        let r = contact_offset(a, -n);
        a.angular_velocity += r.cross(impulse) * a.inv_mass * scale;
    }
    if b.angular_velocity != 0.0 && !b.is_static {
        let r = contact_offset(b, n);
        b.angular_velocity += r.cross(-impulse) * b.inv_mass * scale;
    }
}

/// Offset from the center to the furthest vertex along `dir`.
/// Circles (no vertices) fall back to the radius along `dir`.
fn contact_offset(body: &Body, dir: Vec2) -> Vec2 {
    let center = body.center();
    let mut best: Option<(f32, Vec2)> = None;
    for v in vertices(body) {
        let d = v.dot(dir);
        match best {
            Some((bd, _)) if bd >= d => {}
            _ => best = Some((d, v)),
        }
    }
    match best {
        Some((_, v)) => v - center,
        None => dir * (body.w.min(body.h) * 0.5),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BodyId, BodyOptions};

    fn dynamic(vx: f32, vy: f32) -> Body {
        let mut b = Body::new_dynamic(BodyId(1), 0.0, 0.0, 10.0, 10.0, &BodyOptions::default());
        b.velocity = Vec2::new(vx, vy);
        b
    }

    fn ground() -> Body {
        Body::new_static(BodyId(2), 0.0, 10.0, 100.0, 10.0, &BodyOptions::default())
    }

    fn up(overlap: f32) -> Contact {
        Contact { overlap, normal: Vec2::new(0.0, -1.0) }
    }

    #[test]
    fn landing_stops_and_grounds() {
        let mut a = dynamic(0.0, 40.0);
        let mut g = ground();
        let kind = resolve(&mut a, &mut g, &up(2.0), &PhysicsConfig::default());
        assert_eq!(kind, ContactKind::Ground);
        assert!(a.grounded);
        assert_eq!(a.pos.y, -2.0);
        assert!(a.velocity.y.abs() < 1e-3);
        assert_eq!(g.pos.y, 10.0);
        assert_eq!(g.velocity, Vec2::ZERO);
    }

    #[test]
    fn fast_impact_bounces_with_min_restitution() {
        let opts = BodyOptions::default().restitution(0.5);
        let mut a = Body::new_dynamic(BodyId(1), 0.0, 0.0, 10.0, 10.0, &opts);
        a.velocity = Vec2::new(0.0, 400.0);
        let mut g = Body::new_static(BodyId(2), 0.0, 10.0, 100.0, 10.0, &opts.clone().restitution(0.8));
        resolve(&mut a, &mut g, &up(1.0), &PhysicsConfig::default());
        assert!((a.velocity.y + 200.0).abs() < 1e-3);
    }

    #[test]
    fn kinematic_mode_never_bounces() {
        let opts = BodyOptions::default().restitution(1.0);
        let mut a = Body::new_dynamic(BodyId(1), 0.0, 0.0, 10.0, 10.0, &opts);
        a.velocity = Vec2::new(0.0, 400.0);
        let mut g = Body::new_static(BodyId(2), 0.0, 10.0, 100.0, 10.0, &opts);
        let cfg = PhysicsConfig { resolver: ResolverMode::Kinematic, ..PhysicsConfig::default() };
        resolve(&mut a, &mut g, &up(1.0), &cfg);
        assert!(a.velocity.y.abs() < 1e-3);
    }

    #[test]
    fn separating_bodies_keep_velocity() {
        let mut a = dynamic(0.0, -50.0);
        let mut g = ground();
        resolve(&mut a, &mut g, &up(1.0), &PhysicsConfig::default());
        assert_eq!(a.velocity.y, -50.0);
        assert_eq!(a.pos.y, -1.0);
    }

    #[test]
    fn ground_friction_slows_sliding() {
        let mut a = dynamic(100.0, 100.0);
        let mut g = ground();
        resolve(&mut a, &mut g, &up(1.0), &PhysicsConfig::default());
        assert!(a.velocity.x < 100.0);
        assert!(a.velocity.x > 0.0);
    }

    #[test]
    fn ceiling_damps_upward_motion() {
        let mut a = dynamic(0.0, -100.0);
        let mut ceiling = Body::new_static(BodyId(2), 0.0, -10.0, 100.0, 10.0, &BodyOptions::default());
        let contact = Contact { overlap: 1.0, normal: Vec2::new(0.0, 1.0) };
        let kind = resolve(&mut a, &mut ceiling, &contact, &PhysicsConfig::default());
        assert_eq!(kind, ContactKind::Ceiling);
        assert!(a.velocity.y > -1e-3);
        assert!(!a.grounded);
    }

    #[test]
    fn steep_ceiling_damps_what_is_left_of_upward_motion() {
        let n = Vec2::new(-0.9, 0.436).normalize_or(Vec2::ZERO);
        let contact = Contact { overlap: 0.5, normal: n };
        let hit = |ceiling_damping: f32| {
            let mut a = dynamic(-100.0, -400.0);
            let mut slab = Body::new_static(BodyId(2), -20.0, -20.0, 20.0, 20.0, &BodyOptions::default());
            let cfg = PhysicsConfig { ceiling_damping, ..PhysicsConfig::default() };
            let kind = resolve(&mut a, &mut slab, &contact, &cfg);
            assert_eq!(kind, ContactKind::Ceiling);
            a.velocity
        };

        let undamped = hit(1.0);
        let damped = hit(0.5);
        // The normal impulse alone leaves the body still rising
        assert!(undamped.y < -300.0, "vy {}", undamped.y);
        assert!((damped.y - undamped.y * 0.5).abs() < 1e-3);
        assert_eq!(damped.x, undamped.x);
    }

    #[test]
    fn resting_on_a_static_slope_lifts_straight_up() {
        let n = Vec2::new(0.2, -0.98).normalize_or(Vec2::ZERO);
        let mut a = dynamic(0.0, 0.0);
        let mut slope = ground();
        let kind = resolve(&mut a, &mut slope, &Contact { overlap: 1.0, normal: n }, &PhysicsConfig::default());
        assert_eq!(kind, ContactKind::Ground);
        assert_eq!(a.pos.x, 0.0);
        assert!((a.pos.y + 1.0 / n.y.abs()).abs() < 1e-5);
    }

    #[test]
    fn driven_bodies_skip_contact_friction() {
        let mut a = Body::new_dynamic(BodyId(1), 0.0, 0.0, 10.0, 10.0, &BodyOptions::default().driven(true));
        a.velocity = Vec2::new(300.0, 100.0);
        resolve(&mut a, &mut ground(), &up(1.0), &PhysicsConfig::default());
        assert_eq!(a.velocity.x, 300.0);
        assert!(a.velocity.y.abs() < 1e-3);
    }

    #[test]
    fn wall_hit_spins_rotating_bodies_only() {
        let cfg = PhysicsConfig::default();
        let wall = || Body::new_static(BodyId(2), 10.0, -50.0, 10.0, 100.0, &BodyOptions::default());
        let contact = Contact { overlap: 1.0, normal: Vec2::new(-1.0, 0.0) };

        let mut still = dynamic(200.0, 50.0);
        resolve(&mut still, &mut wall(), &contact, &cfg);
        assert_eq!(still.angular_velocity, 0.0);

        let mut spinning = dynamic(200.0, 50.0);
        spinning.angular_velocity = 1.0;
        let kind = resolve(&mut spinning, &mut wall(), &contact, &cfg);
        assert_eq!(kind, ContactKind::Wall);
        assert!(spinning.angular_velocity != 1.0);
        assert!(spinning.velocity.x.abs() < 1e-3);
    }

    #[test]
    fn dynamic_pair_splits_correction_by_mass() {
        let mut a = dynamic(0.0, 0.0);
        let mut b = dynamic(0.0, 0.0);
        b.pos = Vec2::new(0.0, 8.0);
        resolve(&mut a, &mut b, &up(2.0), &PhysicsConfig::default());
        assert_eq!(a.pos.y, -1.0);
        assert_eq!(b.pos.y, 9.0);
        assert!(a.grounded);
    }
}
