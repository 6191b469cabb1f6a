use crate::domain::Body;
use crate::systems::collision::detect;
use crate::systems::integrate::{clamp_to_floor, clamp_to_world_sides, integrate, snap_small_velocities};
use crate::systems::resolve::resolve;

use super::World;

/// What one call to [`step`] did
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    pub bodies_integrated: u32,
    pub contacts_resolved: u32,
    pub resolution_passes: u32,
}

/// Advance every dynamic body by exactly `dt` seconds.
///
/// Per body: integrate, clamp to the world sides and floor, then resolve
/// against every static body in up to `collision_iterations` passes (stopping
/// early once a pass finds nothing), then snap residual velocities.
/// Never fails; unknown shapes simply never collide.
pub fn step(world: &mut World, dt: f32) -> StepReport {
    let World { width, height, bodies, config, .. } = world;
    let mut report = StepReport::default();

    let statics: Vec<usize> = bodies
        .iter()
        .enumerate()
        .filter(|(_, b)| b.is_static)
        .map(|(i, _)| i)
        .collect();

    for i in 0..bodies.len() {
        if bodies[i].is_static {
            continue;
        }
        report.bodies_integrated += 1;

        {
            let body = &mut bodies[i];
            integrate(body, config, dt);
            clamp_to_world_sides(body, *width, config);
            clamp_to_floor(body, *height, config, dt);
        }

        // Bounded fixed-point iteration stands in for a simultaneous solver.
        for _ in 0..config.collision_iterations {
            report.resolution_passes += 1;
            let mut hits = 0;
            for &j in statics.iter() {
                let (body, other) = pair_mut(bodies, i, j);
                if let Some(contact) = detect(body, other) {
                    resolve(body, other, &contact, config);
                    hits += 1;
                }
            }
            report.contacts_resolved += hits;
            if hits == 0 {
                break;
            }
        }

        snap_small_velocities(&mut bodies[i], config);
    }

    report
}

/// Two distinct mutable bodies from one slice
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert_ne!(i, j);
    if i < j {
        let (head, tail) = bodies.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = bodies.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}
