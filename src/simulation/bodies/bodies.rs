use crate::domain::{check_geometry, Body, BodyId, BodyOptions, Drawable, EngineError};
use crate::systems::geometry::point_in_shape;

use super::World;

fn next_id(world: &mut World) -> BodyId {
    let id = BodyId(world.next_id);
    world.next_id = world.next_id.saturating_add(1);
    id
}

/// Static obstacle; lands in both the body list and the brick list.
/// Degenerate geometry is refused, the same rule the level loader applies.
pub fn create_static_body(
    world: &mut World,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    opts: &BodyOptions,
) -> Result<BodyId, EngineError> {
    check_geometry(x, y, w, h, opts.rotation)?;
    let id = next_id(world);
    let body = Body::new_static(id, x, y, w, h, opts);
    log::debug!("brick {} {:?} at ({x}, {y}) {w}x{h}", id.0, body.shape);
    world.bodies.push(body);
    world.bricks.push(id);
    Ok(id)
}

pub fn create_dynamic_body(
    world: &mut World,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    opts: &BodyOptions,
) -> Result<BodyId, EngineError> {
    check_geometry(x, y, w, h, opts.rotation)?;
    Ok(spawn_dynamic(world, x, y, w, h, opts))
}

/// Unchecked insert for callers that own their geometry (the player).
pub(super) fn spawn_dynamic(world: &mut World, x: f32, y: f32, w: f32, h: f32, opts: &BodyOptions) -> BodyId {
    let id = next_id(world);
    let body = Body::new_dynamic(id, x, y, w, h, opts);
    log::debug!("dynamic body {} {:?} at ({x}, {y}) mass {}", id.0, body.shape, body.mass);
    world.bodies.push(body);
    id
}

/// Remove from both lists. Keeps creation order of the remaining bodies.
pub fn remove_body(world: &mut World, id: BodyId) -> bool {
    world.bricks.retain(|b| *b != id);
    match world.bodies.iter().position(|b| b.id == id) {
        Some(idx) => {
            world.bodies.remove(idx);
            log::debug!("removed body {}", id.0);
            true
        }
        None => false,
    }
}

pub fn clear_bricks(world: &mut World) {
    let bricks = std::mem::take(&mut world.bricks);
    world.bodies.retain(|b| !bricks.contains(&b.id));
}

pub fn pick_body(world: &World, x: f32, y: f32) -> Option<BodyId> {
    world
        .bodies
        .iter()
        .filter(|b| point_in_shape(b, x, y))
        .max_by_key(|b| (b.z, b.id))
        .map(|b| b.id)
}

pub fn drawables_by_depth(world: &World) -> Vec<Drawable> {
    let mut sorted: Vec<&Body> = world.bodies.iter().collect();
    sorted.sort_by_key(|b| b.z);
    sorted.into_iter().map(Drawable::from).collect()
}
