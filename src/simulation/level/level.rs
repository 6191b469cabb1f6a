use serde::{Deserialize, Serialize};

use crate::domain::{BodyOptions, Color, EngineError, Shape, DEFAULT_BRICK_COLOR};

use super::World;

fn default_color() -> Color {
    DEFAULT_BRICK_COLOR
}

/// One brick in the persisted level format
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LevelRecord {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    #[serde(default)]
    pub shape: Shape,
    #[serde(default = "default_color")]
    pub color: Color,
    #[serde(default)]
    pub rotation: f32,
    #[serde(default)]
    pub z: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restitution: Option<f32>,
}

impl LevelRecord {
    fn options(&self) -> BodyOptions {
        BodyOptions {
            shape: self.shape,
            color: self.color,
            rotation: self.rotation,
            z: self.z,
            density: self.density,
            restitution: self.restitution,
            ..BodyOptions::default()
        }
    }
}

pub(super) fn save_level(world: &World) -> Vec<LevelRecord> {
    world
        .brick_bodies()
        .map(|b| LevelRecord {
            x: b.pos.x,
            y: b.pos.y,
            w: b.w,
            h: b.h,
            shape: b.shape,
            color: b.color,
            rotation: b.rotation,
            z: b.z,
            density: b.density,
            restitution: Some(b.restitution),
        })
        .collect()
}

pub(super) fn load_level(world: &mut World, records: &[serde_json::Value]) -> usize {
    world.clear_bricks();

    let mut loaded = 0;
    for (idx, value) in records.iter().enumerate() {
        let created = LevelRecord::deserialize(value)
            .map_err(EngineError::from)
            .and_then(|r| world.create_static_body(r.x, r.y, r.w, r.h, &r.options()));
        match created {
            Ok(_) => loaded += 1,
            Err(e) => log::warn!("skipping level record {idx}: {e}"),
        }
    }

    log::info!("loaded {loaded} of {} level records", records.len());
    loaded
}

pub(super) fn level_to_json(world: &World) -> Result<String, EngineError> {
    Ok(serde_json::to_string(&save_level(world))?)
}

pub(super) fn level_from_json(world: &mut World, json: &str) -> Result<usize, EngineError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let serde_json::Value::Array(records) = value else {
        return Err(EngineError::LevelFormat);
    };
    Ok(load_level(world, &records))
}
