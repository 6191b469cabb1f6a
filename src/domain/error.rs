use super::body::BodyId;

/// Failures surfaced to callers. Stepping itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("level must be a JSON array of brick records")]
    LevelFormat,
    #[error("body geometry must be finite with positive size (got {w}x{h})")]
    InvalidGeometry { w: f32, h: f32 },
    #[error("no body with id {}", .0 .0)]
    UnknownBody(BodyId),
}
