use thiserror::Error;
use crate::api::types::EntityId;

/// Errors surfaced at the engine boundary (loading data, addressing entities).
/// Frame stepping itself never fails.
#[derive(Debug, Error)]
pub enum TweenError {
    /// A JSON config or move request could not be parsed.
    #[error("failed to parse tween data: {0}")]
    Parse(#[from] serde_json::Error),
    /// A config parsed but holds a value the engine cannot run with.
    #[error("invalid tween config: {0}")]
    InvalidConfig(String),
    /// A move was requested for an entity that is not in the scene.
    #[error("entity {0:?} is not in the scene")]
    UnknownEntity(EntityId),
}
