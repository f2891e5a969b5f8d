use serde::{Deserialize, Serialize};
use crate::api::error::TweenError;

/// Engine configuration, provided by the host.
/// Loaded from JSON at startup; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TweenConfig {
    /// Largest frame delta (seconds) handed to tweens in one tick (default: 0.25).
    pub max_frame_delta: f32,
    /// Initial entity capacity of the scene (default: 256).
    pub entity_capacity: usize,
    /// Initial capacity of the tween registry (default: 64).
    pub tween_capacity: usize,
}

impl Default for TweenConfig {
    fn default() -> Self {
        Self {
            max_frame_delta: 0.25,
            entity_capacity: 256,
            tween_capacity: 64,
        }
    }
}

impl TweenConfig {
    /// Parse a config from a JSON string and validate it.
    pub fn from_json(json: &str) -> Result<Self, TweenError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// The delta cap must be a positive, finite number of seconds.
    pub fn validate(&self) -> Result<(), TweenError> {
        if !self.max_frame_delta.is_finite() || self.max_frame_delta <= 0.0 {
            return Err(TweenError::InvalidConfig(format!(
                "max_frame_delta must be positive and finite, got {}",
                self.max_frame_delta
            )));
        }
        Ok(())
    }
}
