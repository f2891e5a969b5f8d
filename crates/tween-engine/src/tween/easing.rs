// tween/easing.rs
//
// Pure easing functions for position tweens.
// No dependencies on Entity/Scene — just math.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Easing curve applied to a segment's normalized time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "EaseTag")]
pub enum EaseType {
    /// Constant velocity (no easing).
    #[default]
    Linear,
    /// Slow start (quadratic).
    EaseIn,
    /// Slow end (quadratic).
    EaseOut,
    /// Slow start and end.
    EaseInOut,
}

impl EaseType {
    /// Every easing mode, in index order.
    pub const ALL: [EaseType; 4] = [
        EaseType::Linear,
        EaseType::EaseIn,
        EaseType::EaseOut,
        EaseType::EaseInOut,
    ];

    /// Apply the easing function to a normalized time value `t` in [0, 1].
    /// Every mode maps 0 to 0 and 1 to 1 exactly. `t` is not clamped.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        match self {
            EaseType::Linear => t,
            EaseType::EaseIn => t * t,
            EaseType::EaseOut => t * (2.0 - t),
            EaseType::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }

    /// Resolve a numeric tag coming from outside Rust (JS, config).
    /// Unknown indices fall back to `Linear`.
    pub fn from_index(index: u32) -> Self {
        match index {
            0 => EaseType::Linear,
            1 => EaseType::EaseIn,
            2 => EaseType::EaseOut,
            3 => EaseType::EaseInOut,
            other => {
                log::debug!("unknown ease index {}, using Linear", other);
                EaseType::Linear
            }
        }
    }

    /// Resolve a name such as `"EaseInOut"` or `"ease_in_out"`.
    /// Unknown names fall back to `Linear`.
    pub fn from_name(name: &str) -> Self {
        let key: String = name
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "linear" => EaseType::Linear,
            "easein" | "in" => EaseType::EaseIn,
            "easeout" | "out" => EaseType::EaseOut,
            "easeinout" | "inout" => EaseType::EaseInOut,
            _ => {
                log::debug!("unknown ease name {:?}, using Linear", name);
                EaseType::Linear
            }
        }
    }

    /// Numeric tag for this mode (inverse of `from_index`).
    pub fn index(self) -> u32 {
        match self {
            EaseType::Linear => 0,
            EaseType::EaseIn => 1,
            EaseType::EaseOut => 2,
            EaseType::EaseInOut => 3,
        }
    }
}

impl From<String> for EaseType {
    fn from(name: String) -> Self {
        EaseType::from_name(&name)
    }
}

/// Any JSON value accepted where an `EaseType` is expected.
#[derive(Deserialize)]
#[serde(untagged)]
enum EaseTag {
    Index(i64),
    Name(String),
    Other(serde::de::IgnoredAny),
}

impl From<EaseTag> for EaseType {
    fn from(tag: EaseTag) -> Self {
        match tag {
            EaseTag::Index(index) => match u32::try_from(index) {
                Ok(index) => EaseType::from_index(index),
                Err(_) => {
                    log::debug!("unknown ease index {}, using Linear", index);
                    EaseType::Linear
                }
            },
            EaseTag::Name(name) => EaseType::from(name),
            EaseTag::Other(_) => {
                log::debug!("unrecognized ease value, using Linear");
                EaseType::Linear
            }
        }
    }
}

/// Evaluate `mode` at `t`. Same as `mode.apply(t)`.
#[inline]
pub fn evaluate(mode: EaseType, t: f32) -> f32 {
    mode.apply(t)
}

// ── Interpolation helpers ────────────────────────────────────────────────

/// Component-wise linear interpolation. Extrapolates when `t` leaves [0, 1].
#[inline]
pub fn lerp_vec3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a + (b - a) * t
}

/// Interpolate Vec3 with easing.
#[inline]
pub fn ease_vec3(a: Vec3, b: Vec3, t: f32, easing: EaseType) -> Vec3 {
    lerp_vec3(a, b, easing.apply(t))
}
