pub mod api;
pub mod core;
pub mod components;
pub mod tween;

// Re-export key types at crate root for convenience
pub use crate::api::config::TweenConfig;
pub use crate::api::error::TweenError;
pub use crate::api::types::{EntityId, TweenId};
pub use crate::components::entity::Entity;
pub use crate::core::scene::Scene;
pub use crate::core::time::FrameClock;
pub use crate::tween::{
    Animator, Finished, TweenHandle,
    EaseType, evaluate, lerp_vec3, ease_vec3,
    Segment, SegmentDriver, SegmentState,
    CancelToken, LoopMode, Sequence, SequenceState, TaskStatus,
    Positioned,
    MoveRequest, MoveTask, move_to, move_with_ease,
};
