// tween/mod.rs
//
// Position tweening: easing curves, per-frame segment drivers, and the
// sequences that chain them into single-shot or ping-pong moves.
//
// Layers, leaves first: easing → segment → sequence → task / animator.

pub mod animator;
pub mod easing;
pub mod segment;
pub mod sequence;
pub mod target;
pub mod task;

pub use animator::{Animator, Finished, TweenHandle};
pub use easing::{EaseType, evaluate, lerp_vec3, ease_vec3};
pub use segment::{Segment, SegmentDriver, SegmentState};
pub use sequence::{CancelToken, LoopMode, Sequence, SequenceState, TaskStatus};
pub use target::Positioned;
pub use task::{MoveRequest, MoveTask, move_to, move_with_ease};
