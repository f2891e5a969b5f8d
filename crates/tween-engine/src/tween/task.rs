// tween/task.rs
//
// Public entry points: bind a target to a sequence and hand the caller a task
// to resume once per frame.
//
// Usage:
//   let mut task = move_with_ease(&mut pos, begin, end, 1.0, true, EaseType::EaseInOut);
//   let stop = task.cancel_token();
//   while task.tick(dt).is_running() { /* wait for next frame */ }

use glam::Vec3;
use serde::{Deserialize, Serialize};
use super::easing::EaseType;
use super::sequence::{CancelToken, LoopMode, Sequence, SequenceState, TaskStatus};
use super::target::Positioned;

/// Linear move. Same as `move_with_ease(.., EaseType::Linear)`.
pub fn move_to<T: Positioned>(
    target: T,
    begin: Vec3,
    end: Vec3,
    duration: f32,
    pingpong: bool,
) -> MoveTask<T> {
    move_with_ease(target, begin, end, duration, pingpong, EaseType::Linear)
}

/// Move `target` from `begin` to `end` over `duration` seconds.
///
/// The first frame (position = `begin`) is applied before this returns.
/// With `pingpong` the task runs until cancelled.
pub fn move_with_ease<T: Positioned>(
    target: T,
    begin: Vec3,
    end: Vec3,
    duration: f32,
    pingpong: bool,
    easing: EaseType,
) -> MoveTask<T> {
    let sequence = Sequence::new(begin, end, duration, LoopMode::from_pingpong(pingpong), easing);
    MoveTask::new(target, sequence)
}

/// A running move bound to its target.
#[derive(Debug)]
pub struct MoveTask<T: Positioned> {
    target: T,
    sequence: Sequence,
}

impl<T: Positioned> MoveTask<T> {
    /// Bind `sequence` to `target` and drive its first frame.
    pub fn new(mut target: T, mut sequence: Sequence) -> Self {
        sequence.start(&mut target);
        Self { target, sequence }
    }

    /// Start a move described by a `MoveRequest`.
    pub fn from_request(target: T, request: &MoveRequest) -> Self {
        Self::new(target, request.to_sequence())
    }

    /// Advance one frame of `dt` seconds.
    ///
    /// A raised cancel token stops the task before anything is written.
    pub fn tick(&mut self, dt: f32) -> TaskStatus {
        if self.sequence.cancel_requested() {
            self.sequence.cancel();
            return self.sequence.status();
        }
        self.sequence.resume(&mut self.target, dt)
    }

    /// Stop immediately. The target keeps its last position.
    pub fn cancel(&mut self) {
        self.sequence.cancel();
    }

    /// Token for cancelling from elsewhere (UI handler, another system).
    pub fn cancel_token(&self) -> CancelToken {
        self.sequence.cancel_token()
    }

    pub fn status(&self) -> TaskStatus {
        self.sequence.status()
    }

    pub fn state(&self) -> SequenceState {
        self.sequence.state()
    }

    pub fn is_running(&self) -> bool {
        self.status().is_running()
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    /// Give the target handle back, ending the task.
    pub fn into_target(self) -> T {
        self.target
    }
}

/// Data description of a move, as loaded from JSON.
///
/// ```json
/// { "begin": [1, 0, 0], "end": [2, 1, 1], "duration": 1.0, "pingpong": true, "ease": "EaseInOut" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub begin: Vec3,
    pub end: Vec3,
    /// Seconds per segment.
    pub duration: f32,
    #[serde(default)]
    pub pingpong: bool,
    /// Unknown names resolve to `Linear`.
    #[serde(default)]
    pub ease: EaseType,
}

impl MoveRequest {
    /// Single-shot linear move.
    pub fn new(begin: Vec3, end: Vec3, duration: f32) -> Self {
        Self {
            begin,
            end,
            duration,
            pingpong: false,
            ease: EaseType::Linear,
        }
    }

    pub fn with_pingpong(mut self, pingpong: bool) -> Self {
        self.pingpong = pingpong;
        self
    }

    pub fn with_ease(mut self, ease: EaseType) -> Self {
        self.ease = ease;
        self
    }

    /// Parse a request from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn loop_mode(&self) -> LoopMode {
        LoopMode::from_pingpong(self.pingpong)
    }

    /// Build the (not yet started) sequence for this request.
    pub fn to_sequence(&self) -> Sequence {
        Sequence::new(self.begin, self.end, self.duration, self.loop_mode(), self.ease)
    }
}
