// tween/sequence.rs
//
// Composes segment drivers into single-shot or ping-pong moves.
//
//   Forward --(done, Once)-----> Done
//   Forward --(done, PingPong)-> Backward --(done)--> Forward ...
//
// A finished segment ends its frame. The next segment starts on the following
// resume, so two segments never write in the same frame. The cancel token is
// checked at that boundary.

use std::cell::Cell;
use std::rc::Rc;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use super::easing::EaseType;
use super::segment::{Segment, SegmentDriver, SegmentState};
use super::target::Positioned;

/// What happens when the forward segment completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LoopMode {
    /// Stop after one forward segment.
    #[default]
    Once,
    /// Alternate forward and backward forever.
    PingPong,
}

impl LoopMode {
    pub fn from_pingpong(pingpong: bool) -> Self {
        if pingpong { LoopMode::PingPong } else { LoopMode::Once }
    }
}

/// Which leg a sequence is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceState {
    /// begin → end
    Forward,
    /// end → begin
    Backward,
    /// Terminal.
    Done,
}

/// Outcome of resuming a task for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    /// Still moving; resume again next frame.
    Running,
    /// Single-shot move reached its end.
    Completed,
    /// Stopped through its cancel token. The target keeps its last position.
    Cancelled,
}

impl TaskStatus {
    pub fn is_running(self) -> bool {
        self == TaskStatus::Running
    }
}

/// Shared flag for stopping a sequence from outside.
/// Clones observe the same flag. Single-threaded, like the frame loop.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// A move, possibly repeating, built from segments driven one at a time.
#[derive(Debug, Clone)]
pub struct Sequence {
    /// The forward leg; the backward leg is its reverse.
    leg: Segment,
    loop_mode: LoopMode,
    state: SequenceState,
    /// `None` between segments: the next one starts on the next resume.
    driver: Option<SegmentDriver>,
    token: CancelToken,
    cancelled: bool,
    segments_completed: u32,
}

impl Sequence {
    pub fn new(
        begin: Vec3,
        end: Vec3,
        duration: f32,
        loop_mode: LoopMode,
        easing: EaseType,
    ) -> Self {
        Self {
            leg: Segment::new(begin, end, duration, easing),
            loop_mode,
            state: SequenceState::Forward,
            driver: None,
            token: CancelToken::new(),
            cancelled: false,
            segments_completed: 0,
        }
    }

    /// Observe an existing token instead of a fresh one.
    pub fn with_token(mut self, token: CancelToken) -> Self {
        self.token = token;
        self
    }

    /// Handle for cancelling this sequence.
    pub fn cancel_token(&self) -> CancelToken {
        self.token.clone()
    }

    /// Drive the first frame: the forward segment writes `begin`.
    pub fn start<P: Positioned + ?Sized>(&mut self, target: &mut P) -> TaskStatus {
        if self.state == SequenceState::Forward
            && self.driver.is_none()
            && self.segments_completed == 0
        {
            self.begin_segment(target);
        }
        self.status()
    }

    /// Resume after a frame of `dt` seconds.
    ///
    /// A cancel raised mid-segment is honored once that segment finishes.
    /// Use `cancel` to stop immediately.
    pub fn resume<P: Positioned + ?Sized>(&mut self, target: &mut P, dt: f32) -> TaskStatus {
        if self.state == SequenceState::Done {
            return self.status();
        }

        match self.driver.as_mut() {
            Some(driver) => {
                if driver.resume(target, dt) == SegmentState::Finished {
                    self.driver = None;
                    self.advance();
                }
            }
            None => self.begin_segment(target),
        }

        self.status()
    }

    /// Whether someone raised this sequence's cancel token.
    pub fn cancel_requested(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Stop now, without touching the target.
    pub fn cancel(&mut self) {
        if self.state != SequenceState::Done {
            log::debug!(
                "sequence cancelled in {:?} after {} segments",
                self.state,
                self.segments_completed
            );
            self.state = SequenceState::Done;
            self.cancelled = true;
            self.driver = None;
        }
        self.token.cancel();
    }

    fn begin_segment<P: Positioned + ?Sized>(&mut self, target: &mut P) {
        if self.token.is_cancelled() {
            self.cancel();
            return;
        }

        let segment = match self.state {
            SequenceState::Forward => self.leg,
            SequenceState::Backward => self.leg.reversed(),
            SequenceState::Done => return,
        };

        let mut driver = SegmentDriver::new(segment);
        if driver.start(target) == SegmentState::Finished {
            self.advance();
        } else {
            self.driver = Some(driver);
        }
    }

    fn advance(&mut self) {
        self.segments_completed += 1;
        let next = match (self.state, self.loop_mode) {
            (SequenceState::Forward, LoopMode::Once) => SequenceState::Done,
            (SequenceState::Forward, LoopMode::PingPong) => SequenceState::Backward,
            (SequenceState::Backward, _) => SequenceState::Forward,
            (SequenceState::Done, _) => SequenceState::Done,
        };
        log::debug!("sequence {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    pub fn status(&self) -> TaskStatus {
        match self.state {
            SequenceState::Done if self.cancelled => TaskStatus::Cancelled,
            SequenceState::Done => TaskStatus::Completed,
            _ => TaskStatus::Running,
        }
    }

    pub fn state(&self) -> SequenceState {
        self.state
    }

    pub fn loop_mode(&self) -> LoopMode {
        self.loop_mode
    }

    /// The forward segment.
    pub fn segment(&self) -> &Segment {
        &self.leg
    }

    /// Number of segments driven to their end position.
    pub fn segments_completed(&self) -> u32 {
        self.segments_completed
    }

    /// Whether the sequence sits between two segments.
    pub fn at_boundary(&self) -> bool {
        self.driver.is_none()
    }
}
