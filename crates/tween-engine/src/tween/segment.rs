// tween/segment.rs
//
// One interpolation leg: start → end over a duration, one position write per
// frame, then an exact write of `end`.
//
// The driver is an explicit resumable state machine. The host calls `start`
// once, then `resume(dt)` once per frame until it reports `Finished`.

use glam::Vec3;
use super::easing::{EaseType, ease_vec3};
use super::target::Positioned;

/// A single interpolation task. Knows nothing about the sequence driving it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Vec3,
    pub end: Vec3,
    /// Duration in seconds. Non-positive durations complete immediately.
    pub duration: f32,
    pub easing: EaseType,
}

impl Segment {
    pub fn new(start: Vec3, end: Vec3, duration: f32, easing: EaseType) -> Self {
        Self { start, end, duration, easing }
    }

    /// The same leg travelled the other way.
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start, self.duration, self.easing)
    }

    /// Position at `elapsed` seconds into the segment, without the final snap.
    pub fn sample(&self, elapsed: f32) -> Vec3 {
        ease_vec3(self.start, self.end, elapsed / self.duration, self.easing)
    }
}

/// Result of driving a segment for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentState {
    /// Applied an interpolated position; waiting for the next frame.
    Running,
    /// Applied the exact end position. Further resumes do nothing.
    Finished,
}

/// Drives a `Segment` frame by frame.
#[derive(Debug, Clone)]
pub struct SegmentDriver {
    segment: Segment,
    elapsed: f32,
    state: Option<SegmentState>,
}

impl SegmentDriver {
    pub fn new(segment: Segment) -> Self {
        Self {
            segment,
            elapsed: 0.0,
            state: None,
        }
    }

    /// First frame: elapsed is zero, so this writes `start` (or `end` right
    /// away when the duration is not positive).
    pub fn start<P: Positioned + ?Sized>(&mut self, target: &mut P) -> SegmentState {
        if self.state.is_some() {
            log::debug!("segment already started, ignoring start");
            return self.state();
        }
        self.elapsed = 0.0;
        if self.segment.duration.is_nan() || self.segment.duration <= 0.0 {
            log::warn!(
                "segment duration {} is not positive, snapping to end",
                self.segment.duration
            );
        }
        self.step(target)
    }

    /// Resume after a frame of `dt` seconds.
    pub fn resume<P: Positioned + ?Sized>(&mut self, target: &mut P, dt: f32) -> SegmentState {
        match self.state {
            None => self.start(target),
            Some(SegmentState::Finished) => SegmentState::Finished,
            Some(SegmentState::Running) => {
                self.elapsed += dt;
                self.step(target)
            }
        }
    }

    fn step<P: Positioned + ?Sized>(&mut self, target: &mut P) -> SegmentState {
        let state = if self.elapsed < self.segment.duration {
            let pos = self.segment.sample(self.elapsed);
            log::trace!("segment t={:.4} pos={:?}", self.elapsed / self.segment.duration, pos);
            target.set_position(pos);
            SegmentState::Running
        } else {
            // Interpolation only approaches `end`; land on it exactly.
            target.set_position(self.segment.end);
            SegmentState::Finished
        };
        self.state = Some(state);
        state
    }

    /// Current state. A driver that was never started reports `Running`.
    pub fn state(&self) -> SegmentState {
        self.state.unwrap_or(SegmentState::Running)
    }

    pub fn is_finished(&self) -> bool {
        self.state == Some(SegmentState::Finished)
    }

    /// Seconds accumulated since `start`.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Normalized progress [0, 1].
    pub fn progress(&self) -> f32 {
        if self.is_finished() || self.segment.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.segment.duration).clamp(0.0, 1.0)
        }
    }

    pub fn segment(&self) -> &Segment {
        &self.segment
    }
}
