/// Turns the host's absolute frame timestamps into per-frame deltas.
///
/// Tweens are resumed with "seconds since last frame"; browsers hand us a
/// monotonically increasing timestamp instead. The first frame yields a zero
/// delta. Deltas are capped at `max_delta`.
pub struct FrameClock {
    /// Timestamp of the previous frame, in seconds.
    last: Option<f64>,
    /// Upper bound for a single delta.
    max_delta: f32,
    /// Number of frames observed.
    frames: u64,
}

impl FrameClock {
    pub fn new(max_delta: f32) -> Self {
        Self {
            last: None,
            max_delta,
            frames: 0,
        }
    }

    /// Record a frame at `now` seconds. Returns the delta to feed the tweens.
    pub fn tick(&mut self, now: f64) -> f32 {
        let dt = match self.last {
            Some(last) => self.clamp((now - last) as f32),
            None => 0.0,
        };
        self.last = Some(now);
        self.frames += 1;
        dt
    }

    /// Record a frame from a millisecond timestamp (`requestAnimationFrame`).
    pub fn tick_ms(&mut self, now_ms: f64) -> f32 {
        self.tick(now_ms / 1000.0)
    }

    /// Clamp a delta the host measured itself. Never below zero, even when
    /// the cap is not a usable number.
    pub fn clamp(&self, dt: f32) -> f32 {
        dt.min(self.max_delta).max(0.0)
    }

    /// Forget the previous timestamp, e.g. after the host was paused.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Number of frames seen since construction.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// The configured delta cap.
    pub fn max_delta(&self) -> f32 {
        self.max_delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_is_zero() {
        let mut clock = FrameClock::new(0.25);
        assert_eq!(clock.tick(12.0), 0.0);
        assert_eq!(clock.frames(), 1);
    }

    #[test]
    fn delta_between_frames() {
        let mut clock = FrameClock::new(0.25);
        clock.tick_ms(1000.0);
        let dt = clock.tick_ms(1016.0);
        assert!((dt - 0.016).abs() < 1e-6, "dt was {}", dt);
    }

    #[test]
    fn caps_large_gaps() {
        let mut clock = FrameClock::new(0.25);
        clock.tick(0.0);
        assert_eq!(clock.tick(5.0), 0.25);
    }

    #[test]
    fn backwards_time_is_zero() {
        let mut clock = FrameClock::new(0.25);
        clock.tick(2.0);
        assert_eq!(clock.tick(1.0), 0.0);
    }

    #[test]
    fn reset_restarts_from_zero() {
        let mut clock = FrameClock::new(0.25);
        clock.tick(1.0);
        clock.reset();
        assert_eq!(clock.tick(1.1), 0.0);
    }

    #[test]
    fn clamp_host_delta() {
        let clock = FrameClock::new(0.1);
        assert_eq!(clock.clamp(0.5), 0.1);
        assert_eq!(clock.clamp(-1.0), 0.0);
        assert_eq!(clock.clamp(0.05), 0.05);
    }

    #[test]
    fn bad_cap_does_not_panic() {
        let clock = FrameClock::new(-1.0);
        assert_eq!(clock.clamp(0.016), 0.0);

        let mut clock = FrameClock::new(f32::NAN);
        assert_eq!(clock.clamp(0.016), 0.016);
        assert_eq!(clock.clamp(-0.5), 0.0);
        clock.tick(0.0);
        assert_eq!(clock.tick(0.5), 0.5);
    }
}
