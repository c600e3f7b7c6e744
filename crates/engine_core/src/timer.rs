//! One-shot deadlines polled against the frame clock.
//!
//! There is no background thread: the owner checks `is_due` once per frame and
//! cancels by dropping the timer, so a torn-down owner can never be called back.

use crate::time::Millis;

/// A single pending deadline on the millisecond timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OneShotTimer {
    started_at: Millis,
    duration: Millis,
}

impl OneShotTimer {
    /// Arm a timer that becomes due `duration` ms after `now`.
    pub fn start(now: Millis, duration: Millis) -> Self {
        Self {
            started_at: now,
            duration: duration.max(0.0),
        }
    }

    /// Timestamp at which the timer fires.
    pub fn deadline(&self) -> Millis {
        self.started_at + self.duration
    }

    /// Whether the deadline has been reached at `now`.
    pub fn is_due(&self, now: Millis) -> bool {
        now >= self.deadline()
    }

    /// Milliseconds left until the deadline (zero once due).
    pub fn remaining(&self, now: Millis) -> Millis {
        (self.deadline() - now).max(0.0)
    }

    /// Fraction of the duration that has elapsed, clamped to 0..=1.
    pub fn progress(&self, now: Millis) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (((now - self.started_at) / self.duration).clamp(0.0, 1.0)) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn due_exactly_at_deadline() {
        let timer = OneShotTimer::start(100.0, 500.0);
        assert!(!timer.is_due(599.9));
        assert!(timer.is_due(600.0));
        assert_eq!(timer.remaining(350.0), 250.0);
        assert_eq!(timer.remaining(900.0), 0.0);
    }

    #[test]
    fn progress_is_clamped() {
        let timer = OneShotTimer::start(0.0, 200.0);
        assert_eq!(timer.progress(-10.0), 0.0);
        assert_eq!(timer.progress(50.0), 0.25);
        assert_eq!(timer.progress(1_000.0), 1.0);
    }

    #[test]
    fn zero_duration_is_immediately_due() {
        let timer = OneShotTimer::start(42.0, 0.0);
        assert!(timer.is_due(42.0));
        assert_eq!(timer.progress(42.0), 1.0);
    }
}
