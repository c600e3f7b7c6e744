//! Time management for the frame loop.
//!
//! Everything downstream works on a single millisecond timeline that starts
//! at zero when the `Time` is created, the same way a browser hands out
//! animation-frame timestamps.

use std::time::{Duration, Instant};

/// Milliseconds since the clock was created.
pub type Millis = f64;

/// Manages frame timing and delta time calculation.
#[derive(Debug)]
pub struct Time {
    /// Time when the clock started.
    start_time: Instant,
    /// Time of the last frame.
    last_frame: Instant,
    /// Duration of the last frame.
    delta: Duration,
    /// Total elapsed time since start.
    elapsed: Duration,
    /// Frame count since start.
    frame_count: u64,
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

impl Time {
    /// Create a new time manager.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            last_frame: now,
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Update timing at the start of a new frame.
    pub fn update(&mut self) {
        self.advance_to(Instant::now());
    }

    fn advance_to(&mut self, now: Instant) {
        self.delta = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;
        self.elapsed = now.saturating_duration_since(self.start_time);
        self.frame_count += 1;
    }

    /// Timestamp of the current frame on the millisecond timeline.
    pub fn now_millis(&self) -> Millis {
        self.elapsed.as_secs_f64() * 1000.0
    }

    /// Get the delta time in seconds.
    pub fn delta_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Get total elapsed time in seconds.
    pub fn elapsed_seconds(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }

    /// Get the current frame count.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the current FPS (averaged over last frame).
    pub fn fps(&self) -> f32 {
        if self.delta.as_secs_f32() > 0.0 {
            1.0 / self.delta.as_secs_f32()
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_clock_reads_zero() {
        let time = Time::new();
        assert_eq!(time.now_millis(), 0.0);
        assert_eq!(time.frame_count(), 0);
        assert_eq!(time.fps(), 0.0);
    }

    #[test]
    fn advancing_accumulates_milliseconds() {
        let mut time = Time::new();
        let start = time.start_time;
        time.advance_to(start + Duration::from_millis(16));
        time.advance_to(start + Duration::from_millis(40));
        assert_eq!(time.frame_count(), 2);
        assert!((time.now_millis() - 40.0).abs() < 1e-6);
        assert!((time.delta_seconds() - 0.024).abs() < 1e-6);
    }
}
