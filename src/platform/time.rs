//! Frame timing
//!
//! `FrameDriver` turns successive frame timestamps into elapsed-time steps.
//! Timestamps come from the host (the `requestAnimationFrame` argument on
//! the web) or from any `TimeSource`.

use std::cell::Cell;

use crate::consts::MAX_FRAME_DT;

/// Source of millisecond timestamps for a cooperative frame loop
pub trait TimeSource {
    fn now_ms(&self) -> f64;
}

/// Clock that advances a fixed amount every time it is read.
///
/// Lets a frame loop run headless at a simulated refresh rate.
#[derive(Debug)]
pub struct ManualClock {
    now: Cell<f64>,
    step_ms: f64,
}

impl ManualClock {
    pub fn new(start_ms: f64, step_ms: f64) -> Self {
        Self {
            now: Cell::new(start_ms),
            step_ms,
        }
    }

    /// 60 Hz display starting at zero
    pub fn sixty_hz() -> Self {
        Self::new(0.0, 1000.0 / 60.0)
    }

    /// Jump forward without a read
    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }
}

impl TimeSource for ManualClock {
    fn now_ms(&self) -> f64 {
        let now = self.now.get();
        self.now.set(now + self.step_ms);
        now
    }
}

/// Elapsed-time bookkeeping for the frame callback
#[derive(Debug, Clone)]
pub struct FrameDriver {
    last_time: Option<f64>,
    max_dt: f32,
    frames: u64,
    disposed: bool,
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::with_max_dt(MAX_FRAME_DT)
    }

    pub fn with_max_dt(max_dt: f32) -> Self {
        Self {
            last_time: None,
            max_dt,
            frames: 0,
            disposed: false,
        }
    }

    /// Record a frame at `now_ms` and return seconds since the previous one.
    ///
    /// The first frame only sets the time base and yields `None`, as does
    /// every frame after `dispose`. Steps are clamped to `[0, max_dt]`.
    pub fn advance(&mut self, now_ms: f64) -> Option<f32> {
        if self.disposed {
            return None;
        }
        self.frames += 1;
        let previous = self.last_time.replace(now_ms)?;
        let dt = ((now_ms - previous) / 1000.0) as f32;
        Some(dt.clamp(0.0, self.max_dt))
    }

    /// Forget the time base; the next frame starts a new one
    pub fn reset_time_base(&mut self) {
        self.last_time = None;
    }

    /// Frames seen so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn dispose(&mut self) {
        self.disposed = true;
        self.last_time = None;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_sets_time_base() {
        let mut driver = FrameDriver::new();
        assert_eq!(driver.advance(1000.0), None);
        let dt = driver.advance(1050.0).unwrap();
        assert!((dt - 0.05).abs() < 1e-6);
        assert_eq!(driver.frames(), 2);
    }

    #[test]
    fn test_dt_is_clamped() {
        let mut driver = FrameDriver::new();
        driver.advance(0.0);
        assert_eq!(driver.advance(5000.0), Some(MAX_FRAME_DT));
        // Timestamps going backwards produce no motion
        assert_eq!(driver.advance(4000.0), Some(0.0));
    }

    #[test]
    fn test_dispose_stops_frames() {
        let mut driver = FrameDriver::new();
        driver.advance(0.0);
        driver.dispose();
        assert!(driver.is_disposed());
        assert_eq!(driver.advance(16.0), None);
        assert_eq!(driver.advance(32.0), None);
    }

    #[test]
    fn test_reset_time_base() {
        let mut driver = FrameDriver::new();
        driver.advance(0.0);
        driver.reset_time_base();
        assert_eq!(driver.advance(10_000.0), None);
        assert!(driver.advance(10_016.0).is_some());
    }

    #[test]
    fn test_manual_clock_steps_per_read() {
        let clock = ManualClock::new(100.0, 10.0);
        assert_eq!(clock.now_ms(), 100.0);
        assert_eq!(clock.now_ms(), 110.0);
        clock.advance(50.0);
        assert_eq!(clock.now_ms(), 170.0);
    }
}
