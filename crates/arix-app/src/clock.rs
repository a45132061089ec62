//! Frame clock: wall-clock deltas, cumulative elapsed time, and a rolling
//! FPS window.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use arix_common::FrameTime;
use arix_morph::point_engine::TIME_WRAP;

/// Supplies one [`FrameTime`] per frame.
pub struct FrameClock {
    frame_times: VecDeque<Duration>,
    last_frame: Instant,
    elapsed: f32,
    max_samples: usize,
}

impl FrameClock {
    /// Create a new clock with a default 120-sample rolling window.
    pub fn new() -> Self {
        Self {
            frame_times: VecDeque::new(),
            last_frame: Instant::now(),
            elapsed: 0.0,
            max_samples: 120,
        }
    }

    /// Measure the time since the previous call and advance.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now - self.last_frame;
        self.last_frame = now;
        self.frame_times.push_back(dt);
        if self.frame_times.len() > self.max_samples {
            self.frame_times.pop_front();
        }
        self.advance(dt.as_secs_f32())
    }

    /// Advance by a fixed `delta` without reading the wall clock.
    pub fn advance(&mut self, delta: f32) -> FrameTime {
        let delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };
        self.elapsed = (self.elapsed + delta) % TIME_WRAP;
        FrameTime {
            delta,
            elapsed: self.elapsed,
        }
    }

    /// Restart delta measurement, e.g. after the window was hidden.
    pub fn reset_delta(&mut self) {
        self.last_frame = Instant::now();
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Average frames per second over the sample window.
    pub fn fps(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        let total: f64 = self.frame_times.iter().map(|d| d.as_secs_f64()).sum();
        if total <= 0.0 {
            return 0.0;
        }
        self.frame_times.len() as f64 / total
    }

    /// Average frame time in milliseconds.
    pub fn frame_time_ms(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        let total: f64 = self.frame_times.iter().map(|d| d.as_secs_f64()).sum();
        (total / self.frame_times.len() as f64) * 1000.0
    }

    /// Number of frame samples currently stored.
    pub fn sample_count(&self) -> usize {
        self.frame_times.len()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_fps_is_zero() {
        let clock = FrameClock::new();
        assert_eq!(clock.fps(), 0.0);
        assert_eq!(clock.frame_time_ms(), 0.0);
        assert_eq!(clock.elapsed(), 0.0);
    }

    #[test]
    fn fixed_steps_accumulate() {
        let mut clock = FrameClock::new();
        let mut last = FrameTime::default();
        for _ in 0..60 {
            last = clock.advance(1.0 / 60.0);
        }
        assert!((last.elapsed - 1.0).abs() < 1e-4);
        assert!((last.delta - 1.0 / 60.0).abs() < 1e-7);
    }

    #[test]
    fn bad_deltas_do_not_move_time() {
        let mut clock = FrameClock::new();
        clock.advance(0.5);
        assert_eq!(clock.advance(-1.0).delta, 0.0);
        assert_eq!(clock.advance(f32::NAN).delta, 0.0);
        assert!((clock.elapsed() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn elapsed_wraps() {
        let mut clock = FrameClock::new();
        clock.elapsed = TIME_WRAP - 0.5;
        let t = clock.advance(1.0);
        assert!((t.elapsed - 0.5).abs() < 1e-2);
    }

    #[test]
    fn sample_window_is_bounded() {
        let mut clock = FrameClock::new();
        for _ in 0..200 {
            clock.tick();
        }
        assert_eq!(clock.sample_count(), 120);
    }

    #[test]
    fn wall_clock_hitch_is_passed_through() {
        let mut clock = FrameClock::new();
        clock.last_frame = Instant::now() - Duration::from_secs(3);
        let t = clock.tick();
        assert!(t.delta >= 3.0);
        assert!(clock.fps() > 0.0);
    }
}
