//! Frame statistics
//!
//! Lightweight timing for the render loop: a ring buffer of recent frame
//! times plus a lifetime step counter. Motion in this engine is per-frame,
//! not per-second, so the steps-per-second figure is also the effective
//! simulation speed multiplier.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Rolling frame-time statistics for a render loop.
#[derive(Debug)]
pub struct FrameStats {
    frame_times: VecDeque<Duration>,
    max_samples: usize,
    frame_start: Option<Instant>,
    frames: u64,
}

impl FrameStats {
    /// Keeps roughly two seconds of samples at 60 frames/sec.
    pub fn new() -> Self {
        Self::with_capacity(120)
    }

    pub fn with_capacity(max_samples: usize) -> Self {
        Self {
            frame_times: VecDeque::with_capacity(max_samples),
            max_samples,
            frame_start: None,
            frames: 0,
        }
    }

    /// Marks the beginning of a frame.
    pub fn begin_frame(&mut self) {
        self.frame_start = Some(Instant::now());
    }

    /// Marks the end of a frame and records its duration.
    pub fn end_frame(&mut self) {
        if let Some(start) = self.frame_start.take() {
            if self.frame_times.len() >= self.max_samples {
                self.frame_times.pop_front();
            }
            self.frame_times.push_back(start.elapsed());
            self.frames += 1;
        }
    }

    /// Total frames stepped over the loop's lifetime.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Average frame time over the sample window, if any frames completed.
    pub fn average_frame_time(&self) -> Option<Duration> {
        if self.frame_times.is_empty() {
            return None;
        }
        let total: Duration = self.frame_times.iter().sum();
        Some(total / self.frame_times.len() as u32)
    }

    /// Steps per second over the sample window.
    pub fn steps_per_second(&self) -> f64 {
        match self.average_frame_time() {
            Some(avg) if avg > Duration::ZERO => 1.0 / avg.as_secs_f64(),
            _ => 0.0,
        }
    }

    /// Clears all samples and counters.
    pub fn reset(&mut self) {
        self.frame_times.clear();
        self.frame_start = None;
        self.frames = 0;
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_completed_frames() {
        let mut stats = FrameStats::new();
        for _ in 0..3 {
            stats.begin_frame();
            stats.end_frame();
        }
        assert_eq!(stats.frames(), 3);
        assert!(stats.average_frame_time().is_some());
    }

    #[test]
    fn end_without_begin_is_ignored() {
        let mut stats = FrameStats::new();
        stats.end_frame();
        assert_eq!(stats.frames(), 0);
        assert!(stats.average_frame_time().is_none());
        assert_eq!(stats.steps_per_second(), 0.0);
    }

    #[test]
    fn window_is_bounded() {
        let mut stats = FrameStats::with_capacity(4);
        for _ in 0..10 {
            stats.begin_frame();
            stats.end_frame();
        }
        assert_eq!(stats.frames(), 10);
        assert!(stats.frame_times.len() <= 4);
    }
}
