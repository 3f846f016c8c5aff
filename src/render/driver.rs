//! Render loop
//!
//! The engine does not own a clock or an event loop; the host does. A
//! [`FrameScheduler`] is the host's frame-presentation primitive: each call
//! to [`FrameScheduler::next_frame`] grants one tick, and the loop steps the
//! engine once per granted tick. Stopping is simply not granting another
//! tick — a full frame always completes before the next one is requested, so
//! there is never in-flight work to cancel.

use log::debug;

use crate::render::stats::FrameStats;
use crate::render::surface::DrawSurface;
use crate::simulation::engine::Engine;

/// Host frame-scheduling primitive.
///
/// Implementations typically block until the display is ready to present
/// (vsync, `requestAnimationFrame`, a timer). Return `false` to end the run.
pub trait FrameScheduler {
    fn next_frame(&mut self) -> bool;
}

/// Grants exactly a fixed number of ticks, then stops.
///
/// Useful for headless and deterministic runs, where "one tick per display
/// refresh" has no meaning.
#[derive(Clone, Copy, Debug)]
pub struct FixedFrames {
    remaining: u64,
}

impl FixedFrames {
    pub fn new(frames: u64) -> Self {
        Self { remaining: frames }
    }
}

impl FrameScheduler for FixedFrames {
    fn next_frame(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

/// Drives an [`Engine`] against a surface, one frame per scheduler tick.
pub struct RenderLoop<S: FrameScheduler, D: DrawSurface> {
    engine: Engine,
    surface: D,
    scheduler: S,
    paused: bool,
    stats: FrameStats,
}

impl<S: FrameScheduler, D: DrawSurface> RenderLoop<S, D> {
    pub fn new(engine: Engine, surface: D, scheduler: S) -> Self {
        Self {
            engine,
            surface,
            scheduler,
            paused: false,
            stats: FrameStats::new(),
        }
    }

    /// Runs until the scheduler stops granting ticks.
    ///
    /// A paused loop keeps consuming ticks without stepping the engine, so
    /// resuming never replays missed time.
    pub fn run(&mut self) {
        debug!("render loop starting");
        while self.scheduler.next_frame() {
            self.tick();
        }
        debug!("render loop stopped after {} frames", self.stats.frames());
    }

    /// Steps exactly one frame, unless paused.
    pub fn tick(&mut self) {
        if self.paused {
            return;
        }
        self.stats.begin_frame();
        self.engine.step_frame(&mut self.surface);
        self.stats.end_frame();
    }

    /// Forwards a host resize event to the engine.
    ///
    /// Called between ticks; `&mut self` makes interleaving with a frame
    /// impossible.
    pub fn handle_resize(&mut self, width: f64, height: f64) {
        self.engine.handle_resize(width, height);
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    /// Tears the loop down, returning the engine and surface.
    pub fn into_parts(self) -> (Engine, D) {
        (self.engine, self.surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{init_test_logging, RecordingSurface};

    fn test_engine() -> Engine {
        Engine::builder()
            .with_surface_size(320.0, 240.0)
            .with_bubble_count(4)
            .with_seed(7)
            .build()
            .unwrap()
    }

    #[test]
    fn fixed_frames_grants_exactly_n_ticks() {
        let mut scheduler = FixedFrames::new(3);
        let mut granted = 0;
        while scheduler.next_frame() {
            granted += 1;
        }
        assert_eq!(granted, 3);
        assert!(!scheduler.next_frame());
    }

    #[test]
    fn run_steps_once_per_tick() {
        init_test_logging();
        let mut looper = RenderLoop::new(test_engine(), RecordingSurface::default(), FixedFrames::new(5));
        looper.run();
        assert_eq!(looper.stats().frames(), 5);
        let (_, surface) = looper.into_parts();
        assert_eq!(surface.clears, 5);
    }

    #[test]
    fn paused_loop_consumes_ticks_without_stepping() {
        let mut looper = RenderLoop::new(test_engine(), RecordingSurface::default(), FixedFrames::new(5));
        looper.set_paused(true);
        looper.run();
        assert_eq!(looper.stats().frames(), 0);
        let (_, surface) = looper.into_parts();
        assert_eq!(surface.clears, 0);
    }

    #[test]
    fn resize_reaches_the_engine() {
        let mut looper = RenderLoop::new(test_engine(), RecordingSurface::default(), FixedFrames::new(0));
        looper.handle_resize(640.0, 480.0);
        assert_eq!(looper.engine().width(), 640.0);
        assert_eq!(looper.engine().height(), 480.0);
    }
}
