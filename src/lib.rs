// src/lib.rs
//! Seltzer
//!
//! A buoyant-particle simulation engine: bubbles rise (or sink) through a
//! configurable fluid medium and are rendered with a pseudo-3D perspective
//! projection onto a host-provided 2D drawing surface.
//!
//! The crate is deliberately platform-free. Physics, projection, depth
//! sorting, and recycling live here; the canvas, the window, and the frame
//! clock are host collaborators behind the [`render::surface::DrawSurface`]
//! and [`render::driver::FrameScheduler`] traits.
//!
//! # Quick start
//!
//! ```no_run
//! use seltzer::prelude::*;
//!
//! fn main() -> Result<(), ConfigError> {
//!     let engine = Engine::builder()
//!         .with_surface_size(1280.0, 720.0)
//!         .with_medium_key("water")
//!         .with_bubble_count(48)
//!         .build()?;
//!
//!     // Hosts supply a real surface and scheduler; this one runs headless
//!     // for 600 frames.
//!     let mut looper = RenderLoop::new(engine, NullSurface, FixedFrames::new(600));
//!     looper.run();
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod fluid;
pub mod prelude;
pub mod render;
pub mod simulation;
pub mod units;

#[cfg(test)]
pub(crate) mod testutil;

// Re-export main types for convenience
pub use error::ConfigError;
pub use fluid::Medium;
pub use render::{DrawSurface, RenderLoop};
pub use simulation::Engine;
