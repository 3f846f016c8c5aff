// src/render/mod.rs
//! Rendering collaborators and the frame loop
//!
//! The drawing surface and the frame scheduler are host-provided; this
//! module defines their contracts and the loop that drives the engine
//! through them.

pub mod driver;
pub mod stats;
pub mod surface;

pub use driver::{FixedFrames, FrameScheduler, RenderLoop};
pub use stats::FrameStats;
pub use surface::{Color, DrawSurface, NullSurface};
