//! # Seltzer Prelude
//!
//! One import for typical hosts:
//!
//! ```rust
//! use seltzer::prelude::*;
//! ```

// Re-export the simulation core
pub use crate::simulation::bubble::Bubble;
pub use crate::simulation::engine::{Engine, EngineBuilder};

// Re-export fluid configuration
pub use crate::error::ConfigError;
pub use crate::fluid::medium::Medium;

// Re-export rendering collaborators and the frame loop
pub use crate::render::driver::{FixedFrames, FrameScheduler, RenderLoop};
pub use crate::render::stats::FrameStats;
pub use crate::render::surface::{Color, DrawSurface, NullSurface};

// Re-export common external dependencies
pub use cgmath::{Vector2, Vector3};
