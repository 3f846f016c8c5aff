//! Simulation engine
//!
//! [`Engine`] owns the bubble population, the fluid medium, and the surface
//! dimensions, and drives the per-frame pipeline: clear, project, depth-sort,
//! then per bubble displace → draw → recycle. Exactly one writer exists (the
//! current frame) and every entry point takes `&mut self`, so a host resize
//! can never interleave with a frame.
//!
//! Buoyancy follows the force-balance policy: the bubble's contents are
//! modeled as a fixed air/water mixture, and the net upward force is the
//! density difference against the ambient medium times displaced volume
//! times g. The drag-weighted alternative is documented in DESIGN.md and
//! intentionally not implemented.

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::ConfigError;
use crate::fluid::{medium, model, Medium};
use crate::render::surface::{Color, DrawSurface};
use crate::simulation::bubble::Bubble;
use crate::units;

/// Air fraction of the bubble-content mixture.
const MIXTURE_AIR_FRACTION: f64 = 0.999;

/// Water fraction of the bubble-content mixture.
const MIXTURE_WATER_FRACTION: f64 = 0.001;

/// Damping divisor applied to the converted pixel displacement.
const FORCE_DAMPING: f64 = 1000.0;

/// Smallest size budget that can satisfy the radius invariant.
const MIN_SIZE_BUDGET: f64 = 7.0;

/// Density of the modeled bubble contents: almost all air, a trace of water,
/// each at its default conditions.
fn mixture_density() -> f64 {
    MIXTURE_AIR_FRACTION * model::air_density(medium::DEFAULT_AIR_TEMPERATURE, model::P0)
        + MIXTURE_WATER_FRACTION
            * model::water_density(medium::DEFAULT_WATER_TEMPERATURE, medium::DEFAULT_WATER_SALINITY)
}

/// The buoyant-particle simulation.
#[derive(Debug)]
pub struct Engine {
    width: f64,
    height: f64,
    medium: Medium,
    bubbles: Vec<Bubble>,
    size_budget: f64,
    color: Color,
    rng: StdRng,
}

impl Engine {
    /// Starts configuring an engine.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// Appends `count` freshly randomized bubbles to the population.
    pub fn spawn_bubbles(&mut self, count: usize) {
        self.bubbles.reserve(count);
        for _ in 0..count {
            self.bubbles
                .push(Bubble::spawn(&mut self.rng, self.width, self.height, self.size_budget));
        }
        debug!("spawned {count} bubbles ({} total)", self.bubbles.len());
    }

    /// Advances the simulation by one frame and renders it.
    ///
    /// Pipeline order matters: projection must precede the depth sort, and
    /// the sort must precede drawing so that overlapping bubbles composite
    /// back to front. Displacement only moves y, which the projection scale
    /// does not depend on, so the sort stays valid through the frame.
    pub fn step_frame(&mut self, surface: &mut dyn DrawSurface) {
        if self.width <= 0.0 || self.height <= 0.0 {
            debug!("skipping frame on degenerate {}x{} surface", self.width, self.height);
            return;
        }

        surface.clear_rect(self.width, self.height);

        for bubble in &mut self.bubbles {
            bubble.project();
        }
        self.bubbles
            .sort_unstable_by(|a, b| a.scale_projected().total_cmp(&b.scale_projected()));

        let ambient = self.medium.density();
        let mixture = mixture_density();
        for bubble in &mut self.bubbles {
            // Net upward force; a bubble lighter than its surroundings gets
            // a positive force and a negative (rising) displacement.
            let force = (ambient - mixture) * bubble.volume() * model::STANDARD_GRAVITY;
            bubble.displace(-units::to_pixels(force) / FORCE_DAMPING);
            bubble.draw(surface, self.color);
            if bubble.has_exited(self.height) {
                trace!("recycling bubble at y={:.1}", bubble.position().y);
                bubble.respawn(&mut self.rng, self.width, self.height, self.size_budget);
            }
        }
    }

    /// Adapts the simulation to new surface dimensions.
    ///
    /// Live bubbles are rescaled by the exact dimension ratios rather than
    /// recreated, so the visible state survives the resize. Degenerate old
    /// or new dimensions skip the rescale (there is no meaningful ratio) but
    /// the new dimensions are always stored.
    pub fn handle_resize(&mut self, new_width: f64, new_height: f64) {
        if self.width > 0.0 && self.height > 0.0 && new_width > 0.0 && new_height > 0.0 {
            let x_ratio = new_width / self.width;
            let y_ratio = new_height / self.height;
            for bubble in &mut self.bubbles {
                bubble.rescale(x_ratio, y_ratio, new_width, new_height);
            }
        }
        debug!(
            "resized {}x{} -> {}x{}",
            self.width, self.height, new_width, new_height
        );
        self.width = new_width;
        self.height = new_height;
    }

    /// The live population, in current depth order.
    ///
    /// The order is remade every frame by the depth sort; callers must not
    /// assume it is stable.
    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    pub fn medium(&self) -> &Medium {
        &self.medium
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

/// Builder for [`Engine`].
///
/// Defaults: an 800×600 surface, air at 27 °C, 32 bubbles from a 50 px size
/// budget, the standard bubble stroke color, and an OS-seeded generator.
pub struct EngineBuilder {
    width: f64,
    height: f64,
    medium_key: Option<String>,
    medium: Medium,
    count: usize,
    size_budget: f64,
    color: Color,
    seed: Option<u64>,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            medium_key: None,
            medium: Medium::air(),
            count: 32,
            size_budget: 50.0,
            color: Color::BUBBLE,
            seed: None,
        }
    }
}

impl EngineBuilder {
    /// Sets the initial surface dimensions in pixels.
    pub fn with_surface_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the fluid medium directly.
    pub fn with_medium(mut self, medium: Medium) -> Self {
        self.medium = medium;
        self.medium_key = None;
        self
    }

    /// Sets the fluid medium from an external configuration key
    /// (`"air"` or `"water"`). Resolution happens in [`build`](Self::build),
    /// where an unknown key fails fast.
    pub fn with_medium_key(mut self, key: impl Into<String>) -> Self {
        self.medium_key = Some(key.into());
        self
    }

    /// Sets the initial bubble count.
    pub fn with_bubble_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the bubble size budget in pixels; radii are drawn from
    /// [3.5, budget/2].
    pub fn with_size_budget(mut self, size_budget: f64) -> Self {
        self.size_budget = size_budget;
        self
    }

    /// Sets the stroke color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Seeds the random generator for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration and builds the engine with its initial
    /// population.
    pub fn build(self) -> Result<Engine, ConfigError> {
        let medium = match &self.medium_key {
            Some(key) => Medium::from_key(key)?,
            None => self.medium,
        };
        if self.size_budget < MIN_SIZE_BUDGET {
            return Err(ConfigError::InvalidSizeBudget(self.size_budget));
        }

        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut engine = Engine {
            width: self.width,
            height: self.height,
            medium,
            bubbles: Vec::new(),
            size_budget: self.size_budget,
            color: self.color,
            rng,
        };
        debug!(
            "engine: {}x{} px, {:?}, {} bubbles, size budget {} px",
            engine.width, engine.height, engine.medium, self.count, engine.size_budget
        );
        engine.spawn_bubbles(self.count);
        Ok(engine)
    }
}
