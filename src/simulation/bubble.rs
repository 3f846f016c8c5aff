//! Bubble particles
//!
//! A [`Bubble`] owns its physical state (position in mixed units, radius,
//! derived volume) and its projection state (screen position, scale,
//! highlight phase). Position x and y are surface pixels, z is depth in
//! pixels; radius is pixels; volume is the SI quantity the buoyancy math
//! needs, always recomputed from the radius — the radius is the source of
//! truth.
//!
//! Bubbles are recycled in place: leaving the vertical bounds resets the
//! same object to a fresh randomized state instead of reallocating, the
//! usual arena-of-structs-with-reset pattern for fixed populations.

use std::f64::consts::{PI, TAU};

use cgmath::{Vector2, Vector3};
use rand::Rng;

use crate::render::surface::{Color, DrawSurface};
use crate::units;

/// Fraction of the highlight circle the specular arc sweeps.
const HIGHLIGHT_SWEEP: f64 = 1.5 * PI;

/// A single buoyant particle.
#[derive(Clone, Debug)]
pub struct Bubble {
    /// x, y in surface pixels; z in pixels of depth away from the viewer.
    position: Vector3<f64>,
    /// Radius in pixels, fixed between respawns.
    radius: f64,
    /// Physical volume in m³, derived from the radius.
    volume: f64,
    /// Fixed random angle anchoring the specular highlight arc.
    phase_offset: f64,

    // Derived projection state, refreshed every frame. Never authoritative.
    scale_projected: f64,
    x_projected: f64,
    y_projected: f64,

    // Perspective constants, refreshed on spawn and resize.
    perspective: f64,
    center: Vector2<f64>,
}

impl Bubble {
    /// Creates a bubble in a fresh randomized state.
    ///
    /// Randomness comes from the caller's generator so seeded runs are
    /// reproducible.
    pub fn spawn(rng: &mut impl Rng, width: f64, height: f64, size_budget: f64) -> Self {
        let mut bubble = Self {
            position: Vector3::new(0.0, 0.0, 0.0),
            radius: 0.0,
            volume: 0.0,
            phase_offset: 0.0,
            scale_projected: 1.0,
            x_projected: 0.0,
            y_projected: 0.0,
            perspective: width,
            center: Vector2::new(width / 2.0, height / 2.0),
        };
        bubble.respawn(rng, width, height, size_budget);
        bubble
    }

    /// Resets this bubble to a fresh randomized state.
    ///
    /// Radius lands in [3.5, size_budget/2]; x is uniform across the width,
    /// y is biased to mid-height (uniform over the middle half), z is
    /// uniform over one perspective distance of depth. The highlight phase
    /// is redrawn here and nowhere else.
    pub fn respawn(&mut self, rng: &mut impl Rng, width: f64, height: f64, size_budget: f64) {
        self.radius = (rng.random::<f64>() * (size_budget - 7.0) + 7.0) / 2.0;
        self.position = Vector3::new(
            rng.random::<f64>() * width,
            (rng.random::<f64>() + 0.5) * 0.5 * height,
            rng.random::<f64>() * width,
        );
        self.volume = volume_of(self.radius);
        self.phase_offset = rng.random_range(0.0..TAU);
        self.perspective = width;
        self.center = Vector2::new(width / 2.0, height / 2.0);
        self.project();
    }

    /// Recomputes the projected screen position and scale from the current
    /// 3D position.
    ///
    /// Perspective projection about the surface center with perspective
    /// distance P equal to the surface width: `scale = P/(P + z)`, and the
    /// screen point is the center offset scaled then re-anchored at the
    /// center. Idempotent; [`draw`](Self::draw) calls it internally.
    pub fn project(&mut self) {
        let scale = self.perspective / (self.perspective + self.position.z);
        self.scale_projected = scale;
        self.x_projected = (self.position.x - self.center.x) * scale + self.center.x;
        self.y_projected = (self.position.y - self.center.y) * scale + self.center.y;
    }

    /// Strokes the bubble onto the surface: an outer full circle for the
    /// silhouette and an inset partial arc for the specular highlight,
    /// sweeping 1.5π from the fixed phase offset.
    pub fn draw(&mut self, surface: &mut dyn DrawSurface, color: Color) {
        self.project();

        let projected_radius = self.radius * self.scale_projected;
        let rim = rim_width(projected_radius);

        surface.set_stroke_color(color);
        surface.set_global_alpha(self.opacity());
        surface.set_line_width(rim);
        surface.stroke_arc(self.x_projected, self.y_projected, projected_radius, 0.0, TAU, false);
        surface.stroke_arc(
            self.x_projected,
            self.y_projected,
            (projected_radius - rim).max(0.0),
            self.phase_offset,
            self.phase_offset + HIGHLIGHT_SWEEP,
            false,
        );
    }

    /// Stroke opacity: `|1 − z/width|`, clamped to [0, 1].
    ///
    /// Bubbles fade toward the depth extremes. The raw expression exceeds
    /// the valid range once z passes twice the perspective distance, hence
    /// the clamp.
    pub fn opacity(&self) -> f64 {
        (1.0 - self.position.z / self.perspective).abs().clamp(0.0, 1.0)
    }

    /// Rescales position proportionally to new surface dimensions and
    /// refreshes the perspective constants.
    ///
    /// x and z scale by the width ratio, y by the height ratio. State is
    /// preserved, not re-randomized — a resize does not reset the field.
    pub fn rescale(&mut self, x_ratio: f64, y_ratio: f64, new_width: f64, new_height: f64) {
        self.position.x *= x_ratio;
        self.position.y *= y_ratio;
        self.position.z *= x_ratio;
        self.perspective = new_width;
        self.center = Vector2::new(new_width / 2.0, new_height / 2.0);
        self.project();
    }

    /// Whether the bubble has left the vertical bounds of the surface.
    pub fn has_exited(&self, height: f64) -> bool {
        self.position.y + self.radius <= 0.0 || self.position.y + self.radius >= height
    }

    /// Applies a vertical displacement in pixels (negative is up).
    pub(crate) fn displace(&mut self, dy: f64) {
        self.position.y += dy;
    }

    pub fn position(&self) -> Vector3<f64> {
        self.position
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Physical volume in m³.
    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn phase_offset(&self) -> f64 {
        self.phase_offset
    }

    /// Projection scale from the last [`project`](Self::project) call.
    pub fn scale_projected(&self) -> f64 {
        self.scale_projected
    }

    /// Projected screen position from the last [`project`](Self::project) call.
    pub fn projected(&self) -> (f64, f64) {
        (self.x_projected, self.y_projected)
    }
}

/// Physical volume of a sphere with the given pixel radius.
fn volume_of(radius_px: f64) -> f64 {
    let r = units::to_meters(radius_px);
    4.0 / 3.0 * PI * r.powi(3)
}

/// Stroke width of the bubble rim as a function of projected radius.
///
/// Small projected circles keep a visible rim at 25% of radius; above 12 px
/// the width follows a nonlinear taper seeded from that base value. The
/// exact shape is a visual-tuning contract — do not simplify it.
fn rim_width(projected_radius: f64) -> f64 {
    let base = projected_radius * 0.25;
    if projected_radius <= 12.0 {
        base
    } else {
        projected_radius * 0.05
            + base * (0.8 + (1.0 - 1.0 / (projected_radius.sqrt() + (4.0 * base).sqrt())))
    }
}
