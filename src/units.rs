//! Physical length ↔ screen length conversion
//!
//! The engine mixes units deliberately: particle state lives in screen pixels
//! while the buoyancy math runs in SI. This module is the single bridge
//! between the two, at a fixed scale factor derived from a 96-DPI surface
//! (96 px/in ÷ 0.0254 m/in).

/// Screen pixels per physical meter at 96 DPI.
pub const PIXELS_PER_METER: f64 = 3779.52755906;

/// Converts a screen length in pixels to meters.
pub fn to_meters(pixels: f64) -> f64 {
    pixels / PIXELS_PER_METER
}

/// Converts a physical length in meters to screen pixels.
pub fn to_pixels(meters: f64) -> f64 {
    meters * PIXELS_PER_METER
}
