//! Drawing-surface collaborator contract
//!
//! The engine never owns a canvas. Hosts implement [`DrawSurface`] over
//! whatever 2D immediate-mode surface they have (an HTML canvas, a pixmap, a
//! GPU-backed vector layer) and hand it to the engine each frame. The engine
//! issues exactly two arc strokes per live bubble per frame.

/// An RGB stroke color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The pale silver-blue the default bubble style strokes with.
    pub const BUBBLE: Color = Color::new(0xd6, 0xea, 0xf2);
}

/// A 2D immediate-mode drawing surface.
///
/// Minimal contract the engine needs: clearing, stroked arcs, and settable
/// stroke state. Angles are radians; `counterclockwise` selects the sweep
/// direction from `start_angle` to `end_angle`.
pub trait DrawSurface {
    /// Clears the rectangle from the origin to (width, height).
    fn clear_rect(&mut self, width: f64, height: f64);

    /// Sets the stroke color for subsequent arcs.
    fn set_stroke_color(&mut self, color: Color);

    /// Sets the stroke width in pixels for subsequent arcs.
    fn set_line_width(&mut self, width: f64);

    /// Sets the global alpha in [0, 1] for subsequent arcs.
    fn set_global_alpha(&mut self, alpha: f64);

    /// Strokes a circular arc centered at (x, y).
    fn stroke_arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        counterclockwise: bool,
    );
}

/// A surface that discards every call.
///
/// Lets the engine run headless: physics, sorting, and recycling all behave
/// normally, nothing is drawn.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSurface;

impl DrawSurface for NullSurface {
    fn clear_rect(&mut self, _width: f64, _height: f64) {}
    fn set_stroke_color(&mut self, _color: Color) {}
    fn set_line_width(&mut self, _width: f64) {}
    fn set_global_alpha(&mut self, _alpha: f64) {}
    fn stroke_arc(
        &mut self,
        _x: f64,
        _y: f64,
        _radius: f64,
        _start_angle: f64,
        _end_angle: f64,
        _counterclockwise: bool,
    ) {
    }
}
