//! Test support: a recording surface and logging capture.

use crate::render::surface::{Color, DrawSurface};

/// One recorded `stroke_arc` call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcCall {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub start: f64,
    pub end: f64,
    pub counterclockwise: bool,
}

/// A surface that records every call for later assertions.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub clears: usize,
    pub colors: Vec<Color>,
    pub line_widths: Vec<f64>,
    pub alphas: Vec<f64>,
    pub arcs: Vec<ArcCall>,
}

impl DrawSurface for RecordingSurface {
    fn clear_rect(&mut self, _width: f64, _height: f64) {
        self.clears += 1;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.colors.push(color);
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_widths.push(width);
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.alphas.push(alpha);
    }

    fn stroke_arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        counterclockwise: bool,
    ) {
        self.arcs.push(ArcCall {
            x,
            y,
            radius,
            start: start_angle,
            end: end_angle,
            counterclockwise,
        });
    }
}

/// Installs a test-friendly logger; repeated calls are fine.
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
