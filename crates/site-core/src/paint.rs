//! Drawing vocabulary for the background render pass.
//!
//! The animator only talks to a `Painter`; the web front-end implements it on
//! a 2D canvas context and tests implement it with a recorder.

use glam::Vec2;
use std::fmt;

// Backdrop
pub const BACKDROP_FROM: &str = "#05030a";
pub const BACKDROP_TO: &str = "#07051a";

// Grid overlay
pub const GRID_COLOR: &str = "#6ee7b7";
pub const GRID_ALPHA: f32 = 0.06;
pub const GRID_STEP: f32 = 120.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;

/// CSS `hsla()` color. Hue is in degrees and may leave 0..360 (CSS wraps it).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub hue: i32,
    pub saturation: u8,
    pub lightness: u8,
    pub alpha: f32,
}

impl Hsla {
    pub const fn new(hue: i32, saturation: u8, lightness: u8, alpha: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            alpha,
        }
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({},{}%,{}%,{})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}

/// Two-stop linear gradient between two points.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub from: Vec2,
    pub to: Vec2,
    pub start: String,
    pub end: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Fill {
    Solid(String),
    Gradient(LinearGradient),
}

/// Style for one polygon draw.
#[derive(Clone, Debug, PartialEq)]
pub struct PolygonStyle {
    pub fill: Fill,
    pub stroke: Option<String>,
    pub line_width: f32,
    pub alpha: f32,
}

pub trait Painter {
    fn clear(&mut self, width: f32, height: f32);

    fn fill_rect_gradient(&mut self, width: f32, height: f32, gradient: &LinearGradient);

    /// Straight lines in `color` at `alpha`, drawn as one batch.
    fn stroke_lines(&mut self, lines: &[(Vec2, Vec2)], color: &str, alpha: f32, line_width: f32);

    /// Closed polygon, filled then (optionally) stroked.
    fn polygon(&mut self, vertices: &[Vec2], style: &PolygonStyle);
}

/// Grid segments covering `width` × `height`, one line every `GRID_STEP`
/// starting at 0.
pub fn grid_lines(width: f32, height: f32) -> Vec<(Vec2, Vec2)> {
    let mut lines = Vec::new();
    let mut x = 0.0;
    while x < width {
        lines.push((Vec2::new(x, 0.0), Vec2::new(x, height)));
        x += GRID_STEP;
    }
    let mut y = 0.0;
    while y < height {
        lines.push((Vec2::new(0.0, y), Vec2::new(width, y)));
        y += GRID_STEP;
    }
    lines
}

pub fn backdrop_gradient(width: f32, height: f32) -> LinearGradient {
    LinearGradient {
        from: Vec2::ZERO,
        to: Vec2::new(width, height),
        start: BACKDROP_FROM.to_string(),
        end: BACKDROP_TO.to_string(),
    }
}
