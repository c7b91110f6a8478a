//! Background animator: particle field + viewport + loop token.
//!
//! One `frame` call is one display refresh. It advances every particle by a
//! single tick (no wall-clock scaling) and repaints the whole surface.

use crate::frame_loop::{FrameOutcome, LoopToken};
use crate::paint::*;
use crate::particles::{polygon_vertices, Particle, ParticleField};
use crate::viewport::{Viewport, ViewportCell, ViewportReader, ViewportWriter};
use glam::Vec2;
use rand::Rng;

// Glow copy
const GLOW_OFFSET: Vec2 = Vec2::new(6.0, 6.0);
const GLOW_RADIUS_FACTOR: f32 = 0.98;
const GLOW_ROTATION_OFFSET: f32 = 0.35;
const GLOW_ALPHA: f32 = 0.14;

// Body
const BODY_ALPHA: f32 = 0.9;
const BODY_LINE_WIDTH: f32 = 1.2;

pub struct Animator {
    field: ParticleField,
    viewport: ViewportReader,
    resize: ViewportWriter,
    token: LoopToken,
    frames: u64,
}

impl Animator {
    /// Creates the particle set for `viewport`. The count is fixed from here on.
    pub fn start<R: Rng>(rng: &mut R, viewport: Viewport) -> Self {
        let field = ParticleField::new(rng, viewport);
        Self::assemble(field, ViewportCell::new(viewport))
    }

    /// Animator over an existing particle set (deterministic scenes, tests).
    pub fn with_field(field: ParticleField, viewport: Viewport) -> Self {
        Self::assemble(field, ViewportCell::new(viewport))
    }

    fn assemble(field: ParticleField, cell: ViewportCell) -> Self {
        let (viewport, resize) = cell.split();
        log::debug!("[animator] start particles={}", field.len());
        Self {
            field,
            viewport,
            resize,
            token: LoopToken::new(),
            frames: 0,
        }
    }

    /// Writer for the resize listener. Only dimensions change; particles stay.
    pub fn resize_handle(&self) -> ViewportWriter {
        self.resize.clone()
    }

    pub fn token(&self) -> LoopToken {
        self.token.clone()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport.get()
    }

    pub fn particles(&self) -> &ParticleField {
        &self.field
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn is_running(&self) -> bool {
        !self.token.is_cancelled()
    }

    /// Runs one tick (update + render) unless the loop has been cancelled.
    pub fn frame(&mut self, painter: &mut impl Painter) -> FrameOutcome {
        if self.token.is_cancelled() {
            return FrameOutcome::Stopped;
        }
        let viewport = self.viewport.get();
        self.field.step(viewport);
        render(&self.field, viewport, painter);
        self.frames += 1;
        if self.token.should_rearm() {
            FrameOutcome::Continue
        } else {
            FrameOutcome::Stopped
        }
    }

    /// Stops the loop and silences the resize writer. Safe to call twice.
    pub fn teardown(&self) {
        let was_running = self.is_running();
        self.token.cancel();
        self.resize.detach();
        if was_running {
            log::debug!("[animator] teardown after {} frames", self.frames);
        }
    }
}

/// Full repaint: backdrop, grid, then particles in field order.
pub fn render(field: &ParticleField, viewport: Viewport, painter: &mut impl Painter) {
    let Viewport { width, height } = viewport;
    painter.clear(width, height);
    painter.fill_rect_gradient(width, height, &backdrop_gradient(width, height));
    painter.stroke_lines(
        &grid_lines(width, height),
        GRID_COLOR,
        GRID_ALPHA,
        GRID_LINE_WIDTH,
    );
    for p in field.iter() {
        draw_particle(p, painter);
    }
}

fn draw_particle(p: &Particle, painter: &mut impl Painter) {
    let radius = p.radius();
    let fade = p.depth_fade();

    let glow = polygon_vertices(
        p.position + GLOW_OFFSET,
        radius * GLOW_RADIUS_FACTOR,
        p.sides,
        p.rotation + GLOW_ROTATION_OFFSET,
    );
    painter.polygon(&glow, &glow_style(p));

    let body = polygon_vertices(p.position, radius, p.sides, p.rotation);
    let style = PolygonStyle {
        fill: Fill::Gradient(LinearGradient {
            from: p.position - Vec2::splat(radius),
            to: p.position + Vec2::splat(radius),
            start: Hsla::new(p.hue - 30, 90, 55, 0.15).to_string(),
            end: Hsla::new(p.hue + 40, 80, 62, 0.25).to_string(),
        }),
        stroke: Some(Hsla::new(p.hue + 20, 90, 68, 0.45).to_string()),
        line_width: BODY_LINE_WIDTH * fade,
        alpha: BODY_ALPHA * fade,
    };
    painter.polygon(&body, &style);
}

// Glow copy is fill-only: no outline is stroked around it.
fn glow_style(p: &Particle) -> PolygonStyle {
    PolygonStyle {
        fill: Fill::Solid(Hsla::new(p.hue, 80, 55, 0.06).to_string()),
        stroke: None,
        line_width: 0.0,
        alpha: GLOW_ALPHA * p.depth_fade(),
    }
}
