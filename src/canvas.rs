use glam::Vec2;
use site_core::{Fill, LinearGradient, Painter, PolygonStyle};
use web_sys as web;

/// `Painter` over a 2D canvas context. Coordinates are CSS pixels.
pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn gradient(&self, g: &LinearGradient) -> web::CanvasGradient {
        let grad = self
            .ctx
            .create_linear_gradient(g.from.x as f64, g.from.y as f64, g.to.x as f64, g.to.y as f64);
        let _ = grad.add_color_stop(0.0, &g.start);
        let _ = grad.add_color_stop(1.0, &g.end);
        grad
    }

    fn trace(&self, vertices: &[Vec2]) {
        self.ctx.begin_path();
        for (i, v) in vertices.iter().enumerate() {
            if i == 0 {
                self.ctx.move_to(v.x as f64, v.y as f64);
            } else {
                self.ctx.line_to(v.x as f64, v.y as f64);
            }
        }
        self.ctx.close_path();
    }
}

// Canvas ignores globalAlpha outside 0..=1, so deep-fade values are clamped.
#[inline]
fn alpha(a: f32) -> f64 {
    a.clamp(0.0, 1.0) as f64
}

impl Painter for CanvasPainter {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_rect_gradient(&mut self, width: f32, height: f32, gradient: &LinearGradient) {
        let grad = self.gradient(gradient);
        self.ctx.set_fill_style_canvas_gradient(&grad);
        self.ctx.fill_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn stroke_lines(&mut self, lines: &[(Vec2, Vec2)], color: &str, a: f32, line_width: f32) {
        self.ctx.save();
        self.ctx.set_global_alpha(alpha(a));
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(line_width as f64);
        self.ctx.begin_path();
        for (from, to) in lines {
            self.ctx.move_to(from.x as f64, from.y as f64);
            self.ctx.line_to(to.x as f64, to.y as f64);
        }
        self.ctx.stroke();
        self.ctx.restore();
    }

    fn polygon(&mut self, vertices: &[Vec2], style: &PolygonStyle) {
        if vertices.len() < 3 {
            return;
        }
        self.ctx.save();
        self.ctx.set_global_alpha(alpha(style.alpha));
        match &style.fill {
            Fill::Solid(color) => self.ctx.set_fill_style_str(color),
            Fill::Gradient(g) => {
                let grad = self.gradient(g);
                self.ctx.set_fill_style_canvas_gradient(&grad);
            }
        }
        self.trace(vertices);
        self.ctx.fill();
        if let Some(stroke) = &style.stroke {
            self.ctx.set_stroke_style_str(stroke);
            self.ctx.set_line_width(style.line_width as f64);
            self.ctx.stroke();
        }
        self.ctx.restore();
    }
}
