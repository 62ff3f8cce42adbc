use crate::dom;
use backdrop_core::{FieldError, Rgba, Size, Surface};
use glam::Vec2;
use std::f64::consts::TAU;
use web_sys as web;

/// [`Surface`] backed by a canvas and its 2D context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> Result<Self, FieldError> {
        let ctx = dom::context_2d(&canvas).ok_or(FieldError::MissingContext)?;
        Ok(Self { canvas, ctx })
    }

    fn disc(&self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius.max(0.0) as f64,
            0.0,
            TAU,
        );
    }
}

impl Surface for CanvasSurface {
    fn resize(&mut self, size: Size) {
        // Assigning width/height wipes the buffer even when unchanged.
        if self.canvas.width() != size.width {
            self.canvas.set_width(size.width);
        }
        if self.canvas.height() != size.height {
            self.canvas.set_height(size.height);
        }
    }

    fn clear(&mut self, size: Size) {
        self.ctx
            .clear_rect(0.0, 0.0, size.width as f64, size.height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.disc(center, radius);
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.fill();
    }

    fn fill_glow(&mut self, center: Vec2, radius: f32, color: Rgba) {
        let (x, y, r) = (center.x as f64, center.y as f64, radius.max(0.0) as f64);
        let gradient = match self.ctx.create_radial_gradient(x, y, 0.0, x, y, r) {
            Ok(g) => g,
            Err(e) => {
                log::debug!("[render] radial gradient rejected: {:?}", e);
                return;
            }
        };
        _ = gradient.add_color_stop(0.0, &color.to_string());
        _ = gradient.add_color_stop(1.0, &Rgba::TRANSPARENT.to_string());
        self.disc(center, radius);
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_stroke_style_str(&color.to_string());
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
    }
}
