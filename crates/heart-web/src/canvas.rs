use glam::DVec2;
use heart_core::{Canvas2d, DrawError, GradientStop, Paint, Point, Rgba};
use std::f64::consts::TAU;
use wasm_bindgen::JsValue;
use web_sys as web;

#[inline]
fn backend(e: JsValue) -> DrawError {
    DrawError::Backend(format!("{:?}", e))
}

/// `Canvas2d` backed by a browser `CanvasRenderingContext2d`.
pub struct WebCanvas<'a> {
    ctx: &'a web::CanvasRenderingContext2d,
}

impl<'a> WebCanvas<'a> {
    pub fn new(ctx: &'a web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn add_stops(gradient: &web::CanvasGradient, stops: &[GradientStop]) -> Result<(), DrawError> {
        for stop in stops {
            gradient
                .add_color_stop(stop.offset as f32, &stop.color.to_css())
                .map_err(backend)?;
        }
        Ok(())
    }
}

impl Canvas2d for WebCanvas<'_> {
    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn set_fill(&mut self, paint: &Paint) -> Result<(), DrawError> {
        paint.validate()?;
        match paint {
            Paint::Solid(color) => self.ctx.set_fill_style_str(&color.to_css()),
            Paint::Linear(g) => {
                let gradient = self
                    .ctx
                    .create_linear_gradient(g.from.x, g.from.y, g.to.x, g.to.y);
                Self::add_stops(&gradient, &g.stops)?;
                self.ctx.set_fill_style_canvas_gradient(&gradient);
            }
            Paint::Radial(g) => {
                let gradient = self
                    .ctx
                    .create_radial_gradient(
                        g.inner_center.x,
                        g.inner_center.y,
                        g.inner_radius,
                        g.outer_center.x,
                        g.outer_center.y,
                        g.outer_radius,
                    )
                    .map_err(backend)?;
                Self::add_stops(&gradient, &g.stops)?;
                self.ctx.set_fill_style_canvas_gradient(&gradient);
            }
        }
        Ok(())
    }

    fn set_stroke_color(&mut self, color: Rgba) {
        self.ctx.set_stroke_style_str(&color.to_css());
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_round_joins(&mut self) {
        self.ctx.set_line_join("round");
        self.ctx.set_line_cap("round");
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
    }

    fn set_shadow(&mut self, color: Rgba, blur: f64) {
        self.ctx.set_shadow_color(&color.to_css());
        self.ctx.set_shadow_blur(blur);
    }

    fn set_blur(&mut self, radius_px: Option<f64>) {
        match radius_px {
            Some(px) => self.ctx.set_filter(&format!("blur({}px)", px)),
            None => self.ctx.set_filter("none"),
        }
    }

    fn fill_rect(&mut self, origin: Point, size: DVec2) {
        self.ctx.fill_rect(origin.x, origin.y, size.x, size.y);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, p: Point) {
        self.ctx.move_to(p.x, p.y);
    }

    fn line_to(&mut self, p: Point) {
        self.ctx.line_to(p.x, p.y);
    }

    fn circle(&mut self, center: Point, radius: f64) -> Result<(), DrawError> {
        self.ctx
            .arc(center.x, center.y, radius, 0.0, TAU)
            .map_err(backend)
    }

    fn ellipse(&mut self, center: Point, radii: DVec2) -> Result<(), DrawError> {
        self.ctx
            .ellipse(center.x, center.y, radii.x, radii.y, 0.0, 0.0, TAU)
            .map_err(backend)
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }
}
