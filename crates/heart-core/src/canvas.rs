//! Immediate-mode 2D drawing context consumed by the compositor.
//!
//! Mirrors the subset of the HTML canvas API the glyph needs. Coordinates are
//! logical units; the host applies the surface transform.

use glam::DVec2;
use thiserror::Error;

use crate::color::Rgba;
use crate::curve::Point;

#[derive(Debug, Error, PartialEq)]
pub enum DrawError {
    #[error("drawing backend failure: {0}")]
    Backend(String),
    #[error("gradient stop offset {0} outside [0, 1]")]
    InvalidStop(f64),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Rgba,
}

impl GradientStop {
    pub fn new(offset: f64, color: Rgba) -> Self {
        Self { offset, color }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub from: Point,
    pub to: Point,
    pub stops: Vec<GradientStop>,
}

/// Two-circle radial gradient, as in canvas `createRadialGradient`.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    pub inner_center: Point,
    pub inner_radius: f64,
    pub outer_center: Point,
    pub outer_radius: f64,
    pub stops: Vec<GradientStop>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    Linear(LinearGradient),
    Radial(RadialGradient),
}

impl Paint {
    pub fn stops(&self) -> &[GradientStop] {
        match self {
            Paint::Solid(_) => &[],
            Paint::Linear(g) => &g.stops,
            Paint::Radial(g) => &g.stops,
        }
    }

    pub fn validate(&self) -> Result<(), DrawError> {
        for stop in self.stops() {
            if !(0.0..=1.0).contains(&stop.offset) {
                return Err(DrawError::InvalidStop(stop.offset));
            }
        }
        Ok(())
    }
}

pub trait Canvas2d {
    fn save(&mut self);
    fn restore(&mut self);

    fn set_fill(&mut self, paint: &Paint) -> Result<(), DrawError>;
    fn set_stroke_color(&mut self, color: Rgba);
    fn set_line_width(&mut self, width: f64);
    /// Round joins and caps.
    fn set_round_joins(&mut self);
    fn set_global_alpha(&mut self, alpha: f64);
    /// Soft shadow of `color` behind subsequent strokes and fills.
    fn set_shadow(&mut self, color: Rgba, blur: f64);
    /// Gaussian blur filter on subsequent fills; `None` disables it.
    fn set_blur(&mut self, radius_px: Option<f64>);

    fn fill_rect(&mut self, origin: Point, size: DVec2);
    fn begin_path(&mut self);
    fn move_to(&mut self, p: Point);
    fn line_to(&mut self, p: Point);
    fn circle(&mut self, center: Point, radius: f64) -> Result<(), DrawError>;
    fn ellipse(&mut self, center: Point, radii: DVec2) -> Result<(), DrawError>;
    fn fill(&mut self);
    fn stroke(&mut self);
}
