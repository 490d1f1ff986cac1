// Recording `Canvas2d` double shared by the host-side tests.

#![allow(dead_code)]

use glam::DVec2;
use heart_core::{Canvas2d, DrawError, Paint, Point, Rgba};

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Save,
    Restore,
    Fill(Paint),
    StrokeColor(Rgba),
    LineWidth(f64),
    RoundJoins,
    GlobalAlpha(f64),
    Shadow(Rgba, f64),
    Blur(Option<f64>),
    FillRect(Point, DVec2),
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    Circle(Point, f64),
    Ellipse(Point, DVec2),
    FillPath,
    StrokePath,
}

#[derive(Default)]
pub struct RecordingCanvas {
    pub ops: Vec<Op>,
    /// When set, `circle` fails with a backend error.
    pub fail_circles: bool,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|&op| pred(op)).count()
    }

    /// Save/restore pairs never go negative and end balanced.
    pub fn is_balanced(&self) -> bool {
        let mut depth = 0i32;
        for op in &self.ops {
            match op {
                Op::Save => depth += 1,
                Op::Restore => {
                    depth -= 1;
                    if depth < 0 {
                        return false;
                    }
                }
                _ => {}
            }
        }
        depth == 0
    }

    /// Line widths in the order strokes were issued.
    pub fn stroke_widths(&self) -> Vec<f64> {
        let mut width = 1.0;
        let mut out = Vec::new();
        for op in &self.ops {
            match op {
                Op::LineWidth(w) => width = *w,
                Op::StrokePath => out.push(width),
                _ => {}
            }
        }
        out
    }

    /// Vertices of every stroked path, in order.
    pub fn stroked_paths(&self) -> Vec<Vec<Point>> {
        let mut current = Vec::new();
        let mut out = Vec::new();
        for op in &self.ops {
            match op {
                Op::BeginPath => current.clear(),
                Op::MoveTo(p) | Op::LineTo(p) => current.push(*p),
                Op::StrokePath => out.push(current.clone()),
                _ => {}
            }
        }
        out
    }
}

impl Canvas2d for RecordingCanvas {
    fn save(&mut self) {
        self.ops.push(Op::Save);
    }
    fn restore(&mut self) {
        self.ops.push(Op::Restore);
    }
    fn set_fill(&mut self, paint: &Paint) -> Result<(), DrawError> {
        paint.validate()?;
        self.ops.push(Op::Fill(paint.clone()));
        Ok(())
    }
    fn set_stroke_color(&mut self, color: Rgba) {
        self.ops.push(Op::StrokeColor(color));
    }
    fn set_line_width(&mut self, width: f64) {
        self.ops.push(Op::LineWidth(width));
    }
    fn set_round_joins(&mut self) {
        self.ops.push(Op::RoundJoins);
    }
    fn set_global_alpha(&mut self, alpha: f64) {
        self.ops.push(Op::GlobalAlpha(alpha));
    }
    fn set_shadow(&mut self, color: Rgba, blur: f64) {
        self.ops.push(Op::Shadow(color, blur));
    }
    fn set_blur(&mut self, radius_px: Option<f64>) {
        self.ops.push(Op::Blur(radius_px));
    }
    fn fill_rect(&mut self, origin: Point, size: DVec2) {
        self.ops.push(Op::FillRect(origin, size));
    }
    fn begin_path(&mut self) {
        self.ops.push(Op::BeginPath);
    }
    fn move_to(&mut self, p: Point) {
        self.ops.push(Op::MoveTo(p));
    }
    fn line_to(&mut self, p: Point) {
        self.ops.push(Op::LineTo(p));
    }
    fn circle(&mut self, center: Point, radius: f64) -> Result<(), DrawError> {
        if self.fail_circles {
            return Err(DrawError::Backend("arc rejected".into()));
        }
        self.ops.push(Op::Circle(center, radius));
        Ok(())
    }
    fn ellipse(&mut self, center: Point, radii: DVec2) -> Result<(), DrawError> {
        self.ops.push(Op::Ellipse(center, radii));
        Ok(())
    }
    fn fill(&mut self) {
        self.ops.push(Op::FillPath);
    }
    fn stroke(&mut self) {
        self.ops.push(Op::StrokePath);
    }
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
