//! Independent draw primitives. Each one paints onto the canvas and leaves
//! its state as it found it, so the primitives can be called in any order.

use glam::DVec2;

use crate::canvas::{Canvas2d, DrawError, GradientStop, LinearGradient, Paint, RadialGradient};
use crate::color::Rgba;
use crate::config::Theme;
use crate::constants::*;
use crate::curve::Point;
use crate::surface::LogicalSize;

pub struct Compositor<'t> {
    theme: &'t Theme,
}

impl<'t> Compositor<'t> {
    pub fn new(theme: &'t Theme) -> Self {
        Self { theme }
    }

    /// Vertical two-stop gradient, then a vignette centered slightly above
    /// the middle of the surface.
    pub fn draw_background<C: Canvas2d>(
        &self,
        canvas: &mut C,
        size: LogicalSize,
    ) -> Result<(), DrawError> {
        let (w, h) = (size.width, size.height);
        let extent = DVec2::new(w, h);

        canvas.set_fill(&Paint::Linear(LinearGradient {
            from: DVec2::ZERO,
            to: DVec2::new(0.0, h),
            stops: vec![
                GradientStop::new(0.0, self.theme.background_top),
                GradientStop::new(1.0, self.theme.background_bottom),
            ],
        }))?;
        canvas.fill_rect(DVec2::ZERO, extent);

        canvas.set_fill(&Paint::Radial(RadialGradient {
            inner_center: DVec2::new(w * 0.5, h * VIGNETTE_CENTER_Y),
            inner_radius: size.min_side().max(0.0) * VIGNETTE_INNER,
            outer_center: size.center(),
            outer_radius: size.diagonal() * VIGNETTE_OUTER,
            stops: vec![
                GradientStop::new(0.0, Rgba::TRANSPARENT),
                GradientStop::new(1.0, self.theme.vignette_edge),
            ],
        }))?;
        canvas.fill_rect(DVec2::ZERO, extent);
        Ok(())
    }

    /// Blurred, flattened ellipse below `center` to ground the shape.
    pub fn draw_shadow<C: Canvas2d>(
        &self,
        canvas: &mut C,
        center: Point,
        base_radius: f64,
        alpha: f64,
    ) -> Result<(), DrawError> {
        let r = base_radius.max(0.0);
        canvas.save();
        canvas.set_global_alpha(alpha.clamp(0.0, 1.0));
        canvas.set_fill(&Paint::Solid(self.theme.shadow))?;
        canvas.begin_path();
        canvas.ellipse(
            DVec2::new(center.x, center.y + r * SHADOW_OFFSET),
            DVec2::new(r * SHADOW_RADIUS_X, r * SHADOW_RADIUS_Y),
        )?;
        canvas.set_blur(Some(SHADOW_BLUR_PX));
        canvas.fill();
        canvas.set_blur(None);
        canvas.restore();
        Ok(())
    }

    /// Concentric translucent discs in the line hue, widening outward and
    /// fading with each layer. Nothing is drawn for `strength <= 0`.
    pub fn draw_glow<C: Canvas2d>(
        &self,
        canvas: &mut C,
        center: Point,
        radius: f64,
        strength: f64,
    ) -> Result<(), DrawError> {
        if strength.is_nan() || strength <= 0.0 {
            return Ok(());
        }
        let layers = GLOW_LAYERS as f64;
        for i in 1..=GLOW_LAYERS {
            let i = i as f64;
            let r = radius.max(0.0) * (1.0 + i * GLOW_LAYER_GROWTH);
            let alpha = strength * (1.0 - i / (layers + 1.0)) * GLOW_ALPHA_SCALE;
            canvas.begin_path();
            canvas.circle(center, r)?;
            canvas.set_fill(&Paint::Solid(self.theme.line.with_alpha(alpha)))?;
            canvas.fill();
        }
        Ok(())
    }

    /// Open polyline through `points` with round joins and caps. No closing
    /// segment is added. With `glow`, a soft shadow in the glow hue is laid
    /// behind the stroke.
    pub fn stroke_polyline<C: Canvas2d>(
        &self,
        canvas: &mut C,
        points: &[Point],
        color: Rgba,
        width: f64,
        glow: bool,
    ) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        canvas.save();
        canvas.set_round_joins();
        canvas.set_line_width(width);
        canvas.set_stroke_color(color);
        if glow {
            canvas.set_shadow(
                self.theme.line_glow,
                (width * STROKE_GLOW_BLUR_FACTOR).max(STROKE_GLOW_MIN_BLUR),
            );
        }
        canvas.begin_path();
        canvas.move_to(*first);
        for p in rest {
            canvas.line_to(*p);
        }
        canvas.stroke();
        canvas.restore();
    }

    /// Small glowing disc at the trail head.
    pub fn draw_head_marker<C: Canvas2d>(
        &self,
        canvas: &mut C,
        point: Point,
        color: Rgba,
        radius: f64,
    ) -> Result<(), DrawError> {
        canvas.save();
        canvas.set_fill(&Paint::Solid(color))?;
        canvas.set_shadow(self.theme.line_glow, HEAD_GLOW_BLUR);
        canvas.begin_path();
        canvas.circle(point, radius.max(0.0))?;
        canvas.fill();
        canvas.restore();
        Ok(())
    }
}
