//! Per-frame composition: elapsed time in, ordered draw calls out.

use glam::DVec2;

use crate::canvas::{Canvas2d, DrawError};
use crate::clock::{Beat, BeatClock};
use crate::compositor::Compositor;
use crate::config::{ConfigError, HeartConfig};
use crate::constants::*;
use crate::curve::{sample_curve, Point, PointSequence};
use crate::surface::LogicalSize;
use crate::trail::{extract_trail, Trail};

/// Everything a frame draws, derived from elapsed time and surface size alone.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameGeometry {
    pub elapsed_sec: f64,
    pub size: LogicalSize,
    pub beat: Beat,
    /// Unscaled radius of the glyph.
    pub base: f64,
    pub center: Point,
    pub points: PointSequence,
    pub head_index: usize,
    pub trail: Trail,
}

impl FrameGeometry {
    /// Radius after the beat scale is applied.
    pub fn scaled_base(&self) -> f64 {
        self.base * self.beat.scale
    }

    pub fn head(&self) -> Option<Point> {
        self.points.get(self.head_index)
    }
}

#[derive(Clone, Debug)]
pub struct Scene {
    config: HeartConfig,
    clock: BeatClock,
}

impl Scene {
    pub fn new(config: HeartConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let clock = BeatClock::from(&config.motion);
        Ok(Self { config, clock })
    }

    pub fn config(&self) -> &HeartConfig {
        &self.config
    }

    pub fn clock(&self) -> &BeatClock {
        &self.clock
    }

    pub fn geometry(&self, elapsed_sec: f64, size: LogicalSize) -> FrameGeometry {
        let motion = &self.config.motion;
        let layout = &self.config.layout;

        let base = size.min_side().max(0.0) * layout.size_fraction;
        let beat = self.clock.beat(elapsed_sec);
        let center = DVec2::new(
            size.width * 0.5,
            size.height * 0.5 - base * layout.center_lift,
        );
        let points = sample_curve(center, base * beat.scale, motion.steps);
        let head_index = self.clock.head_index(elapsed_sec, motion.steps);
        let trail = extract_trail(&points, head_index, motion.tail_len());

        FrameGeometry {
            elapsed_sec,
            size,
            beat,
            base,
            center,
            points,
            head_index,
            trail,
        }
    }

    /// Draws one frame back to front: background, ground shadow, ambient
    /// glow, guide outline, trail glow pass, trail core pass, head marker.
    pub fn render<C: Canvas2d>(
        &self,
        canvas: &mut C,
        elapsed_sec: f64,
        size: LogicalSize,
    ) -> Result<FrameGeometry, DrawError> {
        let geo = self.geometry(elapsed_sec, size);
        let theme = &self.config.theme;
        let stroke = &self.config.stroke;
        let compositor = Compositor::new(theme);

        compositor.draw_background(canvas, size)?;

        let radius = geo.scaled_base();
        let shadow_alpha = SHADOW_ALPHA_BASE + SHADOW_ALPHA_SPAN * geo.beat.osc;
        compositor.draw_shadow(canvas, geo.center, radius, shadow_alpha)?;
        compositor.draw_glow(
            canvas,
            geo.center,
            radius * GLOW_RADIUS_FACTOR,
            self.config.layout.glow_strength,
        )?;

        compositor.stroke_polyline(
            canvas,
            geo.points.as_slice(),
            theme.guide,
            stroke.guide_width(),
            false,
        );

        let trail = geo.trail.as_slice();
        compositor.stroke_polyline(canvas, trail, theme.line, stroke.trail_glow_width(), true);
        compositor.stroke_polyline(canvas, trail, theme.line, stroke.trail_core_width(), false);

        if let Some(head) = geo.head() {
            compositor.draw_head_marker(canvas, head, theme.line, stroke.head_radius())?;
        }
        Ok(geo)
    }
}
