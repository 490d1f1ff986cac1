//! Runtime configuration for the glyph: motion, stroke, layout and theme.
//!
//! Every field defaults to the tuning constants in [`crate::constants`]. A
//! host may overlay string overrides (e.g. `data-*` attributes on the canvas
//! element) through [`HeartConfig::from_attributes`]; the result is always
//! validated before use.

use std::str::FromStr;

use thiserror::Error;

use crate::color::Rgba;
use crate::constants::*;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("sample count must be at least 2, got {0}")]
    TooFewSteps(usize),
    #[error("{name} must be a finite, non-negative number, got {value}")]
    Negative { name: &'static str, value: f64 },
    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f64 },
    #[error("tail fraction must lie in (0, 1), got {0}")]
    TailFraction(f64),
    #[error("line width must be positive, got {0}")]
    LineWidth(f64),
    #[error("invalid color {0:?}")]
    InvalidColor(String),
    #[error("cannot parse {key}={value:?}")]
    Parse { key: &'static str, value: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct MotionConfig {
    pub beat_intensity: f64,
    pub beat_frequency_hz: f64,
    pub line_speed: f64,
    pub tail_fraction: f64,
    pub steps: usize,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            beat_intensity: BEAT_INTENSITY,
            beat_frequency_hz: BEAT_FREQUENCY_HZ,
            line_speed: LINE_SPEED,
            tail_fraction: TAIL_FRACTION,
            steps: CURVE_STEPS,
        }
    }
}

impl MotionConfig {
    /// Number of trailing samples behind the head: at least [`MIN_TAIL_LEN`],
    /// never more than `steps`.
    pub fn tail_len(&self) -> usize {
        let len = (self.steps as f64 * self.tail_fraction).floor() as usize;
        len.max(MIN_TAIL_LEN).min(self.steps)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StrokeConfig {
    pub base_line_width: f64,
}

impl Default for StrokeConfig {
    fn default() -> Self {
        Self {
            base_line_width: BASE_LINE_WIDTH,
        }
    }
}

impl StrokeConfig {
    pub fn guide_width(&self) -> f64 {
        (self.base_line_width * GUIDE_WIDTH_FACTOR).max(MIN_LINE_WIDTH)
    }

    pub fn trail_glow_width(&self) -> f64 {
        (self.base_line_width * TRAIL_GLOW_WIDTH_FACTOR).max(MIN_LINE_WIDTH)
    }

    pub fn trail_core_width(&self) -> f64 {
        self.base_line_width.max(MIN_LINE_WIDTH)
    }

    pub fn head_radius(&self) -> f64 {
        (self.base_line_width * HEAD_RADIUS_FACTOR).max(HEAD_MIN_RADIUS)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Base radius as a fraction of the shorter surface side.
    pub size_fraction: f64,
    /// Upward shift of the center as a fraction of the base radius.
    pub center_lift: f64,
    pub glow_strength: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            size_fraction: SIZE_FRACTION,
            center_lift: CENTER_LIFT,
            glow_strength: GLOW_STRENGTH,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub background_top: Rgba,
    pub background_bottom: Rgba,
    pub line: Rgba,
    pub line_glow: Rgba,
    pub guide: Rgba,
    pub vignette_edge: Rgba,
    pub shadow: Rgba,
}

impl Default for Theme {
    fn default() -> Self {
        let line = Rgba::opaque(0xff, 0x3b, 0x5c);
        Self {
            background_top: Rgba::opaque(0x0b, 0x0f, 0x14),
            background_bottom: Rgba::opaque(0x10, 0x16, 0x1d),
            line,
            line_glow: line.with_alpha(0.45),
            guide: Rgba::new(255, 255, 255, 0.08),
            vignette_edge: Rgba::new(0, 0, 0, 0.55),
            shadow: Rgba::new(0, 0, 0, 0.9),
        }
    }
}

impl Theme {
    /// Swap the accent hue, keeping the glow translucency.
    pub fn with_line_color(self, line: Rgba) -> Self {
        Self {
            line,
            line_glow: line.with_alpha(self.line_glow.a),
            ..self
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct HeartConfig {
    pub motion: MotionConfig,
    pub stroke: StrokeConfig,
    pub layout: LayoutConfig,
    pub theme: Theme,
}

impl HeartConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let m = &self.motion;
        if m.steps < 2 {
            return Err(ConfigError::TooFewSteps(m.steps));
        }
        non_negative("beat intensity", m.beat_intensity)?;
        non_negative("beat frequency", m.beat_frequency_hz)?;
        non_negative("glow strength", self.layout.glow_strength)?;
        non_negative("size fraction", self.layout.size_fraction)?;
        if !m.line_speed.is_finite() {
            return Err(ConfigError::NotFinite {
                name: "line speed",
                value: m.line_speed,
            });
        }
        if !self.layout.center_lift.is_finite() {
            return Err(ConfigError::NotFinite {
                name: "center lift",
                value: self.layout.center_lift,
            });
        }
        if !(m.tail_fraction > 0.0 && m.tail_fraction < 1.0) {
            return Err(ConfigError::TailFraction(m.tail_fraction));
        }
        let w = self.stroke.base_line_width;
        if !(w.is_finite() && w > 0.0) {
            return Err(ConfigError::LineWidth(w));
        }
        Ok(())
    }

    /// Defaults overlaid with whatever `lookup` returns for the known keys,
    /// then validated.
    pub fn from_attributes<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let m = &mut config.motion;
        override_with(&lookup, "data-beat-intensity", &mut m.beat_intensity)?;
        override_with(&lookup, "data-beat-frequency", &mut m.beat_frequency_hz)?;
        override_with(&lookup, "data-line-speed", &mut m.line_speed)?;
        override_with(&lookup, "data-tail-fraction", &mut m.tail_fraction)?;
        override_with(&lookup, "data-steps", &mut m.steps)?;
        override_with(
            &lookup,
            "data-line-width",
            &mut config.stroke.base_line_width,
        )?;
        if let Some(raw) = lookup("data-line-color") {
            let line = Rgba::from_hex(&raw)?;
            log::debug!("[config] data-line-color={}", line);
            config.theme = config.theme.with_line_color(line);
        }
        config.validate()?;
        Ok(config)
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { name, value })
    }
}

fn override_with<F, T>(lookup: &F, key: &'static str, slot: &mut T) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let Some(raw) = lookup(key) else {
        return Ok(());
    };
    let value = raw.trim();
    *slot = value.parse().map_err(|_| ConfigError::Parse {
        key,
        value: value.to_string(),
    })?;
    log::debug!("[config] {}={}", key, value);
    Ok(())
}
