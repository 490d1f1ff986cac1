//! Time-driven motion. Both outputs are pure functions of elapsed seconds, so
//! moving the time origin repositions the animation instantly and exactly.

use std::f64::consts::TAU;

use crate::config::MotionConfig;
use crate::constants::*;

/// One evaluation of the beat at a given instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Beat {
    /// Eased oscillation, 0 at rest.
    pub osc: f64,
    /// Curve scale factor, `>= 1`.
    pub scale: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BeatClock {
    pub intensity: f64,
    pub frequency_hz: f64,
    pub line_speed: f64,
}

impl Default for BeatClock {
    fn default() -> Self {
        Self::from(&MotionConfig::default())
    }
}

impl From<&MotionConfig> for BeatClock {
    fn from(m: &MotionConfig) -> Self {
        Self {
            intensity: m.beat_intensity,
            frequency_hz: m.beat_frequency_hz,
            line_speed: m.line_speed,
        }
    }
}

impl BeatClock {
    /// Asymmetric oscillation: the positive half of the sine is squared for a
    /// sharp rise, the negative half is heavily damped for a slow decay.
    pub fn oscillation(&self, elapsed_sec: f64) -> f64 {
        let s = (elapsed_sec * self.frequency_hz * TAU).sin();
        let rise = s.max(0.0);
        let fall = (-s).max(0.0);
        rise * rise * PULSE_RISE_WEIGHT + fall * PULSE_DECAY_WEIGHT
    }

    pub fn beat(&self, elapsed_sec: f64) -> Beat {
        let osc = self.oscillation(elapsed_sec);
        let scale =
            1.0 + self.intensity * (PULSE_QUADRATIC_GAIN * osc * osc + PULSE_LINEAR_GAIN * osc);
        Beat { osc, scale }
    }

    /// Scale factor driving the curve size.
    pub fn pulse(&self, elapsed_sec: f64) -> f64 {
        self.beat(elapsed_sec).scale
    }

    /// Fractional position of the trail head around the curve, in `[0, 1)`.
    /// Independent of the beat: the two rhythms are not phase-locked.
    pub fn trail_position(&self, elapsed_sec: f64) -> f64 {
        let p = (elapsed_sec * self.line_speed).rem_euclid(1.0);
        // rem_euclid may round up to exactly 1.0 for tiny negative inputs
        if p >= 1.0 {
            0.0
        } else {
            p
        }
    }

    /// Head sample index in `[0, steps)` for a curve of `steps` segments.
    pub fn head_index(&self, elapsed_sec: f64, steps: usize) -> usize {
        if steps == 0 {
            return 0;
        }
        let idx = (self.trail_position(elapsed_sec) * steps as f64).floor() as usize;
        idx.min(steps - 1)
    }
}
