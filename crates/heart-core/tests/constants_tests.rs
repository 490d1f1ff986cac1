// Host-side tests for tuning constants and their relationships.

use heart_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn motion_constants_are_within_reasonable_bounds() {
    assert!(BEAT_INTENSITY >= 0.0 && BEAT_INTENSITY <= 1.0);
    assert!(BEAT_FREQUENCY_HZ > 0.0);
    assert!(LINE_SPEED > 0.0);
    assert!(TAIL_FRACTION > 0.0 && TAIL_FRACTION < 1.0);
    assert!(CURVE_STEPS >= 2);
    assert!(MIN_TAIL_LEN < CURVE_STEPS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pulse_weights_favor_the_rise() {
    assert!(PULSE_RISE_WEIGHT > PULSE_DECAY_WEIGHT);
    assert!(PULSE_RISE_WEIGHT + PULSE_DECAY_WEIGHT <= 1.0);
    assert!(PULSE_QUADRATIC_GAIN > 0.0 && PULSE_LINEAR_GAIN > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn layered_strokes_nest() {
    // glow pass must be wider than the core it surrounds
    assert!(TRAIL_GLOW_WIDTH_FACTOR > 1.0);
    assert!(GUIDE_WIDTH_FACTOR < 1.0);
    assert!(HEAD_GLOW_BLUR > STROKE_GLOW_MIN_BLUR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn glow_layers_fade_out() {
    assert!(GLOW_LAYERS >= 1);
    assert!(GLOW_ALPHA_SCALE > 0.0 && GLOW_ALPHA_SCALE <= 1.0);
    assert!(SHADOW_ALPHA_BASE + SHADOW_ALPHA_SPAN <= 1.0);
    assert!(VIGNETTE_INNER < VIGNETTE_OUTER);
}
