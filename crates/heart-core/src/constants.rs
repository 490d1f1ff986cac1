// Tuning constants for the heartbeat glyph. Values are empirical: they produce
// the intended easing and proportions and carry no further meaning.

// Motion
pub const BEAT_INTENSITY: f64 = 0.5; // 0..1
pub const BEAT_FREQUENCY_HZ: f64 = 1.05;
pub const LINE_SPEED: f64 = 0.35; // cycles per second around the outline
pub const TAIL_FRACTION: f64 = 0.22; // tail length as fraction of the sample count
pub const MIN_TAIL_LEN: usize = 2;
pub const CURVE_STEPS: usize = 720;

// Asymmetric pulse easing: sharp rise on the positive half, damped decay
pub const PULSE_RISE_WEIGHT: f64 = 0.9;
pub const PULSE_DECAY_WEIGHT: f64 = 0.1;
pub const PULSE_QUADRATIC_GAIN: f64 = 0.05;
pub const PULSE_LINEAR_GAIN: f64 = 0.03;

// Canonical heart curve spans roughly [-16, 16] x [-17, 12]; size maps to 20 units
pub const CURVE_UNITS: f64 = 20.0;

// Layout (fractions of the shorter surface side / of the base radius)
pub const SIZE_FRACTION: f64 = 0.34;
pub const CENTER_LIFT: f64 = 0.02;

// Strokes, in logical pixels
pub const BASE_LINE_WIDTH: f64 = 3.2;
pub const MIN_LINE_WIDTH: f64 = 1.0;
pub const GUIDE_WIDTH_FACTOR: f64 = 0.6;
pub const TRAIL_GLOW_WIDTH_FACTOR: f64 = 2.2;
pub const STROKE_GLOW_MIN_BLUR: f64 = 6.0;
pub const STROKE_GLOW_BLUR_FACTOR: f64 = 1.8;
pub const HEAD_RADIUS_FACTOR: f64 = 0.7;
pub const HEAD_MIN_RADIUS: f64 = 1.5;
pub const HEAD_GLOW_BLUR: f64 = 10.0;

// Ambient glow
pub const GLOW_STRENGTH: f64 = 0.28;
pub const GLOW_RADIUS_FACTOR: f64 = 0.9;
pub const GLOW_LAYERS: usize = 3;
pub const GLOW_LAYER_GROWTH: f64 = 0.18;
pub const GLOW_ALPHA_SCALE: f64 = 0.22;

// Ground shadow
pub const SHADOW_OFFSET: f64 = 0.62;
pub const SHADOW_RADIUS_X: f64 = 0.56;
pub const SHADOW_RADIUS_Y: f64 = 0.18;
pub const SHADOW_BLUR_PX: f64 = 8.0;
pub const SHADOW_ALPHA_BASE: f64 = 0.18;
pub const SHADOW_ALPHA_SPAN: f64 = 0.08;

// Vignette
pub const VIGNETTE_CENTER_Y: f64 = 0.45;
pub const VIGNETTE_INNER: f64 = 0.2; // of min(w, h)
pub const VIGNETTE_OUTER: f64 = 0.6; // of hypot(w, h)

// Frame loop
pub const FRAME_LOG_INTERVAL: u64 = 600;
