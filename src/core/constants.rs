// Tuning constants shared by the animation core and the web shell.

// Canvas backing store size (canvas pixels)
pub const CANVAS_WIDTH: f32 = 800.0;
pub const CANVAS_HEIGHT: f32 = 500.0;

// Default character placement
pub const DEFAULT_POSITION: [f32; 2] = [400.0, 280.0];
pub const DEFAULT_SCALE: f32 = 1.0;
pub const DEFAULT_ROTATION_DEG: f32 = 0.0;

// Transform ranges enforced at the input boundary
pub const SCALE_MIN: f32 = 0.1; // keeps the inverse mapping defined
pub const SCALE_MAX: f32 = 3.0;
pub const ROTATION_LIMIT_DEG: f32 = 45.0;

// Animation parameters
pub const DEFAULT_SENSITIVITY: f32 = 2.0;
pub const SENSITIVITY_MIN: f32 = 0.5;
pub const SENSITIVITY_MAX: f32 = 5.0;
pub const DEFAULT_MAX_ANGLE_DEG: f32 = 35.0;
pub const MAX_ANGLE_MIN_DEG: f32 = 10.0;
pub const MAX_ANGLE_MAX_DEG: f32 = 90.0;

// Speech band used as a proxy for vocal energy (Hz)
pub const SPEECH_BAND_LOW_HZ: f32 = 300.0;
pub const SPEECH_BAND_HIGH_HZ: f32 = 3000.0;

// Envelope shaping
pub const MAGNITUDE_MIDPOINT: f32 = 128.0; // middle of the 0..255 byte magnitude scale
pub const NOISE_GATE: f32 = 0.08; // normalized values at or below this are silence
pub const OPENNESS_EXPONENT: f32 = 0.7;

// Analyser configuration requested from the audio backend
pub const ANALYSER_FFT_SIZE: u32 = 256;
