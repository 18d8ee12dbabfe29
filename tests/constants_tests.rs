// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn defaults_sit_inside_their_ranges() {
    assert!(DEFAULT_POSITION[0] >= 0.0 && DEFAULT_POSITION[0] <= CANVAS_WIDTH);
    assert!(DEFAULT_POSITION[1] >= 0.0 && DEFAULT_POSITION[1] <= CANVAS_HEIGHT);
    assert!(DEFAULT_SCALE >= SCALE_MIN && DEFAULT_SCALE <= SCALE_MAX);
    assert!(DEFAULT_ROTATION_DEG.abs() <= ROTATION_LIMIT_DEG);
    assert!(DEFAULT_SENSITIVITY >= SENSITIVITY_MIN && DEFAULT_SENSITIVITY <= SENSITIVITY_MAX);
    assert!(DEFAULT_MAX_ANGLE_DEG >= MAX_ANGLE_MIN_DEG && DEFAULT_MAX_ANGLE_DEG <= MAX_ANGLE_MAX_DEG);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scale_floor_keeps_inverse_defined() {
    assert!(SCALE_MIN > 0.0);
    assert!(SENSITIVITY_MIN > 0.0);
    assert!(MAX_ANGLE_MIN_DEG > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn speech_band_fits_below_nyquist() {
    assert!(SPEECH_BAND_LOW_HZ < SPEECH_BAND_HIGH_HZ);
    // 44.1 kHz is the lowest common context rate.
    assert!(SPEECH_BAND_HIGH_HZ < 44_100.0 / 2.0);
    assert!(ANALYSER_FFT_SIZE.is_power_of_two());
    assert!(NOISE_GATE > 0.0 && NOISE_GATE < 1.0);
    assert!(OPENNESS_EXPONENT > 0.0 && OPENNESS_EXPONENT < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn guide_visuals_are_sane() {
    assert!(GUIDE_DASH.iter().all(|&d| d > 0.0));
    assert!(PIVOT_RING_RADIUS > HANDLE_RADIUS);
    assert!(GROUND_HEIGHT < CANVAS_HEIGHT as f64);
    assert_eq!(STAGE_STEP_IDS.len(), 3);
    assert_eq!(FLAP_KEY_CODE, "Space");
}
