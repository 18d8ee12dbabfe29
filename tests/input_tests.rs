// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn client_to_canvas_identity_when_unscaled() {
    let p = client_to_canvas(
        Vec2::new(110.0, 70.0),
        Vec2::new(10.0, 20.0),
        Vec2::new(800.0, 500.0),
        Vec2::new(800.0, 500.0),
    );
    assert_eq!(p, Vec2::new(100.0, 50.0));
}

#[test]
fn client_to_canvas_undoes_css_scaling() {
    // Canvas displayed at half size: one CSS pixel covers two backing pixels.
    let p = client_to_canvas(
        Vec2::new(200.0, 125.0),
        Vec2::ZERO,
        Vec2::new(400.0, 250.0),
        Vec2::new(800.0, 500.0),
    );
    assert!((p - Vec2::new(400.0, 250.0)).length() < 1e-4);
}

#[test]
fn client_to_canvas_collapsed_rect_is_origin() {
    let p = client_to_canvas(
        Vec2::new(50.0, 50.0),
        Vec2::ZERO,
        Vec2::new(0.0, 300.0),
        Vec2::new(800.0, 500.0),
    );
    assert_eq!(p, Vec2::ZERO);
}

#[test]
fn key_latch_reports_edges_only() {
    let mut latch = KeyLatch::default();
    assert_eq!(latch.on_key(true, false), Some(true));
    // Held key auto-repeats.
    assert_eq!(latch.on_key(true, true), None);
    assert_eq!(latch.on_key(true, true), None);
    assert!(latch.held);
    assert_eq!(latch.on_key(false, false), Some(false));
    assert_eq!(latch.on_key(false, false), None);
}

#[test]
fn key_latch_ignores_repeat_without_initial_down() {
    // Focus arrived while the key was already held.
    let mut latch = KeyLatch::default();
    assert_eq!(latch.on_key(true, true), None);
    assert!(!latch.held);
}

#[test]
fn key_latch_reset_releases() {
    let mut latch = KeyLatch::default();
    latch.on_key(true, false);
    latch.reset();
    assert!(!latch.held);
    assert_eq!(latch.on_key(true, false), Some(true));
}
