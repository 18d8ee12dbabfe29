// Host-side tests for canvas/local geometry.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod geometry {
    include!("../src/core/geometry.rs");
}

use geometry::*;
use glam::Vec2;

fn approx(a: Vec2, b: Vec2) -> bool {
    (a - b).length() < 1e-3
}

#[test]
fn transform_defaults() {
    let t = Transform::default();
    assert_eq!(t.position(), Vec2::new(400.0, 280.0));
    assert_eq!(t.scale(), 1.0);
    assert_eq!(t.rotation_deg(), 0.0);
}

#[test]
fn transform_setters_clamp() {
    let mut t = Transform::default();
    t.set_scale(0.0);
    assert_eq!(t.scale(), 0.1);
    t.set_scale(10.0);
    assert_eq!(t.scale(), 3.0);
    t.set_rotation_deg(-90.0);
    assert_eq!(t.rotation_deg(), -45.0);
    t.set_x(-5.0);
    t.set_y(900.0);
    assert_eq!(t.position(), Vec2::new(0.0, 500.0));
}

#[test]
fn transform_ignores_non_finite() {
    let mut t = Transform::new(Vec2::new(120.0, 80.0), 1.5, 10.0);
    t.set_scale(f32::NAN);
    t.set_x(f32::INFINITY);
    t.set_rotation_deg(f32::NAN);
    assert_eq!(t.scale(), 1.5);
    assert_eq!(t.position().x, 120.0);
    assert_eq!(t.rotation_deg(), 10.0);
}

#[test]
fn local_round_trip_across_scales() {
    let size = Vec2::new(320.0, 480.0);
    let points = [
        Vec2::new(0.0, 0.0),
        Vec2::new(400.0, 280.0),
        Vec2::new(731.5, 12.25),
    ];
    for scale in [0.1, 0.5, 1.0, 2.25, 3.0] {
        let t = Transform::new(Vec2::new(350.0, 260.0), scale, 20.0);
        for p in points {
            let back = to_canvas(to_local(p, &t, size), &t, size);
            assert!(approx(back, p), "scale {scale}: {p:?} -> {back:?}");
        }
    }
}

#[test]
fn to_local_centres_image_on_position() {
    let t = Transform::new(Vec2::new(400.0, 280.0), 2.0, 0.0);
    let size = Vec2::new(200.0, 100.0);
    assert!(approx(to_local(t.position(), &t, size), size * 0.5));
    // 20 canvas px right of centre at scale 2 is 10 image px.
    assert!(approx(
        to_local(Vec2::new(420.0, 280.0), &t, size),
        Vec2::new(110.0, 50.0)
    ));
}

#[test]
fn cut_line_completion() {
    let empty = CutLine::default();
    assert!(!empty.is_complete());
    assert_eq!(empty.extended_to(Vec2::ONE), empty);

    let started = CutLine::begin(Vec2::new(10.0, 20.0));
    assert!(!started.is_complete());
    assert_eq!(started.endpoints(), None);
    assert_eq!(started.pivot(PivotSide::Left), None);

    let done = started.extended_to(Vec2::new(30.0, 5.0));
    assert!(done.is_complete());
    assert_eq!(done.pivot(PivotSide::Left), Some(Vec2::new(10.0, 20.0)));
    assert_eq!(done.pivot(PivotSide::Right), Some(Vec2::new(30.0, 5.0)));
}

#[test]
fn local_cut_y_is_topmost_endpoint() {
    let t = Transform::default();
    let size = Vec2::new(600.0, 400.0);
    let cut = CutLine::begin(Vec2::new(100.0, 250.0)).extended_to(Vec2::new(700.0, 230.0));
    let local = LocalCut::from_canvas(&cut, &t, size).unwrap();
    assert_eq!(local.cut_y(), local.start.y.min(local.end.y));
    assert!((local.cut_y() - 150.0).abs() < 1e-4);
    assert!(LocalCut::from_canvas(&CutLine::default(), &t, size).is_none());
}

#[test]
fn rotation_direction_signs() {
    assert_eq!(PivotSide::Left.rotation_direction(), -1.0);
    assert_eq!(PivotSide::Right.rotation_direction(), 1.0);
    assert_eq!(PivotSide::default(), PivotSide::Left);
}
