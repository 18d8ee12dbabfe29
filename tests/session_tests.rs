// Host-side tests for the motion driver and the staged editing session.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod error {
    include!("../src/core/error.rs");
}
mod geometry {
    include!("../src/core/geometry.rs");
}
mod split {
    include!("../src/core/split.rs");
}
mod motion {
    include!("../src/core/motion.rs");
}
mod session {
    include!("../src/core/session.rs");
}

use error::StageError;
use geometry::PivotSide;
use glam::Vec2;
use motion::*;
use session::*;

fn with_character() -> Session {
    let mut s = Session::default();
    s.set_character(Some(Vec2::new(400.0, 300.0)));
    s
}

fn dubbing() -> Session {
    let mut s = with_character();
    s.advance().unwrap();
    assert!(s.begin_cut(Vec2::new(100.0, 250.0)));
    assert!(s.extend_cut(Vec2::new(700.0, 260.0)));
    assert!(s.end_cut());
    assert_eq!(s.advance(), Ok(Stage::Dubbing));
    s
}

// ---------------------------------------------------------------------------
// Motion driver

#[test]
fn driver_starts_manual_and_closed() {
    let d = MotionDriver::default();
    assert_eq!(d.mode(), InputMode::Manual);
    assert_eq!(d.openness(), 0.0);
}

#[test]
fn manual_value_is_clamped() {
    let mut d = MotionDriver::default();
    assert!(d.set_manual(0.4));
    assert_eq!(d.openness(), 0.4);
    d.set_manual(3.0);
    assert_eq!(d.openness(), 1.0);
    d.set_manual(f32::NAN);
    assert_eq!(d.openness(), 0.0);
}

#[test]
fn key_is_ignored_outside_keyboard_mode() {
    let mut d = MotionDriver::default();
    assert!(!d.set_key_held(true));
    assert_eq!(d.openness(), 0.0);

    d.set_mode(InputMode::Keyboard);
    assert!(d.set_key_held(true));
    assert_eq!(d.openness(), 1.0);
    assert!(d.set_key_held(false));
    assert_eq!(d.openness(), 0.0);
}

#[test]
fn switching_from_audio_stops_it_and_closes() {
    let mut d = MotionDriver::default();
    d.set_mode(InputMode::Audio);
    assert!(d.audio_started());
    assert!(d.push_envelope(0.7));
    assert_eq!(d.openness(), 0.7);

    let teardown = d.set_mode(InputMode::Manual);
    assert!(teardown.stop_audio);
    assert_eq!(d.openness(), 0.0);
    assert!(!d.push_envelope(0.9));
    assert_eq!(d.openness(), 0.0);
}

#[test]
fn switch_drops_previous_producer_state() {
    let mut d = MotionDriver::default();
    d.set_manual(0.8);
    let teardown = d.set_mode(InputMode::Keyboard);
    assert!(!teardown.stop_audio);
    assert_eq!(d.openness(), 0.0);
    d.set_mode(InputMode::Manual);
    assert_eq!(d.openness(), 0.0);
}

#[test]
fn same_mode_is_a_no_op() {
    let mut d = MotionDriver::default();
    d.set_mode(InputMode::Audio);
    d.audio_started();
    d.push_envelope(0.5);
    assert_eq!(d.set_mode(InputMode::Audio), Teardown::default());
    assert_eq!(d.openness(), 0.5);
}

#[test]
fn envelope_needs_an_active_session() {
    let mut d = MotionDriver::default();
    d.set_mode(InputMode::Audio);
    assert!(!d.push_envelope(0.6));
    assert_eq!(d.openness(), 0.0);

    d.audio_started();
    d.push_envelope(0.6);
    d.audio_stopped();
    assert_eq!(d.openness(), 0.0);
    assert_eq!(d.mode(), InputMode::Audio);
}

#[test]
fn audio_start_ignored_in_other_modes() {
    let mut d = MotionDriver::default();
    assert!(!d.audio_started());
    assert!(!d.push_envelope(1.0));
}

// ---------------------------------------------------------------------------
// Stages

#[test]
fn setup_needs_a_character() {
    let mut s = Session::default();
    assert!(!s.can_advance());
    assert_eq!(s.advance(), Err(StageError::NoCharacter));
    assert_eq!(s.stage(), Stage::Setup);

    s.set_character(Some(Vec2::new(0.0, 10.0)));
    assert_eq!(s.character_size(), None);

    let mut s = with_character();
    assert!(s.can_advance());
    assert_eq!(s.advance(), Ok(Stage::CutLine));
}

#[test]
fn go_back_from_setup_is_refused() {
    let mut s = with_character();
    assert_eq!(s.go_back(), Err(StageError::AtFirstStage));
}

#[test]
fn release_with_only_a_start_point_leaves_cut_incomplete() {
    let mut s = with_character();
    s.advance().unwrap();
    assert!(s.begin_cut(Vec2::new(50.0, 60.0)));
    assert!(s.is_drawing());
    assert!(s.end_cut());
    assert!(!s.is_drawing());
    assert!(!s.cut_line().is_complete());
    assert!(!s.can_advance());
    assert_eq!(s.advance(), Err(StageError::CutLineIncomplete));
}

#[test]
fn cut_gestures_outside_cut_stage_are_ignored() {
    let mut s = with_character();
    assert!(!s.begin_cut(Vec2::ONE));
    assert!(!s.extend_cut(Vec2::ONE));
    assert!(!s.end_cut());
    assert!(!s.cut_line().is_complete());
}

#[test]
fn move_without_press_does_not_draw() {
    let mut s = with_character();
    s.advance().unwrap();
    assert!(!s.extend_cut(Vec2::new(10.0, 10.0)));
    assert_eq!(s.cut_line().start, None);
}

#[test]
fn new_press_restarts_the_line() {
    let mut s = with_character();
    s.advance().unwrap();
    s.begin_cut(Vec2::new(1.0, 1.0));
    s.extend_cut(Vec2::new(2.0, 2.0));
    s.end_cut();
    s.begin_cut(Vec2::new(5.0, 5.0));
    assert_eq!(s.cut_line().start, Some(Vec2::new(5.0, 5.0)));
    assert_eq!(s.cut_line().end, None);
}

#[test]
fn back_from_cut_clears_the_line() {
    let mut s = with_character();
    s.advance().unwrap();
    s.begin_cut(Vec2::new(1.0, 1.0));
    s.extend_cut(Vec2::new(2.0, 2.0));
    s.end_cut();
    assert_eq!(s.go_back(), Ok(Teardown::default()));
    assert_eq!(s.stage(), Stage::Setup);
    assert_eq!(s.cut_line(), geometry::CutLine::default());
}

#[test]
fn back_from_dub_stops_active_audio_and_keeps_cut() {
    let mut s = dubbing();
    s.set_mode(InputMode::Audio);
    s.motion.audio_started();
    s.motion.push_envelope(0.9);
    assert_eq!(s.openness(), 0.9);

    let teardown = s.go_back().unwrap();
    assert!(teardown.stop_audio);
    assert_eq!(s.stage(), Stage::CutLine);
    assert_eq!(s.openness(), 0.0);
    assert_eq!(s.motion.mode(), InputMode::Audio);
    assert!(s.cut_line().is_complete());
}

#[test]
fn dubbing_is_the_last_stage() {
    let mut s = dubbing();
    assert!(!s.can_advance());
    assert_eq!(s.advance(), Err(StageError::AtLastStage));
}

#[test]
fn key_listening_only_while_dubbing_in_keyboard_mode() {
    let mut s = with_character();
    s.set_mode(InputMode::Keyboard);
    assert!(!s.key_listening());
    assert!(!s.set_key_held(true));
    assert_eq!(s.openness(), 0.0);

    let mut s = dubbing();
    s.set_mode(InputMode::Keyboard);
    assert!(s.key_listening());
    assert!(s.set_key_held(true));
    assert_eq!(s.openness(), 1.0);
}

#[test]
fn split_plan_only_while_dubbing() {
    let s = with_character();
    assert!(s.split_plan().is_none());

    let mut s = dubbing();
    s.motion.set_manual(1.0);
    s.params.set_max_angle_deg(35.0);
    let plan = s.split_plan().unwrap();
    assert_eq!(s.pivot, PivotSide::Left);
    assert_eq!(plan.hinge_deg, -35.0);

    s.pivot = PivotSide::Right;
    assert_eq!(s.split_plan().unwrap().hinge_deg, 35.0);
}

#[test]
fn parameters_clamp_and_ignore_non_finite() {
    let mut p = AnimationParameters::default();
    assert_eq!(p.sensitivity(), 2.0);
    assert_eq!(p.max_angle_deg(), 35.0);
    p.set_sensitivity(0.0);
    assert_eq!(p.sensitivity(), 0.5);
    p.set_max_angle_deg(200.0);
    assert_eq!(p.max_angle_deg(), 90.0);
    p.set_sensitivity(f32::NAN);
    assert_eq!(p.sensitivity(), 0.5);
}

#[test]
fn stage_errors_read_as_messages() {
    assert_eq!(
        StageError::CutLineIncomplete.to_string(),
        "cut line needs both a start and an end point"
    );
    assert_eq!(Stage::ALL.map(Stage::label), ["SETUP", "CUT", "DUB"]);
}

// ---------------------------------------------------------------------------
// Shared handle

#[test]
fn shared_session_snapshots_are_detached() {
    let shared = SharedSession::new(with_character());
    let before = shared.snapshot();
    let stage = shared.update(|s| s.advance());
    assert_eq!(stage, Ok(Stage::CutLine));
    assert_eq!(before.stage(), Stage::Setup);
    assert_eq!(shared.snapshot().stage(), Stage::CutLine);

    let clone = shared.clone();
    clone.update(|s| s.transform.set_scale(2.0));
    assert_eq!(shared.snapshot().transform.scale(), 2.0);
}
