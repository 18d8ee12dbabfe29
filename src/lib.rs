#![cfg(target_arch = "wasm32")]
use crate::assets::Assets;
use crate::audio::AudioPlayer;
use crate::constants::*;
use crate::core::{
    InputMode, PivotSide, Session, SharedSession, Stage, CANVAS_HEIGHT, CANVAS_WIDTH,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod render;
mod ui;

fn wire_file_inputs(document: &web::Document, session: &SharedSession, assets: &Assets, audio: &AudioPlayer) {
    let bg_slot = assets.background.clone();
    dom::add_file_listener(document, BACKGROUND_INPUT_ID, move |file| {
        assets::load_image_into(file, bg_slot.clone(), |_| {});
    });

    let char_slot = assets.character.clone();
    let session_char = session.clone();
    dom::add_file_listener(document, CHARACTER_INPUT_ID, move |file| {
        let session = session_char.clone();
        assets::load_image_into(file, char_slot.clone(), move |size| {
            session.update(|s| s.set_character(Some(size)));
        });
    });

    let audio_load = audio.clone();
    dom::add_file_listener(document, AUDIO_INPUT_ID, move |file| {
        if let Err(e) = audio_load.load(file) {
            log::warn!("[audio] load failed: {:?}", e);
        }
    });
}

fn wire_sliders(document: &web::Document, session: &SharedSession) {
    let snapshot = session.snapshot();
    let t = snapshot.transform;
    for (id, value) in [
        (POS_X_ID, t.position().x),
        (POS_Y_ID, t.position().y),
        (SCALE_ID, t.scale()),
        (ROTATION_ID, t.rotation_deg()),
        (SENSITIVITY_ID, snapshot.params.sensitivity()),
        (MAX_ANGLE_ID, snapshot.params.max_angle_deg()),
        (MANUAL_ID, snapshot.openness()),
    ] {
        dom::set_range_value(document, id, value);
    }

    let bind = |id: &str, apply: fn(&mut Session, f32)| {
        let session = session.clone();
        dom::add_range_listener(document, id, move |v| session.update(|s| apply(s, v)));
    };
    bind(POS_X_ID, |s, v| s.transform.set_x(v));
    bind(POS_Y_ID, |s, v| s.transform.set_y(v));
    bind(SCALE_ID, |s, v| s.transform.set_scale(v));
    bind(ROTATION_ID, |s, v| s.transform.set_rotation_deg(v));
    bind(SENSITIVITY_ID, |s, v| s.params.set_sensitivity(v));
    bind(MAX_ANGLE_ID, |s, v| s.params.set_max_angle_deg(v));
    bind(MANUAL_ID, |s, v| {
        s.motion.set_manual(v);
    });
}

fn wire_buttons(document: &web::Document, session: &SharedSession, audio: &AudioPlayer) {
    let session_next = session.clone();
    dom::add_click_listener(document, NEXT_ID, move || {
        match session_next.update(|s| s.advance()) {
            Ok(stage) => log::info!("[stage] -> {}", stage.label()),
            Err(e) => log::warn!("[stage] cannot advance: {}", e),
        }
    });

    let session_back = session.clone();
    let audio_back = audio.clone();
    dom::add_click_listener(document, BACK_ID, move || {
        let from = session_back.snapshot().stage();
        match session_back.update(|s| s.go_back()) {
            Ok(teardown) => {
                if teardown.stop_audio || from == Stage::Dubbing {
                    audio_back.stop();
                }
            }
            Err(e) => log::warn!("[stage] cannot go back: {}", e),
        }
    });

    for (id, side) in [(PIVOT_LEFT_ID, PivotSide::Left), (PIVOT_RIGHT_ID, PivotSide::Right)] {
        let session = session.clone();
        dom::add_click_listener(document, id, move || {
            session.update(|s| s.pivot = side);
        });
    }

    for (id, mode) in [
        (MODE_MANUAL_ID, InputMode::Manual),
        (MODE_KEYBOARD_ID, InputMode::Keyboard),
        (MODE_AUDIO_ID, InputMode::Audio),
    ] {
        let session = session.clone();
        let audio = audio.clone();
        dom::add_click_listener(document, id, move || {
            let teardown = session.update(|s| s.set_mode(mode));
            if teardown.stop_audio {
                audio.stop();
            }
            log::info!("[mode] {:?}", mode);
        });
    }

    let audio_toggle = audio.clone();
    dom::add_click_listener(document, PLAY_ID, move || {
        if audio_toggle.is_playing() {
            audio_toggle.stop();
        } else if let Err(e) = audio_toggle.play() {
            log::warn!("[audio] play failed: {:?}", e);
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("head-flap starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Fixed backing store; CSS may scale it and pointer input is mapped back.
    canvas.set_width(CANVAS_WIDTH as u32);
    canvas.set_height(CANVAS_HEIGHT as u32);
    let renderer = render::CanvasRenderer::new(&canvas)?;

    let session = SharedSession::new(Session::default());
    let assets = Assets::default();
    let audio = AudioPlayer::new(session.clone());

    wire_file_inputs(&document, &session, &assets, &audio);
    wire_sliders(&document, &session);
    wire_buttons(&document, &session, &audio);
    events::wire_cut_line_handlers(events::PointerWiring {
        canvas: canvas.clone(),
        session: session.clone(),
    });
    events::wire_flap_key(session.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        session, assets, audio, renderer, document,
    )));
    frame::start_loop(frame_ctx);
    Ok(())
}
