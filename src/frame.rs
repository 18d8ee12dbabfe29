use crate::assets::Assets;
use crate::audio::AudioPlayer;
use crate::constants::FPS_LOG_INTERVAL_SEC;
use crate::core::SharedSession;
use crate::render::CanvasRenderer;
use crate::ui::UiView;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub session: SharedSession,
    pub assets: Assets,
    pub audio: AudioPlayer,
    pub renderer: CanvasRenderer,
    pub document: web::Document,

    pub last_ui: Option<UiView>,
    pub last_instant: Instant,
    pub fps_elapsed: f32,
    pub fps_frames: u32,
}

impl FrameContext {
    pub fn new(
        session: SharedSession,
        assets: Assets,
        audio: AudioPlayer,
        renderer: CanvasRenderer,
        document: web::Document,
    ) -> Self {
        Self {
            session,
            assets,
            audio,
            renderer,
            document,
            last_ui: None,
            last_instant: Instant::now(),
            fps_elapsed: 0.0,
            fps_frames: 0,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        self.track_fps(dt_sec);

        // Everything this frame draws comes from these two snapshots.
        let snapshot = self.session.snapshot();
        let (background, character) = self.assets.snapshot();

        self.renderer.render(
            &snapshot,
            background.as_ref(),
            character.as_ref(),
            js_sys::Date::now(),
        );

        let view = UiView::new(&snapshot, self.audio.has_audio(), self.audio.is_playing());
        view.apply(&self.document, self.last_ui.as_ref());
        self.last_ui = Some(view);
    }

    fn track_fps(&mut self, dt_sec: f32) {
        self.fps_elapsed += dt_sec;
        self.fps_frames += 1;
        if self.fps_elapsed >= FPS_LOG_INTERVAL_SEC {
            log::debug!(
                "[frame] fps={:.1}",
                self.fps_frames as f32 / self.fps_elapsed
            );
            self.fps_elapsed = 0.0;
            self.fps_frames = 0;
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
