use crate::constants::FLAP_KEY_CODE;
use crate::core::SharedSession;
use crate::input::KeyLatch;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Only the designated key while the session is listening for it. Anything
// else, or any key outside keyboard dubbing, is left to the browser.
fn handle_flap_key(
    ev: &web::KeyboardEvent,
    down: bool,
    session: &SharedSession,
    latch: &Rc<RefCell<KeyLatch>>,
) {
    if ev.code() != FLAP_KEY_CODE {
        return;
    }
    if !session.snapshot().key_listening() {
        latch.borrow_mut().reset();
        return;
    }
    ev.prevent_default();
    let edge = latch.borrow_mut().on_key(down, ev.repeat());
    if let Some(held) = edge {
        session.update(|s| s.set_key_held(held));
        log::debug!("[keys] flap key held={}", held);
    }
}

pub fn wire_flap_key(session: SharedSession) {
    let Some(window) = web::window() else { return };
    let latch = Rc::new(RefCell::new(KeyLatch::default()));

    for (event, down) in [("keydown", true), ("keyup", false)] {
        let session = session.clone();
        let latch = latch.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            handle_flap_key(&ev, down, &session, &latch);
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
