use crate::core::SharedSession;
use crate::input;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub session: SharedSession,
}

/// Cut-line drawing: down starts a line, move drags its end, up/leave ends it.
pub fn wire_cut_line_handlers(w: PointerWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointer_end(&w, "pointerup");
    wire_pointer_end(&w, "pointerleave");
}

fn wire_pointerdown(w: &PointerWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        if w.session.update(|s| s.begin_cut(pos)) {
            _ = w.canvas.set_pointer_capture(ev.pointer_id());
            ev.prevent_default();
            log::info!("[cut] start ({:.0},{:.0})", pos.x, pos.y);
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &PointerWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !w.session.snapshot().is_drawing() {
            return;
        }
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        if w.session.update(|s| s.extend_cut(pos)) {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointer_end(w: &PointerWiring, event: &str) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if w.session.update(|s| s.end_cut()) {
            _ = w.canvas.release_pointer_capture(ev.pointer_id());
            ev.prevent_default();
            let cut = w.session.snapshot().cut_line();
            match cut.endpoints() {
                Some((a, b)) => log::info!(
                    "[cut] ({:.0},{:.0}) -> ({:.0},{:.0})",
                    a.x,
                    a.y,
                    b.x,
                    b.y
                ),
                None => log::info!("[cut] released without an end point"),
            }
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}
