use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Look up an element by id and cast it to a concrete element type.
#[inline]
pub fn element<T: JsCast>(document: &web::Document, element_id: &str) -> Option<T> {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] missing #{}", element_id);
    }
}

/// Call `handler` with the numeric value of a range input on every `input` event.
pub fn add_range_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(f32) + 'static,
) {
    let Some(input) = element::<web::HtmlInputElement>(document, element_id) else {
        log::warn!("[dom] missing range #{}", element_id);
        return;
    };
    let source = input.clone();
    let closure = Closure::wrap(Box::new(move || {
        let v = source.value_as_number();
        if v.is_finite() {
            handler(v as f32);
        }
    }) as Box<dyn FnMut()>);
    _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Call `handler` with the first selected file whenever a file input changes.
pub fn add_file_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(web::File) + 'static,
) {
    let Some(input) = element::<web::HtmlInputElement>(document, element_id) else {
        log::warn!("[dom] missing file input #{}", element_id);
        return;
    };
    let source = input.clone();
    let closure = Closure::wrap(Box::new(move || {
        if let Some(file) = source.files().and_then(|list| list.get(0)) {
            handler(file);
        }
    }) as Box<dyn FnMut()>);
    _ = input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn set_visible(document: &web::Document, element_id: &str, visible: bool) {
    if let Some(el) = element::<web::HtmlElement>(document, element_id) {
        _ = el
            .style()
            .set_property("display", if visible { "" } else { "none" });
    }
}

#[inline]
pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

#[inline]
pub fn set_style(document: &web::Document, element_id: &str, property: &str, value: &str) {
    if let Some(el) = element::<web::HtmlElement>(document, element_id) {
        _ = el.style().set_property(property, value);
    }
}

#[inline]
pub fn set_disabled(document: &web::Document, element_id: &str, disabled: bool) {
    if let Some(btn) = element::<web::HtmlButtonElement>(document, element_id) {
        btn.set_disabled(disabled);
        _ = btn
            .style()
            .set_property("opacity", if disabled { "0.4" } else { "1" });
    }
}

/// Set a range input's value without firing its listeners.
#[inline]
pub fn set_range_value(document: &web::Document, element_id: &str, value: f32) {
    if let Some(input) = element::<web::HtmlInputElement>(document, element_id) {
        input.set_value_as_number(value as f64);
    }
}
