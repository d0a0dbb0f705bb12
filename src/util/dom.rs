//! Thin web-sys helpers shared by the bindings.
//!
//! Every lookup returns `Option` and every mutation ignores DOM errors: a
//! missing element or a refused call degrades the feature, never the page.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, EventTarget, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

pub fn by_id(id: &str) -> Option<HtmlElement> {
    document()?.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
}

pub fn query(selector: &str) -> Option<HtmlElement> {
    document()?.query_selector(selector).ok().flatten()?.dyn_into::<HtmlElement>().ok()
}

pub fn query_all(selector: &str) -> Vec<HtmlElement> {
    let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn add_classes(el: &Element, classes: &[&str]) {
    let list = el.class_list();
    for class in classes {
        let _ = list.add_1(class);
    }
}

pub fn remove_classes(el: &Element, classes: &[&str]) {
    let list = el.class_list();
    for class in classes {
        let _ = list.remove_1(class);
    }
}

pub fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

/// Smooth-scroll the window to an absolute vertical offset.
pub fn smooth_scroll_to(top: f64) {
    let Some(window) = window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Attach a listener for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(web_sys::Event) + 'static,
{
    let cb = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    if target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()).is_ok() {
        cb.forget();
    }
}

/// Current timestamp in ISO-8601, from the JS clock.
pub fn now_iso() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
}
