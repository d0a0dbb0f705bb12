//! Fade sections in the first time they scroll into view.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::app::Page;
use crate::state::hero::FADE_IN_CLASS;
use crate::util::dom;

pub fn bind(page: &Page) {
    let sections = dom::query_all("section");
    if sections.is_empty() {
        return;
    }

    let cb = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    dom::add_classes(&entry.target(), &[FADE_IN_CLASS]);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&wasm_bindgen::JsValue::from_f64(page.config.reveal.threshold));
    options.set_root_margin(&page.config.reveal.root_margin);

    let Ok(observer) = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &options) else {
        log::debug!("IntersectionObserver unavailable; sections stay static");
        return;
    };
    cb.forget();
    for section in &sections {
        observer.observe(section);
    }
}
