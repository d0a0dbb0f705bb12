//! Click logging for buttons and navigation links.

use crate::util::analytics::{ButtonClick, CLICK_TRACKED_SELECTOR, log_event, track_page_view};
use crate::util::dom;

pub fn bind() {
    track_page_view();
    for el in dom::query_all(CLICK_TRACKED_SELECTOR) {
        let source = el.clone();
        dom::listen(&el, "click", move |_| {
            let click = ButtonClick::new(
                source.tag_name(),
                &source.text_content().unwrap_or_default(),
                dom::now_iso(),
            );
            log_event("Button clicked", &click);
        });
    }
}
