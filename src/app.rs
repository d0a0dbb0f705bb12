//! Page boot: context construction and binding order.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::rc::Rc;

use crate::components::toast_host::Notifier;
use crate::config::LandingConfig;

/// Everything a binding needs, passed explicitly instead of read from globals.
#[derive(Clone)]
pub struct Page {
    pub config: Rc<LandingConfig>,
    pub notifier: Notifier,
}

impl Page {
    pub fn new(config: LandingConfig) -> Self {
        let notifier = Notifier::new(config.toast);
        Self { config: Rc::new(config), notifier }
    }
}

/// Boot once the DOM is parsed: immediately if it already is, otherwise on
/// `DOMContentLoaded`.
#[cfg(feature = "csr")]
pub fn run_when_ready() {
    use crate::util::dom;

    let Some(document) = dom::document() else {
        return;
    };
    crate::bindings::window_events::bind_load_timing();
    if document.ready_state() == "loading" {
        dom::listen(&document, "DOMContentLoaded", |_| boot());
    } else {
        boot();
    }
}

#[cfg(feature = "csr")]
fn boot() {
    use crate::bindings;
    use crate::components::toast_host::ToastHost;
    use leptos::prelude::*;

    let page = Page::new(LandingConfig::load());

    let notifier = page.notifier;
    leptos::mount::mount_to_body(move || view! { <ToastHost notifier/> });

    crate::util::theme::initialize(&page.config.theme_storage_key);
    bindings::theme_switcher::bind(&page);
    bindings::navigation::bind(&page);
    bindings::contact_form::bind(&page);
    bindings::reveal::bind(&page);
    bindings::hero::start(&page);
    bindings::analytics::bind();
    bindings::window_events::bind_connectivity(&page);
    bindings::namespace::install(&page);

    log::debug!("landing page bindings installed");
}
