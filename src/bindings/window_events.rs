//! Window-level listeners: connectivity toasts and load timing.

use crate::app::Page;
use crate::state::notifications::NotificationKind;
use crate::util::{analytics, dom};

pub const ONLINE_MESSAGE: &str = "Connection restored!";
pub const OFFLINE_MESSAGE: &str = "You are now offline. Some features may not work.";

pub fn bind_connectivity(page: &Page) {
    let Some(window) = dom::window() else {
        return;
    };
    let notifier = page.notifier;
    dom::listen(&window, "online", move |_| {
        notifier.show(ONLINE_MESSAGE, NotificationKind::Success);
    });
    dom::listen(&window, "offline", move |_| {
        notifier.show(OFFLINE_MESSAGE, NotificationKind::Warning);
    });
}

/// Log the page load time once `load` has fired and timing is filled in.
pub fn bind_load_timing() {
    let Some(window) = dom::window() else {
        return;
    };
    let complete = window.document().is_some_and(|d| d.ready_state() == "complete");
    if complete {
        log_load_time();
        return;
    }
    dom::listen(&window, "load", |_| {
        // loadEventEnd is only set after the load handlers return.
        leptos::task::spawn_local(async {
            gloo_timers::future::sleep(std::time::Duration::ZERO).await;
            log_load_time();
        });
    });
}

fn log_load_time() {
    let Some(timing) = dom::window().and_then(|w| w.performance()).map(|p| p.timing()) else {
        return;
    };
    if let Some(ms) = analytics::load_time_ms(timing.navigation_start(), timing.load_event_end()) {
        log::info!("Page load time: {ms:.0}ms");
    }
}
