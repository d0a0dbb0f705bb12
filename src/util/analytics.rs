//! Console analytics stub.
//!
//! Records are serialized to JSON and written through `log`; there is no
//! transport, batching, or retry.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use serde::Serialize;

/// Elements whose clicks are logged.
pub const CLICK_TRACKED_SELECTOR: &str = "button, .nav-link";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    pub url: String,
    pub timestamp: String,
    pub user_agent: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ButtonClick {
    pub element: String,
    pub text: String,
    pub timestamp: String,
}

impl ButtonClick {
    pub fn new(tag_name: impl Into<String>, raw_text: &str, timestamp: impl Into<String>) -> Self {
        Self { element: tag_name.into(), text: raw_text.trim().to_owned(), timestamp: timestamp.into() }
    }
}

/// Render `label: {json}` for the log sink.
pub fn format_event<T: Serialize>(label: &str, record: &T) -> String {
    match serde_json::to_string(record) {
        Ok(json) => format!("{label}: {json}"),
        Err(_) => label.to_owned(),
    }
}

pub fn log_event<T: Serialize>(label: &str, record: &T) {
    log::info!("{}", format_event(label, record));
}

/// Page load duration from navigation timing, `None` until `loadEventEnd`
/// has been recorded.
#[must_use]
pub fn load_time_ms(navigation_start: f64, load_event_end: f64) -> Option<f64> {
    (navigation_start > 0.0 && load_event_end >= navigation_start).then(|| load_event_end - navigation_start)
}

/// Log the current URL, time, and user agent.
pub fn track_page_view() {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let view = PageView {
            url: window.location().href().unwrap_or_default(),
            timestamp: crate::util::dom::now_iso(),
            user_agent: window.navigator().user_agent().unwrap_or_default(),
        };
        log_event("Page view tracked", &view);
    }
}
