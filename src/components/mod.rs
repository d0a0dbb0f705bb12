//! Leptos components rendered into the static landing page.

pub mod toast_host;
