//! Theme persistence and application.
//!
//! Reads the explicit theme from `localStorage` and the system preference
//! from `prefers-color-scheme`, then reflects the result as a `data-theme`
//! attribute on `<html>` plus the visibility of the four switcher icons.
//!
//! TRADE-OFFS
//! ==========
//! Storage and media queries are best-effort browser-only behavior; host
//! builds no-op and report `light` with nothing stored.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::theme::{IconVisibility, Theme, ThemeState};

#[cfg(feature = "csr")]
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[cfg(feature = "csr")]
fn dark_media_query() -> Option<web_sys::MediaQueryList> {
    web_sys::window()?.match_media(DARK_QUERY).ok().flatten()
}

#[cfg(feature = "csr")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// System color scheme as a concrete theme.
pub fn system_theme() -> Theme {
    #[cfg(feature = "csr")]
    {
        Theme::from_prefers_dark(dark_media_query().is_some_and(|mq| mq.matches()))
    }
    #[cfg(not(feature = "csr"))]
    {
        Theme::Light
    }
}

/// Explicit theme from storage, if any.
pub fn stored_theme(key: &str) -> Option<Theme> {
    #[cfg(feature = "csr")]
    {
        let raw = storage()?.get_item(key).ok().flatten()?;
        Theme::parse_stored(&raw)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}

/// Persist an explicit theme. `auto` is never written.
pub fn store_theme(key: &str, theme: Theme) {
    if !theme.is_concrete() {
        return;
    }
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = storage() {
            let _ = storage.set_item(key, theme.as_str());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
    }
}

/// Snapshot of storage and system preference.
pub fn current_state(key: &str) -> ThemeState {
    ThemeState::new(stored_theme(key), system_theme() == Theme::Dark)
}

pub fn preferred_theme(key: &str) -> Theme {
    current_state(key).preferred()
}

/// Set or clear `data-theme` on `<html>`, then sync the icons.
pub fn apply_theme(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(root) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = match theme.attribute_value() {
                Some(value) => root.set_attribute("data-theme", value),
                None => root.remove_attribute("data-theme"),
            };
        }
    }
    update_theme_icons(theme);
}

/// Show exactly one icon of each light/dark pair. Missing icons are skipped.
pub fn update_theme_icons(theme: Theme) {
    let visible = IconVisibility::for_theme(theme, system_theme());
    #[cfg(feature = "csr")]
    {
        use crate::state::nav::HIDDEN_CLASS;
        use crate::state::theme::ICON_PAIRS;

        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        for (light_id, dark_id) in ICON_PAIRS {
            for (id, show) in [(light_id, visible.light), (dark_id, visible.dark)] {
                if let Some(icon) = doc.get_element_by_id(id) {
                    let list = icon.class_list();
                    let _ = if show { list.remove_1(HIDDEN_CLASS) } else { list.add_1(HIDDEN_CLASS) };
                }
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = visible;
    }
}

/// Flip the effective theme, apply it, and persist it.
pub fn toggle_theme(key: &str) -> Theme {
    let mut state = current_state(key);
    let next = state.toggle();
    apply_theme(next);
    store_theme(key, next);
    log::info!("Theme changed to: {}", next.as_str());
    next
}

/// Apply the preferred theme and follow system changes while nothing is stored.
pub fn initialize(key: &str) {
    apply_theme(preferred_theme(key));
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(mq) = dark_media_query() else {
            return;
        };
        let key = key.to_owned();
        let cb = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(move |ev: web_sys::MediaQueryListEvent| {
            if let Some(theme) = current_state(&key).system_changed(ev.matches()) {
                apply_theme(theme);
            }
        });
        if mq.add_event_listener_with_callback("change", cb.as_ref().unchecked_ref()).is_ok() {
            cb.forget();
        }
    }
}
