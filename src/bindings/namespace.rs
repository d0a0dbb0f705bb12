//! `window.IntelliSoft`: theme, notification, and viewport helpers for
//! other scripts on the page.

use std::rc::Rc;

use js_sys::{Object, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::app::Page;
use crate::state::notifications::NotificationKind;
use crate::state::theme::Theme;
use crate::util::{analytics, theme, viewport};

fn set(target: &Object, name: &str, value: &JsValue) {
    let _ = Reflect::set(target, &JsValue::from_str(name), value);
}

fn theme_arg(value: &JsValue) -> Option<Theme> {
    value.as_string().as_deref().and_then(Theme::parse)
}

fn export0<F>(target: &Object, name: &str, f: F)
where
    F: Fn() -> JsValue + 'static,
{
    set(target, name, &Closure::<dyn Fn() -> JsValue>::new(f).into_js_value());
}

fn export1<F>(target: &Object, name: &str, f: F)
where
    F: Fn(JsValue) -> JsValue + 'static,
{
    set(target, name, &Closure::<dyn Fn(JsValue) -> JsValue>::new(f).into_js_value());
}

fn export2<F>(target: &Object, name: &str, f: F)
where
    F: Fn(JsValue, JsValue) -> JsValue + 'static,
{
    set(target, name, &Closure::<dyn Fn(JsValue, JsValue) -> JsValue>::new(f).into_js_value());
}

pub fn install(page: &Page) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let api = Object::new();
    let key: Rc<str> = Rc::from(page.config.theme_storage_key.as_str());
    let notifier = page.notifier;

    export2(&api, "showNotification", move |message, kind| {
        let kind = kind.as_string().map_or(NotificationKind::Info, |k| NotificationKind::parse(&k));
        notifier.show(message.as_string().unwrap_or_default(), kind);
        JsValue::UNDEFINED
    });
    export0(&api, "trackPageView", || {
        analytics::track_page_view();
        JsValue::UNDEFINED
    });
    export0(&api, "getViewportSize", || {
        let size = viewport::viewport_size();
        let out = Object::new();
        set(&out, "width", &JsValue::from_f64(size.width));
        set(&out, "height", &JsValue::from_f64(size.height));
        out.into()
    });
    export1(&api, "isInViewport", |el| {
        JsValue::from_bool(el.dyn_ref::<web_sys::Element>().is_some_and(viewport::is_in_viewport))
    });

    export0(&api, "getSystemTheme", || JsValue::from_str(theme::system_theme().as_str()));
    let k = Rc::clone(&key);
    export0(&api, "getStoredTheme", move || {
        theme::stored_theme(&k).map_or(JsValue::NULL, |t| JsValue::from_str(t.as_str()))
    });
    let k = Rc::clone(&key);
    export1(&api, "setStoredTheme", move |t| {
        if let Some(t) = theme_arg(&t) {
            theme::store_theme(&k, t);
        }
        JsValue::UNDEFINED
    });
    let k = Rc::clone(&key);
    export0(&api, "getPreferredTheme", move || JsValue::from_str(theme::preferred_theme(&k).as_str()));
    export1(&api, "setTheme", |t| {
        if let Some(t) = theme_arg(&t) {
            theme::apply_theme(t);
        }
        JsValue::UNDEFINED
    });
    let k = Rc::clone(&key);
    export0(&api, "toggleTheme", move || {
        theme::toggle_theme(&k);
        JsValue::UNDEFINED
    });
    export1(&api, "updateThemeIcons", |t| {
        if let Some(t) = theme_arg(&t) {
            theme::update_theme_icons(t);
        }
        JsValue::UNDEFINED
    });

    set(&window, &page.config.namespace, &api);
}
