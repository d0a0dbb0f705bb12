//! Desktop and mobile theme switcher buttons.

use crate::app::Page;
use crate::util::{dom, theme};

const SWITCHER_IDS: [&str; 2] = ["theme-switcher", "theme-switcher-mobile"];

pub fn bind(page: &Page) {
    for id in SWITCHER_IDS {
        let Some(button) = dom::by_id(id) else {
            continue;
        };
        let key = page.config.theme_storage_key.clone();
        dom::listen(&button, "click", move |_| {
            theme::toggle_theme(&key);
        });
    }
}
