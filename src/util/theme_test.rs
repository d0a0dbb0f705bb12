#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn system_theme_is_light_without_browser() {
    assert_eq!(system_theme(), Theme::Light);
}

#[test]
fn nothing_is_stored_without_browser() {
    store_theme("theme", Theme::Dark);
    assert_eq!(stored_theme("theme"), None);
    assert_eq!(preferred_theme("theme"), Theme::Light);
}

#[test]
fn toggle_from_light_system_lands_on_dark() {
    assert_eq!(toggle_theme("theme"), Theme::Dark);
}

#[test]
fn apply_and_icons_are_noop_but_callable() {
    apply_theme(Theme::Auto);
    apply_theme(Theme::Dark);
    update_theme_icons(Theme::Light);
    initialize("theme");
}
