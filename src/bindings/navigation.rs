//! Mobile menu, fragment-link scrolling, CTA button, navbar background, and
//! service card hover.

use crate::app::Page;
use crate::state::nav::{
    AnchorAction, CONTACT_SECTION_ID, CTA_PRESSED_TRANSFORM, CTA_RELEASED_TRANSFORM, HIDDEN_CLASS,
    HOVER_CARD_CLASS, MenuAnimation, NAV_LINK_SELECTOR, NavbarStyle, SERVICE_CARD_SELECTOR, card_transform,
    scroll_target,
};
use crate::util::dom;

pub const CTA_BUTTON_ID: &str = "cta-button";

const MENU_BUTTON_ID: &str = "mobile-menu-button";
const MENU_ID: &str = "mobile-menu";

pub fn bind(page: &Page) {
    bind_mobile_menu();
    bind_anchor_links(page);
    bind_cta(page);
    bind_navbar(page);
    bind_service_cards(page);
}

fn bind_mobile_menu() {
    let (Some(button), Some(menu)) = (dom::by_id(MENU_BUTTON_ID), dom::by_id(MENU_ID)) else {
        return;
    };
    dom::listen(&button, "click", move |_| {
        let now_hidden = menu.class_list().toggle(HIDDEN_CLASS).unwrap_or(false);
        let anim = MenuAnimation::after_toggle(now_hidden);
        dom::add_classes(&menu, &[anim.add]);
        dom::remove_classes(&menu, &[anim.remove]);
    });
}

fn bind_anchor_links(page: &Page) {
    let nav_offset = page.config.nav_offset_px;
    for link in dom::query_all(NAV_LINK_SELECTOR) {
        let href_source = link.clone();
        dom::listen(&link, "click", move |ev| {
            let href = href_source.get_attribute("href").unwrap_or_default();
            let action = AnchorAction::resolve(&href, nav_offset, |id| dom::by_id(id).map(|el| f64::from(el.offset_top())));
            if !action.prevents_default() {
                return;
            }
            ev.prevent_default();
            if let AnchorAction::Intercept { scroll_to: Some(top) } = action {
                dom::smooth_scroll_to(top);
                if let Some(menu) = dom::by_id(MENU_ID) {
                    if !dom::has_class(&menu, HIDDEN_CLASS) {
                        dom::add_classes(&menu, &[HIDDEN_CLASS]);
                    }
                }
            }
        });
    }
}

fn bind_cta(page: &Page) {
    let Some(cta) = dom::by_id(CTA_BUTTON_ID) else {
        return;
    };
    let nav_offset = page.config.nav_offset_px;
    let pulse_ms = page.config.cta_pulse_ms;
    let target = cta.clone();
    dom::listen(&cta, "click", move |_| {
        if let Some(contact) = dom::by_id(CONTACT_SECTION_ID) {
            dom::smooth_scroll_to(scroll_target(f64::from(contact.offset_top()), nav_offset));
        }

        dom::set_style(&target, "transform", CTA_PRESSED_TRANSFORM);
        let target = target.clone();
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(pulse_ms))).await;
            dom::set_style(&target, "transform", CTA_RELEASED_TRANSFORM);
        });
    });
}

fn bind_navbar(page: &Page) {
    let (Some(window), Some(navbar)) = (dom::window(), dom::query("nav")) else {
        return;
    };
    let threshold = page.config.navbar_scroll_threshold_px;
    let scroll_source = window.clone();
    dom::listen(&window, "scroll", move |_| {
        let scroll_y = scroll_source.scroll_y().unwrap_or(0.0);
        let style = NavbarStyle::for_scroll(scroll_y, threshold);
        dom::add_classes(&navbar, style.classes_to_add());
        dom::remove_classes(&navbar, style.classes_to_remove());
    });
}

fn bind_service_cards(page: &Page) {
    let lift_px = page.config.card_lift_px;
    for card in dom::query_all(SERVICE_CARD_SELECTOR) {
        dom::add_classes(&card, &[HOVER_CARD_CLASS]);
        for (event, hovered) in [("mouseenter", true), ("mouseleave", false)] {
            let target = card.clone();
            dom::listen(&card, event, move |_| {
                dom::set_style(&target, "transform", &card_transform(hovered, lift_px));
            });
        }
    }
}
