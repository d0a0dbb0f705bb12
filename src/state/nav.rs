//! Navigation chrome rules: mobile menu, fragment links, navbar style, and
//! pointer affordances.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

pub const HIDDEN_CLASS: &str = "hidden";
pub const MENU_SHOW_CLASS: &str = "show";
pub const MENU_HIDE_CLASS: &str = "hide";

pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const CONTACT_SECTION_ID: &str = "contact";
pub const SERVICE_CARD_SELECTOR: &str = "#services .bg-white";
pub const HOVER_CARD_CLASS: &str = "hover-card";

/// Animation classes to add and remove after the menu's `hidden` toggled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuAnimation {
    pub add: &'static str,
    pub remove: &'static str,
}

impl MenuAnimation {
    #[must_use]
    pub fn after_toggle(now_hidden: bool) -> Self {
        if now_hidden {
            Self { add: MENU_HIDE_CLASS, remove: MENU_SHOW_CLASS }
        } else {
            Self { add: MENU_SHOW_CLASS, remove: MENU_HIDE_CLASS }
        }
    }
}

/// In-page target id of a fragment link, `None` for other hrefs.
#[must_use]
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#')
}

/// Scroll position that puts `offset_top` just below the fixed navbar.
#[must_use]
pub fn scroll_target(offset_top: f64, nav_offset_px: f64) -> f64 {
    offset_top - nav_offset_px
}

/// Outcome of a click on a navigation link.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnchorAction {
    /// Leave the browser to navigate.
    Follow,
    /// Suppress navigation; scroll when the target exists.
    Intercept { scroll_to: Option<f64> },
}

impl AnchorAction {
    /// Decide what a click on `href` does. `offset_of` looks up an element's
    /// `offsetTop` by id.
    pub fn resolve(href: &str, nav_offset_px: f64, offset_of: impl FnOnce(&str) -> Option<f64>) -> Self {
        match fragment_id(href) {
            None => Self::Follow,
            Some(id) => Self::Intercept { scroll_to: offset_of(id).map(|top| scroll_target(top, nav_offset_px)) },
        }
    }

    #[must_use]
    pub fn prevents_default(self) -> bool {
        matches!(self, Self::Intercept { .. })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavbarStyle {
    Transparent,
    Opaque,
}

impl NavbarStyle {
    #[must_use]
    pub fn for_scroll(scroll_y: f64, threshold_px: f64) -> Self {
        if scroll_y > threshold_px { Self::Opaque } else { Self::Transparent }
    }

    #[must_use]
    pub fn classes_to_add(self) -> &'static [&'static str] {
        match self {
            Self::Opaque => &["bg-white", "shadow-lg"],
            Self::Transparent => &["bg-transparent"],
        }
    }

    #[must_use]
    pub fn classes_to_remove(self) -> &'static [&'static str] {
        match self {
            Self::Opaque => &["bg-transparent"],
            Self::Transparent => &["bg-white", "shadow-lg"],
        }
    }
}

/// `transform` value for a service card.
#[must_use]
pub fn card_transform(hovered: bool, lift_px: f64) -> String {
    if hovered { format!("translateY(-{lift_px}px)") } else { "translateY(0)".to_owned() }
}

pub const CTA_PRESSED_TRANSFORM: &str = "scale(0.95)";
pub const CTA_RELEASED_TRANSFORM: &str = "scale(1)";
