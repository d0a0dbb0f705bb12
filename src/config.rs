//! Page-level tunables for the landing page bindings.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every literal delay, offset and threshold used by the bindings lives here
//! so the page can override them from an inline JSON block without a
//! rebuild. Defaults match the shipped landing page.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

/// Id of the optional `<script type="application/json">` override block.
pub const CONFIG_ELEMENT_ID: &str = "landing-config";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed landing config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Root configuration consumed by `app::boot`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    /// `localStorage` key holding the explicit theme.
    pub theme_storage_key: String,
    /// Name of the object installed on `window` for other scripts.
    pub namespace: String,
    /// Height of the fixed navbar; scroll targets land this far above the anchor.
    pub nav_offset_px: f64,
    /// Vertical scroll offset past which the navbar turns opaque.
    pub navbar_scroll_threshold_px: f64,
    pub cta_pulse_ms: u32,
    pub card_lift_px: f64,
    /// Simulated latency of the contact form submission.
    pub form_latency_ms: u32,
    pub toast: ToastTiming,
    pub reveal: RevealOptions,
    pub hero: HeroTiming,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: "theme".to_owned(),
            namespace: "IntelliSoft".to_owned(),
            nav_offset_px: 80.0,
            navbar_scroll_threshold_px: 50.0,
            cta_pulse_ms: 150,
            card_lift_px: 5.0,
            form_latency_ms: 2000,
            toast: ToastTiming::default(),
            reveal: RevealOptions::default(),
            hero: HeroTiming::default(),
        }
    }
}

impl LandingConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when `raw` is not valid JSON for this shape.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(trimmed)?)
    }

    /// Load the config from the page, falling back to defaults.
    pub fn load() -> Self {
        #[cfg(feature = "csr")]
        {
            let raw = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
                .and_then(|el| el.text_content());
            match raw.as_deref().map(Self::from_json) {
                Some(Ok(config)) => config,
                Some(Err(e)) => {
                    log::warn!("{e}; using defaults");
                    Self::default()
                }
                None => Self::default(),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }
}

/// Notification lifecycle delays, all in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ToastTiming {
    /// Delay before the entry transition starts.
    pub enter_delay_ms: u32,
    /// Time from creation until the exit transition starts.
    pub display_ms: u32,
    /// Exit transition length; the element is removed afterwards.
    pub exit_ms: u32,
}

impl Default for ToastTiming {
    fn default() -> Self {
        Self { enter_delay_ms: 100, display_ms: 5000, exit_ms: 300 }
    }
}

/// `IntersectionObserver` options for section reveal.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self { threshold: 0.1, root_margin: "0px 0px -50px 0px".to_owned() }
    }
}

/// Hero intro delays, all in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HeroTiming {
    /// From page ready to the title zoom.
    pub zoom_delay_ms: u32,
    /// Zoom duration before the subtitle starts revealing.
    pub zoom_hold_ms: u32,
    /// Pause between subtitle reveal and the first typed character.
    pub type_start_ms: u32,
    pub char_interval_ms: u32,
    /// From typing completion to the second subtitle fade.
    pub subtitle_fade_ms: u32,
    /// From typing completion to the CTA fade.
    pub cta_fade_ms: u32,
}

impl Default for HeroTiming {
    fn default() -> Self {
        Self {
            zoom_delay_ms: 1000,
            zoom_hold_ms: 600,
            type_start_ms: 100,
            char_interval_ms: 50,
            subtitle_fade_ms: 300,
            cta_fade_ms: 600,
        }
    }
}
