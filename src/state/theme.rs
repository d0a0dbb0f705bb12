//! Theme preference model and resolution rules.
//!
//! DESIGN
//! ======
//! Three logical states (`light`, `dark`, `auto`) but only two persisted
//! ones: `auto` is represented by the absence of a stored value. Keeping that
//! asymmetry is what lets system color-scheme changes flow through until the
//! user makes an explicit choice.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// A theme as requested by the page or the user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
    /// Defer to the system color scheme.
    #[default]
    Auto,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Auto => "auto",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "auto" => Some(Self::Auto),
            _ => None,
        }
    }

    /// Parse a stored value. Only concrete themes are ever persisted, so
    /// `auto` and unknown strings both read as "nothing stored".
    #[must_use]
    pub fn parse_stored(raw: &str) -> Option<Self> {
        Self::parse(raw).filter(|t| t.is_concrete())
    }

    #[must_use]
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_concrete(self) -> bool {
        !matches!(self, Self::Auto)
    }

    /// Resolve `auto` against the system theme.
    #[must_use]
    pub fn effective(self, system: Theme) -> Theme {
        match self {
            Self::Auto => system.effective(Self::Light),
            concrete => concrete,
        }
    }

    /// Opposite concrete theme; `auto` is resolved first.
    #[must_use]
    pub fn flipped(self, system: Theme) -> Theme {
        match self.effective(system) {
            Self::Dark => Self::Light,
            _ => Self::Dark,
        }
    }

    /// Value for the root `data-theme` attribute, `None` to remove it.
    #[must_use]
    pub fn attribute_value(self) -> Option<&'static str> {
        self.is_concrete().then(|| self.as_str())
    }
}

/// Stored theme if any, else the system theme.
#[must_use]
pub fn preferred(stored: Option<Theme>, system: Theme) -> Theme {
    stored.filter(|t| t.is_concrete()).unwrap_or(system)
}

/// Theme a toggle lands on. Never `auto`.
#[must_use]
pub fn toggled(stored: Option<Theme>, system: Theme) -> Theme {
    preferred(stored, system).flipped(system)
}

/// Which icon of a light/dark pair is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconVisibility {
    pub light: bool,
    pub dark: bool,
}

impl IconVisibility {
    #[must_use]
    pub fn for_theme(theme: Theme, system: Theme) -> Self {
        let dark = theme.effective(system) == Theme::Dark;
        Self { light: !dark, dark }
    }
}

/// Element ids of the four theme icons, as `(light, dark)` pairs.
pub const ICON_PAIRS: [(&str, &str); 2] = [
    ("theme-icon-light", "theme-icon-dark"),
    ("theme-icon-light-mobile", "theme-icon-dark-mobile"),
];

/// Resolver state mirrored from storage and the color-scheme media query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub stored: Option<Theme>,
    pub system: Theme,
    /// Theme last passed to `set_theme`.
    pub applied: Theme,
}

impl ThemeState {
    #[must_use]
    pub fn new(stored: Option<Theme>, prefers_dark: bool) -> Self {
        let system = Theme::from_prefers_dark(prefers_dark);
        let stored = stored.filter(|t| t.is_concrete());
        Self { stored, system, applied: preferred(stored, system) }
    }

    #[must_use]
    pub fn preferred(&self) -> Theme {
        preferred(self.stored, self.system)
    }

    #[must_use]
    pub fn effective(&self) -> Theme {
        self.applied.effective(self.system)
    }

    pub fn apply(&mut self, theme: Theme) {
        self.applied = theme;
    }

    /// Persist an explicit theme. `auto` is never stored.
    pub fn store(&mut self, theme: Theme) -> bool {
        if !theme.is_concrete() {
            return false;
        }
        self.stored = Some(theme);
        true
    }

    /// Flip, apply and persist. Returns the new theme.
    pub fn toggle(&mut self) -> Theme {
        let next = toggled(self.stored, self.system);
        self.apply(next);
        self.store(next);
        next
    }

    /// Record a system color-scheme change. Returns the theme to apply when
    /// the page is still following the system.
    pub fn system_changed(&mut self, prefers_dark: bool) -> Option<Theme> {
        self.system = Theme::from_prefers_dark(prefers_dark);
        if self.stored.is_some() {
            return None;
        }
        self.apply(self.system);
        Some(self.system)
    }
}
