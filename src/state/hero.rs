//! Hero intro timeline.
//!
//! The intro is a fixed list of cues with absolute offsets from the moment
//! the page is ready. The runner sleeps the gap between consecutive cues, so
//! each cue fires only after its predecessor ran.

#[cfg(test)]
#[path = "hero_test.rs"]
mod hero_test;

use crate::config::HeroTiming;

pub const TITLE_SELECTOR: &str = "#home h2";
pub const SUBTITLE_ID: &str = "hero-subtitle-1";
pub const SECOND_SUBTITLE_ID: &str = "hero-subtitle-2";

pub const ZOOM_CLASS: &str = "animate-hero-zoom";
pub const FADE_IN_CLASS: &str = "animate-fade-in";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeroCue {
    /// Add the zoom class to the title.
    ZoomTitle,
    /// Drop the zoom class and make the (empty) subtitle visible.
    RevealSubtitle,
    /// Append one character of the captured subtitle text.
    TypeChar(char),
    FadeSecondSubtitle,
    FadeCta,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimedCue {
    pub at_ms: u32,
    pub cue: HeroCue,
}

/// Build the full intro timeline for `subtitle` text.
#[must_use]
pub fn timeline(subtitle: &str, timing: &HeroTiming) -> Vec<TimedCue> {
    let mut cues = Vec::with_capacity(subtitle.chars().count() + 4);
    let mut at_ms = timing.zoom_delay_ms;
    cues.push(TimedCue { at_ms, cue: HeroCue::ZoomTitle });

    at_ms = at_ms.saturating_add(timing.zoom_hold_ms);
    cues.push(TimedCue { at_ms, cue: HeroCue::RevealSubtitle });

    at_ms = at_ms.saturating_add(timing.type_start_ms);
    for ch in subtitle.chars() {
        cues.push(TimedCue { at_ms, cue: HeroCue::TypeChar(ch) });
        at_ms = at_ms.saturating_add(timing.char_interval_ms);
    }

    // Both fades are measured from the same completion point.
    let done_ms = at_ms;
    let mut tail = [
        TimedCue { at_ms: done_ms.saturating_add(timing.subtitle_fade_ms), cue: HeroCue::FadeSecondSubtitle },
        TimedCue { at_ms: done_ms.saturating_add(timing.cta_fade_ms), cue: HeroCue::FadeCta },
    ];
    tail.sort_by_key(|c| c.at_ms);
    cues.extend(tail);
    cues
}

/// Millisecond delays between consecutive cues, starting from zero.
#[must_use]
pub fn gaps(cues: &[TimedCue]) -> Vec<u32> {
    let mut prev = 0;
    cues.iter()
        .map(|c| {
            let gap = c.at_ms.saturating_sub(prev);
            prev = c.at_ms;
            gap
        })
        .collect()
}
