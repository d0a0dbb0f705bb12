//! One-shot hero intro: title zoom, typewriter subtitle, then fades.

use std::time::Duration;

use web_sys::HtmlElement;

use crate::app::Page;
use crate::bindings::navigation::CTA_BUTTON_ID;
use crate::state::hero::{
    FADE_IN_CLASS, HeroCue, SECOND_SUBTITLE_ID, SUBTITLE_ID, TITLE_SELECTOR, ZOOM_CLASS, gaps, timeline,
};
use crate::util::dom;

struct HeroElements {
    title: HtmlElement,
    subtitle: HtmlElement,
    second_subtitle: Option<HtmlElement>,
    cta: Option<HtmlElement>,
}

impl HeroElements {
    fn apply(&self, cue: &HeroCue) {
        match cue {
            HeroCue::ZoomTitle => dom::add_classes(&self.title, &[ZOOM_CLASS]),
            HeroCue::RevealSubtitle => {
                dom::remove_classes(&self.title, &[ZOOM_CLASS]);
                dom::set_style(&self.subtitle, "opacity", "1");
            }
            HeroCue::TypeChar(ch) => {
                let mut text = self.subtitle.text_content().unwrap_or_default();
                text.push(*ch);
                self.subtitle.set_text_content(Some(&text));
            }
            HeroCue::FadeSecondSubtitle => fade_in(self.second_subtitle.as_ref()),
            HeroCue::FadeCta => fade_in(self.cta.as_ref()),
        }
    }
}

fn fade_in(el: Option<&HtmlElement>) {
    if let Some(el) = el {
        dom::add_classes(el, &[FADE_IN_CLASS]);
        dom::set_style(el, "opacity", "1");
    }
}

pub fn start(page: &Page) {
    let (Some(title), Some(subtitle)) = (dom::query(TITLE_SELECTOR), dom::by_id(SUBTITLE_ID)) else {
        return;
    };
    let hero = HeroElements {
        title,
        subtitle,
        second_subtitle: dom::by_id(SECOND_SUBTITLE_ID),
        cta: dom::by_id(CTA_BUTTON_ID),
    };

    let text = hero.subtitle.text_content().unwrap_or_default();
    hero.subtitle.set_text_content(Some(""));
    for el in [Some(&hero.subtitle), hero.second_subtitle.as_ref(), hero.cta.as_ref()].into_iter().flatten() {
        dom::set_style(el, "opacity", "0");
    }

    let cues = timeline(&text, &page.config.hero);
    let waits = gaps(&cues);
    leptos::task::spawn_local(async move {
        for (cue, wait_ms) in cues.iter().zip(waits) {
            gloo_timers::future::sleep(Duration::from_millis(u64::from(wait_ms))).await;
            hero.apply(&cue.cue);
        }
    });
}
