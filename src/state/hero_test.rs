use super::*;

fn at(cues: &[TimedCue], cue: &HeroCue) -> u32 {
    cues.iter().find(|c| &c.cue == cue).map(|c| c.at_ms).unwrap()
}

#[test]
fn default_timeline_offsets() {
    let cues = timeline("Hi!", &HeroTiming::default());
    let offsets: Vec<_> = cues.iter().map(|c| (c.at_ms, c.cue.clone())).collect();
    assert_eq!(
        offsets,
        vec![
            (1000, HeroCue::ZoomTitle),
            (1600, HeroCue::RevealSubtitle),
            (1700, HeroCue::TypeChar('H')),
            (1750, HeroCue::TypeChar('i')),
            (1800, HeroCue::TypeChar('!')),
            (2150, HeroCue::FadeSecondSubtitle),
            (2450, HeroCue::FadeCta),
        ]
    );
}

#[test]
fn typed_characters_rebuild_the_text() {
    let text = "Build smarter software";
    let typed: String = timeline(text, &HeroTiming::default())
        .into_iter()
        .filter_map(|c| match c.cue {
            HeroCue::TypeChar(ch) => Some(ch),
            _ => None,
        })
        .collect();
    assert_eq!(typed, text);
}

#[test]
fn multibyte_text_types_per_character() {
    let cues = timeline("héllo", &HeroTiming::default());
    let count = cues.iter().filter(|c| matches!(c.cue, HeroCue::TypeChar(_))).count();
    assert_eq!(count, 5);
}

#[test]
fn empty_subtitle_still_fades_tail() {
    let cues = timeline("", &HeroTiming::default());
    assert_eq!(cues.len(), 4);
    assert_eq!(at(&cues, &HeroCue::FadeSecondSubtitle), 2000);
    assert_eq!(at(&cues, &HeroCue::FadeCta), 2300);
}

#[test]
fn timeline_is_monotonic() {
    let cues = timeline("some subtitle text", &HeroTiming::default());
    assert!(cues.windows(2).all(|w| w[0].at_ms <= w[1].at_ms));
}

#[test]
fn tail_stays_ordered_when_cta_is_faster() {
    let timing = HeroTiming { subtitle_fade_ms: 500, cta_fade_ms: 100, ..HeroTiming::default() };
    let cues = timeline("ab", &timing);
    let last_two: Vec<_> = cues[cues.len() - 2..].iter().map(|c| c.cue.clone()).collect();
    assert_eq!(last_two, vec![HeroCue::FadeCta, HeroCue::FadeSecondSubtitle]);
}

#[test]
fn gaps_sum_to_final_offset() {
    let cues = timeline("abc", &HeroTiming::default());
    let gaps = gaps(&cues);
    assert_eq!(gaps[0], 1000);
    assert_eq!(gaps[1], 600);
    assert_eq!(gaps[2], 100);
    assert_eq!(gaps[3], 50);
    assert_eq!(gaps.iter().sum::<u32>(), cues.last().unwrap().at_ms);
}
