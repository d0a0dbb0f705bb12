use super::*;

#[test]
fn page_view_uses_camel_case_keys() {
    let view = PageView {
        url: "https://intellisoft.example/".to_owned(),
        timestamp: "2024-05-01T10:00:00.000Z".to_owned(),
        user_agent: "TestAgent/1.0".to_owned(),
    };
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["userAgent"], "TestAgent/1.0");
    assert_eq!(json["url"], "https://intellisoft.example/");
}

#[test]
fn click_text_is_trimmed() {
    let click = ButtonClick::new("BUTTON", "\n   Get Started  \n", "t");
    assert_eq!(click.text, "Get Started");
    assert_eq!(click.element, "BUTTON");
}

#[test]
fn format_event_prefixes_label() {
    let click = ButtonClick::new("A", "Services", "t0");
    assert_eq!(
        format_event("Button clicked", &click),
        r#"Button clicked: {"element":"A","text":"Services","timestamp":"t0"}"#
    );
}

#[test]
fn load_time_requires_finished_load() {
    assert_eq!(load_time_ms(1000.0, 1850.0), Some(850.0));
    assert_eq!(load_time_ms(1000.0, 0.0), None);
    assert_eq!(load_time_ms(0.0, 0.0), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn tracking_without_browser_is_silent() {
    track_page_view();
    log_event("noop", &ButtonClick::new("BUTTON", "x", "t"));
}
