use super::*;

// =============================================================
// Email syntax
// =============================================================

#[test]
fn accepts_plain_addresses() {
    assert!(is_valid_email("jane@example.com"));
    assert!(is_valid_email("a@b.c"));
    assert!(is_valid_email("first.last@sub.example.co.uk"));
}

#[test]
fn rejects_malformed_addresses() {
    for bad in [
        "not-an-email",
        "@example.com",
        "jane@",
        "jane@example",
        "jane@.com",
        "jane@example.",
        "jane@@example.com",
        "ja ne@example.com",
        "jane@exa mple.com",
        "jane@ex@ample.com",
    ] {
        assert!(!is_valid_email(bad), "{bad} should be rejected");
    }
}

#[test]
fn leading_dot_domain_still_needs_inner_dot() {
    // `.x.y` matches because the second dot has characters on both sides.
    assert!(is_valid_email("a@.x.y"));
    assert!(!is_valid_email("a@.xy"));
}

#[test]
fn byte_order_mark_counts_as_whitespace() {
    assert!(!is_valid_email("jane@example.com\u{FEFF}"));
    assert!(!is_valid_email("ja\u{FEFF}ne@example.com"));
}

#[test]
fn next_line_is_not_whitespace() {
    assert!(is_valid_email("ja\u{85}ne@example.com"));
    assert!(is_valid_email("jane@example.com\u{85}"));
}

#[test]
fn other_unicode_spaces_are_rejected() {
    for bad in ["jane@example.com\u{A0}", "jane\u{2003}@example.com", "jane@exa\u{3000}mple.com", "jane@example.com\t"] {
        assert!(!is_valid_email(bad), "{bad:?} should be rejected");
    }
}

// =============================================================
// Validation order
// =============================================================

#[test]
fn empty_fields_are_missing() {
    assert_eq!(validate("", "", ""), Err(FormError::MissingField));
    assert_eq!(validate("Jane", "", "hello"), Err(FormError::MissingField));
    assert_eq!(validate("Jane", "jane@example.com", ""), Err(FormError::MissingField));
}

#[test]
fn missing_field_wins_over_bad_email() {
    assert_eq!(validate("", "nope", "hello"), Err(FormError::MissingField));
}

#[test]
fn invalid_email_reported() {
    assert_eq!(validate("Jane", "not-an-email", "hello"), Err(FormError::InvalidEmailFormat));
}

#[test]
fn trailing_byte_order_mark_is_invalid_email() {
    assert_eq!(validate("Jane", "jane@example.com\u{FEFF}", "hello"), Err(FormError::InvalidEmailFormat));
}

#[test]
fn error_text_is_user_facing() {
    assert_eq!(FormError::MissingField.to_string(), "Please fill in all fields.");
    assert_eq!(FormError::InvalidEmailFormat.to_string(), "Please enter a valid email address.");
}

// =============================================================
// Submission state
// =============================================================

#[test]
fn failed_validation_does_not_enter_loading() {
    let mut form = ContactFormState::default();
    assert!(form.begin("", "", "").is_err());
    assert!(!form.is_loading());
    assert!(form.begin("Jane", "not-an-email", "hello").is_err());
    assert!(!form.is_loading());
}

#[test]
fn valid_submission_loads_then_finishes() {
    let mut form = ContactFormState::default();
    let submission = form.begin("Jane", "jane@example.com", "hello").unwrap();
    assert!(form.is_loading());
    assert_eq!(submission.email, "jane@example.com");

    assert_eq!(form.finish(), Some(submission));
    assert!(!form.is_loading());
    assert_eq!(form.finish(), None);
}

#[test]
fn submission_serializes_for_logging() {
    let submission = validate("Jane", "jane@example.com", "hello").unwrap();
    let json = serde_json::to_value(&submission).unwrap();
    assert_eq!(json["name"], "Jane");
    assert_eq!(json["message"], "hello");
}
