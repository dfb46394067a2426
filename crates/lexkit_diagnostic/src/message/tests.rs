use super::*;

static FIRST: Message = Message::warning("shadowed").with_code("W1");
static SECOND: Message = Message::warning("shadowed").with_code("W1");

#[test]
fn severity_defaults_to_error() {
    assert_eq!(Severity::default(), Severity::Error);
}

#[test]
fn severity_titles_and_display() {
    assert_eq!(Severity::Error.title(), "Error");
    assert_eq!(Severity::Warning.title(), "Warning");
    assert_eq!(Severity::Info.title(), "Info");
    assert_eq!(Severity::Hint.title(), "Hint");
    assert_eq!(Severity::Hint.to_string(), "hint");
}

#[test]
fn builders_fill_optional_fields() {
    let msg = Message::hint("try this").with_code("H7").with_url("https://h7");
    assert_eq!(msg.severity, Severity::Hint);
    assert_eq!(msg.text, "try this");
    assert_eq!(msg.code, Some("H7"));
    assert_eq!(msg.url, Some("https://h7"));

    let bare = Message::info("fyi");
    assert_eq!(bare.code, None);
    assert_eq!(bare.url, None);
}

#[test]
fn identity_differs_from_equality() {
    assert_eq!(FIRST, SECOND);
    assert!(FIRST.is(&FIRST));
    assert!(!FIRST.is(&SECOND));
}

#[test]
fn display_is_text() {
    assert_eq!(FIRST.to_string(), "shadowed");
}
