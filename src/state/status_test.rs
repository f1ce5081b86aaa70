use super::*;

// =============================================================
// StatusMessage
// =============================================================

#[test]
fn status_default_is_hidden_and_empty() {
    let status = StatusMessage::default();
    assert!(!status.visible);
    assert!(status.text.is_empty());
    assert_eq!(status.seq, 0);
}

#[test]
fn show_makes_message_visible_with_kind() {
    let mut status = StatusMessage::default();
    let seq = status.show("Signed up", StatusKind::Success);
    assert_eq!(seq, 1);
    assert!(status.visible);
    assert_eq!(status.text, "Signed up");
    assert_eq!(status.kind, StatusKind::Success);
}

#[test]
fn hide_with_current_seq_hides_once() {
    let mut status = StatusMessage::default();
    let seq = status.show("Already signed up", StatusKind::Error);
    assert!(status.hide(seq));
    assert!(!status.visible);
    assert!(!status.hide(seq));
}

#[test]
fn hide_from_superseded_message_is_ignored() {
    let mut status = StatusMessage::default();
    let first = status.show("first", StatusKind::Success);
    let second = status.show("second", StatusKind::Error);
    assert!(!status.hide(first));
    assert!(status.visible);
    assert_eq!(status.text, "second");
    assert!(status.hide(second));
}

#[test]
fn hide_keeps_text_and_kind() {
    let mut status = StatusMessage::default();
    let seq = status.show("bye", StatusKind::Error);
    status.hide(seq);
    assert_eq!(status.text, "bye");
    assert_eq!(status.kind, StatusKind::Error);
}

// =============================================================
// Classes
// =============================================================

#[test]
fn kind_css_classes() {
    assert_eq!(StatusKind::Success.css_class(), "success");
    assert_eq!(StatusKind::Error.css_class(), "error");
}

#[test]
fn class_list_adds_hidden_when_not_visible() {
    let mut status = StatusMessage::default();
    assert_eq!(status.class_list(), "success hidden");
    let seq = status.show("oops", StatusKind::Error);
    assert_eq!(status.class_list(), "error");
    status.hide(seq);
    assert_eq!(status.class_list(), "error hidden");
}

#[test]
fn hide_delay_is_five_seconds() {
    assert_eq!(STATUS_HIDE_DELAY.as_millis(), 5000);
}
