use super::*;

// =============================================================
// Reject notes fallback
// =============================================================

#[test]
fn empty_notes_fall_back_to_the_fixed_reason() {
    assert_eq!(effective_reject_notes(""), "Needs changes");
}

#[test]
fn written_notes_are_sent_verbatim() {
    assert_eq!(
        effective_reject_notes("headline overstates the closure"),
        "headline overstates the closure"
    );
}

#[test]
fn whitespace_notes_count_as_written() {
    assert_eq!(effective_reject_notes("   "), "   ");
}

// =============================================================
// Tag justification lookup
// =============================================================

#[test]
fn known_tag_returns_its_reason() {
    let why_tagged = HashMap::from([("a".to_owned(), "reason-a".to_owned())]);
    assert_eq!(tag_reason(&why_tagged, "a"), "reason-a");
}

#[test]
fn tag_without_an_entry_renders_empty() {
    let why_tagged = HashMap::from([("a".to_owned(), "reason-a".to_owned())]);
    assert_eq!(tag_reason(&why_tagged, "b"), "");
}

// =============================================================
// Pack state
// =============================================================

#[test]
fn pack_state_defaults_to_loading() {
    let state = PackState::default();
    assert!(state.pack.is_none());
    assert!(!state.busy);
    assert!(state.error.is_none());
}
