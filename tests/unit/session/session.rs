use super::*;

#[test]
fn starts_with_nothing_viewed() {
    let s = SessionState::new();
    assert_eq!(s.viewed_count(), 0);
    assert!(!s.has_viewed("landscapes"));
    assert!(!s.intro_seen());
}

#[test]
fn mark_viewed_reports_first_visit_only() {
    let mut s = SessionState::new();
    assert!(s.mark_viewed("landscapes"));
    assert!(!s.mark_viewed("landscapes"));
    assert!(s.mark_viewed("portraits"));
    assert_eq!(s.viewed().collect::<Vec<_>>(), vec!["landscapes", "portraits"]);
}

#[test]
fn reset_clears_flags() {
    let mut s = SessionState::new();
    s.mark_viewed("a");
    s.mark_intro_seen();
    s.reset();
    assert_eq!(s, SessionState::new());
}

#[test]
fn survives_json_round_trip() {
    let mut s = SessionState::new();
    s.mark_viewed("exhibition");
    s.mark_intro_seen();
    let json = serde_json::to_string(&s).unwrap();
    let back: SessionState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, s);
    let empty: SessionState = serde_json::from_str("{}").unwrap();
    assert_eq!(empty, SessionState::new());
}
