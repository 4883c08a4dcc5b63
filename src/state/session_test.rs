use super::*;

#[test]
fn default_session_is_anonymous() {
    let session = Session::default();
    assert!(session.token().is_none());
    assert!(!session.is_authenticated());
}

#[test]
fn load_without_a_browser_is_anonymous() {
    assert_eq!(Session::load(), Session::default());
}

#[test]
fn authenticated_session_exposes_the_token() {
    let session = Session::authenticated("tok-123".to_owned());
    assert_eq!(session.token(), Some("tok-123"));
    assert!(session.is_authenticated());
}
