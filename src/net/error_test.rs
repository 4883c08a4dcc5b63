use super::*;

#[test]
fn http_error_displays_status() {
    let error = ApiError::Http { status: 500 };
    assert_eq!(error.to_string(), "request failed: 500");
}

#[test]
fn network_error_displays_cause() {
    let error = ApiError::Network("connection refused".to_owned());
    assert_eq!(error.to_string(), "network error: connection refused");
}

#[test]
fn decode_error_displays_cause() {
    let error = ApiError::Decode("missing field `title`".to_owned());
    assert_eq!(error.to_string(), "malformed response: missing field `title`");
}

#[test]
fn server_side_calls_are_unavailable() {
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}
