use super::*;

// =============================================================
// ApiError classification
// =============================================================

#[test]
fn status_429_classifies_as_rate_limited() {
    let err = ApiError::from_status(429, "quota exceeded".to_owned());
    assert_eq!(err, ApiError::RateLimited);
    assert!(err.is_rate_limited());
}

#[test]
fn other_statuses_keep_code_and_message() {
    let err = ApiError::from_status(500, "boom".to_owned());
    assert_eq!(err, ApiError::Status { status: 500, message: "boom".to_owned() });
    assert!(!err.is_rate_limited());
}

#[test]
fn network_errors_are_not_rate_limited() {
    let err = ApiError::Network("connection refused".to_owned());
    assert!(!err.is_rate_limited());
}
