use sptcli::spotify::request::{RetryDecision, retry_decision};

#[test]
fn test_success_statuses_accept() {
    assert_eq!(retry_decision(200, false, None), RetryDecision::Accept);
    assert_eq!(retry_decision(204, false, None), RetryDecision::Accept);

    // Whether a refresh happened makes no difference for success
    assert_eq!(retry_decision(200, true, None), RetryDecision::Accept);
}

#[test]
fn test_unauthorized_refreshes_exactly_once() {
    // First 401 triggers a token refresh and retry
    assert_eq!(
        retry_decision(401, false, None),
        RetryDecision::RefreshAndRetry
    );

    // A 401 after the refresh fails the request
    assert_eq!(retry_decision(401, true, None), RetryDecision::Fail);
}

#[test]
fn test_rate_limit_honours_retry_after() {
    assert_eq!(retry_decision(429, false, Some(5)), RetryDecision::Wait(5));
    assert_eq!(
        retry_decision(429, false, Some(120)),
        RetryDecision::Wait(120)
    );

    // Missing header falls back to a short delay
    assert_eq!(retry_decision(429, false, None), RetryDecision::Wait(1));

    // Abnormally high delays are not waited out
    assert_eq!(retry_decision(429, false, Some(600)), RetryDecision::Fail);
}

#[test]
fn test_bad_gateway_retries_after_delay() {
    assert_eq!(retry_decision(502, false, None), RetryDecision::Wait(10));
    assert_eq!(retry_decision(502, true, None), RetryDecision::Wait(10));
}

#[test]
fn test_other_errors_fail() {
    assert_eq!(retry_decision(400, false, None), RetryDecision::Fail);
    assert_eq!(retry_decision(403, false, None), RetryDecision::Fail);
    assert_eq!(retry_decision(404, false, None), RetryDecision::Fail);
    assert_eq!(retry_decision(500, false, None), RetryDecision::Fail);
    assert_eq!(retry_decision(503, false, None), RetryDecision::Fail);
}
