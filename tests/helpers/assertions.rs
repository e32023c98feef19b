// Test Assertion Helpers
//
// Common assertions for HTTP responses in integration tests.

use actix_web::http::{header, StatusCode};
use awc::ClientResponse;

/// Assert the response carries exactly `expected`
pub fn assert_status<S>(response: &ClientResponse<S>, expected: StatusCode) {
    let status = response.status();
    assert_eq!(
        status,
        expected,
        "Expected {} {}, got {} {}",
        expected.as_u16(),
        expected.canonical_reason().unwrap_or("Unknown"),
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    );
}

pub fn assert_success<S>(response: &ClientResponse<S>) {
    let status = response.status();
    assert!(
        status.is_success(),
        "Expected successful response (2xx), got {} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    );
}

pub fn assert_created<S>(response: &ClientResponse<S>) {
    assert_status(response, StatusCode::CREATED);
}

pub fn assert_no_content<S>(response: &ClientResponse<S>) {
    assert_status(response, StatusCode::NO_CONTENT);
}

pub fn assert_bad_request<S>(response: &ClientResponse<S>) {
    assert_status(response, StatusCode::BAD_REQUEST);
}

pub fn assert_not_found<S>(response: &ClientResponse<S>) {
    assert_status(response, StatusCode::NOT_FOUND);
}

/// Assert a 302 redirect to `location`
pub fn assert_redirect_to<S>(response: &ClientResponse<S>, location: &str) {
    assert_status(response, StatusCode::FOUND);
    let actual = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert_eq!(actual, location, "Unexpected redirect location");
}

/// Value of the Location header, panicking when absent
pub fn location<S>(response: &ClientResponse<S>) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .expect("response has no Location header")
}
