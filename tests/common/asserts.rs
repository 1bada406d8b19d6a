#![allow(dead_code)]

use super::headers::header_value;
use cors_policy::{CorsDecision, Headers};

pub fn assert_simple(decision: CorsDecision) -> Headers {
    assert!(
        decision.terminate.is_none(),
        "non-preflight requests must never terminate, got {:?}",
        decision.terminate
    );
    decision.headers
}

pub fn assert_preflight(decision: CorsDecision) -> (Headers, u16) {
    match decision.terminate {
        Some(status) => (decision.headers, status),
        None => panic!("expected terminating preflight, got {:?}", decision),
    }
}

pub fn assert_header_eq(headers: &Headers, name: &str, expected: &str) {
    assert_eq!(
        header_value(headers, name),
        Some(expected),
        "unexpected value for {name}"
    );
}

pub fn assert_header_absent(headers: &Headers, name: &str) {
    assert!(
        header_value(headers, name).is_none(),
        "{name} should be absent, headers: {headers:?}"
    );
}

pub fn assert_header_order<const N: usize>(headers: &Headers, expected: [&str; N]) {
    let actual: Vec<&str> = headers.keys().map(String::as_str).collect();
    assert_eq!(actual, expected);
}
