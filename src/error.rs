use thiserror::Error;

/// Errors produced when turning raw strings into [`Method`](crate::Method) or
/// [`HeaderName`](crate::HeaderName) values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("'{0}' is not a valid HTTP method token")]
    InvalidMethod(String),
    #[error("'{0}' is not a valid HTTP header name")]
    InvalidHeaderName(String),
}
