use crate::constants::method;
use crate::error::ParseError;
use crate::util::is_http_token;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// HTTP request method as it appears in `Access-Control-Allow-Methods`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Method {
    Get,
    Head,
    Post,
    Put,
    Delete,
    Connect,
    Options,
    Trace,
    Patch,
    /// Any other token, emitted verbatim.
    Custom(String),
}

impl Method {
    /// Methods allowed when no explicit list is configured.
    pub fn defaults() -> Vec<Method> {
        vec![
            Method::Get,
            Method::Post,
            Method::Put,
            Method::Delete,
            Method::Head,
            Method::Patch,
        ]
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::Get => method::GET,
            Method::Head => method::HEAD,
            Method::Post => method::POST,
            Method::Put => method::PUT,
            Method::Delete => method::DELETE,
            Method::Connect => method::CONNECT,
            Method::Options => method::OPTIONS,
            Method::Trace => method::TRACE,
            Method::Patch => method::PATCH,
            Method::Custom(value) => value,
        }
    }

    /// Whether a raw request method names a preflight. Method tokens are
    /// case-sensitive, so only the exact `OPTIONS` token qualifies.
    pub fn is_preflight(raw: &str) -> bool {
        raw == method::OPTIONS
    }
}

impl FromStr for Method {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let parsed = match value {
            method::GET => Method::Get,
            method::HEAD => Method::Head,
            method::POST => Method::Post,
            method::PUT => Method::Put,
            method::DELETE => Method::Delete,
            method::CONNECT => Method::Connect,
            method::OPTIONS => Method::Options,
            method::TRACE => Method::Trace,
            method::PATCH => Method::Patch,
            other if is_http_token(other) => Method::Custom(other.to_string()),
            other => return Err(ParseError::InvalidMethod(other.to_string())),
        };
        Ok(parsed)
    }
}

impl TryFrom<String> for Method {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Method> for String {
    fn from(value: Method) -> Self {
        match value {
            Method::Custom(inner) => inner,
            other => other.as_str().to_string(),
        }
    }
}

impl AsRef<str> for Method {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "method_test.rs"]
mod method_test;
