use crate::constants::header;
use crate::error::ParseError;
use crate::util::is_http_token;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Header identifier used in `Access-Control-Allow-Headers` and
/// `Access-Control-Expose-Headers` lists.
///
/// Known names carry their canonical casing; anything else is kept as
/// [`HeaderName::Custom`] with the casing the caller supplied.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HeaderName {
    Accept,
    AcceptLanguage,
    Authorization,
    CacheControl,
    ContentLanguage,
    ContentLength,
    ContentType,
    ETag,
    LastModified,
    Origin,
    XRequestedWith,
    AccessControlAllowOrigin,
    AccessControlAllowCredentials,
    AccessControlAllowMethods,
    AccessControlAllowHeaders,
    AccessControlMaxAge,
    AccessControlExposeHeaders,
    AccessControlRequestMethod,
    AccessControlRequestHeaders,
    Custom(String),
}

const KNOWN: &[HeaderName] = &[
    HeaderName::Accept,
    HeaderName::AcceptLanguage,
    HeaderName::Authorization,
    HeaderName::CacheControl,
    HeaderName::ContentLanguage,
    HeaderName::ContentLength,
    HeaderName::ContentType,
    HeaderName::ETag,
    HeaderName::LastModified,
    HeaderName::Origin,
    HeaderName::XRequestedWith,
    HeaderName::AccessControlAllowOrigin,
    HeaderName::AccessControlAllowCredentials,
    HeaderName::AccessControlAllowMethods,
    HeaderName::AccessControlAllowHeaders,
    HeaderName::AccessControlMaxAge,
    HeaderName::AccessControlExposeHeaders,
    HeaderName::AccessControlRequestMethod,
    HeaderName::AccessControlRequestHeaders,
];

impl HeaderName {
    /// Canonical wire spelling of the header name.
    pub fn standard_name(&self) -> &str {
        match self {
            HeaderName::Accept => "Accept",
            HeaderName::AcceptLanguage => "Accept-Language",
            HeaderName::Authorization => "Authorization",
            HeaderName::CacheControl => "Cache-Control",
            HeaderName::ContentLanguage => "Content-Language",
            HeaderName::ContentLength => "Content-Length",
            HeaderName::ContentType => "Content-Type",
            HeaderName::ETag => "ETag",
            HeaderName::LastModified => "Last-Modified",
            HeaderName::Origin => header::ORIGIN,
            HeaderName::XRequestedWith => "X-Requested-With",
            HeaderName::AccessControlAllowOrigin => header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderName::AccessControlAllowCredentials => header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
            HeaderName::AccessControlAllowMethods => header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderName::AccessControlAllowHeaders => header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderName::AccessControlMaxAge => header::ACCESS_CONTROL_MAX_AGE,
            HeaderName::AccessControlExposeHeaders => header::ACCESS_CONTROL_EXPOSE_HEADERS,
            HeaderName::AccessControlRequestMethod => header::ACCESS_CONTROL_REQUEST_METHOD,
            HeaderName::AccessControlRequestHeaders => header::ACCESS_CONTROL_REQUEST_HEADERS,
            HeaderName::Custom(value) => value,
        }
    }
}

impl FromStr for HeaderName {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if !is_http_token(value) {
            return Err(ParseError::InvalidHeaderName(value.to_string()));
        }

        let known = KNOWN
            .iter()
            .find(|candidate| candidate.standard_name().eq_ignore_ascii_case(value));

        Ok(match known {
            Some(name) => name.clone(),
            None => HeaderName::Custom(value.to_string()),
        })
    }
}

impl TryFrom<String> for HeaderName {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<&str> for HeaderName {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HeaderName> for String {
    fn from(value: HeaderName) -> Self {
        match value {
            HeaderName::Custom(inner) => inner,
            other => other.standard_name().to_string(),
        }
    }
}

impl AsRef<str> for HeaderName {
    fn as_ref(&self) -> &str {
        self.standard_name()
    }
}

impl fmt::Display for HeaderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.standard_name())
    }
}

#[cfg(test)]
#[path = "header_name_test.rs"]
mod header_name_test;
