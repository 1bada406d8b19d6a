use crate::header_name::HeaderName;
use crate::method::Method;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Static CORS configuration. Build once, then hand to
/// [`CorsPolicy::new`](crate::CorsPolicy::new).
///
/// Every field has a default, so partial configuration via struct update or a
/// partially filled config file works.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsOptions {
    /// `None` answers every request with `*`. `Some` reflects only listed
    /// origins, compared as exact strings.
    pub origin: Option<Vec<String>>,
    pub methods: Vec<Method>,
    /// Let preflight requests reach downstream handlers after headers are set.
    pub preflight_continue: bool,
    pub options_success_status: u16,
    /// `None` mirrors the request's `Access-Control-Request-Headers` value.
    pub allowed_headers: Option<Vec<HeaderName>>,
    pub exposed_headers: Option<Vec<HeaderName>>,
    /// Whole seconds; fractional durations are not supported. Values `<= 0`
    /// are treated as unset.
    pub max_age: Option<i64>,
    /// `Some(false)` still emits the header with the value `false`.
    pub credentials: Option<bool>,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            origin: None,
            methods: Method::defaults(),
            preflight_continue: false,
            options_success_status: 204,
            allowed_headers: None,
            exposed_headers: None,
            max_age: None,
            credentials: None,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("at least one allowed method must be configured")]
    EmptyMethods,
    #[error("options success status {0} is not a valid HTTP status code")]
    InvalidSuccessStatus(u16),
}

impl CorsOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.methods.is_empty() {
            return Err(ValidationError::EmptyMethods);
        }

        if !(100..=599).contains(&self.options_success_status) {
            return Err(ValidationError::InvalidSuccessStatus(
                self.options_success_status,
            ));
        }

        Ok(())
    }

    pub(crate) fn effective_max_age(&self) -> Option<i64> {
        self.max_age.filter(|seconds| *seconds > 0)
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
