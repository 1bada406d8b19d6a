#![allow(dead_code)]

use cors_policy::constants::method;
use cors_policy::{CorsDecision, CorsOptions, CorsPolicy, HeaderName, Method, RequestContext};

#[derive(Default)]
pub struct PolicyBuilder {
    origin: Option<Vec<String>>,
    methods: Option<Vec<Method>>,
    preflight_continue: Option<bool>,
    options_success_status: Option<u16>,
    allowed_headers: Option<Vec<HeaderName>>,
    exposed_headers: Option<Vec<HeaderName>>,
    max_age: Option<i64>,
    credentials: Option<bool>,
}

fn parse_names<I, S>(values: I) -> Vec<HeaderName>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .map(|value| value.as_ref().parse().expect("valid header name"))
        .collect()
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.origin = Some(origins.into_iter().map(Into::into).collect());
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.methods = Some(
            methods
                .into_iter()
                .map(|value| value.as_ref().parse().expect("valid method"))
                .collect(),
        );
        self
    }

    pub fn preflight_continue(mut self, enabled: bool) -> Self {
        self.preflight_continue = Some(enabled);
        self
    }

    pub fn options_success_status(mut self, status: u16) -> Self {
        self.options_success_status = Some(status);
        self
    }

    pub fn allowed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.allowed_headers = Some(parse_names(headers));
        self
    }

    pub fn exposed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.exposed_headers = Some(parse_names(headers));
        self
    }

    pub fn max_age(mut self, seconds: i64) -> Self {
        self.max_age = Some(seconds);
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.credentials = Some(enabled);
        self
    }

    pub fn options(self) -> CorsOptions {
        let defaults = CorsOptions::default();

        CorsOptions {
            origin: self.origin.or(defaults.origin),
            methods: self.methods.unwrap_or(defaults.methods),
            preflight_continue: self
                .preflight_continue
                .unwrap_or(defaults.preflight_continue),
            options_success_status: self
                .options_success_status
                .unwrap_or(defaults.options_success_status),
            allowed_headers: self.allowed_headers.or(defaults.allowed_headers),
            exposed_headers: self.exposed_headers.or(defaults.exposed_headers),
            max_age: self.max_age.or(defaults.max_age),
            credentials: self.credentials.or(defaults.credentials),
        }
    }

    pub fn build(self) -> CorsPolicy {
        CorsPolicy::new(self.options()).expect("valid CORS configuration")
    }
}

pub struct SimpleRequestBuilder {
    method: String,
    origin: Option<String>,
    request_headers: Option<String>,
}

impl SimpleRequestBuilder {
    pub fn new() -> Self {
        Self {
            method: method::GET.into(),
            origin: None,
            request_headers: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn request_headers(mut self, headers: impl Into<String>) -> Self {
        self.request_headers = Some(headers.into());
        self
    }

    pub fn evaluate(self, policy: &CorsPolicy) -> CorsDecision {
        let mut ctx = RequestContext::new(&self.method);
        if let Some(origin) = self.origin.as_deref() {
            ctx = ctx.with_origin(origin);
        }
        if let Some(headers) = self.request_headers.as_deref() {
            ctx = ctx.with_request_headers(headers);
        }
        policy.evaluate(&ctx)
    }
}

#[derive(Default)]
pub struct PreflightRequestBuilder {
    origin: Option<String>,
    request_headers: Option<String>,
}

impl PreflightRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn request_headers(mut self, headers: impl Into<String>) -> Self {
        self.request_headers = Some(headers.into());
        self
    }

    pub fn evaluate(self, policy: &CorsPolicy) -> CorsDecision {
        let ctx = RequestContext {
            method: method::OPTIONS,
            origin: self.origin.as_deref(),
            access_control_request_headers: self.request_headers.as_deref(),
        };
        policy.evaluate(&ctx)
    }
}

pub fn policy() -> PolicyBuilder {
    PolicyBuilder::new()
}

pub fn simple_request() -> SimpleRequestBuilder {
    SimpleRequestBuilder::new()
}

pub fn preflight_request() -> PreflightRequestBuilder {
    PreflightRequestBuilder::new()
}
