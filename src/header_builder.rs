use crate::constants::{LIST_SEPARATOR, header};
use crate::context::RequestContext;
use crate::headers::HeaderCollection;
use crate::options::CorsOptions;
use crate::origin::OriginDecision;
use crate::util::join_display;

pub(crate) struct HeaderBuilder<'a> {
    options: &'a CorsOptions,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(options: &'a CorsOptions) -> Self {
        Self { options }
    }

    pub(crate) fn build_origin_header<'r>(
        &self,
        request: &RequestContext<'r>,
    ) -> (HeaderCollection, OriginDecision<'r>) {
        let decision = OriginDecision::resolve(self.options.origin.as_deref(), request.origin);
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, decision.header_value());
        (headers, decision)
    }

    pub(crate) fn build_credentials_header(&self) -> HeaderCollection {
        match self.options.credentials {
            Some(enabled) => {
                let mut headers = HeaderCollection::with_estimate(1);
                headers.push(
                    header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
                    if enabled { "true" } else { "false" },
                );
                headers
            }
            None => HeaderCollection::new(),
        }
    }

    pub(crate) fn build_methods_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            join_display(&self.options.methods, LIST_SEPARATOR),
        );
        headers
    }

    pub(crate) fn build_allowed_headers(&self, request: &RequestContext<'_>) -> HeaderCollection {
        let value = match (&self.options.allowed_headers, request.access_control_request_headers)
        {
            (Some(configured), _) => join_display(configured, LIST_SEPARATOR),
            (None, Some(requested)) => requested.to_string(),
            (None, None) => return HeaderCollection::new(),
        };

        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, value);
        headers
    }

    pub(crate) fn build_max_age_header(&self) -> HeaderCollection {
        if let Some(seconds) = self.options.effective_max_age() {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_MAX_AGE, seconds.to_string());
            return headers;
        }
        HeaderCollection::new()
    }

    pub(crate) fn build_exposed_headers(&self) -> HeaderCollection {
        if let Some(values) = &self.options.exposed_headers {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(
                header::ACCESS_CONTROL_EXPOSE_HEADERS,
                join_display(values, LIST_SEPARATOR),
            );
            return headers;
        }
        HeaderCollection::new()
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
