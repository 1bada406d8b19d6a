use crate::context::RequestContext;
use crate::header_builder::HeaderBuilder;
use crate::headers::HeaderCollection;
use crate::options::{CorsOptions, ValidationError};
use crate::result::CorsDecision;
use tracing::{debug, trace};

/// Core CORS policy engine that evaluates requests using [`CorsOptions`].
///
/// Holds no per-request state; share one instance (for example behind an
/// `Arc`) across all request handlers.
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    options: CorsOptions,
}

impl CorsPolicy {
    pub fn new(options: CorsOptions) -> Result<Self, ValidationError> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &CorsOptions {
        &self.options
    }

    pub fn evaluate(&self, request: &RequestContext<'_>) -> CorsDecision {
        let builder = HeaderBuilder::new(&self.options);
        let mut headers = HeaderCollection::new();

        let (origin_headers, origin) = builder.build_origin_header(request);
        if !origin.is_allowed() {
            debug!(
                origin = request.origin.unwrap_or_default(),
                "CORS: origin not in allow-list"
            );
        }
        headers.extend(origin_headers);
        headers.extend(builder.build_credentials_header());

        let preflight = request.is_preflight();
        let terminate = if preflight {
            headers.extend(builder.build_methods_header());
            headers.extend(builder.build_allowed_headers(request));
            headers.extend(builder.build_max_age_header());
            headers.extend(builder.build_exposed_headers());

            if self.options.preflight_continue {
                None
            } else {
                debug!(
                    status = self.options.options_success_status,
                    "CORS preflight: terminating request"
                );
                Some(self.options.options_success_status)
            }
        } else {
            headers.extend(builder.build_exposed_headers());
            None
        };

        trace!(
            method = request.method,
            preflight,
            header_count = headers.len(),
            "CORS: evaluated request"
        );

        CorsDecision {
            headers: headers.into_headers(),
            terminate,
        }
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
