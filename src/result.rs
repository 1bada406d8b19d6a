use crate::headers::Headers;

/// What the host should do with the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsDecision {
    /// Headers to set on the outgoing response, in order.
    pub headers: Headers,
    /// When set, finish the response with this status and skip downstream
    /// handlers.
    pub terminate: Option<u16>,
}

impl CorsDecision {
    pub fn should_continue(&self) -> bool {
        self.terminate.is_none()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}
