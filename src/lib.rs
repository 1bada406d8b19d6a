//! Stateless CORS header negotiation.
//!
//! Build a [`CorsPolicy`] once from [`CorsOptions`], then call
//! [`CorsPolicy::evaluate`] for every request. The returned [`CorsDecision`]
//! lists the headers to set and whether the host must end the response.

pub mod constants;
mod context;
mod error;
mod header_builder;
mod header_name;
mod headers;
mod method;
mod options;
mod origin;
mod policy;
mod result;
mod util;

pub use context::RequestContext;
pub use error::ParseError;
pub use header_name::HeaderName;
pub use headers::Headers;
pub use method::Method;
pub use options::{CorsOptions, ValidationError};
pub use origin::OriginDecision;
pub use policy::CorsPolicy;
pub use result::CorsDecision;
