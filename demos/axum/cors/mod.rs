use std::sync::Arc;

use cors_policy::{CorsOptions, CorsPolicy, HeaderName, Method, ValidationError};

pub type SharedPolicy = Arc<CorsPolicy>;

#[derive(Clone)]
pub struct AppState {
    pub cors: SharedPolicy,
    pub greeting: &'static str,
}

pub fn build_state() -> Result<AppState, ValidationError> {
    let options = CorsOptions {
        origin: Some(vec!["http://localhost:3000".into()]),
        methods: vec![Method::Get, Method::Post],
        allowed_headers: Some(vec![
            HeaderName::ContentType,
            HeaderName::XRequestedWith,
            HeaderName::Custom("X-Example-Trace".into()),
        ]),
        exposed_headers: Some(vec![HeaderName::Custom("X-Example-Trace".into())]),
        credentials: Some(true),
        max_age: Some(600),
        ..CorsOptions::default()
    };

    let cors = Arc::new(CorsPolicy::new(options)?);

    Ok(AppState {
        cors,
        greeting: "Welcome to the Axum CORS example!",
    })
}

pub mod middleware;
