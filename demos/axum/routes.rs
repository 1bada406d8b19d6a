use axum::{
    extract::State,
    http::HeaderMap,
    response::{Html, IntoResponse},
};

use crate::cors::AppState;

pub async fn greet(State(state): State<AppState>) -> impl IntoResponse {
    Html(format!(
        "<h1>{}</h1><p>Send a preflight from http://localhost:3000 to inspect the headers.</p>",
        state.greeting
    ))
}

pub async fn echo(headers: HeaderMap, body: String) -> impl IntoResponse {
    let trace = headers
        .get("X-Example-Trace")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("none")
        .to_string();

    ([("X-Example-Trace", trace)], body)
}
