use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::modules::client_config::use_cases::serve_client_config::handler::ServeConfigError;
use crate::shell::state::AppState;

pub const JAVASCRIPT: &str = "application/javascript";
pub const JSON: &str = "application/json";
pub const PLAIN_TEXT: &str = "text/plain; charset=utf-8";

pub async fn script(State(state): State<AppState>) -> Response {
    match state.client_config.script() {
        Ok(body) => success(&state, JAVASCRIPT, body),
        Err(error) => failure(error),
    }
}

pub async fn json(State(state): State<AppState>) -> Response {
    match state.client_config.json() {
        Ok(body) => success(&state, JSON, body),
        Err(error) => failure(error),
    }
}

fn success(state: &AppState, content_type: &'static str, body: String) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CACHE_CONTROL,
                format!("public, max-age={}", state.cache_max_age_secs),
            ),
        ],
        body,
    )
        .into_response()
}

fn failure(error: ServeConfigError) -> Response {
    match &error {
        ServeConfigError::MissingConfiguration(missing) => {
            tracing::warn!(missing = ?missing.missing, "client config requested but not configured");
        }
        ServeConfigError::Serialization(_) => {
            tracing::error!(%error, "client config could not be serialized");
        }
    }
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [
            (header::CONTENT_TYPE, PLAIN_TEXT),
            (header::CACHE_CONTROL, "no-store"),
        ],
        error.to_string(),
    )
        .into_response()
}
