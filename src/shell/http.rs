use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::Method,
    routing::{any, get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::modules::client_config::use_cases::serve_client_config::inbound::http as client_config_http;
use crate::modules::inventory_update::use_cases::update_inventory::inbound::http as inventory_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::HEAD]);

    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/config.js", any(client_config_http::script))
        .route("/api/config.json", any(client_config_http::json))
        .route(
            "/api/process",
            post(inventory_http::handle).layer(DefaultBodyLimit::max(state.upload_limit_bytes)),
        )
        .fallback(client_config_http::script)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}
