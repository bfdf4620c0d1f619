use std::{path::Path, sync::Arc};

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{HeaderValue, Method, header},
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use super::relay::Relay;
use crate::{
    actuators::chat::dto::{ChatReply, ChatRequest},
    service,
};

/// Development policy: same origin, local relay connections, inline styles for the page.
pub const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; \
    connect-src 'self' http://localhost:3000 ws:; \
    style-src 'self' 'unsafe-inline'";

pub fn build_router(state: Arc<Relay>, static_dir: &Path) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let csp = SetResponseHeaderLayer::overriding(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(CONTENT_SECURITY_POLICY),
    );

    // Build router
    Router::new()
        .route("/health", get(health_check))
        .route("/chat", post(chat_handler))
        .fallback_service(ServeDir::new(static_dir))
        .layer(csp)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn health_check() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

pub async fn chat_handler(
    State(relay): State<Arc<Relay>>,
    request: Result<Json<ChatRequest>, JsonRejection>,
) -> service::Result<Json<ChatReply>> {
    let Json(request) =
        request.map_err(|rejection| service::Error::InvalidBody(rejection.body_text().into()))?;
    relay.chat(request).await.map(Json)
}
