use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};

/// Keepalive page for uptime monitors; hosting platforms idle the
/// process unless something answers here.
pub async fn home() -> impl IntoResponse {
    (
        StatusCode::OK,
        Html("<h2>Price alarm bot is running 🚀</h2>".to_string()),
    )
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
