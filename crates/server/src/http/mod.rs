use axum::{Router, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{AppState, routes};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(routes::camaras::router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
