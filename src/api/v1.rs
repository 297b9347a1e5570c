use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};

use crate::api::{catalog, estimate, AppState};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/estimate", post(estimate::estimate))
        .route("/estimate/quick", post(estimate::quick_estimate))
        .route("/catalog", get(catalog::get_catalog))
        .route("/healthz", get(healthz))
        .with_state(state)
}

pub async fn healthz() -> impl IntoResponse {
    StatusCode::OK
}
