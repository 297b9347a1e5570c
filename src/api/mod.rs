pub mod catalog;
pub mod error;
pub mod estimate;
pub mod response;
pub mod v1;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::Config;

/// Shared handler state: the loaded configuration, including estimator
/// defaults.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

pub fn router(state: AppState, cfg: &Config) -> Router {
    let mut router = Router::new().nest("/api/v1", v1::router(state));

    if cfg.server.enable_cors {
        use tower_http::cors::{AllowOrigin, CorsLayer};
        let cors = CorsLayer::new()
            .allow_origin(AllowOrigin::exact("http://localhost:3000".parse().unwrap()))
            .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
            .allow_headers([axum::http::header::CONTENT_TYPE]);
        router = router.layer(cors);
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(axum::extract::DefaultBodyLimit::max(1024 * 1024))
                .layer(TimeoutLayer::new(Duration::from_secs(
                    cfg.server.request_timeout_secs,
                ))),
        )
        .layer(TraceLayer::new_for_http())
}
