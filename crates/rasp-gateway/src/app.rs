use axum::{
    routing::{get, post},
    Router,
};
use rasp_cache::CacheStore;
use rasp_core::config::RaspConfig;
use rasp_scraper::PageFetcher;
use std::sync::Arc;

/// Central shared state — passed as Arc<AppState> to all Axum handlers.
pub struct AppState {
    pub config: RaspConfig,
    pub store: Arc<CacheStore>,
    pub fetcher: PageFetcher,
}

impl AppState {
    pub fn new(config: RaspConfig, store: Arc<CacheStore>, fetcher: PageFetcher) -> Self {
        Self {
            config,
            store,
            fetcher,
        }
    }
}

/// Assemble the full Axum router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(crate::http::health::health_handler))
        .route("/force_parse", post(crate::http::refresh::force_parse_handler))
        .route("/insts", get(crate::http::roster::insts_handler))
        .route("/courses", get(crate::http::roster::courses_handler))
        .route("/groups", get(crate::http::roster::groups_handler))
        .route(
            "/schedule/{group_id}",
            get(crate::http::schedule::schedule_handler),
        )
        .with_state(state)
        .layer(tower_http::trace::TraceLayer::new_for_http())
}
