use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::app::AppState;

/// GET /health — liveness probe, returns cache counters.
pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "institutes": state.store.institute_count(),
        "groups": state.store.group_count(),
        "schedules_cached": state.store.schedule_count(),
        "last_refresh": state.store.last_refresh(),
        "refresh_interval_secs": state.config.refresh.interval_secs,
    }))
}
