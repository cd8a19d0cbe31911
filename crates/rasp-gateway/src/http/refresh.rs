use axum::{extract::State, http::StatusCode, Json};
use rasp_cache::refresh_once;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::warn;

use crate::app::AppState;
use crate::http::error_response;

/// POST /force_parse — run one refresh cycle synchronously.
///
/// Returns after the scrape completes; a failure propagates as an error
/// response and leaves the previous cache intact.
pub async fn force_parse_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    refresh_once(&state.store, &state.fetcher)
        .await
        .map_err(|e| {
            warn!(error = %e, "forced refresh failed");
            error_response(&e)
        })?;

    Ok(Json(json!({
        "ok": true,
        "institutes": state.store.institute_count(),
        "groups": state.store.group_count(),
    })))
}
