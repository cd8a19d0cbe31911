use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use rasp_core::types::Schedule;
use rasp_scraper::scrape_schedule;
use serde_json::Value;
use std::sync::Arc;
use tracing::warn;

use crate::app::AppState;
use crate::http::error_response;

/// GET /schedule/{group_id} — read-through lookup of one group's timetable.
///
/// On a cache miss the schedule page is scraped and the result cached until
/// the next roster refresh evicts it. The display name comes from the roster
/// cache; an id the roster does not know still gets scraped and falls back
/// to an empty name.
pub async fn schedule_handler(
    State(state): State<Arc<AppState>>,
    Path(group_id): Path<String>,
) -> Result<Json<Schedule>, (StatusCode, Json<Value>)> {
    let store = Arc::clone(&state.store);
    let fetcher = state.fetcher.clone();
    let id = group_id.clone();

    let schedule = state
        .store
        .get_or_compute_schedule(&group_id, move || async move {
            let name = store.group_name(&id).unwrap_or_default();
            scrape_schedule(&fetcher, &id, name).await
        })
        .await
        .map_err(|e| {
            warn!(group_id = %group_id, error = %e, "schedule scrape failed");
            error_response(&e)
        })?;

    Ok(Json(schedule))
}
