use axum::{extract::State, Json};
use rasp_core::types::{Course, Group, Institute};
use std::sync::Arc;

use crate::app::AppState;

/// GET /insts — institutes from the current roster snapshot.
///
/// Institute ids are positional and reassigned on every refresh; callers
/// must not hold onto them across requests.
pub async fn insts_handler(State(state): State<Arc<AppState>>) -> Json<Vec<Institute>> {
    Json(state.store.institutes())
}

/// GET /courses — courses from the current roster snapshot. Ids are
/// synthetic and snapshot-scoped, like institute ids.
pub async fn courses_handler(State(state): State<Arc<AppState>>) -> Json<Vec<Course>> {
    Json(state.store.courses())
}

/// GET /groups — groups from the current roster snapshot, in the order the
/// source page lists them. Group ids are the only stable cross-request keys.
pub async fn groups_handler(State(state): State<Arc<AppState>>) -> Json<Vec<Group>> {
    Json(state.store.groups())
}
