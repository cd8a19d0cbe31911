pub mod health;
pub mod refresh;
pub mod roster;
pub mod schedule;

use axum::{http::StatusCode, Json};
use rasp_core::RaspError;
use serde_json::{json, Value};

/// Map a subsystem error onto the HTTP surface: upstream trouble is a bad
/// gateway, structural drift on the page is an internal error. The body
/// names the failing page/element without echoing collaborator internals.
pub(crate) fn error_response(err: &RaspError) -> (StatusCode, Json<Value>) {
    let status = match err {
        RaspError::Fetch { .. } | RaspError::UpstreamStatus { .. } => StatusCode::BAD_GATEWAY,
        RaspError::Parse { .. } | RaspError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(json!({"error": err.to_string(), "code": err.code()})),
    )
}
