//! Record Handlers
//!
//! CRUD over the user record collection. Validation happens here, before the
//! store is invoked; the store only ever sees non-empty input.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::infrastructure::http::dto::{
    CreateUserRequest, MessageResponse, RecordResponse, RecordsResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// GET /records
pub async fn list_records(State(state): State<Arc<AppState>>) -> Json<RecordsResponse> {
    Json(RecordsResponse {
        records: state.user_store.list_all(),
    })
}

/// GET /records/:id
pub async fn get_record(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<RecordResponse>, ApiError> {
    let record = parse_record_id(&id)
        .and_then(|id| state.user_store.get_by_id(&id))
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(RecordResponse { record }))
}

/// POST /records
pub async fn create_record(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<RecordResponse>), ApiError> {
    let (username, password) = match (non_empty(req.username), non_empty(req.password)) {
        (Some(u), Some(p)) => (u, p),
        _ => {
            return Err(ApiError::BadRequest(
                "Missing required fields: username and password".to_string(),
            ));
        }
    };

    let record = state.user_store.create(&username, &password)?;

    Ok((StatusCode::CREATED, Json(RecordResponse { record })))
}

/// DELETE /records/:id
pub async fn delete_record(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let deleted = parse_record_id(&id)
        .map(|id| state.user_store.delete_by_id(&id))
        .unwrap_or(false);

    if !deleted {
        return Err(ApiError::NotFound("User not found".to_string()));
    }

    Ok(Json(MessageResponse::new("User deleted successfully")))
}

/// A path param that is not a valid record id cannot name a live record, so
/// it reports the same way as an absent one.
fn parse_record_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.is_empty())
}
