//! Resource Handler
//!
//! Relays a binary document fetched from the external content host.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};

use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// Mime type of relayed documents.
const DOCUMENT_CONTENT_TYPE: &str = "application/pdf";

/// GET /resource/:id
///
/// The identifier is opaque and passed to the fetcher unvalidated. The body
/// is relayed byte-for-byte with a fixed content type.
pub async fn get_resource(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let body = state.fetcher.fetch(&id).await?;

    Ok(([(header::CONTENT_TYPE, DOCUMENT_CONTENT_TYPE)], body))
}
