//! HTTP Routes
//!
//! API Endpoints:
//! - /health          GET     health check (status + uptime)
//! - /resource/:id    GET     relay a document from the content host
//! - /records         GET     list all user records
//! - /records         POST    create a user record
//! - /records/:id     GET     get a user record
//! - /records/:id     DELETE  delete a user record
//! - anything else            404 {"error": "Route not found"}

use std::sync::Arc;

use axum::{
    routing::get,
    Json, Router,
};
use http::StatusCode;

use super::error::ErrorBody;
use super::handlers;
use super::state::AppState;

/// Create all routes.
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/resource/:id", get(handlers::get_resource))
        .merge(record_routes())
        .fallback(route_not_found)
}

/// Record routes
fn record_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/records",
            get(handlers::list_records).post(handlers::create_record),
        )
        .route(
            "/records/:id",
            get(handlers::get_record).delete(handlers::delete_record),
        )
}

/// Fallback for unmatched routes.
async fn route_not_found() -> (StatusCode, Json<ErrorBody>) {
    (StatusCode::NOT_FOUND, Json(ErrorBody::new("Route not found")))
}
