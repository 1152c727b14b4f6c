/*!
 * Route definitions for the HTTP API.
 */

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};

use crate::server::handlers;
use crate::server::types::AppState;

/// Build the API router
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/detect_language", post(handlers::detect_language))
        .route("/translate", post(handlers::translate))
        .route("/process_batch", post(handlers::process_batch))
        .route("/health", get(handlers::health))
}
