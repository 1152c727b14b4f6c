/*!
 * Request handlers for the HTTP API.
 *
 * Handlers stay thin: measure elapsed time, delegate to the service or the
 * batch pipeline, and map typed errors onto HTTP statuses.
 */

use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Multipart, State};
use axum::{Form, Json};
use log::{info, warn};

use crate::dataset;
use crate::pipeline::{BatchPipeline, BatchReport};
use crate::server::types::{
    ApiError, AppState, DetectionResponse, TextForm, TranslationResponse, round_elapsed_ms,
};

/// `POST /detect_language` - detect the language of a single text
pub async fn detect_language(
    State(state): State<Arc<AppState>>,
    Form(form): Form<TextForm>,
) -> Result<Json<DetectionResponse>, ApiError> {
    let start = Instant::now();
    let detection = state.service.detect_language(&form.text).await?;

    Ok(Json(DetectionResponse {
        language: detection.language,
        confidence: detection.confidence,
        elapsed_ms: round_elapsed_ms(start.elapsed()),
    }))
}

/// `POST /translate` - translate a single text to English
pub async fn translate(
    State(state): State<Arc<AppState>>,
    Form(form): Form<TextForm>,
) -> Result<Json<TranslationResponse>, ApiError> {
    let start = Instant::now();
    let translation = state.service.translate_text(&form.text).await?;

    Ok(Json(TranslationResponse {
        translation,
        elapsed_ms: round_elapsed_ms(start.elapsed()),
    }))
}

/// `POST /process_batch` - run the batch pipeline over an uploaded dataset
///
/// Expects a multipart form with a `file` field holding the spreadsheet.
/// Row-level failures are reported inside the response body; only the
/// inability to read the upload at all fails the request.
pub async fn process_batch(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<BatchReport>, ApiError> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Ingestion(format!("Malformed multipart request: {}", e)))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or("upload").to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::Ingestion(format!("Failed to read upload: {}", e)))?;
            upload = Some((filename, bytes.to_vec()));
            break;
        }
    }

    let (filename, bytes) = upload
        .ok_or_else(|| ApiError::Ingestion("Missing 'file' field in upload".to_string()))?;

    info!("Processing batch upload '{}' ({} bytes)", filename, bytes.len());

    let values = dataset::extract_first_column(&filename, &bytes).map_err(|e| {
        warn!("Rejected upload '{}': {}", filename, e);
        ApiError::from(e)
    })?;

    let pipeline = BatchPipeline::new(state.service.clone());
    let report = pipeline.process_raw_values(values).await;

    Ok(Json(report))
}

/// `GET /health` - liveness probe
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
