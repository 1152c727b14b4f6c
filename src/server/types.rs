/*!
 * Shared state and wire types for the HTTP API.
 */

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::errors::{IngestionError, ServiceError};
use crate::language_service::LanguageService;

/// State shared across all request handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// The language service; holds the gate and the collaborators
    pub service: LanguageService,
}

/// Form body for the single-text endpoints
#[derive(Debug, Deserialize)]
pub struct TextForm {
    /// The text to detect or translate
    pub text: String,
}

/// Response of the detection endpoint
#[derive(Debug, Serialize)]
pub struct DetectionResponse {
    /// Detected language code
    pub language: String,
    /// Confidence label of the detection
    pub confidence: String,
    /// Time taken, in milliseconds rounded to two decimals
    pub elapsed_ms: f64,
}

/// Response of the translation endpoint
#[derive(Debug, Serialize)]
pub struct TranslationResponse {
    /// Translated text
    pub translation: String,
    /// Time taken, in milliseconds rounded to two decimals
    pub elapsed_ms: f64,
}

/// Error body returned for any failed request
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable explanation of the failure
    pub error: String,
}

/// API-level error with its HTTP status mapping
///
/// Validation rejections are client errors carrying the gate's reason text;
/// collaborator and ingestion failures are server errors.
#[derive(Debug)]
pub enum ApiError {
    /// The text was rejected by the validation gate
    Validation(String),
    /// A collaborator (detector or translator) failed
    Provider(String),
    /// The uploaded file could not be parsed into rows
    Ingestion(String),
}

impl From<ServiceError> for ApiError {
    fn from(error: ServiceError) -> Self {
        match error {
            ServiceError::Validation(reason) => Self::Validation(reason),
            ServiceError::Provider(e) => Self::Provider(e.to_string()),
        }
    }
}

impl From<IngestionError> for ApiError {
    fn from(error: IngestionError) -> Self {
        Self::Ingestion(error.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Validation(reason) => (StatusCode::BAD_REQUEST, reason),
            Self::Provider(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
            Self::Ingestion(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Round a duration in milliseconds to two decimal places
pub fn round_elapsed_ms(elapsed: std::time::Duration) -> f64 {
    (elapsed.as_secs_f64() * 1000.0 * 100.0).round() / 100.0
}
