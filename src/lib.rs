/*!
 * # lingogate - language detection & translation gateway
 *
 * A Rust service exposing language detection and translation-to-English over
 * HTTP, for a single text or for a whole uploaded spreadsheet of text rows.
 *
 * ## Features
 *
 * - Validation gate: word-length and sentence-length admission rules applied
 *   before any model call
 * - Fault-isolated batch pipeline: every row of an uploaded dataset is
 *   processed independently; failures are reported per row and never abort
 *   the batch
 * - Pluggable collaborators: detection and translation backends behind
 *   traits, with deterministic mocks for testing
 * - One-time model artifact bootstrapping at startup
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `validation`: The two-stage validation gate
 * - `providers`: Detection and translation backends:
 *   - `providers::whatlang`: Local trigram-based detection
 *   - `providers::remote`: HTTP translation inference client
 *   - `providers::mock`: Deterministic fakes for tests
 * - `language_service`: Single-text detect/translate operations
 * - `pipeline`: Batch processing with per-row fault isolation
 * - `dataset`: First-column extraction from uploaded tabular files
 * - `server`: axum HTTP binding
 * - `artifacts`: Idempotent model file bootstrapping
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod artifacts;
pub mod dataset;
pub mod errors;
pub mod language_service;
pub mod language_utils;
pub mod pipeline;
pub mod providers;
pub mod server;
pub mod validation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{AppError, IngestionError, ProviderError, ServiceError};
pub use language_service::LanguageService;
pub use pipeline::{BatchPipeline, BatchReport};
pub use validation::{TextValidator, ValidationOutcome, ValidationRule};
