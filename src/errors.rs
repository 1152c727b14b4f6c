/*!
 * Error types for the lingogate application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when calling a detection or translation provider
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The model produced no usable result for the input
    #[error("Model error: {0}")]
    ModelError(String),
}

/// Errors that can occur when ingesting an uploaded dataset
#[derive(Error, Debug)]
pub enum IngestionError {
    /// The upload is not a format we can parse into rows
    #[error("Unsupported dataset format: {0}")]
    UnsupportedFormat(String),

    /// The file could not be parsed at all
    #[error("Failed to parse dataset: {0}")]
    ParseFailed(String),

    /// The workbook or file contains no sheet to read
    #[error("Dataset contains no readable sheet")]
    EmptySheet,
}

/// Errors surfaced by the single-text service operations
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The text was rejected by the validation gate; recoverable by the caller
    #[error("{0}")]
    Validation(String),

    /// A collaborator (detector or translator) failed
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from dataset ingestion
    #[error("Ingestion error: {0}")]
    Ingestion(#[from] IngestionError),

    /// Error from a service operation
    #[error("Service error: {0}")]
    Service(#[from] ServiceError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
