/*!
 * Provider implementations for language detection and translation.
 *
 * This module contains the collaborator contracts the core consumes and
 * their concrete backends:
 * - Whatlang: local trigram-based language identification
 * - Remote: HTTP translation inference endpoint
 * - Mock: deterministic fakes for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Result of a language identification call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    /// Detected language code (ISO 639-1 where available)
    pub language: String,
    /// Coarse confidence label ("high", "medium" or "low")
    pub confidence: String,
}

/// Common trait for language identification backends
///
/// Implementations may fail on internal model errors; callers decide whether
/// such a failure aborts the request (single-text path) or is captured into
/// a per-row error record (batch path).
#[async_trait]
pub trait LanguageDetector: Send + Sync + Debug {
    /// Identify the language of the given text
    ///
    /// # Arguments
    /// * `text` - The text to identify
    ///
    /// # Returns
    /// * `Result<Detection, ProviderError>` - The detected language and
    ///   confidence label, or an error
    async fn detect(&self, text: &str) -> Result<Detection, ProviderError>;
}

/// Common trait for translation backends
#[async_trait]
pub trait Translator: Send + Sync + Debug {
    /// Translate the given text to English
    ///
    /// # Arguments
    /// * `text` - The text to translate
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The translated text, or an error
    async fn translate(&self, text: &str) -> Result<String, ProviderError>;
}

pub mod mock;
pub mod remote;
pub mod whatlang;

use std::sync::Arc;

use anyhow::Result;

use crate::app_config::{DetectionConfig, DetectorKind, TranslationConfig, TranslatorKind};

/// Build the detection backend selected by the configuration
pub fn detector_from_config(config: &DetectionConfig) -> Arc<dyn LanguageDetector> {
    match config.kind {
        DetectorKind::Whatlang => Arc::new(whatlang::WhatlangDetector::new()),
        DetectorKind::Mock => Arc::new(mock::MockDetector::working()),
    }
}

/// Build the translation backend selected by the configuration
pub fn translator_from_config(config: &TranslationConfig) -> Result<Arc<dyn Translator>> {
    match config.kind {
        TranslatorKind::Remote => Ok(Arc::new(remote::RemoteTranslator::new(
            config.endpoint.clone(),
            config.model.clone(),
            config.timeout_secs,
        )?)),
        TranslatorKind::Mock => Ok(Arc::new(mock::MockTranslator::working())),
    }
}
