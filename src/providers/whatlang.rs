/*!
 * Whatlang-backed language identification.
 *
 * Uses the whatlang crate for fast, trigram-based detection. The raw
 * confidence score is collapsed into the coarse label the API exposes.
 */

use async_trait::async_trait;
use log::debug;

use crate::errors::ProviderError;
use crate::language_utils::{get_language_name, normalize_to_part1};
use crate::providers::{Detection, LanguageDetector};

/// Confidence score at or above which detection is labeled "high"
const HIGH_CONFIDENCE_THRESHOLD: f64 = 0.8;

/// Confidence score at or above which detection is labeled "medium"
const MEDIUM_CONFIDENCE_THRESHOLD: f64 = 0.5;

/// Local language detector backed by whatlang
#[derive(Debug, Default)]
pub struct WhatlangDetector;

impl WhatlangDetector {
    /// Create a new whatlang detector
    pub fn new() -> Self {
        Self
    }

    /// Collapse a raw confidence score into a coarse label
    fn confidence_label(score: f64) -> &'static str {
        if score >= HIGH_CONFIDENCE_THRESHOLD {
            "high"
        } else if score >= MEDIUM_CONFIDENCE_THRESHOLD {
            "medium"
        } else {
            "low"
        }
    }
}

#[async_trait]
impl LanguageDetector for WhatlangDetector {
    async fn detect(&self, text: &str) -> Result<Detection, ProviderError> {
        let info = whatlang::detect(text).ok_or_else(|| {
            ProviderError::ModelError("Could not identify the language of the text".to_string())
        })?;

        // whatlang reports ISO 639-3; prefer the 2-letter code when one exists
        let code3 = info.lang().code();
        let language = normalize_to_part1(code3).unwrap_or_else(|| code3.to_string());

        debug!(
            "Detected language '{}' ({}) with confidence {:.3}",
            language,
            get_language_name(&language).unwrap_or_else(|| "unknown".to_string()),
            info.confidence()
        );

        Ok(Detection {
            language,
            confidence: Self::confidence_label(info.confidence()).to_string(),
        })
    }
}
