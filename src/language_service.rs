/*!
 * Single-text service operations.
 *
 * The service owns the validation gate and the two injected collaborators.
 * In this path a rejection or a collaborator failure is surfaced directly to
 * the caller; the per-row capture semantics live in the batch pipeline.
 */

use std::sync::Arc;

use log::debug;

use crate::errors::ServiceError;
use crate::providers::{Detection, LanguageDetector, Translator};
use crate::validation::TextValidator;

/// Language detection and translation over a validated text unit
///
/// Collaborators are injected as trait objects so tests can substitute
/// deterministic fakes. The service holds no mutable state and is cheap to
/// clone; one instance is shared across all requests.
#[derive(Debug, Clone)]
pub struct LanguageService {
    /// The validation gate applied before any collaborator call
    pub validator: TextValidator,
    /// Language identification backend
    pub detector: Arc<dyn LanguageDetector>,
    /// Translation backend
    pub translator: Arc<dyn Translator>,
}

impl LanguageService {
    /// Create a new service with the given gate and collaborators
    pub fn new(
        validator: TextValidator,
        detector: Arc<dyn LanguageDetector>,
        translator: Arc<dyn Translator>,
    ) -> Self {
        Self {
            validator,
            detector,
            translator,
        }
    }

    /// Run the validation gate, mapping a rejection to a service error
    pub fn validate_gate(&self, text: &str) -> Result<(), ServiceError> {
        let outcome = self.validator.validate(text);
        if outcome.passed {
            Ok(())
        } else {
            Err(ServiceError::Validation(outcome.reason))
        }
    }

    /// Detect the language of a single text
    ///
    /// The text must pass the validation gate first; a collaborator failure
    /// propagates as a server-side error.
    pub async fn detect_language(&self, text: &str) -> Result<Detection, ServiceError> {
        self.validate_gate(text)?;

        let detection = self.detector.detect(text).await?;
        debug!(
            "Detected '{}' ({} confidence) for single-text request",
            detection.language, detection.confidence
        );
        Ok(detection)
    }

    /// Translate a single text to English
    ///
    /// Same gating as detection.
    pub async fn translate_text(&self, text: &str) -> Result<String, ServiceError> {
        self.validate_gate(text)?;

        let translation = self.translator.translate(text).await?;
        Ok(translation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::mock::{MockDetector, MockTranslator};

    fn service_with(detector: MockDetector, translator: MockTranslator) -> LanguageService {
        LanguageService::new(
            TextValidator::new(),
            Arc::new(detector),
            Arc::new(translator),
        )
    }

    #[tokio::test]
    async fn test_detectLanguage_withValidText_shouldReturnDetection() {
        let service = service_with(
            MockDetector::working().with_detection("fr", "high"),
            MockTranslator::working(),
        );

        let detection = service
            .detect_language("Bonjour tout le monde.")
            .await
            .unwrap();

        assert_eq!(detection.language, "fr");
        assert_eq!(detection.confidence, "high");
    }

    #[tokio::test]
    async fn test_detectLanguage_withRejectedText_shouldReturnValidationError() {
        let service = service_with(MockDetector::working(), MockTranslator::working());

        // Two short fragments, no sentence reaches the minimum word count
        let result = service.detect_language("Hi. Ok.").await;

        match result {
            Err(ServiceError::Validation(reason)) => {
                assert!(reason.contains("minimum length"));
            }
            other => panic!("Expected validation error, got {:?}", other.is_ok()),
        }
    }

    #[tokio::test]
    async fn test_detectLanguage_withRejectedText_shouldNotCallDetector() {
        let detector = Arc::new(MockDetector::working());
        let service = LanguageService::new(
            TextValidator::new(),
            detector.clone(),
            Arc::new(MockTranslator::working()),
        );

        let _ = service.detect_language("Hi. Ok.").await;

        // The gate fails before the collaborator is reached
        assert_eq!(detector.request_count(), 0);
    }

    #[tokio::test]
    async fn test_translateText_withValidText_shouldReturnTranslation() {
        let service = service_with(MockDetector::working(), MockTranslator::working());

        let translation = service
            .translate_text("Bonjour tout le monde.")
            .await
            .unwrap();

        assert_eq!(translation, "[EN] Bonjour tout le monde.");
    }

    #[tokio::test]
    async fn test_translateText_withFailingProvider_shouldReturnProviderError() {
        let service = service_with(MockDetector::working(), MockTranslator::failing());

        let result = service.translate_text("Bonjour tout le monde.").await;

        assert!(matches!(result, Err(ServiceError::Provider(_))));
    }
}
