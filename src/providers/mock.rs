/*!
 * Mock provider implementations for testing.
 *
 * This module provides deterministic fakes for both collaborator contracts:
 * - `MockDetector::working()` / `MockTranslator::working()` - always succeed
 * - `MockDetector::failing()` / `MockTranslator::failing()` - always fail
 * - `MockTranslator::intermittent(n)` - fails every nth request
 *
 * The mocks echo their input in a recognizable shape so tests can assert on
 * exactly which text reached the collaborator.
 */

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::ProviderError;
use crate::providers::{Detection, LanguageDetector, Translator};

/// Behavior mode for the mock providers
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds
    Working,
    /// Fails intermittently (every nth request)
    Intermittent { fail_every: usize },
    /// Always fails with an error
    Failing,
}

/// Mock language detector for testing
#[derive(Debug)]
pub struct MockDetector {
    /// Behavior mode
    behavior: MockBehavior,
    /// Language code to report
    language: String,
    /// Confidence label to report
    confidence: String,
    /// Request counter for intermittent failures
    request_count: Arc<AtomicUsize>,
}

impl MockDetector {
    /// Create a new mock detector with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            language: "fr".to_string(),
            confidence: "high".to_string(),
            request_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a working mock detector that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a failing mock detector that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Set the detection this mock reports
    pub fn with_detection(mut self, language: impl Into<String>, confidence: impl Into<String>) -> Self {
        self.language = language.into();
        self.confidence = confidence.into();
        self
    }

    /// Number of detect calls made so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LanguageDetector for MockDetector {
    async fn detect(&self, _text: &str) -> Result<Detection, ProviderError> {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst);

        match self.behavior {
            MockBehavior::Working => Ok(Detection {
                language: self.language.clone(),
                confidence: self.confidence.clone(),
            }),

            MockBehavior::Intermittent { fail_every } => {
                if count % fail_every == fail_every - 1 {
                    Err(ProviderError::ModelError(format!(
                        "Simulated intermittent detection failure (request #{})",
                        count + 1
                    )))
                } else {
                    Ok(Detection {
                        language: self.language.clone(),
                        confidence: self.confidence.clone(),
                    })
                }
            }

            MockBehavior::Failing => Err(ProviderError::ModelError(
                "Simulated detection failure".to_string(),
            )),
        }
    }
}

/// Mock translator for testing
#[derive(Debug)]
pub struct MockTranslator {
    /// Behavior mode
    behavior: MockBehavior,
    /// Request counter for intermittent failures
    request_count: Arc<AtomicUsize>,
}

impl MockTranslator {
    /// Create a new mock translator with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a working mock translator that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create an intermittently failing mock translator
    pub fn intermittent(fail_every: usize) -> Self {
        Self::new(MockBehavior::Intermittent { fail_every })
    }

    /// Create a failing mock translator that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Number of translate calls made so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(&self, text: &str) -> Result<String, ProviderError> {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst);

        match self.behavior {
            MockBehavior::Working => Ok(format!("[EN] {}", text)),

            MockBehavior::Intermittent { fail_every } => {
                if count % fail_every == fail_every - 1 {
                    Err(ProviderError::ModelError(format!(
                        "Simulated intermittent translation failure (request #{})",
                        count + 1
                    )))
                } else {
                    Ok(format!("[EN] {}", text))
                }
            }

            MockBehavior::Failing => Err(ProviderError::ModelError(
                "Simulated translation failure".to_string(),
            )),
        }
    }
}
