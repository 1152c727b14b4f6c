/*!
 * Rule configuration for the validation gate.
 */

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

/// Default minimum word length (a single character, e.g. "a" in English)
fn default_min_word_length() -> usize {
    1
}

/// Default maximum word length (45 characters, the longest word seen in Greek)
fn default_max_word_length() -> usize {
    45
}

/// Default minimum words a sentence needs to count as substantial
fn default_min_sentence_word_count() -> usize {
    3
}

/// Default maximum words allowed in a single sentence
fn default_max_sentence_word_count() -> usize {
    5000
}

/// Default maximum words allowed in the whole text
fn default_max_total_word_count() -> usize {
    5000
}

/// Bounds a text unit must respect to be admitted for detection/translation
///
/// The rule set is immutable once loaded and safe to share across concurrent
/// requests.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ValidationRule {
    /// Minimum length of a single word, in characters
    #[serde(default = "default_min_word_length")]
    pub min_word_length: usize,

    /// Maximum length of a single word, in characters
    #[serde(default = "default_max_word_length")]
    pub max_word_length: usize,

    /// Minimum word count at least one sentence must reach
    #[serde(default = "default_min_sentence_word_count")]
    pub min_sentence_word_count: usize,

    /// Maximum word count any single sentence may have
    #[serde(default = "default_max_sentence_word_count")]
    pub max_sentence_word_count: usize,

    /// Maximum word count of the whole text
    #[serde(default = "default_max_total_word_count")]
    pub max_total_word_count: usize,
}

impl Default for ValidationRule {
    fn default() -> Self {
        Self {
            min_word_length: default_min_word_length(),
            max_word_length: default_max_word_length(),
            min_sentence_word_count: default_min_sentence_word_count(),
            max_sentence_word_count: default_max_sentence_word_count(),
            max_total_word_count: default_max_total_word_count(),
        }
    }
}

impl ValidationRule {
    /// Check the rule set itself for misconfiguration
    ///
    /// All bounds must be positive and each min must not exceed its max.
    /// Violations here come from a bad config file, never from runtime data.
    pub fn validate(&self) -> Result<()> {
        if self.min_word_length == 0 {
            return Err(anyhow!("min_word_length must be a positive integer"));
        }
        if self.min_sentence_word_count == 0 {
            return Err(anyhow!("min_sentence_word_count must be a positive integer"));
        }
        if self.min_word_length > self.max_word_length {
            return Err(anyhow!(
                "min_word_length ({}) cannot exceed max_word_length ({})",
                self.min_word_length,
                self.max_word_length
            ));
        }
        if self.min_sentence_word_count > self.max_sentence_word_count {
            return Err(anyhow!(
                "min_sentence_word_count ({}) cannot exceed max_sentence_word_count ({})",
                self.min_sentence_word_count,
                self.max_sentence_word_count
            ));
        }
        if self.max_total_word_count == 0 {
            return Err(anyhow!("max_total_word_count must be a positive integer"));
        }
        Ok(())
    }
}
