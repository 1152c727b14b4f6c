/*!
 * Text validation against the configured rule set.
 *
 * Two independent checks, both pure functions of (text, rule):
 * - word lengths: every whitespace-separated word within bounds
 * - sentence lengths: total word count, per-sentence word count, and the
 *   requirement that at least one sentence reaches the minimum word count
 *
 * Both checks stop at the first violation rather than collecting all of
 * them, so the reported reason always names the first offending word or
 * limit.
 */

use log::trace;

use crate::validation::rules::ValidationRule;

/// Outcome of a single validation check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    /// Whether the check passed
    pub passed: bool,
    /// Explanation of the failure, or a neutral confirmation when passed
    pub reason: String,
}

impl ValidationOutcome {
    /// Create a passing outcome with a confirmation message
    pub fn passed(reason: impl Into<String>) -> Self {
        Self {
            passed: true,
            reason: reason.into(),
        }
    }

    /// Create a failing outcome with the rejection reason
    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            passed: false,
            reason: reason.into(),
        }
    }
}

/// Validator applying the configured rules to a single text unit
///
/// Holds only the immutable rule set; safe to invoke concurrently for
/// different texts.
#[derive(Debug, Clone)]
pub struct TextValidator {
    rule: ValidationRule,
}

impl TextValidator {
    /// Create a validator with the default rule set
    pub fn new() -> Self {
        Self {
            rule: ValidationRule::default(),
        }
    }

    /// Create a validator with a custom rule set
    pub fn with_rule(rule: ValidationRule) -> Self {
        Self { rule }
    }

    /// The rule set this validator applies
    pub fn rule(&self) -> &ValidationRule {
        &self.rule
    }

    /// Check that every word in the text respects the length bounds
    ///
    /// Words are whitespace-separated; a text with no words trivially passes.
    /// The first offending word short-circuits the check.
    pub fn validate_word_lengths(&self, text: &str) -> ValidationOutcome {
        for word in text.split_whitespace() {
            let len = word.chars().count();
            if len < self.rule.min_word_length {
                return ValidationOutcome::failed(format!(
                    "Word '{}' is shorter than the minimum length of {}.",
                    word, self.rule.min_word_length
                ));
            }
            if len > self.rule.max_word_length {
                return ValidationOutcome::failed(format!(
                    "Word '{}' is longer than the maximum length of {}.",
                    word, self.rule.max_word_length
                ));
            }
        }

        ValidationOutcome::passed("All words meet the length criteria.")
    }

    /// Check the sentence structure of the text
    ///
    /// The total word count is checked first and takes priority over the
    /// per-sentence checks. Sentences are `.`-delimited; segments with no
    /// words (consecutive or trailing delimiters) are skipped. The text
    /// passes only if no sentence exceeds the maximum and at least one
    /// sentence reaches the minimum word count.
    pub fn validate_sentence_length(&self, text: &str) -> ValidationOutcome {
        let total_words = text.split_whitespace().count();
        if total_words > self.rule.max_total_word_count {
            return ValidationOutcome::failed(format!(
                "Paragraph exceeds the maximum length of {} words.",
                self.rule.max_total_word_count
            ));
        }

        let mut has_min_length_sentence = false;

        for sentence in text.split('.') {
            let word_count = sentence.split_whitespace().count();

            // Skip empty segments caused by consecutive or trailing periods
            if word_count == 0 {
                continue;
            }

            if word_count > self.rule.max_sentence_word_count {
                return ValidationOutcome::failed(format!(
                    "Sentence exceeds the maximum length of {} words.",
                    self.rule.max_sentence_word_count
                ));
            }

            if word_count >= self.rule.min_sentence_word_count {
                has_min_length_sentence = true;
            }
        }

        if !has_min_length_sentence {
            return ValidationOutcome::failed(format!(
                "No sentence meets the minimum length of {} words.",
                self.rule.min_sentence_word_count
            ));
        }

        ValidationOutcome::passed("All sentences meet the length criteria.")
    }

    /// Run the full gate: word lengths first, then sentence structure
    ///
    /// Returns the first failing outcome, or the sentence check's passing
    /// outcome when both checks succeed.
    pub fn validate(&self, text: &str) -> ValidationOutcome {
        let words = self.validate_word_lengths(text);
        if !words.passed {
            trace!("Text rejected by word-length check: {}", words.reason);
            return words;
        }

        let sentences = self.validate_sentence_length(text);
        if !sentences.passed {
            trace!("Text rejected by sentence-length check: {}", sentences.reason);
        }
        sentences
    }
}

impl Default for TextValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::rules::ValidationRule;

    fn validator_with(rule: ValidationRule) -> TextValidator {
        TextValidator::with_rule(rule)
    }

    #[test]
    fn test_validateWordLengths_withWordsInBounds_shouldPass() {
        let validator = TextValidator::new();

        let outcome = validator.validate_word_lengths("Every word here is fine");

        assert!(outcome.passed);
        assert_eq!(outcome.reason, "All words meet the length criteria.");
    }

    #[test]
    fn test_validateWordLengths_withEmptyText_shouldPass() {
        let validator = TextValidator::new();

        assert!(validator.validate_word_lengths("").passed);
        assert!(validator.validate_word_lengths("   \t\n ").passed);
    }

    #[test]
    fn test_validateWordLengths_withOverlongWord_shouldNameTheWord() {
        let validator = TextValidator::new();
        let long_word = "x".repeat(46);
        let text = format!("short {} short", long_word);

        let outcome = validator.validate_word_lengths(&text);

        assert!(!outcome.passed);
        assert_eq!(
            outcome.reason,
            format!("Word '{}' is longer than the maximum length of 45.", long_word)
        );
    }

    #[test]
    fn test_validateWordLengths_withWordAtExactMax_shouldPass() {
        let validator = TextValidator::new();
        let word = "y".repeat(45);

        assert!(validator.validate_word_lengths(&word).passed);
    }

    #[test]
    fn test_validateWordLengths_withTooShortWord_shouldNameTheWord() {
        let rule = ValidationRule {
            min_word_length: 2,
            ..ValidationRule::default()
        };
        let validator = validator_with(rule);

        let outcome = validator.validate_word_lengths("ok a fine");

        assert!(!outcome.passed);
        assert_eq!(
            outcome.reason,
            "Word 'a' is shorter than the minimum length of 2."
        );
    }

    #[test]
    fn test_validateWordLengths_shouldStopAtFirstViolation() {
        let validator = TextValidator::new();
        let first = "a".repeat(46);
        let second = "b".repeat(50);
        let text = format!("{} {}", first, second);

        let outcome = validator.validate_word_lengths(&text);

        // Only the first offending word is reported
        assert!(outcome.reason.contains(&first));
        assert!(!outcome.reason.contains(&second));
    }

    #[test]
    fn test_validateWordLengths_withMultibyteWord_shouldCountChars() {
        let validator = TextValidator::new();
        // 45 multibyte characters are within bounds even though the byte
        // length is far larger
        let word = "ü".repeat(45);

        assert!(validator.validate_word_lengths(&word).passed);
    }

    #[test]
    fn test_validateSentenceLength_withQualifyingSentence_shouldPass() {
        let validator = TextValidator::new();

        // Second sentence has 3 words, meeting the minimum of 3
        let outcome = validator.validate_sentence_length("Hi. Hello there friend.");

        assert!(outcome.passed);
        assert_eq!(outcome.reason, "All sentences meet the length criteria.");
    }

    #[test]
    fn test_validateSentenceLength_withOnlyShortFragments_shouldFail() {
        let validator = TextValidator::new();

        let outcome = validator.validate_sentence_length("Hi. Ok.");

        assert!(!outcome.passed);
        assert_eq!(
            outcome.reason,
            "No sentence meets the minimum length of 3 words."
        );
    }

    #[test]
    fn test_validateSentenceLength_withConsecutivePeriods_shouldSkipEmptySegments() {
        let validator = TextValidator::new();

        let outcome = validator.validate_sentence_length("One two three... and then some more.");

        assert!(outcome.passed);
    }

    #[test]
    fn test_validateSentenceLength_overTotalWordLimit_shouldFailWithTotalMessage() {
        let rule = ValidationRule {
            max_total_word_count: 10,
            max_sentence_word_count: 5,
            ..ValidationRule::default()
        };
        let validator = validator_with(rule);
        // 11 words split into short sentences; the total check must win
        let text = "one two three. four five six. seven eight nine. ten eleven.";

        let outcome = validator.validate_sentence_length(text);

        assert!(!outcome.passed);
        assert_eq!(
            outcome.reason,
            "Paragraph exceeds the maximum length of 10 words."
        );
    }

    #[test]
    fn test_validateSentenceLength_withOverlongSentence_shouldNameLimit() {
        let rule = ValidationRule {
            max_sentence_word_count: 4,
            ..ValidationRule::default()
        };
        let validator = validator_with(rule);

        let outcome = validator.validate_sentence_length("this sentence has five words.");

        assert!(!outcome.passed);
        assert_eq!(
            outcome.reason,
            "Sentence exceeds the maximum length of 4 words."
        );
    }

    #[test]
    fn test_validateSentenceLength_withNoDelimiter_shouldTreatWholeTextAsSentence() {
        let validator = TextValidator::new();

        assert!(validator.validate_sentence_length("three words suffice").passed);
        assert!(!validator.validate_sentence_length("two words").passed);
    }

    #[test]
    fn test_validate_shouldRunWordCheckFirst() {
        let validator = TextValidator::new();
        let long_word = "z".repeat(46);
        // Fails both checks; the word-length reason must be the one reported
        let text = format!("{}.", long_word);

        let outcome = validator.validate(&text);

        assert!(!outcome.passed);
        assert!(outcome.reason.contains("longer than the maximum length"));
    }

    #[test]
    fn test_validate_withCleanText_shouldPass() {
        let validator = TextValidator::new();

        let outcome = validator.validate("A perfectly ordinary sentence for the gate.");

        assert!(outcome.passed);
    }
}
