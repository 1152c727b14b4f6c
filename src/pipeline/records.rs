/*!
 * Row and result record types for the batch pipeline.
 */

use serde::Serialize;

/// One text unit extracted from the first column of an uploaded dataset
///
/// The index is 1-based and refers to the row's position among the non-empty
/// survivors, not its position in the original file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// 1-based position among non-empty rows
    pub index: usize,
    /// The text to process
    pub text: String,
}

impl Row {
    /// Build indexed rows from raw first-column values
    ///
    /// Every value is already coerced to text by ingestion; rows whose text
    /// is empty or all-whitespace are discarded before indexing, so indices
    /// are contiguous over the survivors.
    pub fn from_raw_values<I>(values: I) -> Vec<Row>
    where
        I: IntoIterator<Item = String>,
    {
        values
            .into_iter()
            .filter(|value| !value.trim().is_empty())
            .enumerate()
            .map(|(i, text)| Row { index: i + 1, text })
            .collect()
    }
}

/// What caused a row to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The row was rejected by the validation gate
    Validation,
    /// A collaborator (detector or translator) raised during processing
    Collaborator,
}

/// A row that passed validation and completed detection and translation
#[derive(Debug, Clone, Serialize)]
pub struct ProcessedRecord {
    /// 1-based row index
    pub row: usize,
    /// The original text
    pub original_text: String,
    /// Detected language code
    pub detected_language: String,
    /// Confidence label of the detection
    pub confidence: String,
    /// English translation
    pub translation: String,
}

/// A row that failed validation or whose collaborator call raised
#[derive(Debug, Clone, Serialize)]
pub struct ErrorRecord {
    /// 1-based row index
    pub row: usize,
    /// The original text
    pub original_text: String,
    /// What kind of failure this is
    pub kind: ErrorKind,
    /// The rejection reason or the collaborator's error message
    pub message: String,
}

/// Aggregate result of one batch run
///
/// Both lists preserve source row order; a row appears in exactly one of
/// them. An all-failure batch is a normal report, not a pipeline error.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    /// Rows that completed detection and translation
    pub processed: Vec<ProcessedRecord>,
    /// Rows that failed, with enough context to locate and fix them
    pub errors: Vec<ErrorRecord>,
}

impl BatchReport {
    /// Total number of rows accounted for
    pub fn total_rows(&self) -> usize {
        self.processed.len() + self.errors.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fromRawValues_shouldDropEmptyAndReindex() {
        let values = vec![
            "First row".to_string(),
            "   ".to_string(),
            "Third row".to_string(),
        ];

        let rows = Row::from_raw_values(values);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].index, 1);
        assert_eq!(rows[0].text, "First row");
        assert_eq!(rows[1].index, 2);
        assert_eq!(rows[1].text, "Third row");
    }

    #[test]
    fn test_fromRawValues_withAllEmpty_shouldYieldNoRows() {
        let values = vec![String::new(), "\t".to_string(), " \n ".to_string()];

        assert!(Row::from_raw_values(values).is_empty());
    }

    #[test]
    fn test_fromRawValues_shouldPreserveOrder() {
        let values = vec!["a b c".to_string(), "d e f".to_string(), "g h i".to_string()];

        let rows = Row::from_raw_values(values);

        let texts: Vec<&str> = rows.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["a b c", "d e f", "g h i"]);
    }

    #[test]
    fn test_errorKind_shouldSerializeAsSnakeCase() {
        assert_eq!(
            serde_json::to_string(&ErrorKind::Validation).unwrap(),
            "\"validation\""
        );
        assert_eq!(
            serde_json::to_string(&ErrorKind::Collaborator).unwrap(),
            "\"collaborator\""
        );
    }
}
