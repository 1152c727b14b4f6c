/*!
 * The sequential batch processing loop.
 *
 * Rows are processed strictly in source order. Each row runs the validation
 * gate and, when admitted, the detection and translation collaborators. A
 * failure at any stage is captured into an error record and the loop moves
 * on; nothing a single row does can abort the batch.
 */

use log::{debug, info};

use crate::language_service::LanguageService;
use crate::pipeline::records::{BatchReport, ErrorKind, ErrorRecord, ProcessedRecord, Row};

/// Batch pipeline applying the service to each row of a dataset
pub struct BatchPipeline {
    /// The service providing the gate and the collaborators
    service: LanguageService,
}

impl BatchPipeline {
    /// Create a new batch pipeline
    pub fn new(service: LanguageService) -> Self {
        Self { service }
    }

    /// Process raw first-column values end to end
    ///
    /// Values are filtered and indexed first (see `Row::from_raw_values`),
    /// then processed row by row.
    pub async fn process_raw_values(&self, values: Vec<String>) -> BatchReport {
        let rows = Row::from_raw_values(values);
        self.process(&rows).await
    }

    /// Process indexed rows into a batch report
    ///
    /// Rows are independent; the outcome of row N never influences row N+1
    /// beyond accumulation into the report.
    pub async fn process(&self, rows: &[Row]) -> BatchReport {
        let mut report = BatchReport::default();

        for row in rows {
            match self.process_row(row).await {
                Ok(record) => report.processed.push(record),
                Err(error) => {
                    debug!("Row {} failed: {}", error.row, error.message);
                    report.errors.push(error);
                }
            }
        }

        info!(
            "Batch complete: {} processed, {} failed out of {} rows",
            report.processed.len(),
            report.errors.len(),
            rows.len()
        );

        report
    }

    /// Process a single row: gate, then detect, then translate
    async fn process_row(&self, row: &Row) -> Result<ProcessedRecord, ErrorRecord> {
        let words = self.service.validator.validate_word_lengths(&row.text);
        if !words.passed {
            return Err(Self::rejection(row, words.reason));
        }

        let sentences = self.service.validator.validate_sentence_length(&row.text);
        if !sentences.passed {
            return Err(Self::rejection(row, sentences.reason));
        }

        let detection = self
            .service
            .detector
            .detect(&row.text)
            .await
            .map_err(|e| Self::collaborator_failure(row, e.to_string()))?;

        let translation = self
            .service
            .translator
            .translate(&row.text)
            .await
            .map_err(|e| Self::collaborator_failure(row, e.to_string()))?;

        Ok(ProcessedRecord {
            row: row.index,
            original_text: row.text.clone(),
            detected_language: detection.language,
            confidence: detection.confidence,
            translation,
        })
    }

    /// Build an error record for a validation rejection
    fn rejection(row: &Row, reason: String) -> ErrorRecord {
        ErrorRecord {
            row: row.index,
            original_text: row.text.clone(),
            kind: ErrorKind::Validation,
            message: reason,
        }
    }

    /// Build an error record for a collaborator failure
    fn collaborator_failure(row: &Row, message: String) -> ErrorRecord {
        ErrorRecord {
            row: row.index,
            original_text: row.text.clone(),
            kind: ErrorKind::Collaborator,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::mock::{MockDetector, MockTranslator};
    use crate::validation::TextValidator;
    use std::sync::Arc;

    fn pipeline_with(detector: MockDetector, translator: MockTranslator) -> BatchPipeline {
        BatchPipeline::new(LanguageService::new(
            TextValidator::new(),
            Arc::new(detector),
            Arc::new(translator),
        ))
    }

    #[tokio::test]
    async fn test_process_withCleanRows_shouldProcessAll() {
        let pipeline = pipeline_with(
            MockDetector::working().with_detection("fr", "high"),
            MockTranslator::working(),
        );
        let values = vec![
            "Bonjour tout le monde.".to_string(),
            "Une autre phrase complète.".to_string(),
        ];

        let report = pipeline.process_raw_values(values).await;

        assert_eq!(report.processed.len(), 2);
        assert!(report.errors.is_empty());
        assert_eq!(report.processed[0].row, 1);
        assert_eq!(report.processed[0].detected_language, "fr");
        assert_eq!(
            report.processed[0].translation,
            "[EN] Bonjour tout le monde."
        );
        assert_eq!(report.processed[1].row, 2);
    }

    #[tokio::test]
    async fn test_process_withEmptyMiddleRow_shouldReindexSurvivors() {
        let pipeline = pipeline_with(MockDetector::working(), MockTranslator::working());
        let values = vec![
            "First surviving row here.".to_string(),
            "   ".to_string(),
            "Second surviving row here.".to_string(),
        ];

        let report = pipeline.process_raw_values(values).await;

        assert_eq!(report.total_rows(), 2);
        let indices: Vec<usize> = report.processed.iter().map(|r| r.row).collect();
        assert_eq!(indices, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_process_withValidationAndCollaboratorFailures_shouldCaptureBoth() {
        // Row 1 fails the gate, row 2 reaches a failing translator
        let pipeline = pipeline_with(MockDetector::working(), MockTranslator::failing());
        let values = vec![
            "Hi. Ok.".to_string(),
            "A complete sentence that passes the gate.".to_string(),
        ];

        let report = pipeline.process_raw_values(values).await;

        assert!(report.processed.is_empty());
        assert_eq!(report.errors.len(), 2);
        assert_eq!(report.errors[0].row, 1);
        assert_eq!(report.errors[0].kind, ErrorKind::Validation);
        assert!(report.errors[0].message.contains("minimum length"));
        assert_eq!(report.errors[1].row, 2);
        assert_eq!(report.errors[1].kind, ErrorKind::Collaborator);
    }

    #[tokio::test]
    async fn test_process_withFailingRow_shouldContinueToNextRow() {
        // Every 2nd translation fails; the batch must still cover all rows
        let pipeline = pipeline_with(MockDetector::working(), MockTranslator::intermittent(2));
        let values = vec![
            "Sentence number one is fine.".to_string(),
            "Sentence number two is fine.".to_string(),
            "Sentence number three is fine.".to_string(),
            "Sentence number four is fine.".to_string(),
        ];

        let report = pipeline.process_raw_values(values).await;

        assert_eq!(report.total_rows(), 4);
        assert_eq!(report.processed.len(), 2);
        assert_eq!(report.errors.len(), 2);
        let failed: Vec<usize> = report.errors.iter().map(|r| r.row).collect();
        assert_eq!(failed, vec![2, 4]);
    }

    #[tokio::test]
    async fn test_process_withFailingValidation_shouldNotCallCollaborators() {
        let detector = Arc::new(MockDetector::working());
        let translator = Arc::new(MockTranslator::working());
        let pipeline = BatchPipeline::new(LanguageService::new(
            TextValidator::new(),
            detector.clone(),
            translator.clone(),
        ));

        let report = pipeline
            .process_raw_values(vec!["Hi. Ok.".to_string()])
            .await;

        assert_eq!(report.errors.len(), 1);
        assert_eq!(detector.request_count(), 0);
        assert_eq!(translator.request_count(), 0);
    }

    #[tokio::test]
    async fn test_process_withDetectorFailure_shouldNotCallTranslator() {
        let translator = Arc::new(MockTranslator::working());
        let pipeline = BatchPipeline::new(LanguageService::new(
            TextValidator::new(),
            Arc::new(MockDetector::failing()),
            translator.clone(),
        ));

        let report = pipeline
            .process_raw_values(vec!["A perfectly valid sentence here.".to_string()])
            .await;

        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].kind, ErrorKind::Collaborator);
        assert_eq!(translator.request_count(), 0);
    }

    #[tokio::test]
    async fn test_process_withSameInput_shouldBeDeterministic() {
        let values: Vec<String> = vec![
            "Hi. Ok.".to_string(),
            "A valid first sentence for the batch.".to_string(),
            "Another valid sentence for the batch.".to_string(),
        ];

        let first = pipeline_with(MockDetector::working(), MockTranslator::working())
            .process_raw_values(values.clone())
            .await;
        let second = pipeline_with(MockDetector::working(), MockTranslator::working())
            .process_raw_values(values)
            .await;

        let rows = |r: &BatchReport| -> (Vec<usize>, Vec<usize>) {
            (
                r.processed.iter().map(|p| p.row).collect(),
                r.errors.iter().map(|e| e.row).collect(),
            )
        };
        assert_eq!(rows(&first), rows(&second));
    }

    #[tokio::test]
    async fn test_process_withNoRows_shouldReturnEmptyReport() {
        let pipeline = pipeline_with(MockDetector::working(), MockTranslator::working());

        let report = pipeline.process_raw_values(Vec::new()).await;

        assert_eq!(report.total_rows(), 0);
    }
}
