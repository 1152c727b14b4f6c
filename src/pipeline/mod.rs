/*!
 * Fault-isolated batch processing.
 *
 * This module contains the per-row pipeline applied to an uploaded dataset:
 * - `records`: row and result record types
 * - `batch`: the sequential processing loop with per-row fault isolation
 *
 * The guarantee the pipeline provides is that no single row's failure, be it
 * a validation rejection or a collaborator error, aborts processing of the
 * remaining rows. Successes and failures are accumulated into two disjoint,
 * source-ordered lists.
 */

pub mod batch;
pub mod records;

pub use batch::BatchPipeline;
pub use records::{BatchReport, ErrorKind, ErrorRecord, ProcessedRecord, Row};
