/*!
 * Dataset ingestion for uploaded tabular files.
 *
 * Only the first column of an upload is consumed, mirroring the single
 * text-per-row contract of the batch pipeline. The first row is treated as a
 * header and discarded; every remaining cell is coerced to its textual
 * representation. Filtering of empty rows and indexing happen later, in
 * `Row::from_raw_values`.
 *
 * Supported formats: XLSX/XLS/ODS workbooks (via calamine) and CSV/TSV
 * files (via the csv crate). Format selection goes by file extension, with a
 * ZIP-magic sniff as fallback for extensionless spreadsheet uploads.
 */

use std::io::Cursor;

use calamine::{Data, Reader, open_workbook_auto_from_rs};
use log::debug;

use crate::errors::IngestionError;

/// Magic bytes of a ZIP container (XLSX and ODS are zipped)
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Extract the raw first-column values from an uploaded file
///
/// Returns the values in source order, header row excluded. An upload that
/// cannot be parsed at all is an ingestion error for the whole request.
pub fn extract_first_column(filename: &str, bytes: &[u8]) -> Result<Vec<String>, IngestionError> {
    let extension = filename
        .rsplit('.')
        .next()
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "xlsx" | "xlsm" | "xls" | "xlsb" | "ods" => extract_from_workbook(bytes),
        "csv" => extract_from_delimited(bytes, b','),
        "tsv" => extract_from_delimited(bytes, b'\t'),
        _ if bytes.starts_with(ZIP_MAGIC) => extract_from_workbook(bytes),
        _ => extract_from_delimited(bytes, b','),
    }
}

/// Read the first column of the first sheet of a workbook
fn extract_from_workbook(bytes: &[u8]) -> Result<Vec<String>, IngestionError> {
    let cursor = Cursor::new(bytes.to_vec());
    let mut workbook = open_workbook_auto_from_rs(cursor)
        .map_err(|e| IngestionError::ParseFailed(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or(IngestionError::EmptySheet)?
        .map_err(|e| IngestionError::ParseFailed(e.to_string()))?;

    let values: Vec<String> = range
        .rows()
        .skip(1) // header row names the column
        .map(|row| row.first().map(cell_to_string).unwrap_or_default())
        .collect();

    debug!("Extracted {} data rows from workbook", values.len());
    Ok(values)
}

/// Read the first column of a delimited text file
fn extract_from_delimited(bytes: &[u8], delimiter: u8) -> Result<Vec<String>, IngestionError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let mut values = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestionError::ParseFailed(e.to_string()))?;
        values.push(record.get(0).unwrap_or_default().to_string());
    }

    debug!("Extracted {} data rows from delimited file", values.len());
    Ok(values)
}

/// Coerce a spreadsheet cell to its textual representation
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("{:?}", e),
    }
}
