use rust_decimal::Decimal;

use crate::error::NutriCareError;
use crate::model::{ExtractionResult, StructuredRecord};

/// Column holding the free-text prescription in vitals exports.
pub const PRESCRIPTION_COLUMN: &str = "doctor_prescription";

/// Extract text (and vitals) from the first data row of a CSV file.
///
/// With a `doctor_prescription` column, that cell becomes the text and the
/// other numeric cells become the structured record. Without it, every cell of
/// the first row is joined with spaces and no record is produced.
pub fn extract_csv(bytes: &[u8]) -> Result<ExtractionResult, NutriCareError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let headers = reader.headers()?.clone();
    let row = match reader.records().next() {
        Some(row) => row?,
        None => return Ok(ExtractionResult::from_text("", None)),
    };

    let text_column = headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(PRESCRIPTION_COLUMN));

    match text_column {
        Some(idx) => {
            let text = row.get(idx).unwrap_or_default();
            let record = numeric_fields(&headers, &row, idx);
            Ok(ExtractionResult::from_text(text, Some(record)))
        }
        None => {
            let text = row
                .iter()
                .filter(|cell| !cell.is_empty())
                .collect::<Vec<_>>()
                .join(" ");
            Ok(ExtractionResult::from_text(&text, None))
        }
    }
}

/// Collect numeric cells of a row, keyed by lowercased header. Non-numeric
/// and empty cells are left out.
fn numeric_fields(
    headers: &csv::StringRecord,
    row: &csv::StringRecord,
    skip: usize,
) -> StructuredRecord {
    let mut record = StructuredRecord::new();
    for (i, (header, cell)) in headers.iter().zip(row.iter()).enumerate() {
        if i == skip || header.is_empty() {
            continue;
        }
        match parse_number(cell) {
            Some(value) => {
                record.insert(header.to_lowercase(), value);
            }
            None => {
                if !cell.is_empty() {
                    tracing::debug!(column = header, value = cell, "skipping non-numeric cell");
                }
            }
        }
    }
    record
}

fn parse_number(cell: &str) -> Option<Decimal> {
    if cell.is_empty() {
        return None;
    }
    cell.parse::<Decimal>()
        .ok()
        .or_else(|| Decimal::from_scientific(cell).ok())
}
