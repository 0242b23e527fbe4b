//! The statement normalizer: header check, then row-by-row mapping.
//! All-or-nothing per batch; the first bad row aborts.

use fabridge_core::{ConvertError, NormalizedRecord, RawRecord, SourceFormat};

use crate::parsers::map_row;

/// Check that the header row carries every column `format` needs.
fn check_columns(first: &RawRecord, format: SourceFormat) -> Result<(), ConvertError> {
    for column in format.required_columns() {
        if !first.contains_key(*column) {
            return Err(ConvertError::MissingColumn {
                column: column.to_string(),
                found: first.keys().cloned().collect(),
            });
        }
    }
    Ok(())
}

/// Normalize decoded rows from a `format` export into FreeAgent records.
///
/// Empty input yields an empty vec. Row numbers in errors are 1-based and
/// count the header row when the format has one, so they match what a
/// spreadsheet shows.
pub fn normalize(
    records: &[RawRecord],
    format: SourceFormat,
) -> Result<Vec<NormalizedRecord>, ConvertError> {
    let Some(first) = records.first() else {
        return Ok(Vec::new());
    };
    check_columns(first, format)?;

    let first_row = if format.has_header_row() { 2 } else { 1 };

    let out = records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            map_row(record, format).map_err(|problem| ConvertError::Row {
                row: i + first_row,
                problem,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(format = %format, rows = out.len(), "normalized statement");
    Ok(out)
}
