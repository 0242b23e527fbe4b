//! Per-bank row mappers. Each turns one already-header-checked row into a
//! `NormalizedRecord`, or says what is wrong with it.

pub mod freeagent;
pub mod revolut;
pub mod starling;

use fabridge_core::{NormalizedRecord, RawRecord, RowProblem, SourceFormat};

pub use freeagent::map_freeagent_row;
pub use revolut::map_revolut_row;
pub use starling::map_starling_row;

/// Cell value for `column`, or "" when the row has no such column.
pub(crate) fn field<'a>(record: &'a RawRecord, column: &str) -> &'a str {
    record.get(column).map(String::as_str).unwrap_or("")
}

pub fn map_row(record: &RawRecord, format: SourceFormat) -> Result<NormalizedRecord, RowProblem> {
    match format {
        SourceFormat::Starling => map_starling_row(record),
        SourceFormat::Revolut => map_revolut_row(record),
        SourceFormat::FreeAgent => map_freeagent_row(record),
    }
}
