//! Revolut account statement CSV export.
//!
//! Header:
//!   Type,Product,Started Date,Completed Date,Description,Amount,Fee,Currency,State,Balance
//!   CARD_PAYMENT,Current,2024-02-01 09:58:12,2024-02-01 10:00:00,Coffee Shop,-3.20,0.00,GBP,
//!   COMPLETED,96.80
//!
//! (the sample row is wrapped here; it is one CSV line)
//!
//! Only the date part of `Completed Date` is kept.

use fabridge_core::{
    NormalizedRecord, RawRecord, RowProblem, columns, iso_to_uk_date, normalize_amount,
    sanitize_description,
};

use super::field;

pub fn map_revolut_row(record: &RawRecord) -> Result<NormalizedRecord, RowProblem> {
    let completed = field(record, columns::REVOLUT_COMPLETED_DATE);
    let day = completed.trim().split(' ').next().unwrap_or("");
    if day.trim().is_empty() {
        return Err(RowProblem::MissingDate);
    }
    let date = iso_to_uk_date(day)?;
    let amount = normalize_amount(field(record, columns::REVOLUT_AMOUNT))?;

    Ok(NormalizedRecord {
        date,
        amount,
        description: sanitize_description(field(record, columns::REVOLUT_DESCRIPTION)),
    })
}
