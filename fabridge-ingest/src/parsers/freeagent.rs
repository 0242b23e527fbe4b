//! FreeAgent bank-import CSV (our own output): `date,amount,description`,
//! no header. Mapping it again is an identity on well-formed rows.

use fabridge_core::{
    NormalizedRecord, RawRecord, RowProblem, columns, normalize_amount, sanitize_description,
    validate_uk_date,
};

use super::field;

pub fn map_freeagent_row(record: &RawRecord) -> Result<NormalizedRecord, RowProblem> {
    Ok(NormalizedRecord {
        date: validate_uk_date(field(record, columns::FREEAGENT_DATE))?,
        amount: normalize_amount(field(record, columns::FREEAGENT_AMOUNT))?,
        description: sanitize_description(field(record, columns::FREEAGENT_DESCRIPTION)),
    })
}
