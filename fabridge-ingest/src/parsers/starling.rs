//! Starling Bank CSV export.
//!
//! Header:
//!   Date,Counter Party,Reference,Type,Amount (GBP),Balance (GBP),Spending Category,Notes
//!   01/02/2024,Acme Ltd.,INV1,FASTER PAYMENT,-12.50,1034.21,GENERAL,
//!
//! Dates are already dd/mm/yyyy; the description is the counter party with
//! the reference appended when there is one.

use fabridge_core::{
    NormalizedRecord, RawRecord, RowProblem, columns, normalize_amount, sanitize_description,
    validate_uk_date,
};

use super::field;

pub fn map_starling_row(record: &RawRecord) -> Result<NormalizedRecord, RowProblem> {
    let date = validate_uk_date(field(record, columns::STARLING_DATE))?;
    let amount = normalize_amount(field(record, columns::STARLING_AMOUNT))?;

    let mut description = field(record, columns::STARLING_COUNTER_PARTY).to_string();
    let reference = field(record, columns::STARLING_REFERENCE).trim();
    if !reference.is_empty() {
        description.push_str(" - ");
        description.push_str(reference);
    }

    Ok(NormalizedRecord {
        date,
        amount,
        description: sanitize_description(&description),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> RawRecord {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_maps_reference_into_description() {
        let r = row(&[
            ("Date", "01/02/2024"),
            ("Amount (GBP)", "-12.5"),
            ("Counter Party", "Acme, Ltd."),
            ("Reference", "INV\"1"),
        ]);
        let out = map_starling_row(&r).unwrap();
        assert_eq!(out.date, "01/02/2024");
        assert_eq!(out.amount, "-12.50");
        assert_eq!(out.description, "Acme Ltd. - INV1");
    }

    #[test]
    fn test_reference_absent_or_blank() {
        let r = row(&[
            ("Date", "05/03/2024"),
            ("Amount (GBP)", "20"),
            ("Counter Party", "Tesco"),
        ]);
        assert_eq!(map_starling_row(&r).unwrap().description, "Tesco");

        let r = row(&[
            ("Date", "05/03/2024"),
            ("Amount (GBP)", "20"),
            ("Counter Party", "Tesco"),
            ("Reference", "   "),
        ]);
        assert_eq!(map_starling_row(&r).unwrap().description, "Tesco");
    }

    #[test]
    fn test_empty_counter_party_is_allowed() {
        let r = row(&[
            ("Date", "05/03/2024"),
            ("Amount (GBP)", "1.00"),
            ("Counter Party", ""),
            ("Reference", "REF9"),
        ]);
        assert_eq!(map_starling_row(&r).unwrap().description, "- REF9");

        let r = row(&[
            ("Date", "05/03/2024"),
            ("Amount (GBP)", "1.00"),
            ("Counter Party", ""),
        ]);
        assert_eq!(map_starling_row(&r).unwrap().description, "");
    }

    #[test]
    fn test_row_problems() {
        let r = row(&[("Date", ""), ("Amount (GBP)", "1"), ("Counter Party", "x")]);
        assert_eq!(map_starling_row(&r), Err(RowProblem::MissingDate));

        let r = row(&[("Date", "01/02/2024"), ("Amount (GBP)", ""), ("Counter Party", "x")]);
        assert_eq!(map_starling_row(&r), Err(RowProblem::MissingAmount));

        let r = row(&[("Date", "01/02/2024"), ("Amount (GBP)", "abc"), ("Counter Party", "x")]);
        assert_eq!(
            map_starling_row(&r),
            Err(RowProblem::InvalidAmount("abc".to_string()))
        );

        let r = row(&[("Date", "2024-02-01"), ("Amount (GBP)", "1"), ("Counter Party", "x")]);
        assert!(matches!(
            map_starling_row(&r),
            Err(RowProblem::InvalidDate { .. })
        ));
    }
}
