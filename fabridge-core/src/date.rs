//! Date rules: FreeAgent takes dd/mm/yyyy; Revolut exports ISO dates.

use chrono::NaiveDate;

use crate::error::RowProblem;

const UK_PATTERN: &str = "DD/MM/YYYY";
const ISO_PATTERN: &str = "YYYY-MM-DD";

fn all_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a strict `dd/mm/yyyy` date (zero-padded, real calendar day).
pub fn parse_uk_date(s: &str) -> Option<NaiveDate> {
    let mut it = s.split('/');
    let (d, m, y) = (it.next()?, it.next()?, it.next()?);
    if it.next().is_some() || !all_digits(d, 2) || !all_digits(m, 2) || !all_digits(y, 4) {
        return None;
    }
    NaiveDate::from_ymd_opt(y.parse().ok()?, m.parse().ok()?, d.parse().ok()?)
}

/// Check a date that should already be `dd/mm/yyyy` and hand it back untouched.
pub fn validate_uk_date(raw: &str) -> Result<String, RowProblem> {
    if raw.trim().is_empty() {
        return Err(RowProblem::MissingDate);
    }
    match parse_uk_date(raw) {
        Some(_) => Ok(raw.to_string()),
        None => Err(RowProblem::InvalidDate {
            raw: raw.to_string(),
            expected: UK_PATTERN,
        }),
    }
}

/// Reformat a `YYYY-MM-DD` date as `dd/mm/yyyy`.
pub fn iso_to_uk_date(raw: &str) -> Result<String, RowProblem> {
    if raw.trim().is_empty() {
        return Err(RowProblem::MissingDate);
    }
    let invalid = || RowProblem::InvalidDate {
        raw: raw.to_string(),
        expected: ISO_PATTERN,
    };

    let parts: Vec<&str> = raw.split('-').collect();
    let [y, m, d] = parts.as_slice() else {
        return Err(invalid());
    };
    if !all_digits(y, 4) || !all_digits(m, 2) || !all_digits(d, 2) {
        return Err(invalid());
    }

    let year: i32 = y.parse().map_err(|_| invalid())?;
    let month: u32 = m.parse().map_err(|_| invalid())?;
    let day: u32 = d.parse().map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)?;

    Ok(format!("{d}/{m}/{y}"))
}
