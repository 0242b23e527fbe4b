use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::format::columns;

/// One decoded CSV row: column name -> raw cell, in header order.
pub type RawRecord = IndexMap<String, String>;

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{2}/\d{2}/\d{4}$").unwrap());
static AMOUNT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-?\d+\.\d{2}$").unwrap());

/// A row in the shape FreeAgent imports: date, amount, description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    /// dd/mm/yyyy
    pub date: String,
    /// Fixed to two decimals; negative means money out.
    pub amount: String,
    /// No commas, quotes or line breaks.
    pub description: String,
}

impl NormalizedRecord {
    /// Check the output invariant, naming the first field that breaks it.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !DATE_RE.is_match(&self.date) {
            return Err("date");
        }
        if !AMOUNT_RE.is_match(&self.amount) {
            return Err("amount");
        }
        if self.description.contains([',', '"', '\r', '\n']) {
            return Err("description");
        }
        Ok(())
    }

    /// View this record as a row of the headerless FreeAgent format.
    pub fn to_raw(&self) -> RawRecord {
        let mut raw = RawRecord::new();
        raw.insert(columns::FREEAGENT_DATE.to_string(), self.date.clone());
        raw.insert(columns::FREEAGENT_AMOUNT.to_string(), self.amount.clone());
        raw.insert(columns::FREEAGENT_DESCRIPTION.to_string(), self.description.clone());
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(date: &str, amount: &str, description: &str) -> NormalizedRecord {
        NormalizedRecord {
            date: date.to_string(),
            amount: amount.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_well_formed() {
        assert_eq!(rec("01/02/2024", "-12.50", "Acme Ltd. - INV1").validate(), Ok(()));
        assert_eq!(rec("31/12/1999", "0.00", "").validate(), Ok(()));
    }

    #[test]
    fn test_validate_names_bad_field() {
        assert_eq!(rec("2024-02-01", "1.00", "x").validate(), Err("date"));
        assert_eq!(rec("01/02/2024", "1.5", "x").validate(), Err("amount"));
        assert_eq!(rec("01/02/2024", "1.50", "a,b").validate(), Err("description"));
        assert_eq!(rec("01/02/2024", "1.50", "a\nb").validate(), Err("description"));
    }

    #[test]
    fn test_to_raw_keeps_column_order() {
        let raw = rec("01/02/2024", "12.50", "Coffee Shop").to_raw();
        let keys: Vec<&str> = raw.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Date", "Amount", "Description"]);
        assert_eq!(raw["Amount"], "12.50");
    }
}
