use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date::parse_uk_date;
use crate::record::NormalizedRecord;

/// Totals for a converted statement, shown after each file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ConversionSummary {
    pub records: usize,
    pub money_in: f64,
    /// Sum of negative amounts (so it is <= 0).
    pub money_out: f64,
    pub net: f64,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
}

pub fn summarize(records: &[NormalizedRecord]) -> ConversionSummary {
    let mut summary = ConversionSummary {
        records: records.len(),
        ..Default::default()
    };

    for r in records {
        let amount: f64 = r.amount.parse().unwrap_or(0.0);
        if amount >= 0.0 {
            summary.money_in += amount;
        } else {
            summary.money_out += amount;
        }

        if let Some(date) = parse_uk_date(&r.date) {
            summary.first_date = Some(summary.first_date.map_or(date, |d| d.min(date)));
            summary.last_date = Some(summary.last_date.map_or(date, |d| d.max(date)));
        }
    }

    summary.net = summary.money_in + summary.money_out;
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(date: &str, amount: &str) -> NormalizedRecord {
        NormalizedRecord {
            date: date.to_string(),
            amount: amount.to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_summarize_splits_in_and_out() {
        let records = vec![
            rec("03/02/2024", "100.00"),
            rec("01/02/2024", "-12.50"),
            rec("15/01/2024", "-7.50"),
        ];
        let s = summarize(&records);
        assert_eq!(s.records, 3);
        assert!((s.money_in - 100.0).abs() < 1e-9);
        assert!((s.money_out + 20.0).abs() < 1e-9);
        assert!((s.net - 80.0).abs() < 1e-9);
        // Calendar order, not string order.
        assert_eq!(s.first_date, NaiveDate::from_ymd_opt(2024, 1, 15));
        assert_eq!(s.last_date, NaiveDate::from_ymd_opt(2024, 2, 3));
    }

    #[test]
    fn test_summarize_empty() {
        assert_eq!(summarize(&[]), ConversionSummary::default());
    }
}
