//! Amount parsing: bank exports give decimals in assorted precisions;
//! FreeAgent wants exactly two places.

use crate::error::RowProblem;

/// Parse a raw amount cell and render it to two decimals.
pub fn normalize_amount(raw: &str) -> Result<String, RowProblem> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(RowProblem::MissingAmount);
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| RowProblem::InvalidAmount(raw.to_string()))?;
    if !value.is_finite() {
        return Err(RowProblem::InvalidAmount(raw.to_string()));
    }

    Ok(format!("{:.2}", value))
}
