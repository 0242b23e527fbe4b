/// Why a single data row was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowProblem {
    #[error("missing date")]
    MissingDate,

    #[error("missing amount")]
    MissingAmount,

    #[error("amount '{0}' is not a number")]
    InvalidAmount(String),

    #[error("date '{raw}' is not a valid {expected} date")]
    InvalidDate { raw: String, expected: &'static str },
}

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("missing required column '{column}' (found: {})", .found.join(", "))]
    MissingColumn { column: String, found: Vec<String> },

    #[error("row {row}: {problem}")]
    Row { row: usize, problem: RowProblem },

    #[error("unknown source format '{0}' (expected one of: starling, revolut, freeagent)")]
    UnknownFormat(String),

    #[error("could not detect source format from columns: {}", .found.join(", "))]
    Undetected { found: Vec<String> },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConvertError {
    /// Row number for row-level failures, counted the way a spreadsheet shows it.
    pub fn row(&self) -> Option<usize> {
        match self {
            ConvertError::Row { row, .. } => Some(*row),
            _ => None,
        }
    }
}
