//! fabridge-core: record types, source formats and field rules shared by the
//! statement normalizer and the CLI.

pub mod amount;
pub mod date;
pub mod error;
pub mod format;
pub mod record;
pub mod sanitize;
pub mod summary;

pub use amount::normalize_amount;
pub use date::{iso_to_uk_date, parse_uk_date, validate_uk_date};
pub use error::{ConvertError, RowProblem};
pub use format::{SourceFormat, columns};
pub use record::{NormalizedRecord, RawRecord};
pub use sanitize::sanitize_description;
pub use summary::{ConversionSummary, summarize};
