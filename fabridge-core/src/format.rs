//! Source formats: the bank-specific CSV column layouts we convert from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConvertError;

/// Column names as they appear in each bank's export header.
pub mod columns {
    pub const STARLING_DATE: &str = "Date";
    pub const STARLING_AMOUNT: &str = "Amount (GBP)";
    pub const STARLING_COUNTER_PARTY: &str = "Counter Party";
    pub const STARLING_REFERENCE: &str = "Reference";

    pub const REVOLUT_COMPLETED_DATE: &str = "Completed Date";
    pub const REVOLUT_AMOUNT: &str = "Amount";
    pub const REVOLUT_DESCRIPTION: &str = "Description";

    /// FreeAgent files are headerless; these names are assigned by position.
    pub const FREEAGENT_DATE: &str = "Date";
    pub const FREEAGENT_AMOUNT: &str = "Amount";
    pub const FREEAGENT_DESCRIPTION: &str = "Description";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    Starling,
    Revolut,
    /// Already-normalized output, re-read for validation.
    FreeAgent,
}

impl SourceFormat {
    pub fn all() -> [SourceFormat; 3] {
        [SourceFormat::Starling, SourceFormat::Revolut, SourceFormat::FreeAgent]
    }

    /// Human-readable name for display
    pub fn name(&self) -> &'static str {
        match self {
            SourceFormat::Starling => "Starling",
            SourceFormat::Revolut => "Revolut",
            SourceFormat::FreeAgent => "FreeAgent",
        }
    }

    /// Short code accepted on the command line
    pub fn code(&self) -> &'static str {
        match self {
            SourceFormat::Starling => "starling",
            SourceFormat::Revolut => "revolut",
            SourceFormat::FreeAgent => "freeagent",
        }
    }

    pub fn required_columns(&self) -> &'static [&'static str] {
        use crate::format::columns::*;
        match self {
            SourceFormat::Starling => &[STARLING_DATE, STARLING_AMOUNT, STARLING_COUNTER_PARTY],
            SourceFormat::Revolut => &[REVOLUT_COMPLETED_DATE, REVOLUT_AMOUNT, REVOLUT_DESCRIPTION],
            SourceFormat::FreeAgent => &[FREEAGENT_DATE, FREEAGENT_AMOUNT, FREEAGENT_DESCRIPTION],
        }
    }

    /// Bank exports carry a header row; FreeAgent output does not.
    pub fn has_header_row(&self) -> bool {
        !matches!(self, SourceFormat::FreeAgent)
    }

    /// Guess the format from a header row.
    ///
    /// Starling is checked before Revolut. FreeAgent is never detected since
    /// its files have no header to look at.
    pub fn detect<'a>(headers: impl IntoIterator<Item = &'a str>) -> Option<SourceFormat> {
        let headers: Vec<&str> = headers.into_iter().collect();
        [SourceFormat::Starling, SourceFormat::Revolut]
            .into_iter()
            .find(|format| {
                format
                    .required_columns()
                    .iter()
                    .all(|col| headers.contains(col))
            })
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SourceFormat {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "starling" => Ok(SourceFormat::Starling),
            "revolut" => Ok(SourceFormat::Revolut),
            "freeagent" | "free-agent" => Ok(SourceFormat::FreeAgent),
            _ => Err(ConvertError::UnknownFormat(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Starling".parse::<SourceFormat>().unwrap(), SourceFormat::Starling);
        assert_eq!(" REVOLUT ".parse::<SourceFormat>().unwrap(), SourceFormat::Revolut);
        assert_eq!("freeagent".parse::<SourceFormat>().unwrap(), SourceFormat::FreeAgent);
    }

    #[test]
    fn test_unknown_format_is_an_error() {
        let err = "monzo".parse::<SourceFormat>().unwrap_err();
        assert!(matches!(err, ConvertError::UnknownFormat(ref name) if name == "monzo"));
        assert!(matches!("".parse::<SourceFormat>(), Err(ConvertError::UnknownFormat(_))));
    }

    #[test]
    fn test_detect_from_headers() {
        let starling = [
            "Date",
            "Counter Party",
            "Reference",
            "Type",
            "Amount (GBP)",
            "Balance (GBP)",
        ];
        assert_eq!(SourceFormat::detect(starling), Some(SourceFormat::Starling));

        let revolut = [
            "Type",
            "Product",
            "Started Date",
            "Completed Date",
            "Description",
            "Amount",
            "Fee",
            "Currency",
            "State",
            "Balance",
        ];
        assert_eq!(SourceFormat::detect(revolut), Some(SourceFormat::Revolut));

        assert_eq!(SourceFormat::detect(["Date", "Amount", "Description"]), None);
    }

    #[test]
    fn test_codes_round_trip_through_from_str() {
        for format in SourceFormat::all() {
            assert_eq!(format.code().parse::<SourceFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_serde_uses_lowercase_codes() {
        let json = serde_json::to_string(&SourceFormat::FreeAgent).unwrap();
        assert_eq!(json, "\"freeagent\"");
    }
}
