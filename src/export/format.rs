//! Output format selector.

use strum::{Display, EnumString};

/// Client-selected output mode for the aggregated sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ExportFormat {
    /// Indented JSON file download.
    Json,
    /// CSV file download.
    Csv,
    /// Dump to the server log, plain-text acknowledgment to the client.
    Console,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parses_lowercase_names() {
        assert_eq!(ExportFormat::from_str("json").unwrap(), ExportFormat::Json);
        assert_eq!(ExportFormat::from_str("csv").unwrap(), ExportFormat::Csv);
        assert_eq!(
            ExportFormat::from_str("console").unwrap(),
            ExportFormat::Console
        );
    }

    #[test]
    fn rejects_unknown_names() {
        assert!(ExportFormat::from_str("xml").is_err());
        assert!(ExportFormat::from_str("JSON ").is_err());
        assert!(ExportFormat::from_str("").is_err());
    }

    #[test]
    fn displays_lowercase_names() {
        assert_eq!(ExportFormat::Json.to_string(), "json");
        assert_eq!(ExportFormat::Csv.to_string(), "csv");
        assert_eq!(ExportFormat::Console.to_string(), "console");
    }
}
