//! Error types for the СИоЗП report generator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure a report run can hit: field normalization, field
//! constraints, whole-sheet validation, workbook layout, configuration and
//! output writing.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// One rejected row inside a [`ReportError::BatchValidation`].
#[derive(Debug)]
pub struct RowFailure {
    /// 1-based row number in the worksheet.
    pub row: usize,
    /// Why the row was rejected.
    pub error: ReportError,
}

impl fmt::Display for RowFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}: {}", self.row, self.error)
    }
}

/// The main error type for the report generator.
///
/// # Example
///
/// ```
/// use sizp_report::error::ReportError;
///
/// let error = ReportError::UnknownMonth {
///     value: "Мартобрь".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown month name: Мартобрь");
/// ```
#[derive(Debug, Error)]
pub enum ReportError {
    /// A month cell held a name that is not a Russian month.
    #[error("Unknown month name: {value}")]
    UnknownMonth {
        /// The raw cell value.
        value: String,
    },

    /// An experience string was not of the form `NN лет NN мес`.
    #[error("Malformed experience '{value}': {message}")]
    MalformedExperience {
        /// The raw cell value.
        value: String,
        /// What was wrong with it.
        message: String,
    },

    /// A label is not part of its fixed label set.
    #[error("Unknown {set} label: '{label}'")]
    UnknownLabel {
        /// The raw label.
        label: String,
        /// The label set that was searched.
        set: &'static str,
    },

    /// A full name could not be decomposed.
    #[error("Invalid full name: '{value}'")]
    InvalidName {
        /// The raw cell value.
        value: String,
    },

    /// A cell could not be read as the type its field requires.
    #[error("Invalid value for field '{field}': {message}")]
    InvalidCell {
        /// The field name.
        field: &'static str,
        /// A description of the problem.
        message: String,
    },

    /// A canonical field value broke its declared constraint.
    #[error("Field '{field}' value {value} violates constraint: {constraint}")]
    ConstraintViolation {
        /// The field name.
        field: &'static str,
        /// The offending value.
        value: String,
        /// The constraint that was broken.
        constraint: String,
    },

    /// One or more rows of a sheet failed validation.
    #[error("{} invalid row(s) in sheet '{sheet}': {}", .failures.len(), summarize(.failures))]
    BatchValidation {
        /// The worksheet name.
        sheet: String,
        /// Every rejected row, in sheet order.
        failures: Vec<RowFailure>,
    },

    /// The workbook does not contain an expected sheet.
    #[error("Worksheet not found: {sheet}")]
    MissingSheet {
        /// The missing worksheet name.
        sheet: String,
    },

    /// A data row has fewer columns than its record type declares.
    #[error("Sheet '{sheet}' row {row} has {found} column(s), expected {expected}")]
    ShortRow {
        /// The worksheet name.
        sheet: String,
        /// 1-based row number.
        row: usize,
        /// Declared column count.
        expected: usize,
        /// Actual column count.
        found: usize,
    },

    /// The workbook could not be opened or read.
    #[error("Failed to read workbook '{path}': {message}")]
    Workbook {
        /// The workbook path.
        path: PathBuf,
        /// The reader's error message.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration override held an unusable value.
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidConfigValue {
        /// The configuration key or environment variable.
        key: String,
        /// A description of the problem.
        message: String,
    },

    /// A filesystem operation failed.
    #[error("I/O error on '{path}': {source}")]
    Io {
        /// The path being accessed.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The XML writer failed.
    #[error("Failed to write XML: {message}")]
    XmlWrite {
        /// The writer's error message.
        message: String,
    },
}

fn summarize(failures: &[RowFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ReportError {
    /// Builds an [`ReportError::Io`] for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// A type alias for Results that return ReportError.
pub type ReportResult<T> = Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_month_displays_value() {
        let error = ReportError::UnknownMonth {
            value: "Мартобрь".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown month name: Мартобрь");
    }

    #[test]
    fn test_unknown_label_displays_set_and_label() {
        let error = ReportError::UnknownLabel {
            label: "совместительство".to_string(),
            set: "employment condition",
        };
        assert_eq!(
            error.to_string(),
            "Unknown employment condition label: 'совместительство'"
        );
    }

    #[test]
    fn test_constraint_violation_displays_field_and_constraint() {
        let error = ReportError::ConstraintViolation {
            field: "okfs",
            value: "15".to_string(),
            constraint: "12 <= value <= 14".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Field 'okfs' value 15 violates constraint: 12 <= value <= 14"
        );
    }

    #[test]
    fn test_batch_validation_lists_every_row() {
        let error = ReportError::BatchValidation {
            sheet: "Раздел 2".to_string(),
            failures: vec![
                RowFailure {
                    row: 5,
                    error: ReportError::InvalidCell {
                        field: "year",
                        message: "value is required".to_string(),
                    },
                },
                RowFailure {
                    row: 7,
                    error: ReportError::InvalidCell {
                        field: "okogu",
                        message: "expected an integer, got 'abc'".to_string(),
                    },
                },
            ],
        };
        let text = error.to_string();
        assert!(text.starts_with("2 invalid row(s) in sheet 'Раздел 2'"));
        assert!(text.contains("row 5: Invalid value for field 'year'"));
        assert!(text.contains("row 7: Invalid value for field 'okogu'"));
    }

    #[test]
    fn test_short_row_displays_counts() {
        let error = ReportError::ShortRow {
            sheet: "Раздел 3".to_string(),
            row: 4,
            expected: 7,
            found: 5,
        };
        assert_eq!(
            error.to_string(),
            "Sheet 'Раздел 3' row 4 has 5 column(s), expected 7"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = ReportError::ConfigNotFound {
            path: "/missing/report.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/report.yaml"
        );
    }

    #[test]
    fn test_io_error_keeps_source() {
        let error = ReportError::io(
            "/tmp/out.xml",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(std::error::Error::source(&error).is_some());
        assert!(error.to_string().contains("/tmp/out.xml"));
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ReportError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_missing_sheet() -> ReportResult<()> {
            Err(ReportError::MissingSheet {
                sheet: "Раздел 1".to_string(),
            })
        }

        fn propagates_error() -> ReportResult<()> {
            returns_missing_sheet()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
