//! Configuration types for report generation.
//!
//! These are deserialized from the YAML configuration file; every field
//! has a default so a partial file (or none at all) is valid.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

/// Staff category codes (ККП) the report accepts.
pub const DEFAULT_ALLOW_CATEGORY_CODE: [i64; 18] = [
    201, 221, 291, 211, 232, 233, 242, 243, 261, 401, 431, 411, 421, 501, 311, 281, 100, 600,
];

/// How the XML document is laid out on disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputStyle {
    /// Indented with tabs, one element per line.
    #[default]
    Pretty,
    /// No whitespace between elements.
    Compact,
}

impl FromStr for OutputStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            other => Err(format!("expected 'pretty' or 'compact', got '{other}'")),
        }
    }
}

/// Settings for one report run.
///
/// # Example
///
/// ```
/// use sizp_report::config::ReportConfig;
///
/// let config = ReportConfig::default();
/// assert_eq!(config.report, "example.xlsx");
/// assert!(config.is_allowed_category(600));
/// assert!(!config.is_allowed_category(999));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Workbook file name inside `input_dir`.
    pub report: String,
    /// Directory holding the workbook, relative to the base directory.
    pub input_dir: PathBuf,
    /// Directory receiving the XML, relative to the base directory.
    pub output_dir: PathBuf,
    /// Receiving pension fund office code (`КодТО`), part of the file name.
    pub code_to: String,
    /// Organization registration number, part of the file name.
    pub reg_number: String,
    /// Accepted staff category codes.
    pub allow_category_code: Vec<i64>,
    /// Layout of the written XML.
    pub output_style: OutputStyle,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            report: "example.xlsx".to_string(),
            input_dir: PathBuf::from("input"),
            output_dir: PathBuf::from("output"),
            code_to: "201000".to_string(),
            reg_number: "034012008689".to_string(),
            allow_category_code: DEFAULT_ALLOW_CATEGORY_CODE.to_vec(),
            output_style: OutputStyle::default(),
        }
    }
}

impl ReportConfig {
    /// Full path of the input workbook.
    pub fn report_path(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.input_dir).join(&self.report)
    }

    /// Full path of the output directory.
    pub fn output_path(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.output_dir)
    }

    /// Returns true if `code` is an accepted staff category code.
    pub fn is_allowed_category(&self, code: i64) -> bool {
        self.allow_category_code.contains(&code)
    }
}
