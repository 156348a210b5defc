//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing::debug;

use sizp_report::config::{ConfigLoader, OutputStyle, ReportConfig};
use sizp_report::error::ReportResult;

/// Configuration file looked up under the base directory when `--config`
/// is not given.
const DEFAULT_CONFIG: &str = "config/report.yaml";

#[derive(Debug, Parser)]
#[command(
    name = "sizp-report",
    version,
    about = "Convert a payroll workbook into a СИоЗП pension fund XML report"
)]
pub struct Cli {
    /// YAML configuration file (default: <BASE_DIR>/config/report.yaml if present).
    #[arg(long, value_name = "PATH", env = "SIZP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory that input and output directories are resolved against.
    #[arg(long = "base-dir", value_name = "DIR", default_value = ".")]
    pub base_dir: PathBuf,

    /// Workbook file name inside the input directory.
    #[arg(long, value_name = "FILE")]
    pub report: Option<String>,

    /// Directory receiving the XML report.
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Write the XML without indentation.
    #[arg(long)]
    pub compact: bool,

    /// Append logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Builds the run configuration: file, then environment, then flags.
    pub fn load_config(&self) -> ReportResult<ReportConfig> {
        let loader = match self.config_path() {
            Some(path) => ConfigLoader::load(path)?,
            None => ConfigLoader::defaults(),
        };
        let mut config = loader.with_env_overrides()?.into_config();

        if let Some(report) = &self.report {
            config.report = report.clone();
        }
        if let Some(output_dir) = &self.output_dir {
            config.output_dir = output_dir.clone();
        }
        if self.compact {
            config.output_style = OutputStyle::Compact;
        }
        debug!(?config, "Resolved configuration");
        Ok(config)
    }

    fn config_path(&self) -> Option<PathBuf> {
        match &self.config {
            Some(path) => Some(path.clone()),
            None => Some(self.base_dir.join(DEFAULT_CONFIG)).filter(|p| p.exists()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_are_parsed() {
        let cli = Cli::parse_from([
            "sizp-report",
            "--base-dir",
            "/data",
            "--report",
            "march.xlsx",
            "--compact",
            "-vv",
        ]);
        assert_eq!(cli.base_dir, PathBuf::from("/data"));
        assert_eq!(cli.report.as_deref(), Some("march.xlsx"));
        assert!(cli.compact);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.yaml");
        std::fs::write(&path, "report: from_file.xlsx\ncode_to: \"047000\"\n").unwrap();

        let cli = Cli::parse_from([
            "sizp-report",
            "--config",
            path.to_str().unwrap(),
            "--report",
            "from_flag.xlsx",
            "--compact",
        ]);
        let config = cli.load_config().unwrap();
        assert_eq!(config.report, "from_flag.xlsx");
        assert_eq!(config.code_to, "047000");
        assert_eq!(config.output_style, OutputStyle::Compact);
    }

    #[test]
    fn test_missing_default_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::parse_from(["sizp-report", "--base-dir", dir.path().to_str().unwrap()]);
        assert!(cli.config_path().is_none());
    }
}
