//! Configuration loading and management for the report generator.
//!
//! Configuration comes from built-in defaults, an optional YAML file and
//! environment variables, and is passed explicitly to every stage that
//! needs it.
//!
//! # Example
//!
//! ```no_run
//! use sizp_report::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/report.yaml").unwrap().into_config();
//! println!("Output goes to {}", config.output_dir.display());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DEFAULT_ALLOW_CATEGORY_CODE, OutputStyle, ReportConfig};
