//! Configuration for the database query probe.
//!
//! All settings come from CLI arguments with environment-variable fallbacks.
//! Thresholds are parsed into [`ThresholdRange`] at argument time, so a
//! malformed range expression fails before any file or network I/O happens.

use crate::threshold::ThresholdRange;
use clap::Parser;
use std::path::PathBuf;

/// File name of the catalog colocated with the executable, used when
/// `--catalog` is not given.
pub const DEFAULT_CATALOG_FILE: &str = "databases.toml";

/// Configuration for one probe invocation.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "check_dbquery",
    about = "Run a cataloged SQL query and grade the scalar result against warning/critical thresholds",
    version,
    author
)]
pub struct Config {
    /// Database identifier to look up in the catalog.
    #[arg(short, long, value_name = "NAME", env = "DBQUERY_DATABASE")]
    pub database: String,

    /// Query identifier to look up within the database entry.
    #[arg(short, long, value_name = "NAME", env = "DBQUERY_QUERY")]
    pub query: String,

    /// Warning threshold range (e.g. "200:", "~:10", "10:20", "@10:20").
    #[arg(short, long, value_name = "RANGE", default_value = "0:")]
    pub warning: ThresholdRange,

    /// Critical threshold range (same grammar as --warning).
    #[arg(short, long, value_name = "RANGE", default_value = "0:")]
    pub critical: ThresholdRange,

    /// Path to the connection catalog. Defaults to a databases.toml next to
    /// the executable.
    #[arg(long, value_name = "PATH", env = "DBQUERY_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Ordered placeholder values bound positionally into the query.
    #[arg(value_name = "PLACEHOLDER")]
    pub placeholders: Vec<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "DBQUERY_LOG_LEVEL")]
    pub log_level: String,

    /// Enable JSON logging format
    #[arg(long, env = "DBQUERY_JSON_LOGS")]
    pub json_logs: bool,

    /// Enable logging output (disabled by default so stdout stays a clean
    /// plugin status line; logs go to stderr)
    #[arg(long, env = "DBQUERY_ENABLE_LOGS")]
    pub enable_logs: bool,
}

impl Config {
    /// The catalog path: the explicit `--catalog` value, or the default file
    /// next to the executable, or the default file in the working directory
    /// when the executable path cannot be determined.
    pub fn catalog_path(&self) -> PathBuf {
        if let Some(path) = &self.catalog {
            return path.clone();
        }
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_CATALOG_FILE)))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_FILE))
    }

    /// Create a configuration for a (database, query) pair with default
    /// thresholds (useful for testing).
    pub fn for_check(database: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            query: query.into(),
            warning: ThresholdRange::non_negative(),
            critical: ThresholdRange::non_negative(),
            catalog: None,
            placeholders: Vec::new(),
            log_level: "info".to_string(),
            json_logs: false,
            enable_logs: false,
        }
    }
}
