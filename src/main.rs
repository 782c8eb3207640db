//! check_dbquery - Main entry point.
//!
//! Runs one cataloged SQL query, classifies the scalar result against
//! warning/critical thresholds, prints a monitoring status line with
//! performance data, and exits with the matching status code.

use check_dbquery::config::Config;
use check_dbquery::run_check;
use check_dbquery::status::{SERVICE, Status};
use clap::Parser;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the tracing subscriber for logging.
///
/// Logs always go to stderr: stdout is reserved for the plugin status line.
fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if config.json_logs {
        subscriber
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = Config::parse();

    if config.enable_logs {
        init_tracing(&config);
    }

    let exit_code = match run_check(&config).await {
        Ok(outcome) => {
            println!("{}", outcome.output_line());
            outcome.status.exit_code()
        }
        Err(err) => {
            println!("{SERVICE} {} - {err}", Status::Critical);
            error!(error = %err, "check failed");
            Status::Critical.exit_code()
        }
    };

    std::process::exit(exit_code);
}
