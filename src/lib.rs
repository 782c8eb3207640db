//! Database query probe library.
//!
//! Looks up a named database and query in a connection catalog, executes the
//! query over SQLite, PostgreSQL, or MySQL, reduces the result set to one
//! optional numeric value, and classifies it against warning/critical
//! threshold ranges as a monitoring status.

pub mod catalog;
pub mod check;
pub mod config;
pub mod db;
pub mod error;
pub mod status;
pub mod target;
pub mod threshold;

pub use check::run_check;
pub use config::Config;
pub use error::CheckError;
pub use status::{CheckOutcome, Status};
