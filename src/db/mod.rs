//! Database access: driver selection, read-only validation, and query
//! execution over a single short-lived connection.

pub mod driver;
pub mod executor;

pub use executor::execute;

use crate::error::{CheckError, CheckResult};

/// Enforce the read-only contract: the query text must be non-empty and,
/// after trimming leading whitespace, start case-insensitively with the
/// keyword `SELECT`. Checked before any connection is attempted; the
/// executor does not re-validate.
pub fn validate_select(sql: &str) -> CheckResult<()> {
    let trimmed = sql.trim_start().as_bytes();
    if trimmed.len() >= 6 && trimmed[..6].eq_ignore_ascii_case(b"select") {
        Ok(())
    } else {
        Err(CheckError::not_a_select(sql))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_allowed() {
        assert!(validate_select("SELECT COUNT(*) FROM test_data").is_ok());
    }

    #[test]
    fn test_select_case_insensitive() {
        assert!(validate_select("select 1").is_ok());
        assert!(validate_select("SeLeCt 1").is_ok());
    }

    #[test]
    fn test_leading_whitespace_trimmed() {
        assert!(validate_select("  \n\tSELECT 1").is_ok());
    }

    #[test]
    fn test_insert_rejected() {
        let err = validate_select("INSERT INTO users VALUES (1)").unwrap_err();
        assert!(matches!(err, CheckError::NotASelectQuery { .. }));
    }

    #[test]
    fn test_delete_rejected() {
        assert!(validate_select("DELETE FROM users").is_err());
    }

    #[test]
    fn test_empty_rejected() {
        assert!(validate_select("").is_err());
        assert!(validate_select("   ").is_err());
    }

    #[test]
    fn test_too_short_rejected() {
        assert!(validate_select("SEL").is_err());
    }
}
