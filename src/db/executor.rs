//! Query execution against a single short-lived connection.
//!
//! The executor opens one `AnyConnection`, prepares the statement, binds the
//! caller's placeholder values positionally, streams every returned row, and
//! reduces the result set to a single optional numeric value. The connection
//! is closed on every exit path, success or failure, before the result or
//! error is surfaced.
//!
//! Reduction policy: zero rows yields a numeric zero; otherwise the first
//! column of the last row processed wins, and a NULL or non-numeric value
//! there yields an absent result.

use crate::db::driver;
use crate::error::{CheckError, CheckResult};
use crate::target::TargetDescriptor;
use futures_util::StreamExt;
use sqlx::any::AnyRow;
use sqlx::{AnyConnection, Connection, Either, Row, Statement};
use std::sync::Once;
use tracing::{debug, warn};

static INSTALL_DRIVERS: Once = Once::new();

/// Execute `sql` against the target described by `target` and reduce the
/// result set to an optional numeric value.
///
/// Placeholder values are bound left to right to the statement's positional
/// markers. The supplied count is checked against the compiled statement's
/// marker count; a mismatch is an execution error.
pub async fn execute(
    target: &str,
    username: &str,
    password: &str,
    sql: &str,
    placeholders: &[String],
) -> CheckResult<Option<f64>> {
    let descriptor = TargetDescriptor::parse(target);
    let url = driver::connection_url(&descriptor, username, password)?;

    INSTALL_DRIVERS.call_once(sqlx::any::install_default_drivers);

    let mut conn = AnyConnection::connect(&url)
        .await
        .map_err(|e| CheckError::connection(e.to_string()))?;

    debug!(driver = %descriptor.driver, params = placeholders.len(), "connected, running query");

    let outcome = fetch_scalar(&mut conn, sql, placeholders).await;

    // The connection is released on every path, including prepare and
    // execution failures.
    if let Err(e) = conn.close().await {
        warn!(error = %e, "connection did not close cleanly");
    }

    outcome
}

async fn fetch_scalar(
    conn: &mut AnyConnection,
    sql: &str,
    placeholders: &[String],
) -> CheckResult<Option<f64>> {
    use sqlx::Executor;

    // Compile the statement first so syntax errors surface as prepare
    // failures rather than execution failures.
    let statement = conn
        .prepare(sql)
        .await
        .map_err(|e| CheckError::prepare(e.to_string()))?;

    // SQLite binds missing parameters as NULL rather than rejecting them, so
    // the marker count from the compiled statement is checked here instead of
    // trusting every backend to fail.
    let expected = match statement.parameters() {
        Some(Either::Left(types)) => Some(types.len()),
        Some(Either::Right(count)) => Some(count),
        None => None,
    };
    if let Some(expected) = expected {
        if expected != placeholders.len() {
            return Err(CheckError::execution(format!(
                "query expects {expected} placeholder values, {} provided",
                placeholders.len()
            )));
        }
    }

    let mut query = sqlx::query(sql);
    for value in placeholders {
        query = query.bind(value.as_str());
    }

    let mut rows = query.fetch(&mut *conn);

    // Zero rows reports as a numeric zero, not absent.
    let mut result = Some(0.0);
    while let Some(row) = rows.next().await {
        let row = row.map_err(|e| CheckError::execution(e.to_string()))?;
        result = scalar_value(&row);
    }

    Ok(result)
}

/// The first column of a row as a number, if it is representable as one.
/// NULL, text that does not parse as a number, and rows with no columns all
/// come back as `None`.
fn scalar_value(row: &AnyRow) -> Option<f64> {
    if let Ok(v) = row.try_get::<f64, _>(0) {
        return Some(v);
    }
    if let Ok(v) = row.try_get::<i64, _>(0) {
        return Some(v as f64);
    }
    if let Ok(v) = row.try_get::<i32, _>(0) {
        return Some(v as f64);
    }
    if let Ok(Some(s)) = row.try_get::<Option<String>, _>(0) {
        return s.trim().parse::<f64>().ok();
    }
    None
}
