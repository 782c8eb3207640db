//! The probe pipeline: catalog load, lookup, validation, execution, and
//! threshold classification, in strict forward sequence.

use crate::catalog::Catalog;
use crate::config::Config;
use crate::db;
use crate::error::{CheckError, CheckResult};
use crate::status::CheckOutcome;
use crate::{target, threshold};
use tracing::{debug, info};

/// Run one complete check and return the classified outcome.
///
/// Every error is terminal; the caller reports it as CRITICAL and exits.
pub async fn run_check(config: &Config) -> CheckResult<CheckOutcome> {
    let catalog_path = config.catalog_path();
    debug!(path = %catalog_path.display(), "loading catalog");
    let catalog = Catalog::load(&catalog_path)?;

    let entry = catalog
        .database(&config.database)
        .ok_or_else(|| CheckError::database_not_found(&config.database))?;
    let sql = entry
        .query(&config.query)
        .ok_or_else(|| CheckError::query_not_found(&config.database, &config.query))?;

    // Read-only guard and credential presence run before any connection.
    db::validate_select(sql)?;
    let fields = entry.connection_fields(&config.database)?;

    let target = target::build(fields.driver, &entry.parameters);
    debug!(
        database = %config.database,
        query = %config.query,
        target = %target,
        "executing query"
    );

    let value = db::execute(
        &target,
        fields.username,
        fields.password,
        sql,
        &config.placeholders,
    )
    .await?;

    let outcome = threshold::evaluate(value, config.warning, config.critical);
    info!(
        status = %outcome.status,
        value = ?outcome.value,
        "check complete"
    );
    Ok(outcome)
}
