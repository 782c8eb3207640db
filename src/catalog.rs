//! Connection catalog loading and lookup.
//!
//! The catalog is a TOML document mapping database identifiers to connection
//! definitions: a driver identifier, an unordered set of connection
//! parameters, credentials, and a set of named SQL queries. It is parsed once
//! per invocation and read-only afterwards.
//!
//! Credential-ish fields are deserialized as `Option<String>` so that a field
//! which is present-but-empty (`password = ""`) stays distinguishable from a
//! field that is absent entirely; the absence check happens in
//! [`DatabaseEntry::connection_fields`], not at parse time.

use crate::error::{CheckError, CheckResult};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// The parsed connection catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    databases: BTreeMap<String, DatabaseEntry>,
}

/// One configured database: driver, connection parameters, credentials, and
/// named queries.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseEntry {
    pub driver: Option<String>,
    pub username: Option<String>,
    /// May be empty; an empty password is legal and distinct from absent.
    pub password: Option<String>,
    #[serde(default)]
    pub parameters: BTreeMap<String, String>,
    #[serde(default)]
    pub queries: BTreeMap<String, String>,
}

/// The resolved driver/username/password triple, borrowed from an entry that
/// passed the field-presence check.
#[derive(Debug, Clone, Copy)]
pub struct ConnectionFields<'a> {
    pub driver: &'a str,
    pub username: &'a str,
    pub password: &'a str,
}

impl Catalog {
    /// Load and parse the catalog file.
    ///
    /// A missing or unreadable path is `ConfigNotFound`; a syntactically
    /// invalid document is `ConfigParse`.
    pub fn load(path: &Path) -> CheckResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| CheckError::config_not_found(path.display().to_string(), e.to_string()))?;
        toml::from_str(&text)
            .map_err(|e| CheckError::config_parse(path.display().to_string(), e.to_string()))
    }

    /// Look up a database entry by exact identifier.
    pub fn database(&self, name: &str) -> Option<&DatabaseEntry> {
        self.databases.get(name)
    }
}

impl DatabaseEntry {
    /// Look up a query text by exact identifier.
    pub fn query(&self, name: &str) -> Option<&str> {
        self.queries.get(name).map(String::as_str)
    }

    /// Validate that the driver, username, and password fields are all
    /// present (empty strings are fine) and return them.
    pub fn connection_fields(&self, database: &str) -> CheckResult<ConnectionFields<'_>> {
        let driver = self
            .driver
            .as_deref()
            .ok_or_else(|| CheckError::missing_field(database, "driver"))?;
        let username = self
            .username
            .as_deref()
            .ok_or_else(|| CheckError::missing_field(database, "username"))?;
        let password = self
            .password
            .as_deref()
            .ok_or_else(|| CheckError::missing_field(database, "password"))?;
        Ok(ConnectionFields {
            driver,
            username,
            password,
        })
    }
}
