//! Target descriptor construction.
//!
//! A target descriptor is a driver-qualified connection string of the form
//! `driver` or `driver:key=value;key=value`. The parameter mapping is
//! unordered, so pairs are emitted in sorted key order to keep the builder a
//! pure function of its inputs.

use std::collections::BTreeMap;

/// Build a target descriptor from a driver identifier and connection
/// parameters. With no parameters the bare driver identifier is returned,
/// without a trailing colon.
pub fn build(driver: &str, params: &BTreeMap<String, String>) -> String {
    if params.is_empty() {
        return driver.to_string();
    }
    let pairs: Vec<String> = params.iter().map(|(k, v)| format!("{k}={v}")).collect();
    format!("{driver}:{}", pairs.join(";"))
}

/// A target descriptor split back into its driver identifier and parameter
/// pairs, for the driver layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetDescriptor {
    pub driver: String,
    pub params: BTreeMap<String, String>,
}

impl TargetDescriptor {
    /// Split a descriptor produced by [`build`]. Pairs without an `=` are
    /// kept with an empty value.
    pub fn parse(descriptor: &str) -> Self {
        let (driver, rest) = match descriptor.split_once(':') {
            Some((d, r)) => (d, Some(r)),
            None => (descriptor, None),
        };
        let mut params = BTreeMap::new();
        if let Some(rest) = rest {
            for pair in rest.split(';').filter(|p| !p.is_empty()) {
                match pair.split_once('=') {
                    Some((k, v)) => params.insert(k.to_string(), v.to_string()),
                    None => params.insert(pair.to_string(), String::new()),
                };
            }
        }
        Self {
            driver: driver.to_string(),
            params,
        }
    }
}
