//! Monitoring status levels, metric records, and plugin output rendering.

use crate::threshold::{ThresholdRange, fmt_num};
use std::fmt;

/// Service name prefix on the plugin output line.
pub const SERVICE: &str = "DBQUERY";

/// Monitoring status level, ordered by severity of exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl Status {
    /// Conventional monitoring exit code for this status.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Ok => 0,
            Self::Warning => 1,
            Self::Critical => 2,
            Self::Unknown => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Warning => "WARNING",
            Self::Critical => "CRITICAL",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A performance-data record for time-series ingestion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metric {
    pub label: &'static str,
    pub value: f64,
    pub warning: ThresholdRange,
    pub critical: ThresholdRange,
}

impl Metric {
    /// Render the perfdata token, e.g. `'result'=5;200:;100:`.
    pub fn perfdata(&self) -> String {
        format!(
            "'{}'={};{};{}",
            self.label,
            fmt_num(self.value),
            self.warning,
            self.critical
        )
    }
}

/// The final result of one probe invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    pub status: Status,
    /// The reduced query value; `None` renders as the sentinel "undefined".
    pub value: Option<f64>,
    pub metric: Option<Metric>,
}

impl CheckOutcome {
    /// The full plugin output line: status text plus optional perfdata.
    pub fn output_line(&self) -> String {
        let value = match self.value {
            Some(v) => fmt_num(v),
            None => "undefined".to_string(),
        };
        match &self.metric {
            Some(metric) => format!(
                "{SERVICE} {} - result: {value} |{}",
                self.status,
                metric.perfdata()
            ),
            None => format!("{SERVICE} {} - result: {value}", self.status),
        }
    }
}
