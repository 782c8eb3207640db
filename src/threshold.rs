//! Threshold range grammar and status evaluation.
//!
//! Ranges follow the conventional monitoring plugin grammar:
//!
//! - `10`: alert when the value is outside `[0, 10]`
//! - `10:`: alert when the value is below 10
//! - `~:10`: alert when the value is above 10 (`~` is negative infinity)
//! - `10:20`: alert when the value is outside `[10, 20]`
//! - `@10:20`: inverted, alert when the value is *inside* `[10, 20]`
//!
//! Ranges are parsed once, at argument-parse time, so a malformed expression
//! fails before any file or network I/O.

use crate::error::{CheckError, CheckResult};
use crate::status::{CheckOutcome, Metric, Status};
use std::fmt;
use std::str::FromStr;

/// A warning or critical range with an inside/outside alerting sense.
///
/// Bounds are inclusive; a value breaches an outside-sense range when it is
/// strictly below `low` or strictly above `high`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdRange {
    low: f64,
    high: f64,
    /// When set (`@` prefix), alert on values inside the range instead.
    inside: bool,
}

impl ThresholdRange {
    /// The default range `0:`, alerting only on negative values, so any
    /// non-negative result is OK unless the caller says otherwise.
    pub fn non_negative() -> Self {
        Self {
            low: 0.0,
            high: f64::INFINITY,
            inside: false,
        }
    }

    /// Whether `value` falls in the alerting region of this range.
    pub fn breaches(&self, value: f64) -> bool {
        let outside = value < self.low || value > self.high;
        if self.inside { !outside } else { outside }
    }
}

impl Default for ThresholdRange {
    fn default() -> Self {
        Self::non_negative()
    }
}

impl FromStr for ThresholdRange {
    type Err = CheckError;

    fn from_str(s: &str) -> CheckResult<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CheckError::threshold_parse(s, "empty range expression"));
        }

        let (inside, body) = match trimmed.strip_prefix('@') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let (low, high) = match body.split_once(':') {
            None => (0.0, parse_bound(s, body)?),
            Some((lo, hi)) => {
                let low = if lo.is_empty() {
                    0.0
                } else if lo == "~" {
                    f64::NEG_INFINITY
                } else {
                    parse_bound(s, lo)?
                };
                let high = if hi.is_empty() {
                    f64::INFINITY
                } else {
                    parse_bound(s, hi)?
                };
                (low, high)
            }
        };

        if low > high {
            return Err(CheckError::threshold_parse(
                s,
                "lower bound exceeds upper bound",
            ));
        }

        Ok(Self { low, high, inside })
    }
}

fn parse_bound(input: &str, bound: &str) -> CheckResult<f64> {
    bound
        .parse::<f64>()
        .ok()
        .filter(|v| !v.is_nan())
        .ok_or_else(|| CheckError::threshold_parse(input, format!("invalid bound '{bound}'")))
}

impl fmt::Display for ThresholdRange {
    /// Canonical form of the effective range. Re-parsing the output yields a
    /// range that classifies every value identically.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inside {
            write!(f, "@")?;
        }
        match (self.low == f64::NEG_INFINITY, self.high == f64::INFINITY) {
            (true, false) => write!(f, "~:{}", fmt_num(self.high)),
            (false, true) => write!(f, "{}:", fmt_num(self.low)),
            (true, true) => write!(f, "~:"),
            (false, false) => {
                if self.low == 0.0 {
                    write!(f, "{}", fmt_num(self.high))
                } else {
                    write!(f, "{}:{}", fmt_num(self.low), fmt_num(self.high))
                }
            }
        }
    }
}

/// Format a number without a trailing `.0` when it is integral.
pub fn fmt_num(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Classify an optional query result against the warning and critical ranges.
///
/// An absent value (no numeric result) is CRITICAL and emits no metric. For a
/// present value the critical range takes precedence over the warning range,
/// and a `result` metric is always emitted.
pub fn evaluate(
    value: Option<f64>,
    warning: ThresholdRange,
    critical: ThresholdRange,
) -> CheckOutcome {
    match value {
        None => CheckOutcome {
            status: Status::Critical,
            value: None,
            metric: None,
        },
        Some(v) => {
            let status = if critical.breaches(v) {
                Status::Critical
            } else if warning.breaches(v) {
                Status::Warning
            } else {
                Status::Ok
            };
            CheckOutcome {
                status,
                value: Some(v),
                metric: Some(Metric {
                    label: "result",
                    value: v,
                    warning,
                    critical,
                }),
            }
        }
    }
}
