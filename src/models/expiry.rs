//! Expiry classification

use chrono::NaiveDate;
use serde::Deserialize;
use std::fmt;

/// Severity tier of a certificate's remaining validity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Critical,
    Warning,
    Info,
    Expired,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Critical => write!(f, "CRITICAL"),
            Severity::Warning => write!(f, "WARNING"),
            Severity::Info => write!(f, "INFO"),
            Severity::Expired => write!(f, "Expired"),
        }
    }
}

/// Day counts at or below which a certificate is CRITICAL or WARNING
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ExpiryThresholds {
    #[serde(default = "default_critical_days")]
    pub critical_days: i64,
    #[serde(default = "default_warning_days")]
    pub warning_days: i64,
}

fn default_critical_days() -> i64 {
    15
}

fn default_warning_days() -> i64 {
    30
}

impl Default for ExpiryThresholds {
    fn default() -> Self {
        Self {
            critical_days: default_critical_days(),
            warning_days: default_warning_days(),
        }
    }
}

/// Days remaining and the resulting severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryVerdict {
    /// Whole days from today to the expiry date (zero or negative once expired)
    pub days_remaining: i64,
    pub severity: Severity,
}

impl ExpiryVerdict {
    /// Classify an expiry date relative to `today`.
    ///
    /// Both arguments are calendar dates, so the difference is always a
    /// whole number of days.
    pub fn classify(expiry: NaiveDate, today: NaiveDate, thresholds: &ExpiryThresholds) -> Self {
        let days_remaining = expiry.signed_duration_since(today).num_days();

        let severity = if expiry <= today {
            Severity::Expired
        } else if days_remaining <= thresholds.critical_days {
            Severity::Critical
        } else if days_remaining <= thresholds.warning_days {
            Severity::Warning
        } else {
            Severity::Info
        };

        Self {
            days_remaining,
            severity,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.severity == Severity::Expired
    }
}
