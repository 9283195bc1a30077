//! Data models for ssl-expiry
//!
//! This module contains the data structures used throughout the application.

pub mod certificate;
pub mod expiry;

pub use certificate::{label_for, CertificateInfo, NameField, NOT_AFTER_FORMAT};
pub use expiry::{ExpiryThresholds, ExpiryVerdict, Severity};
