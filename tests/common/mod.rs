//! Shared helpers for integration tests

#![allow(dead_code)]

use chrono::{Datelike, Duration, NaiveDate, Utc};
use rcgen::{CertificateParams, DistinguishedName, DnType};
use std::path::{Path, PathBuf};

/// UTC calendar date `days` from today
pub fn days_from_today(days: i64) -> NaiveDate {
    Utc::now().date_naive() + Duration::days(days)
}

/// Self-signed certificate for `common_name` (omitted when `None`) expiring
/// at midnight UTC on `not_after`
pub fn self_signed(common_name: Option<&str>, not_after: NaiveDate) -> rcgen::Certificate {
    let mut params = CertificateParams::new(vec!["localhost".to_string()]);
    let mut dn = DistinguishedName::new();
    dn.push(DnType::CountryName, "GB");
    dn.push(DnType::OrganizationName, "Expiry Test Ltd");
    if let Some(cn) = common_name {
        dn.push(DnType::CommonName, cn);
    }
    params.distinguished_name = dn;
    params.not_after =
        rcgen::date_time_ymd(not_after.year(), not_after.month() as u8, not_after.day() as u8);
    rcgen::Certificate::from_params(params).expect("Failed to generate certificate")
}

/// Write `cert` as PEM into `dir`
pub fn write_pem(dir: &Path, name: &str, cert: &rcgen::Certificate) -> PathBuf {
    let path = dir.join(name);
    let pem = cert.serialize_pem().expect("Failed to serialize certificate");
    std::fs::write(&path, pem).expect("Failed to write certificate");
    path
}
