//! Certificate information types

use crate::utils::CertificateError;
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;

/// Format of the not-after timestamp carried by [`CertificateInfo`]
pub const NOT_AFTER_FORMAT: &str = "%Y%m%d%H%M%SZ";

/// Short attribute codes and their display labels
const NAME_LABELS: [(&str, &str); 6] = [
    ("C", "Country Name"),
    ("ST", "State Or Province Name"),
    ("L", "Locality Name"),
    ("O", "Organization Name"),
    ("OU", "Organizational Unit Name"),
    ("CN", "Common Name"),
];

/// Look up the display label for a short attribute code
pub fn label_for(code: &str) -> Option<&'static str> {
    NAME_LABELS
        .iter()
        .find(|(short, _)| *short == code)
        .map(|(_, label)| *label)
}

/// One attribute of a distinguished name, kept as raw bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameField {
    /// Short attribute code (`CN`, `O`, ...) or dotted OID
    pub code: Vec<u8>,
    /// Raw attribute value
    pub value: Vec<u8>,
}

impl NameField {
    pub fn new(code: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            code: code.into(),
            value: value.into(),
        }
    }

    /// Render as `<Label> : <value>`.
    ///
    /// Falls back to the raw code as label when the code is unmapped or
    /// when either side is not valid UTF-8.
    pub fn render(&self) -> String {
        match (
            std::str::from_utf8(&self.code),
            std::str::from_utf8(&self.value),
        ) {
            (Ok(code), Ok(value)) => {
                format!("{} : {}", label_for(code).unwrap_or(code), value)
            }
            _ => format!(
                "{} : {}",
                String::from_utf8_lossy(&self.code),
                String::from_utf8_lossy(&self.value)
            ),
        }
    }
}

impl fmt::Display for NameField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// Certificate details needed for the expiry report
#[derive(Debug, Clone)]
pub struct CertificateInfo {
    /// Subject attributes in encoded order
    pub subject: Vec<NameField>,
    /// Issuer attributes in encoded order
    pub issuer: Vec<NameField>,
    /// Not valid after, as `YYYYMMDDHHMMSSZ` (UTC)
    pub not_after: String,
}

impl CertificateInfo {
    /// The first common name of the subject
    pub fn common_name(&self) -> Result<String, CertificateError> {
        self.subject
            .iter()
            .find(|field| field.code == b"CN")
            .map(|field| String::from_utf8_lossy(&field.value).into_owned())
            .ok_or_else(|| CertificateError::MissingField {
                field: "commonName".to_string(),
            })
    }

    /// Parse the not-after timestamp
    pub fn expiry(&self) -> Result<NaiveDateTime, CertificateError> {
        NaiveDateTime::parse_from_str(&self.not_after, NOT_AFTER_FORMAT).map_err(|e| {
            CertificateError::InvalidExpiryDate {
                value: self.not_after.clone(),
                message: e.to_string(),
            }
        })
    }

    /// Calendar date of expiry (UTC)
    pub fn expiry_date(&self) -> Result<NaiveDate, CertificateError> {
        self.expiry().map(|dt| dt.date())
    }
}
