//! Certificate parsing
//!
//! Extracts the fields of an X.509 certificate that the expiry report needs,
//! using x509-parser.

use crate::models::{CertificateInfo, NameField, NOT_AFTER_FORMAT};
use crate::utils::CertificateError;
use chrono::{DateTime, Utc};
use x509_parser::der_parser::asn1_rs::Tag;
use x509_parser::der_parser::oid::Oid;
use x509_parser::objects::{oid2abbrev, oid_registry};
use x509_parser::oid_registry::OID_PKCS9_EMAIL_ADDRESS;
use x509_parser::prelude::*;

/// Certificate checker and parser
pub struct CertificateChecker;

impl CertificateChecker {
    /// Create a new certificate checker
    pub fn new() -> Self {
        Self
    }

    /// Parse a single DER-encoded certificate
    pub fn parse_certificate(&self, der: &[u8]) -> Result<CertificateInfo, CertificateError> {
        let (_, cert) =
            X509Certificate::from_der(der).map_err(|e| CertificateError::ParseError {
                message: format!("Failed to parse certificate: {:?}", e),
            })?;

        let subject = name_fields(cert.subject());
        let issuer = name_fields(cert.issuer());
        let not_after = asn1_time_to_datetime(cert.validity().not_after)?
            .format(NOT_AFTER_FORMAT)
            .to_string();

        tracing::debug!(
            subject = %cert.subject(),
            issuer = %cert.issuer(),
            %not_after,
            "Parsed certificate"
        );

        Ok(CertificateInfo {
            subject,
            issuer,
            not_after,
        })
    }
}

impl Default for CertificateChecker {
    fn default() -> Self {
        Self::new()
    }
}

/// Flatten a distinguished name into (short code, value) pairs, in encoded order
fn name_fields(name: &X509Name) -> Vec<NameField> {
    name.iter_attributes()
        .map(|attr| {
            let value = attr.attr_value();
            NameField::new(short_code(attr.attr_type()), decode_value(value.tag(), value.data))
        })
        .collect()
}

/// OpenSSL-style short name for an attribute type, or the dotted OID
fn short_code(oid: &Oid) -> String {
    // The registry calls this one "Email"
    if *oid == OID_PKCS9_EMAIL_ADDRESS {
        return "emailAddress".to_string();
    }
    oid2abbrev(oid, oid_registry())
        .map(str::to_string)
        .unwrap_or_else(|_| oid.to_id_string())
}

/// Re-encode UCS-2/UCS-4 string values as UTF-8.
///
/// Other string types are passed through; bytes that do not decode are kept
/// raw so the formatter's per-field fallback applies.
fn decode_value(tag: Tag, data: &[u8]) -> Vec<u8> {
    let decoded = match tag {
        Tag::BmpString if data.len() % 2 == 0 => {
            let units = data.chunks_exact(2).map(|c| u16::from_be_bytes([c[0], c[1]]));
            char::decode_utf16(units).collect::<Result<String, _>>().ok()
        }
        Tag::UniversalString if data.len() % 4 == 0 => data
            .chunks_exact(4)
            .map(|c| char::from_u32(u32::from_be_bytes([c[0], c[1], c[2], c[3]])))
            .collect::<Option<String>>(),
        _ => None,
    };
    decoded.map(String::into_bytes).unwrap_or_else(|| data.to_vec())
}

/// Convert ASN.1 time to chrono DateTime
fn asn1_time_to_datetime(time: ASN1Time) -> Result<DateTime<Utc>, CertificateError> {
    DateTime::from_timestamp(time.timestamp(), 0).ok_or_else(|| CertificateError::ParseError {
        message: "Invalid timestamp in certificate".to_string(),
    })
}
