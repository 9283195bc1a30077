//! Certificate file reading
//!
//! Loads a PEM-encoded certificate from disk and extracts its DER bytes.

use crate::checks::CertificateChecker;
use crate::models::CertificateInfo;
use crate::utils::CertFileError;
use std::path::Path;

/// Read the first CERTIFICATE block of a PEM file, returning its DER bytes
pub fn read_certificate(path: &Path) -> Result<Vec<u8>, CertFileError> {
    let text = std::fs::read_to_string(path).map_err(|e| CertFileError::FileReadError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "Read certificate file");

    certificate_from_pem(&text, path)
}

/// Extract the first CERTIFICATE block from PEM text
pub fn certificate_from_pem(text: &str, path: &Path) -> Result<Vec<u8>, CertFileError> {
    let pems = ::pem::parse_many(text).map_err(|e| CertFileError::InvalidPem {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    pems.into_iter()
        .find(|p| p.tag() == "CERTIFICATE")
        .map(|p| p.into_contents())
        .ok_or_else(|| CertFileError::NoCertificate {
            path: path.display().to_string(),
        })
}

/// Read and parse the certificate stored in a PEM file
pub fn load_certificate(path: &Path) -> Result<CertificateInfo, CertFileError> {
    let der = read_certificate(path)?;
    CertificateChecker::new()
        .parse_certificate(&der)
        .map_err(|e| CertFileError::InvalidCertificate {
            path: path.display().to_string(),
            message: e.to_string(),
        })
}
