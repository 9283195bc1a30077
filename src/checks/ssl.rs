//! SSL/TLS certificate retrieval
//!
//! Performs a TLS handshake with SNI set to the target host and returns the
//! leaf certificate the server presented. Certificates are not validated, so
//! expired and self-signed certificates can still be reported.

use crate::checks::TcpChecker;
use crate::config::SslSettings;
use crate::utils::{SslError, ToolkitError};
use rustls::client::danger::{HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier};
use rustls::pki_types::{CertificateDer, ServerName, UnixTime};
use rustls::{ClientConfig, DigitallySignedStruct, Error as RustlsError, SignatureScheme};
use std::sync::Arc;
use tokio::io::AsyncWriteExt;

/// A certificate verifier that accepts any certificate.
#[derive(Debug)]
struct AcceptAnyCertVerifier;

impl ServerCertVerifier for AcceptAnyCertVerifier {
    fn verify_server_cert(
        &self,
        _end_entity: &CertificateDer<'_>,
        _intermediates: &[CertificateDer<'_>],
        _server_name: &ServerName<'_>,
        _ocsp_response: &[u8],
        _now: UnixTime,
    ) -> Result<ServerCertVerified, RustlsError> {
        Ok(ServerCertVerified::assertion())
    }

    fn verify_tls12_signature(
        &self,
        _message: &[u8],
        _cert: &CertificateDer<'_>,
        _dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, RustlsError> {
        Ok(HandshakeSignatureValid::assertion())
    }

    fn verify_tls13_signature(
        &self,
        _message: &[u8],
        _cert: &CertificateDer<'_>,
        _dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, RustlsError> {
        Ok(HandshakeSignatureValid::assertion())
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        vec![
            SignatureScheme::RSA_PKCS1_SHA256,
            SignatureScheme::RSA_PKCS1_SHA384,
            SignatureScheme::RSA_PKCS1_SHA512,
            SignatureScheme::ECDSA_NISTP256_SHA256,
            SignatureScheme::ECDSA_NISTP384_SHA384,
            SignatureScheme::ECDSA_NISTP521_SHA512,
            SignatureScheme::RSA_PSS_SHA256,
            SignatureScheme::RSA_PSS_SHA384,
            SignatureScheme::RSA_PSS_SHA512,
            SignatureScheme::ED25519,
            SignatureScheme::ED448,
        ]
    }
}

/// Fetches server certificates over TLS
pub struct SslChecker {
    settings: SslSettings,
}

impl SslChecker {
    /// Create a new SSL checker with the given settings
    pub fn new(settings: SslSettings) -> Self {
        let _ = rustls::crypto::ring::default_provider().install_default();
        Self { settings }
    }

    /// Connect to `host:port`, complete the handshake and return the DER
    /// bytes of the peer's leaf certificate.
    ///
    /// The TLS session is shut down and the socket closed before returning,
    /// whether or not a certificate was obtained.
    pub async fn fetch_leaf_certificate(
        &self,
        host: &str,
        port: u16,
    ) -> Result<Vec<u8>, ToolkitError> {
        let server_name =
            ServerName::try_from(host.to_string()).map_err(|_| SslError::InvalidServerName {
                name: host.to_string(),
            })?;

        let config = ClientConfig::builder()
            .dangerous()
            .with_custom_certificate_verifier(Arc::new(AcceptAnyCertVerifier))
            .with_no_client_auth();
        let connector = tokio_rustls::TlsConnector::from(Arc::new(config));

        let stream = TcpChecker::new(self.settings.connect_timeout())
            .connect(host, port)
            .await?;

        tracing::debug!(host, port, "Starting TLS handshake");
        let mut tls_stream = tokio::time::timeout(
            self.settings.handshake_timeout(),
            connector.connect(server_name, stream),
        )
        .await
        .map_err(|_| SslError::HandshakeTimeout {
            host: host.to_string(),
            port,
        })?
        .map_err(|e| SslError::HandshakeFailed {
            message: e.to_string(),
        })?;

        let (_, connection) = tls_stream.get_ref();
        tracing::debug!(
            protocol = ?connection.protocol_version(),
            cipher = ?connection.negotiated_cipher_suite().map(|cs| cs.suite()),
            "Handshake complete"
        );
        let leaf = connection
            .peer_certificates()
            .and_then(|certs| certs.first())
            .map(|cert| cert.as_ref().to_vec());

        if let Err(e) = tls_stream.shutdown().await {
            tracing::debug!(error = %e, "TLS shutdown failed");
        }

        let leaf = leaf.ok_or_else(|| SslError::NoPeerCertificate {
            host: host.to_string(),
            port,
        })?;
        tracing::debug!(bytes = leaf.len(), "Received leaf certificate");
        Ok(leaf)
    }
}
