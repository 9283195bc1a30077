//! Custom error types for ssl-expiry
//!
//! This module defines domain-specific error types using `thiserror` for
//! the failure modes of reading, fetching and evaluating a certificate.

use thiserror::Error;

/// Top-level error type for the ssl-expiry application
#[derive(Error, Debug)]
pub enum ToolkitError {
    #[error("{0}")]
    CertFile(#[from] CertFileError),

    #[error("{0}")]
    Tcp(#[from] TcpError),

    #[error("{0}")]
    Ssl(#[from] SslError),

    #[error("Certificate error: {0}")]
    Certificate(#[from] CertificateError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ToolkitError {
    /// Process exit code for this error.
    ///
    /// `1` for fatal certificate or configuration errors, `2` for file and
    /// network failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            ToolkitError::Certificate(_) | ToolkitError::Config(_) => 1,
            ToolkitError::CertFile(_)
            | ToolkitError::Tcp(_)
            | ToolkitError::Ssl(_)
            | ToolkitError::Io(_) => 2,
        }
    }

    /// Whether the error came from one of the certificate sources
    pub fn is_source_error(&self) -> bool {
        matches!(
            self,
            ToolkitError::CertFile(_) | ToolkitError::Tcp(_) | ToolkitError::Ssl(_)
        )
    }
}

/// Local certificate file errors
#[derive(Error, Debug)]
pub enum CertFileError {
    #[error("Failed to read {path}: {message}")]
    FileReadError { path: String, message: String },

    #[error("Failed to parse PEM in {path}: {message}")]
    InvalidPem { path: String, message: String },

    #[error("No CERTIFICATE block found in {path}")]
    NoCertificate { path: String },

    #[error("Failed to parse certificate in {path}: {message}")]
    InvalidCertificate { path: String, message: String },
}

/// TCP connection errors
#[derive(Error, Debug)]
pub enum TcpError {
    #[error("Could not resolve {host}: {message}")]
    ResolutionFailed { host: String, message: String },

    #[error("Connection refused to {host}:{port}")]
    ConnectionRefused { host: String, port: u16 },

    #[error("Connection timed out to {host}:{port}")]
    Timeout { host: String, port: u16 },

    #[error("Host unreachable: {host}")]
    HostUnreachable { host: String },

    #[error("TCP connection failed to {host}:{port}: {message}")]
    ConnectionFailed {
        host: String,
        port: u16,
        message: String,
    },
}

/// SSL/TLS protocol errors
#[derive(Error, Debug)]
pub enum SslError {
    #[error("SSL handshake failed: {message}")]
    HandshakeFailed { message: String },

    #[error("SSL handshake timed out with {host}:{port}")]
    HandshakeTimeout { host: String, port: u16 },

    #[error("Invalid server name: {name}")]
    InvalidServerName { name: String },

    #[error("Server {host}:{port} presented no certificate")]
    NoPeerCertificate { host: String, port: u16 },
}

/// Certificate evaluation errors
#[derive(Error, Debug)]
pub enum CertificateError {
    #[error("Failed to parse certificate: {message}")]
    ParseError { message: String },

    #[error("Invalid expiry date '{value}': {message}")]
    InvalidExpiryDate { value: String, message: String },

    #[error("Certificate subject has no {field}")]
    MissingField { field: String },
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration {path}: {message}")]
    ReadError { path: String, message: String },

    #[error("Failed to parse configuration {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type alias using ToolkitError
pub type Result<T> = std::result::Result<T, ToolkitError>;
