//! Utility modules for ssl-expiry
//!
//! This module contains the error types shared across the crate.

pub mod error;

pub use error::{
    CertFileError, CertificateError, ConfigError, Result, SslError, TcpError, ToolkitError,
};
