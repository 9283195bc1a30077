//! Certificate sources and parsing
//!
//! This module contains the remote TLS fetch, TCP connect and X.509 parsing.

pub mod certificate;
pub mod ssl;
pub mod tcp;

pub use certificate::CertificateChecker;
pub use ssl::SslChecker;
pub use tcp::TcpChecker;
