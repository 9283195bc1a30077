//! ssl-expiry library
//!
//! Inspects an X.509 certificate, read from a PEM file or fetched with a
//! TLS handshake, and reports:
//! - Subject common name and issuer distinguished name
//! - Expiry date
//! - Expiry severity (CRITICAL, WARNING, INFO or Expired)
//!
//! # Usage
//!
//! ```rust,ignore
//! use ssl_expiry::config::{Settings, Theme};
//! use ssl_expiry::runner::{self, RunConfig, Target};
//!
//! #[tokio::main]
//! async fn main() -> ssl_expiry::Result<()> {
//!     let target = Target::Remote { host: "example.com".into(), port: 443 };
//!     let config = RunConfig { verbose: true, settings: Settings::default(), theme: Theme::default() };
//!     runner::run_check(&target, &config, runner::today(), &mut std::io::stdout()).await?;
//!     Ok(())
//! }
//! ```

pub mod cert_ops;
pub mod checks;
pub mod cli;
pub mod config;
pub mod models;
pub mod output;
pub mod runner;
pub mod utils;

// Re-export commonly used types
pub use cli::Cli;
pub use config::{Settings, Theme};
pub use models::{CertificateInfo, ExpiryVerdict, NameField, Severity};
pub use utils::{Result, ToolkitError};
