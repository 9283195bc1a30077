//! Certificate file operations module
//!
//! Reads certificates stored locally in PEM format.

pub mod reader;

pub use reader::{certificate_from_pem, load_certificate, read_certificate};
