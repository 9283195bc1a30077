//! Output formatting module
//!
//! Renders certificate reports as human-readable terminal text.

pub mod terminal;

pub use terminal::{format_name, render_verdict, write_certificate_report, SEPARATOR};
