//! Terminal output formatting

use crate::config::Theme;
use crate::models::{CertificateInfo, ExpiryThresholds, ExpiryVerdict, NameField};
use crate::utils::Result;
use chrono::NaiveDate;
use std::io::Write;

/// Line printed before a locally loaded certificate's report
pub const SEPARATOR: &str =
    "---------------------------------------------------------------------";

/// Render distinguished-name fields one per line as `<Label> : <value>`
pub fn format_name(fields: &[NameField]) -> String {
    fields
        .iter()
        .map(|field| format!("{}\n", field.render()))
        .collect()
}

/// Render a verdict as the tier marker, plus the day count unless expired
pub fn render_verdict(verdict: &ExpiryVerdict, theme: &Theme) -> String {
    let tier = theme
        .severity_style(verdict.severity)
        .apply_to(verdict.severity);

    if verdict.is_expired() {
        format!("----> {}\n", tier)
    } else {
        format!("----> {}\n{} days left\n", tier, verdict.days_remaining)
    }
}

/// Write the expiry report for a certificate.
///
/// With `verbose`, the subject common name and the issuer fields come first.
/// A subject without a common name or an unparsable expiry date aborts the
/// report with an error.
pub fn write_certificate_report<W: Write>(
    out: &mut W,
    cert: &CertificateInfo,
    verbose: bool,
    today: NaiveDate,
    thresholds: &ExpiryThresholds,
    theme: &Theme,
) -> Result<ExpiryVerdict> {
    if verbose {
        writeln!(out, "Issued Domain Name : {}", cert.common_name()?)?;
        writeln!(out, "{}", format_name(&cert.issuer))?;
    }

    let expiry = cert.expiry_date()?;
    writeln!(out, "Expiry Date : {}", expiry.format("%d/%m/%Y"))?;

    let verdict = ExpiryVerdict::classify(expiry, today, thresholds);
    write!(out, "{}", render_verdict(&verdict, theme))?;
    out.flush()?;

    Ok(verdict)
}
