//! Check orchestration
//!
//! Selects the certificate source from the command line, obtains the
//! certificate and writes the expiry report.

use crate::cert_ops;
use crate::checks::{CertificateChecker, SslChecker};
use crate::cli::{Cli, DEFAULT_HOST, DEFAULT_PORT};
use crate::config::{Settings, Theme};
use crate::models::{CertificateInfo, ExpiryVerdict};
use crate::output::{self, SEPARATOR};
use crate::utils::Result;
use chrono::{NaiveDate, Utc};
use std::io::Write;
use std::path::PathBuf;

/// Where the certificate comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Local { path: PathBuf },
    Remote { host: String, port: u16 },
}

impl Target {
    /// Resolve the target from parsed arguments.
    ///
    /// `--remote` wins over `--local`; with neither, `localhost:443` is checked.
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.remote {
            Target::Remote {
                host: cli
                    .host
                    .clone()
                    .unwrap_or_else(|| DEFAULT_HOST.to_string()),
                port: cli.port_or_default(),
            }
        } else if let (true, Some(path)) = (cli.local, cli.crt_file.as_ref()) {
            Target::Local { path: path.clone() }
        } else {
            if cli.host.is_some() || cli.port.is_some() {
                tracing::warn!("--host/--port are ignored without --remote");
            }
            Target::Remote {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
            }
        }
    }
}

/// Everything a single check needs besides the target
pub struct RunConfig {
    pub verbose: bool,
    pub settings: Settings,
    pub theme: Theme,
}

/// Obtain the certificate for `target`
pub async fn fetch_certificate(target: &Target, settings: &Settings) -> Result<CertificateInfo> {
    match target {
        Target::Local { path } => Ok(cert_ops::load_certificate(path)?),
        Target::Remote { host, port } => {
            let der = SslChecker::new(settings.ssl.clone())
                .fetch_leaf_certificate(host, *port)
                .await?;
            Ok(CertificateChecker::new().parse_certificate(&der)?)
        }
    }
}

/// Run one check and write its report to `out`, judging expiry against `today`.
pub async fn run_check<W: Write>(
    target: &Target,
    config: &RunConfig,
    today: NaiveDate,
    out: &mut W,
) -> Result<ExpiryVerdict> {
    tracing::debug!(?target, "Running check");
    let cert = fetch_certificate(target, &config.settings).await?;

    if matches!(target, Target::Local { .. }) {
        writeln!(out, "{}", SEPARATOR)?;
    }

    output::write_certificate_report(
        out,
        &cert,
        config.verbose,
        today,
        &config.settings.expiry,
        &config.theme,
    )
}

/// Today's date in UTC, the timezone certificate validity is expressed in
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn target_for(args: &[&str]) -> Target {
        let cli = Cli::try_parse_from(args).unwrap();
        Target::from_cli(&cli)
    }

    #[test]
    fn test_no_flags_defaults_to_localhost() {
        assert_eq!(
            target_for(&["ssl-expiry"]),
            target_for(&["ssl-expiry", "--remote", "--host", "localhost", "--port", "443"])
        );
    }

    #[test]
    fn test_remote_without_port_uses_443() {
        assert_eq!(
            target_for(&["ssl-expiry", "-R", "-h", "example.com"]),
            Target::Remote {
                host: "example.com".to_string(),
                port: 443
            }
        );
    }

    #[test]
    fn test_remote_takes_precedence() {
        let target = target_for(&[
            "ssl-expiry", "-R", "-h", "example.com", "-L", "-f", "cert.pem",
        ]);
        assert!(matches!(target, Target::Remote { .. }));
    }

    #[test]
    fn test_local_target() {
        assert_eq!(
            target_for(&["ssl-expiry", "-L", "-f", "cert.pem"]),
            Target::Local {
                path: PathBuf::from("cert.pem")
            }
        );
    }

    #[test]
    fn test_host_without_remote_is_ignored() {
        assert_eq!(
            target_for(&["ssl-expiry", "-h", "example.com"]),
            Target::Remote {
                host: "localhost".to_string(),
                port: 443
            }
        );
    }
}
