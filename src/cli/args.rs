//! CLI argument definitions using clap

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Host checked when neither `--remote` nor `--local` is given
pub const DEFAULT_HOST: &str = "localhost";

/// Port used for remote checks when `--port` is omitted
pub const DEFAULT_PORT: u16 = 443;

#[derive(Parser, Debug)]
#[command(name = "ssl-expiry")]
#[command(version)]
#[command(about = "Report the issuer and expiry status of an SSL certificate", long_about = None)]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Check a certificate file on the local machine
    #[arg(short = 'L', long, requires = "crt_file")]
    pub local: bool,

    /// Full path of the PEM certificate file
    #[arg(short = 'f', long = "crtFile", value_name = "FILE")]
    pub crt_file: Option<PathBuf>,

    /// Check the certificate served by a remote host
    #[arg(short = 'R', long, requires = "host")]
    pub remote: bool,

    /// Hostname of the remote server
    #[arg(short = 'h', long, value_name = "HOST")]
    pub host: Option<String>,

    /// Port number of the remote server (default: 443)
    #[arg(short = 'p', long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Display extra information about the certificate
    #[arg(short = 'I', long)]
    pub info: bool,

    /// Directory containing default.toml and theme.toml
    #[arg(long, value_name = "DIR")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

impl Cli {
    /// Port to use for a remote check
    pub fn port_or_default(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }
}
