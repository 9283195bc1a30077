//! ssl-expiry - report the issuer and expiry status of an SSL certificate
//!
//! Reads a PEM file (`--local --crtFile <FILE>`) or connects to a server
//! (`--remote --host <HOST> [--port <PORT>]`, default `localhost:443`).

use clap::Parser;
use console::style;
use ssl_expiry::config;
use ssl_expiry::runner::{self, RunConfig, Target};
use ssl_expiry::{Cli, Result, ToolkitError};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        console::set_colors_enabled(false);
    }

    if let Err(e) = run(&cli).await {
        report_failure(&e);
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let (settings, theme) = match &cli.config {
        Some(dir) => config::load_config_from_dir(dir)?,
        None => config::load_default_config()?,
    };

    let target = Target::from_cli(cli);
    let run_config = RunConfig {
        verbose: cli.info,
        settings,
        theme,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    runner::run_check(&target, &run_config, runner::today(), &mut out).await?;

    Ok(())
}

/// Source failures are part of the report and go to stdout; anything else
/// is a fatal error on stderr.
fn report_failure(e: &ToolkitError) {
    match e {
        ToolkitError::CertFile(_) => {
            println!("Error opening file");
            println!("{}", e);
        }
        _ if e.is_source_error() => println!("{}", e),
        _ => eprintln!("{} {}", style("Error:").red().bold(), e),
    }
}
