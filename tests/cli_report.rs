//! End-to-end tests for the ssl-expiry binary

mod common;

use std::io::Write;
use std::net::TcpListener;
use std::path::PathBuf;
use std::process::{Command, Output};

fn ssl_expiry_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_ssl-expiry"))
}

fn run(args: &[&str]) -> Output {
    Command::new(ssl_expiry_bin())
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("CLICOLOR_FORCE")
        .output()
        .expect("Failed to execute")
}

#[test]
fn test_local_certificate_expiring_in_ten_days() {
    let dir = tempfile::tempdir().unwrap();
    let expiry = common::days_from_today(10);
    let cert = common::self_signed(Some("soon.example.com"), expiry);
    let path = common::write_pem(dir.path(), "soon.pem", &cert);

    let output = run(&["--local", "--crtFile", path.to_str().unwrap()]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "local check failed: {}", stdout);
    let expected = format!(
        "Expiry Date : {}\n----> CRITICAL\n10 days left\n",
        expiry.format("%d/%m/%Y")
    );
    assert!(stdout.contains(&expected), "unexpected output: {}", stdout);
    assert!(stdout.starts_with("-----"), "separator missing: {}", stdout);
}

#[test]
fn test_local_certificate_verbose() {
    let dir = tempfile::tempdir().unwrap();
    let cert = common::self_signed(Some("info.example.com"), common::days_from_today(200));
    let path = common::write_pem(dir.path(), "info.pem", &cert);

    let output = run(&["-L", "-f", path.to_str().unwrap(), "-I"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Issued Domain Name : info.example.com\n"));
    assert!(stdout.contains(
        "Country Name : GB\nOrganization Name : Expiry Test Ltd\nCommon Name : info.example.com\n"
    ));
    assert!(stdout.contains("----> INFO\n200 days left\n"));
}

#[test]
fn test_local_certificate_expired() {
    let dir = tempfile::tempdir().unwrap();
    let cert = common::self_signed(Some("old.example.com"), common::days_from_today(-3));
    let path = common::write_pem(dir.path(), "old.pem", &cert);

    let output = run(&["-L", "-f", path.to_str().unwrap()]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.ends_with("----> Expired\n"), "unexpected output: {}", stdout);
    assert!(!stdout.contains("days left"));
}

#[test]
fn test_local_missing_file() {
    let output = run(&["--local", "--crtFile", "/no/such/file.pem"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout.starts_with("Error opening file\n"), "unexpected output: {}", stdout);
    assert!(stdout.contains("/no/such/file.pem"));
}

#[test]
fn test_verbose_without_common_name_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let cert = common::self_signed(None, common::days_from_today(60));
    let path = common::write_pem(dir.path(), "nocn.pem", &cert);

    let output = run(&["-L", "-f", path.to_str().unwrap(), "-I"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("commonName"), "unexpected stderr: {}", stderr);
}

#[test]
fn test_remote_handshake_refused() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let server = std::thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let _ = stream.write_all(b"SSH-2.0-OpenSSH_9.6\r\n");
        }
    });

    let port_arg = port.to_string();
    let output = run(&["--remote", "--host", "127.0.0.1", "--port", &port_arg]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    server.join().unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout.lines().count(), 1, "unexpected output: {}", stdout);
    assert!(stdout.contains("SSL handshake failed"));
}

#[test]
fn test_remote_connection_refused() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let port_arg = port.to_string();
    let output = run(&["-R", "-h", "127.0.0.1", "-p", &port_arg]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout.trim(), format!("Connection refused to 127.0.0.1:{}", port));
}

#[test]
fn test_custom_thresholds_from_config_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("default.toml"),
        "[expiry]\ncritical_days = 5\nwarning_days = 12\n",
    )
    .unwrap();
    let cert = common::self_signed(Some("cfg.example.com"), common::days_from_today(10));
    let path = common::write_pem(dir.path(), "cfg.pem", &cert);

    let output = run(&[
        "-L",
        "-f",
        path.to_str().unwrap(),
        "--config",
        dir.path().to_str().unwrap(),
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("----> WARNING\n10 days left\n"), "unexpected output: {}", stdout);
}

#[test]
fn test_invalid_config_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("theme.toml"), "colors = [").unwrap();

    let output = run(&["--config", dir.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_local_without_file_is_usage_error() {
    let output = run(&["-L"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(stderr.contains("--crtFile"), "unexpected stderr: {}", stderr);
}

#[test]
fn test_remote_without_host_is_usage_error() {
    let output = run(&["-R", "-p", "8443"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(stderr.contains("--host"), "unexpected stderr: {}", stderr);
}

#[test]
fn test_help_is_long_flag_only() {
    let output = run(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("--crtFile"));
    assert!(stdout.contains("-h, --host"));
}
