//! TCP connectivity
//!
//! Resolves a host name and opens a TCP connection to it.

use crate::utils::TcpError;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpStream;

/// TCP connector with a per-address connect timeout
pub struct TcpChecker {
    timeout: Duration,
}

impl TcpChecker {
    /// Create a new TCP checker with the given timeout
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Resolve `host` and connect to the first address that accepts.
    pub async fn connect(&self, host: &str, port: u16) -> Result<TcpStream, TcpError> {
        let addrs: Vec<SocketAddr> = tokio::net::lookup_host((host, port))
            .await
            .map_err(|e| TcpError::ResolutionFailed {
                host: host.to_string(),
                message: e.to_string(),
            })?
            .collect();

        if addrs.is_empty() {
            return Err(TcpError::ResolutionFailed {
                host: host.to_string(),
                message: "no addresses found".to_string(),
            });
        }

        let mut last_error = None;
        for addr in addrs {
            tracing::debug!(%addr, "Connecting");
            match tokio::time::timeout(self.timeout, TcpStream::connect(addr)).await {
                Ok(Ok(stream)) => return Ok(stream),
                Ok(Err(e)) => {
                    tracing::debug!(%addr, error = %e, "Connect failed");
                    last_error = Some(classify_io_error(e, host, port));
                }
                Err(_) => {
                    tracing::debug!(%addr, "Connect timed out");
                    last_error = Some(TcpError::Timeout {
                        host: host.to_string(),
                        port,
                    });
                }
            }
        }

        Err(last_error.unwrap_or_else(|| TcpError::ConnectionFailed {
            host: host.to_string(),
            port,
            message: "no address could be reached".to_string(),
        }))
    }
}

fn classify_io_error(e: io::Error, host: &str, port: u16) -> TcpError {
    if e.kind() == io::ErrorKind::ConnectionRefused {
        return TcpError::ConnectionRefused {
            host: host.to_string(),
            port,
        };
    }

    let error_str = e.to_string().to_lowercase();
    if error_str.contains("unreachable") {
        TcpError::HostUnreachable {
            host: host.to_string(),
        }
    } else {
        TcpError::ConnectionFailed {
            host: host.to_string(),
            port,
            message: e.to_string(),
        }
    }
}
