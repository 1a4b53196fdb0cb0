use crate::error::{PaymentError, Result};
use clap::Args;
use std::net::{SocketAddr, ToSocketAddrs};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 7865;

/// Listen address of the HTTP service.
///
/// | Flag | Environment | Default |
/// |------|-------------|---------|
/// | `--host` | `PAYMENT_API_HOST` | `127.0.0.1` |
/// | `--port` | `PAYMENT_API_PORT` | `7865` |
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind the HTTP server to
    #[arg(long, env = "PAYMENT_API_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to bind the HTTP server to
    #[arg(long, env = "PAYMENT_API_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Resolves `host:port` to the first matching socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let invalid = || PaymentError::InvalidAddress(format!("{}:{}", self.host, self.port));

        (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map_err(|_| invalid())?
            .next()
            .ok_or_else(invalid)
    }
}
