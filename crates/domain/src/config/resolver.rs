use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use super::errors::ConfigError;

/// The single nameserver a lookup is sent to.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// IP address, optionally with an explicit port (`1.1.1.1:5353`).
    #[serde(default = "default_address")]
    pub address: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Receive timeout for the single UDP exchange.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            port: default_port(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl ResolverConfig {
    /// Resolves `address` into a socket address; an explicit port in the
    /// address wins over `port`.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let address = self.address.trim();

        if let Ok(addr) = address.parse::<SocketAddr>() {
            return Ok(addr);
        }

        address
            .parse::<IpAddr>()
            .map(|ip| SocketAddr::new(ip, self.port))
            .map_err(|_| {
                ConfigError::Validation(format!(
                    "Resolver address '{}' is not an IP address or IP:port",
                    self.address
                ))
            })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

fn default_address() -> String {
    "8.8.8.8".to_string()
}

fn default_port() -> u16 {
    53
}

fn default_timeout_ms() -> u64 {
    5000
}
