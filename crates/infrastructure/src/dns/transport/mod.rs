pub mod udp;

use ferrous_lookup_domain::{Config, ConfigError};

pub use udp::UdpTransport;

/// Build the transport for the configured nameserver.
pub fn create_transport(config: &Config) -> Result<UdpTransport, ConfigError> {
    let server = config.resolver.socket_addr()?;
    Ok(UdpTransport::new(server, config.resolver.timeout()))
}
