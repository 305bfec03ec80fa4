use async_trait::async_trait;
use ferrous_lookup_domain::TransportError;
use std::net::SocketAddr;

#[async_trait]
pub trait UpstreamTransport: Send + Sync {
    /// One request/response round trip. Whatever socket is used is released
    /// before this returns, on success and on error.
    async fn exchange(&self, message_bytes: &[u8]) -> Result<Vec<u8>, TransportError>;

    fn server(&self) -> SocketAddr;

    fn protocol_name(&self) -> &'static str;
}
