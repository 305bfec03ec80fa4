//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is (no framing). Without EDNS(0) a response is at
//! most 512 bytes; anything longer is cut to that size on receive.

use async_trait::async_trait;
use ferrous_lookup_application::ports::UpstreamTransport;
use ferrous_lookup_domain::{TransportError, MAX_UDP_MESSAGE_SIZE};
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// DNS over UDP transport
pub struct UdpTransport {
    server_addr: SocketAddr,
    timeout: Duration,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr, timeout: Duration) -> Self {
        Self {
            server_addr,
            timeout,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn timeout_error(&self) -> TransportError {
        TransportError::Timeout {
            server: self.server_addr.to_string(),
            timeout_ms: self.timeout.as_millis() as u64,
        }
    }
}

#[async_trait]
impl UpstreamTransport for UdpTransport {
    async fn exchange(&self, message_bytes: &[u8]) -> Result<Vec<u8>, TransportError> {
        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr = if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| TransportError::SocketCreateFailed(e.to_string()))?;

        let bytes_sent =
            tokio::time::timeout(self.timeout, socket.send_to(message_bytes, self.server_addr))
                .await
                .map_err(|_| self.timeout_error())?
                .map_err(|e| TransportError::SendFailed {
                    server: self.server_addr.to_string(),
                    reason: e.to_string(),
                })?;

        debug!(
            server = %self.server_addr,
            bytes_sent = bytes_sent,
            "UDP query sent"
        );

        let mut recv_buf = vec![0u8; MAX_UDP_MESSAGE_SIZE];

        let (bytes_received, from_addr) =
            tokio::time::timeout(self.timeout, socket.recv_from(&mut recv_buf))
                .await
                .map_err(|_| self.timeout_error())?
                .map_err(|e| TransportError::ReceiveFailed {
                    server: self.server_addr.to_string(),
                    reason: e.to_string(),
                })?;

        if from_addr != self.server_addr {
            warn!(
                expected = %self.server_addr,
                received_from = %from_addr,
                "UDP response from unexpected source"
            );
        }

        recv_buf.truncate(bytes_received);

        debug!(
            server = %self.server_addr,
            bytes_received = bytes_received,
            "UDP response received"
        );

        Ok(recv_buf)
    }

    fn server(&self) -> SocketAddr {
        self.server_addr
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}
