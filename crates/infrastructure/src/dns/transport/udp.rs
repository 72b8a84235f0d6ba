//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is (no framing). A fresh ephemeral socket is bound
//! per query and dropped when the call returns, whatever the outcome.
//! Truncated (TC) responses are passed through; there is no TCP retry.

use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use ferrous_stub_domain::{DomainError, UpstreamConfig};
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Default receive buffer size
pub const DEFAULT_RECV_BUFFER_SIZE: usize = 1024;

/// DNS over UDP transport
pub struct UdpTransport {
    server_addr: SocketAddr,
    recv_buffer_size: usize,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self {
            server_addr,
            recv_buffer_size: DEFAULT_RECV_BUFFER_SIZE,
        }
    }

    pub fn with_recv_buffer_size(mut self, size: usize) -> Self {
        self.recv_buffer_size = size;
        self
    }

    pub fn from_config(config: &UpstreamConfig) -> Result<Self, DomainError> {
        let addr = config
            .socket_addr()
            .map_err(|e| DomainError::ConfigError(e.to_string()))?;
        Ok(Self::new(addr).with_recv_buffer_size(config.recv_buffer_size))
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    fn bind_addr(&self) -> SocketAddr {
        // Bind to ephemeral port (0 = OS assigns)
        if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        }
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let socket = UdpSocket::bind(self.bind_addr()).await.map_err(|e| {
            DomainError::TransportError(format!("Failed to bind UDP socket: {}", e))
        })?;

        let bytes_sent =
            tokio::time::timeout(timeout, socket.send_to(message_bytes, self.server_addr))
                .await
                .map_err(|_| DomainError::Timeout)?
                .map_err(|e| {
                    DomainError::TransportError(format!(
                        "Failed to send UDP query to {}: {}",
                        self.server_addr, e
                    ))
                })?;

        debug!(
            server = %self.server_addr,
            bytes_sent = bytes_sent,
            "UDP query sent"
        );

        let mut recv_buf = vec![0u8; self.recv_buffer_size];

        let (bytes_received, from_addr) =
            tokio::time::timeout(timeout, socket.recv_from(&mut recv_buf))
                .await
                .map_err(|_| DomainError::Timeout)?
                .map_err(|e| {
                    DomainError::TransportError(format!(
                        "Failed to receive UDP response from {}: {}",
                        self.server_addr, e
                    ))
                })?;

        // Validate response came from expected server
        if from_addr.ip() != self.server_addr.ip() {
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

        Ok(TransportResponse {
            bytes: recv_buf,
            protocol_used: "UDP",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }

    fn server(&self) -> String {
        self.server_addr.to_string()
    }
}
