pub mod udp;

use async_trait::async_trait;
use ferrous_stub_domain::DomainError;
use std::time::Duration;

pub use udp::UdpTransport;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,

    pub protocol_used: &'static str,
}

/// Sends one DNS message and waits for one reply.
///
/// Implementations own their socket for the duration of a single call; no
/// retries are attempted. A timeout surfaces as [`DomainError::Timeout`], any
/// socket failure as [`DomainError::TransportError`].
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;

    /// Human-readable upstream identifier for logs.
    fn server(&self) -> String;
}
