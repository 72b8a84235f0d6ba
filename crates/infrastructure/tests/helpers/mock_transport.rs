#![allow(dead_code)]
use async_trait::async_trait;
use ferrous_stub_domain::DomainError;
use ferrous_stub_infrastructure::dns::transport::{DnsTransport, TransportResponse};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

type Handler = Box<dyn Fn(&[u8]) -> Result<Vec<u8>, DomainError> + Send + Sync>;

/// In-memory transport: every `send` is answered by a handler that sees the
/// exact query bytes.
pub struct MockTransport {
    handler: Handler,
    calls: AtomicUsize,
}

impl MockTransport {
    pub fn answering<F>(handler: F) -> Self
    where
        F: Fn(&[u8]) -> Result<Vec<u8>, DomainError> + Send + Sync + 'static,
    {
        Self {
            handler: Box::new(handler),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self::answering(move |_| Err(error.clone()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DnsTransport for MockTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        _timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let bytes = (self.handler)(message_bytes)?;
        Ok(TransportResponse {
            bytes,
            protocol_used: "MOCK",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "MOCK"
    }

    fn server(&self) -> String {
        "mock:53".to_string()
    }
}
