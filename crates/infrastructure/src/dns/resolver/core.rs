use crate::dns::cache::ResolutionCache;
use crate::dns::forwarding::{MessageBuilder, ResponseParser};
use crate::dns::transport::DnsTransport;
use async_trait::async_trait;
use ferrous_stub_application::ports::{DnsResolution, DnsResolver};
use ferrous_stub_domain::{DnsQuery, DomainError, RecordType};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default per-query timeout
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(2);

/// Resolves A records against one upstream server, consulting and feeding a
/// [`ResolutionCache`].
///
/// One query per call, one timeout, no retries. Errors never touch the cache.
pub struct StubResolver {
    transport: Arc<dyn DnsTransport>,
    cache: Option<Arc<ResolutionCache>>,
    query_timeout: Duration,
}

impl StubResolver {
    pub fn new(transport: Arc<dyn DnsTransport>, query_timeout: Duration) -> Self {
        info!(
            server = %transport.server(),
            protocol = transport.protocol_name(),
            timeout_ms = query_timeout.as_millis() as u64,
            "Stub DNS resolver created"
        );

        Self {
            transport,
            cache: None,
            query_timeout,
        }
    }

    pub fn with_cache(mut self, cache: Arc<ResolutionCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn cache(&self) -> Option<&Arc<ResolutionCache>> {
        self.cache.as_ref()
    }

    pub fn query_timeout(&self) -> Duration {
        self.query_timeout
    }

    fn cache_lookup(&self, query: &DnsQuery, now: Instant) -> Option<DnsResolution> {
        let addresses = self.cache.as_ref()?.lookup(&query.domain, now)?;
        Some(DnsResolution::from_cache(addresses))
    }
}

#[async_trait]
impl DnsResolver for StubResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsResolution, DomainError> {
        if query.record_type != RecordType::A {
            return Err(DomainError::UnsupportedRecordType(
                query.record_type.to_string(),
            ));
        }

        let now = Instant::now();

        if query.use_cache {
            if let Some(hit) = self.cache_lookup(query, now) {
                return Ok(hit);
            }
        }

        let (message, query_id) = MessageBuilder::build_query(&query.domain, &query.record_type)?;

        debug!(
            domain = %query.domain,
            query_id = query_id,
            server = %self.transport.server(),
            "Sending upstream query"
        );

        let response = self.transport.send(&message, self.query_timeout).await?;

        debug!(
            domain = %query.domain,
            bytes = response.bytes.len(),
            protocol = response.protocol_used,
            "Parsing upstream response"
        );

        let parsed = ResponseParser::parse(&response.bytes, query_id)?;

        let cached = match &self.cache {
            Some(cache) => cache.store(&query.domain, parsed.addresses.clone(), parsed.min_ttl, now),
            None => false,
        };

        if cached {
            info!(
                domain = %query.domain,
                addresses = ?parsed.addresses,
                ttl = ?parsed.min_ttl,
                "Cached result"
            );
        }

        Ok(DnsResolution {
            addresses: Arc::new(parsed.addresses),
            cache_hit: false,
            upstream_server: Some(self.transport.server()),
            min_ttl: parsed.min_ttl,
            cached,
            truncated: parsed.truncated,
        })
    }

    fn try_cache(&self, query: &DnsQuery) -> Option<DnsResolution> {
        self.cache_lookup(query, Instant::now())
    }
}
