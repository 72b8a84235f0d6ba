use async_trait::async_trait;
use ferrous_stub_domain::{DnsQuery, DomainError};
use std::net::Ipv4Addr;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct DnsResolution {
    /// Addresses in the order the upstream returned them.
    pub addresses: Arc<Vec<Ipv4Addr>>,
    pub cache_hit: bool,
    pub upstream_server: Option<String>,
    /// Minimum TTL across the A records, `None` when it could not be determined.
    pub min_ttl: Option<u32>,
    /// Whether this resolution produced (or came from) a cache entry.
    pub cached: bool,
    /// The upstream set the TC bit; the address list may be incomplete.
    pub truncated: bool,
}

impl DnsResolution {
    pub fn new(addresses: Vec<Ipv4Addr>, cache_hit: bool) -> Self {
        Self {
            addresses: Arc::new(addresses),
            cache_hit,
            upstream_server: None,
            min_ttl: None,
            cached: cache_hit,
            truncated: false,
        }
    }

    pub fn from_cache(addresses: Arc<Vec<Ipv4Addr>>) -> Self {
        Self {
            addresses,
            cache_hit: true,
            upstream_server: None,
            min_ttl: None,
            cached: true,
            truncated: false,
        }
    }

    /// Dotted-quad strings, order preserved.
    pub fn address_strings(&self) -> Vec<String> {
        self.addresses.iter().map(|ip| ip.to_string()).collect()
    }
}

#[async_trait]
pub trait DnsResolver: Send + Sync {
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsResolution, DomainError>;

    /// Check only the cache without going to upstream.
    /// Returns `Some(resolution)` on hit, `None` on miss.
    /// Default implementation returns None (no cache).
    fn try_cache(&self, _query: &DnsQuery) -> Option<DnsResolution> {
        None
    }
}
