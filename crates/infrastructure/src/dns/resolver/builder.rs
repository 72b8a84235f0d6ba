use super::core::{StubResolver, DEFAULT_QUERY_TIMEOUT};
use crate::dns::cache::ResolutionCache;
use crate::dns::transport::{DnsTransport, UdpTransport};
use ferrous_stub_domain::{Config, DomainError};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct ResolverBuilder {
    transport: Arc<dyn DnsTransport>,
    cache: Option<Arc<ResolutionCache>>,
    query_timeout: Duration,
}

impl ResolverBuilder {
    pub fn new(transport: Arc<dyn DnsTransport>) -> Self {
        Self {
            transport,
            cache: None,
            query_timeout: DEFAULT_QUERY_TIMEOUT,
        }
    }

    /// UDP transport and cache wired from configuration.
    pub fn from_config(config: &Config) -> Result<Self, DomainError> {
        let transport = UdpTransport::from_config(&config.upstream)?;
        let mut builder =
            Self::new(Arc::new(transport)).with_query_timeout(config.upstream.query_timeout());

        if config.cache.enabled {
            builder = builder.with_cache(Arc::new(ResolutionCache::from_config(&config.cache)));
        }

        Ok(builder)
    }

    pub fn with_cache(mut self, cache: Arc<ResolutionCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn with_query_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout = timeout;
        self
    }

    pub fn build(self) -> Arc<StubResolver> {
        info!(
            cache = self.cache.is_some(),
            timeout_ms = self.query_timeout.as_millis() as u64,
            "Building DNS resolver"
        );

        let resolver = StubResolver::new(self.transport, self.query_timeout);
        let resolver = match self.cache {
            Some(cache) => resolver.with_cache(cache),
            None => resolver,
        };

        Arc::new(resolver)
    }
}
