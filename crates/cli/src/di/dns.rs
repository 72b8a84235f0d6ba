use ferrous_stub_domain::Config;
use ferrous_stub_infrastructure::dns::{ResolutionCache, ResolverBuilder, StubResolver};
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub resolver: Arc<StubResolver>,
    pub cache: Option<Arc<ResolutionCache>>,
}

impl DnsServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        info!(
            server = %config.upstream.server,
            port = config.upstream.port,
            cache_enabled = config.cache.enabled,
            "Initializing DNS services"
        );

        let resolver = ResolverBuilder::from_config(config)?.build();
        let cache = resolver.cache().cloned();

        Ok(Self { resolver, cache })
    }
}
