use super::DnsServices;
use ferrous_stub_application::ports::DnsCachePort;
use ferrous_stub_application::use_cases::{GetCacheEntriesUseCase, ResolveHostnameUseCase};
use std::sync::Arc;

pub struct UseCases {
    pub resolve_hostname: Arc<ResolveHostnameUseCase>,
    pub get_cache_entries: Option<Arc<GetCacheEntriesUseCase>>,
}

impl UseCases {
    pub fn new(services: &DnsServices) -> Self {
        let get_cache_entries = services.cache.as_ref().map(|cache| {
            let port: Arc<dyn DnsCachePort> = cache.clone();
            Arc::new(GetCacheEntriesUseCase::new(port))
        });

        Self {
            resolve_hostname: Arc::new(ResolveHostnameUseCase::new(services.resolver.clone())),
            get_cache_entries,
        }
    }
}
