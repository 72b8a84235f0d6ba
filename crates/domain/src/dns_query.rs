use super::RecordType;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub record_type: RecordType,
    pub use_cache: bool,
}

impl DnsQuery {
    pub fn new(domain: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            domain: domain.into(),
            record_type,
            use_cache: true,
        }
    }

    pub fn bypass_cache(mut self) -> Self {
        self.use_cache = false;
        self
    }
}
