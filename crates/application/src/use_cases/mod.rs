pub mod cache;
pub mod dns;

// Re-export use cases
pub use cache::{CacheReport, GetCacheEntriesUseCase};
pub use dns::ResolveHostnameUseCase;
