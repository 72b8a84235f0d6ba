mod get_entries;

pub use get_entries::{CacheReport, GetCacheEntriesUseCase};
