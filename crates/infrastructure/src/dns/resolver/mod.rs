pub mod builder;
pub mod core;

pub use builder::ResolverBuilder;
pub use self::core::{StubResolver, DEFAULT_QUERY_TIMEOUT};
