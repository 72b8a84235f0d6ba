pub mod cache;
pub mod forwarding;
pub mod resolver;
pub mod transport;

pub use cache::{CacheEntry, CacheMetrics, ResolutionCache};
pub use forwarding::{MessageBuilder, ParsedResponse, ResponseParser};
pub use resolver::{ResolverBuilder, StubResolver};
pub use transport::{DnsTransport, TransportResponse, UdpTransport};
