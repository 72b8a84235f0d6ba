mod resolve_hostname;

pub use resolve_hostname::ResolveHostnameUseCase;
