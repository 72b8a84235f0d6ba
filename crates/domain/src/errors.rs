use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Malformed DNS message: {0}")]
    Malformed(String),

    #[error("Transaction ID mismatch: expected {expected:#06x}, got {actual:#06x}")]
    IdMismatch { expected: u16, actual: u16 },

    #[error("Received packet is not a response (QR bit clear)")]
    NotAResponse,

    #[error("DNS server returned error code {rcode}")]
    ServerError { rcode: u8 },

    #[error("Truncated DNS message: {0}")]
    Truncated(String),

    #[error("Reached end of data while parsing name: {0}")]
    EndOfData(String),

    #[error("Compression pointer loop detected at offset {offset}")]
    CompressionLoop { offset: usize },

    #[error("No A records found in the answer section")]
    NoRecords,

    #[error("Query timeout")]
    Timeout,

    #[error("Transport error: {0}")]
    TransportError(String),

    #[error("Unsupported record type: {0}")]
    UnsupportedRecordType(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    /// Well-formed response that simply carried no usable A record.
    pub fn is_no_data(&self) -> bool {
        matches!(self, DomainError::NoRecords)
    }

    pub fn is_transport_error(&self) -> bool {
        matches!(self, DomainError::Timeout | DomainError::TransportError(_))
    }

    pub fn is_protocol_error(&self) -> bool {
        matches!(
            self,
            DomainError::Malformed(_)
                | DomainError::IdMismatch { .. }
                | DomainError::NotAResponse
                | DomainError::ServerError { .. }
                | DomainError::Truncated(_)
                | DomainError::EndOfData(_)
                | DomainError::CompressionLoop { .. }
        )
    }
}
