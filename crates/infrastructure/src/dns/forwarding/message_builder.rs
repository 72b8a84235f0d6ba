//! DNS Message Builder
//!
//! Assembles query messages in wire format by hand: a 12-byte header
//! followed by a single question section.

use super::header::{DnsHeader, HEADER_LEN};
use super::name_codec::encode_name_into;
use bytes::{BufMut, BytesMut};
use ferrous_stub_domain::{DnsClass, DomainError, RecordType};

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a DNS query message with a fresh random transaction ID
    ///
    /// Creates a standard recursive query with:
    /// - Uniformly random 16-bit ID for request/response matching
    /// - RD (Recursion Desired) flag set, every other flag bit clear
    /// - QDCOUNT = 1, all other counts zero
    /// - One question: encoded name, `record_type`, class IN
    ///
    /// Returns the serialized bytes and the ID the response must echo.
    pub fn build_query(
        hostname: &str,
        record_type: &RecordType,
    ) -> Result<(Vec<u8>, u16), DomainError> {
        let id = fastrand::u16(..);
        let bytes = Self::build_query_with_id(hostname, record_type, id)?;
        Ok((bytes, id))
    }

    /// Build a query with a caller-chosen transaction ID
    pub fn build_query_with_id(
        hostname: &str,
        record_type: &RecordType,
        id: u16,
    ) -> Result<Vec<u8>, DomainError> {
        let mut buf = BytesMut::with_capacity(HEADER_LEN + hostname.len() + 6);

        DnsHeader::query(id).write_to(&mut buf);
        encode_name_into(hostname, &mut buf)?;
        buf.put_u16(record_type.to_u16());
        buf.put_u16(DnsClass::IN.to_u16());

        Ok(buf.to_vec())
    }
}
