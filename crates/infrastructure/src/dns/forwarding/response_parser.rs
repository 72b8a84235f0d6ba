//! DNS response parsing (RFC 1035 §4.1)
//!
//! Validates the header against the query that was sent, steps over the
//! question section and collects IPv4 addresses from the answer section.
//! Every read is bounds-checked against the received datagram.

use super::header::{rcode_to_status, DnsHeader, HEADER_LEN};
use super::name_codec::decode_name;
use ferrous_stub_domain::{DnsClass, DomainError, RecordType};
use std::net::Ipv4Addr;
use tracing::{debug, warn};

/// QTYPE + QCLASS
const QUESTION_FIXED_LEN: usize = 4;
/// TYPE + CLASS + TTL + RDLENGTH
const RR_FIXED_LEN: usize = 10;
const IPV4_RDATA_LEN: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedResponse {
    /// A/IN addresses in answer-section order.
    pub addresses: Vec<Ipv4Addr>,
    /// Smallest TTL among the A records; `None` means "resolved but not cacheable".
    pub min_ttl: Option<u32>,
    pub truncated: bool,
    pub answer_count: u16,
}

/// Fixed part of a resource record, after its owner name.
#[derive(Debug, Clone, Copy)]
struct RecordHeader {
    rr_type: u16,
    rr_class: u16,
    ttl: u32,
    rdlength: u16,
}

pub struct ResponseParser;

impl ResponseParser {
    /// Validate a response against `expected_id` and extract its IPv4 answers.
    pub fn parse(bytes: &[u8], expected_id: u16) -> Result<ParsedResponse, DomainError> {
        let header = DnsHeader::parse(bytes)?;

        if header.id != expected_id {
            return Err(DomainError::IdMismatch {
                expected: expected_id,
                actual: header.id,
            });
        }
        if !header.is_response() {
            return Err(DomainError::NotAResponse);
        }
        if header.rcode() != 0 {
            debug!(
                rcode = header.rcode(),
                status = rcode_to_status(header.rcode()),
                "Upstream returned error rcode"
            );
            return Err(DomainError::ServerError {
                rcode: header.rcode(),
            });
        }
        if header.truncated() {
            warn!(id = header.id, "Response was truncated, results may be incomplete");
        }

        let mut pos = HEADER_LEN;

        for _ in 0..header.qdcount {
            let (_, name_len) = decode_name(bytes, pos)?;
            pos = advance(bytes, pos + name_len, QUESTION_FIXED_LEN, "question")?;
        }

        if header.ancount == 0 {
            debug!(id = header.id, "No answer records in response");
            return Err(DomainError::NoRecords);
        }

        let mut addresses = Vec::new();
        let mut min_ttl: Option<u32> = None;

        for _ in 0..header.ancount {
            let (owner, name_len) = decode_name(bytes, pos)?;
            pos += name_len;

            let rr = read_record_header(bytes, pos)?;
            pos += RR_FIXED_LEN;

            let rdata_start = pos;
            pos = advance(bytes, pos, usize::from(rr.rdlength), "answer RDATA")?;
            let rdata = &bytes[rdata_start..pos];

            let is_a = rr.rr_type == RecordType::A.to_u16();
            let is_in = rr.rr_class == DnsClass::IN.to_u16();

            if !(is_a && is_in) {
                debug!(
                    owner = %owner,
                    rr_type = RecordType::from_u16(rr.rr_type)
                        .map(|t| t.as_str())
                        .unwrap_or("UNKNOWN"),
                    rr_class = rr.rr_class,
                    "Skipping non-A answer record"
                );
                continue;
            }

            if rdata.len() != IPV4_RDATA_LEN {
                warn!(
                    owner = %owner,
                    rdlength = rr.rdlength,
                    "Found A record with unexpected data length"
                );
                continue;
            }

            addresses.push(Ipv4Addr::new(rdata[0], rdata[1], rdata[2], rdata[3]));
            min_ttl = Some(min_ttl.map_or(rr.ttl, |current| current.min(rr.ttl)));
        }

        if addresses.is_empty() {
            debug!(id = header.id, answers = header.ancount, "No valid A records found");
            return Err(DomainError::NoRecords);
        }

        debug!(
            addresses = addresses.len(),
            min_ttl = ?min_ttl,
            truncated = header.truncated(),
            "DNS response parsed"
        );

        Ok(ParsedResponse {
            addresses,
            min_ttl,
            truncated: header.truncated(),
            answer_count: header.ancount,
        })
    }
}

/// Returns `pos + len` if that many bytes are available from `pos`.
fn advance(bytes: &[u8], pos: usize, len: usize, what: &str) -> Result<usize, DomainError> {
    let end = pos + len;
    if end > bytes.len() {
        return Err(DomainError::Truncated(format!(
            "{} needs {} bytes at offset {}, only {} remain",
            what,
            len,
            pos,
            bytes.len().saturating_sub(pos)
        )));
    }
    Ok(end)
}

fn read_record_header(bytes: &[u8], pos: usize) -> Result<RecordHeader, DomainError> {
    let end = advance(bytes, pos, RR_FIXED_LEN, "answer RR header")?;
    let b = &bytes[pos..end];

    Ok(RecordHeader {
        rr_type: u16::from_be_bytes([b[0], b[1]]),
        rr_class: u16::from_be_bytes([b[2], b[3]]),
        ttl: u32::from_be_bytes([b[4], b[5], b[6], b[7]]),
        rdlength: u16::from_be_bytes([b[8], b[9]]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(id: u16, flags: u16, qd: u16, an: u16) -> Vec<u8> {
        let mut buf = Vec::new();
        for field in [id, flags, qd, an, 0, 0] {
            buf.extend_from_slice(&field.to_be_bytes());
        }
        buf
    }

    #[test]
    fn test_advance_within_bounds() {
        assert_eq!(advance(&[0u8; 8], 2, 4, "x").unwrap(), 6);
        assert_eq!(advance(&[0u8; 8], 4, 4, "x").unwrap(), 8);
    }

    #[test]
    fn test_advance_past_end_is_truncated() {
        let result = advance(&[0u8; 8], 6, 4, "rdata");
        assert!(matches!(result, Err(DomainError::Truncated(_))));
    }

    #[test]
    fn test_response_without_answers_is_no_records() {
        let mut bytes = header(7, 0x8180, 1, 0);
        bytes.extend_from_slice(b"\x01a\x00\x00\x01\x00\x01");

        assert_eq!(ResponseParser::parse(&bytes, 7), Err(DomainError::NoRecords));
    }

    #[test]
    fn test_question_fixed_fields_missing_is_truncated() {
        let mut bytes = header(7, 0x8180, 1, 1);
        bytes.extend_from_slice(b"\x01a\x00\x00\x01");

        assert!(matches!(
            ResponseParser::parse(&bytes, 7),
            Err(DomainError::Truncated(_))
        ));
    }

    #[test]
    fn test_answer_count_exceeding_data_is_reported() {
        let bytes = header(7, 0x8180, 0, 1);

        assert!(matches!(
            ResponseParser::parse(&bytes, 7),
            Err(DomainError::EndOfData(_))
        ));
    }
}
