//! DNS message header (RFC 1035 §4.1.1)
//!
//! Six big-endian u16 fields: ID, FLAGS, QDCOUNT, ANCOUNT, NSCOUNT, ARCOUNT.
//! FLAGS layout (MSB→LSB): QR(1) Opcode(4) AA(1) TC(1) RD(1) RA(1) Z(3) RCODE(4).

use bytes::BufMut;
use ferrous_stub_domain::DomainError;

pub const HEADER_LEN: usize = 12;

pub const FLAG_QR: u16 = 0x8000;
pub const FLAG_AA: u16 = 0x0400;
pub const FLAG_TC: u16 = 0x0200;
pub const FLAG_RD: u16 = 0x0100;
pub const FLAG_RA: u16 = 0x0080;

const OPCODE_MASK: u16 = 0x7800;
const OPCODE_SHIFT: u16 = 11;
const RCODE_MASK: u16 = 0x000F;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DnsHeader {
    pub id: u16,
    pub flags: u16,
    pub qdcount: u16,
    pub ancount: u16,
    pub nscount: u16,
    pub arcount: u16,
}

impl DnsHeader {
    /// Standard recursive query header: RD set, one question.
    pub fn query(id: u16) -> Self {
        Self {
            id,
            flags: FLAG_RD,
            qdcount: 1,
            ..Self::default()
        }
    }

    pub fn parse(buf: &[u8]) -> Result<Self, DomainError> {
        if buf.len() < HEADER_LEN {
            return Err(DomainError::Malformed(format!(
                "response too short for header: {} bytes",
                buf.len()
            )));
        }

        let field = |i: usize| u16::from_be_bytes([buf[i], buf[i + 1]]);

        Ok(Self {
            id: field(0),
            flags: field(2),
            qdcount: field(4),
            ancount: field(6),
            nscount: field(8),
            arcount: field(10),
        })
    }

    pub fn write_to<B: BufMut>(&self, buf: &mut B) {
        buf.put_u16(self.id);
        buf.put_u16(self.flags);
        buf.put_u16(self.qdcount);
        buf.put_u16(self.ancount);
        buf.put_u16(self.nscount);
        buf.put_u16(self.arcount);
    }

    pub fn is_response(&self) -> bool {
        self.flags & FLAG_QR != 0
    }

    pub fn opcode(&self) -> u8 {
        ((self.flags & OPCODE_MASK) >> OPCODE_SHIFT) as u8
    }

    pub fn authoritative(&self) -> bool {
        self.flags & FLAG_AA != 0
    }

    pub fn truncated(&self) -> bool {
        self.flags & FLAG_TC != 0
    }

    pub fn recursion_desired(&self) -> bool {
        self.flags & FLAG_RD != 0
    }

    pub fn recursion_available(&self) -> bool {
        self.flags & FLAG_RA != 0
    }

    pub fn rcode(&self) -> u8 {
        (self.flags & RCODE_MASK) as u8
    }
}

pub fn rcode_to_status(rcode: u8) -> &'static str {
    match rcode {
        0 => "NOERROR",
        1 => "FORMERR",
        2 => "SERVFAIL",
        3 => "NXDOMAIN",
        4 => "NOTIMP",
        5 => "REFUSED",
        _ => "UNKNOWN",
    }
}
