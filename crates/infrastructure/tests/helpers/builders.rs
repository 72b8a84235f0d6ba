#![allow(dead_code)]
use ferrous_stub_infrastructure::dns::forwarding::encode_name;
use std::net::Ipv4Addr;

/// Offset of the first question's name, right after the header.
pub const QUESTION_NAME_OFFSET: u16 = 12;

pub const TYPE_A: u16 = 1;
pub const TYPE_CNAME: u16 = 5;
pub const CLASS_IN: u16 = 1;

/// Assembles response messages byte by byte.
///
/// Counts default to the number of questions/answers added but can be forced
/// to lie about the payload.
pub struct ResponseBuilder {
    id: u16,
    flags: u16,
    questions: Vec<u8>,
    qdcount: u16,
    answers: Vec<u8>,
    ancount: u16,
    ancount_override: Option<u16>,
}

impl ResponseBuilder {
    pub fn new(id: u16) -> Self {
        Self {
            id,
            flags: 0x8180,
            questions: Vec::new(),
            qdcount: 0,
            answers: Vec::new(),
            ancount: 0,
            ancount_override: None,
        }
    }

    /// Response skeleton echoing the ID and question section of `query`.
    pub fn reply_to(query: &[u8]) -> Self {
        let id = u16::from_be_bytes([query[0], query[1]]);
        let qdcount = u16::from_be_bytes([query[4], query[5]]);
        let mut builder = Self::new(id);
        builder.questions = query[12..].to_vec();
        builder.qdcount = qdcount;
        builder
    }

    pub fn flags(mut self, flags: u16) -> Self {
        self.flags = flags;
        self
    }

    pub fn ancount(mut self, count: u16) -> Self {
        self.ancount_override = Some(count);
        self
    }

    pub fn question(mut self, name: &str) -> Self {
        self.questions.extend_from_slice(&encode_name(name).unwrap());
        self.questions.extend_from_slice(&TYPE_A.to_be_bytes());
        self.questions.extend_from_slice(&CLASS_IN.to_be_bytes());
        self.qdcount += 1;
        self
    }

    /// A/IN record whose owner name points back at the first question.
    pub fn answer_a(self, ttl: u32, ip: Ipv4Addr) -> Self {
        self.answer_raw(
            &pointer(QUESTION_NAME_OFFSET),
            TYPE_A,
            CLASS_IN,
            ttl,
            &ip.octets(),
        )
    }

    pub fn answer_raw(
        mut self,
        owner: &[u8],
        rr_type: u16,
        rr_class: u16,
        ttl: u32,
        rdata: &[u8],
    ) -> Self {
        self.answers.extend_from_slice(owner);
        self.answers.extend_from_slice(&rr_type.to_be_bytes());
        self.answers.extend_from_slice(&rr_class.to_be_bytes());
        self.answers.extend_from_slice(&ttl.to_be_bytes());
        self.answers
            .extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        self.answers.extend_from_slice(rdata);
        self.ancount += 1;
        self
    }

    pub fn build(self) -> Vec<u8> {
        let ancount = self.ancount_override.unwrap_or(self.ancount);
        let mut buf = Vec::with_capacity(12 + self.questions.len() + self.answers.len());
        for field in [self.id, self.flags, self.qdcount, ancount, 0, 0] {
            buf.extend_from_slice(&field.to_be_bytes());
        }
        buf.extend_from_slice(&self.questions);
        buf.extend_from_slice(&self.answers);
        buf
    }
}

pub fn pointer(offset: u16) -> [u8; 2] {
    (0xC000 | offset).to_be_bytes()
}
