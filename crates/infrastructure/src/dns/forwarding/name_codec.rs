//! Domain name wire encoding (RFC 1035 §3.1, §4.1.4)
//!
//! Names are a sequence of length-prefixed labels terminated by a zero byte.
//! In responses, any suffix may be replaced by a two-byte compression pointer
//! (top bits `11`, low 14 bits = offset from the start of the message).

use bytes::BufMut;
use ferrous_stub_domain::DomainError;

pub const MAX_LABEL_LEN: usize = 63;

/// Upper bound on pointers followed while decoding one name.
pub const MAX_POINTER_JUMPS: usize = 16;

const POINTER_TAG: u8 = 0xC0;
const POINTER_OFFSET_MASK: u8 = 0x3F;

/// Encodes `name` in label format, e.g. `www.google.com` → `3www6google3com0`.
pub fn encode_name(name: &str) -> Result<Vec<u8>, DomainError> {
    let mut buf = Vec::with_capacity(name.len() + 2);
    encode_name_into(name, &mut buf)?;
    Ok(buf)
}

pub fn encode_name_into<B: BufMut>(name: &str, buf: &mut B) -> Result<(), DomainError> {
    if !name.is_ascii() {
        return Err(DomainError::InvalidDomainName(format!(
            "'{}' is not an ASCII hostname",
            name
        )));
    }

    let name = name.strip_suffix('.').unwrap_or(name);

    if !name.is_empty() {
        for label in name.split('.') {
            if label.is_empty() {
                return Err(DomainError::InvalidDomainName(format!(
                    "'{}' contains an empty label",
                    name
                )));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(DomainError::InvalidDomainName(format!(
                    "label '{}' exceeds {} bytes",
                    label, MAX_LABEL_LEN
                )));
            }
            buf.put_u8(label.len() as u8);
            buf.put_slice(label.as_bytes());
        }
    }

    buf.put_u8(0);
    Ok(())
}

/// Decodes a possibly compressed name starting at `start` within the full
/// message `buf`.
///
/// Returns the dotted name and the number of bytes the caller should advance
/// past `start`. Once a pointer is followed, nothing read at the jump target
/// counts towards that figure.
pub fn decode_name(buf: &[u8], start: usize) -> Result<(String, usize), DomainError> {
    let mut name = String::new();
    let mut pos = start;
    let mut consumed = 0usize;
    let mut jumped = false;
    let mut visited: Vec<usize> = Vec::new();

    loop {
        let len = *buf.get(pos).ok_or_else(|| {
            DomainError::EndOfData(format!("no length byte at offset {}", pos))
        })?;

        if len & POINTER_TAG == POINTER_TAG {
            let low = *buf.get(pos + 1).ok_or_else(|| {
                DomainError::EndOfData(format!("pointer at offset {} is cut short", pos))
            })?;
            if !jumped {
                consumed += 2;
                jumped = true;
            }

            let target = (usize::from(len & POINTER_OFFSET_MASK) << 8) | usize::from(low);
            if visited.len() >= MAX_POINTER_JUMPS || visited.contains(&target) {
                return Err(DomainError::CompressionLoop { offset: target });
            }
            visited.push(target);
            pos = target;
            continue;
        }

        if len & POINTER_TAG != 0 {
            return Err(DomainError::Malformed(format!(
                "reserved label type {:#04x} at offset {}",
                len, pos
            )));
        }

        if len == 0 {
            if !jumped {
                consumed += 1;
            }
            break;
        }

        let label_start = pos + 1;
        let label_end = label_start + usize::from(len);
        let label = buf.get(label_start..label_end).ok_or_else(|| {
            DomainError::EndOfData(format!(
                "label of {} bytes at offset {} runs past end of message",
                len, pos
            ))
        })?;

        if !label.is_ascii() {
            return Err(DomainError::Malformed(format!(
                "non-ASCII label at offset {}",
                pos
            )));
        }

        if !name.is_empty() {
            name.push('.');
        }
        name.extend(label.iter().map(|&b| char::from(b)));

        if !jumped {
            consumed += 1 + usize::from(len);
        }
        pos = label_end;
    }

    Ok((name, consumed))
}
