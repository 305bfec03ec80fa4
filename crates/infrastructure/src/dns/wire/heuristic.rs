//! Pattern-scan answer extraction.
//!
//! Instead of walking the sections counted in the header, this scans the
//! whole buffer for `0xC0 ?? ?? <type>`: the start of an answer record whose
//! owner name is a compression pointer and whose QTYPE low byte matches the
//! query. It reproduces the classic scan-based lookup tool, including its
//! false positives (an A record for `192.x.x.x` starts with `0xC0`, too).
//!
//! Deviations from that tool, all confined to malformed input:
//! - every read is bounds-checked and reported as a [`DecodeError`];
//! - names are capped at 255 bytes and [`MAX_POINTER_HOPS`] pointers;
//! - after nested pointers the scan resumes behind the *first* pointer of the
//!   name rather than the last one, so it can never re-enter the same record.

use super::name::{byte_at, push_label, MAX_POINTER_HOPS};
use ferrous_lookup_domain::{DecodeError, RecordType};
use std::net::Ipv4Addr;

const POINTER_TAG: u8 = 0xC0;

/// Non-standard pointer variant whose target counts back from the end of the
/// message: `(len + 1) - next_byte`. Not RFC 1035; kept for output parity.
const REVERSE_POINTER_TAG: u8 = 0xC1;

/// Pointer(2) + TYPE(2) + CLASS(2) + TTL(4) + RDLENGTH(2)
const A_RDATA_OFFSET: usize = 12;

pub fn scan(message: &[u8], record_type: RecordType) -> Result<Vec<String>, DecodeError> {
    let marker = record_type.wire_marker();
    let mut records = Vec::new();
    let mut i = 0;

    while i + 3 < message.len() {
        if message[i] != POINTER_TAG || message[i + 3] != marker {
            i += 1;
            continue;
        }

        match record_type {
            RecordType::A => {
                let rdata = i + A_RDATA_OFFSET;
                let octets = message
                    .get(rdata..rdata + 4)
                    .ok_or(DecodeError::Truncated {
                        len: message.len(),
                        needed: rdata + 4,
                    })?;
                records.push(Ipv4Addr::new(octets[0], octets[1], octets[2], octets[3]).to_string());
                i = rdata + 1;
            }
            RecordType::PTR => {
                // The pointer's low byte doubles as the skip to RDATA: the
                // question always sits at offset 12, and so does RDATA
                // relative to the record start.
                let start = i + usize::from(message[i + 1]);
                let (name, last) = walk_name(message, start)?;
                records.push(name);
                i = last + 1;
            }
        }
    }

    Ok(records)
}

/// Walks a name for the scan. Returns the name and the last byte consumed:
/// the terminator, or the second byte of the first pointer when one was taken.
fn walk_name(message: &[u8], start: usize) -> Result<(String, usize), DecodeError> {
    let mut name = String::new();
    let mut pos = start;
    let mut resume_stack: Vec<usize> = Vec::with_capacity(MAX_POINTER_HOPS);

    loop {
        let control = byte_at(message, pos)?;

        match control {
            0x00 => {
                let last = resume_stack.first().map_or(pos, |pointer| pointer + 1);
                return Ok((name, last));
            }
            POINTER_TAG | REVERSE_POINTER_TAG => {
                if resume_stack.len() == MAX_POINTER_HOPS {
                    return Err(DecodeError::MalformedName {
                        offset: pos,
                        reason: "too many compression pointers",
                    });
                }

                let low = usize::from(byte_at(message, pos + 1)?);
                let target = if control == POINTER_TAG {
                    Some(low)
                } else {
                    (message.len() + 1).checked_sub(low)
                };

                match target {
                    Some(target) if target < message.len() => {
                        resume_stack.push(pos);
                        pos = target;
                    }
                    _ => {
                        return Err(DecodeError::MalformedName {
                            offset: pos,
                            reason: "compression pointer outside message",
                        });
                    }
                }
            }
            len => {
                let len = usize::from(len);
                let label = message
                    .get(pos + 1..pos + 1 + len)
                    .ok_or(DecodeError::MalformedName {
                        offset: pos,
                        reason: "label runs past end of message",
                    })?;
                push_label(&mut name, label, pos)?;
                pos += 1 + len;
            }
        }
    }
}
