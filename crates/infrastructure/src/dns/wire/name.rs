//! Label sequence codec (RFC 1035 §3.1, §4.1.4).
//!
//! The message buffer is treated as a read-only arena: every position below
//! is an index into it and is checked before use.

use ferrous_lookup_domain::{ConstructionError, DecodeError};

pub const MAX_LABEL_LEN: usize = 63;

/// Longest presentation-form name any decoder will emit.
pub const MAX_NAME_LEN: usize = 255;

/// Compression pointers a single name may follow before it is treated as a loop.
pub const MAX_POINTER_HOPS: usize = 16;

const POINTER_TAG: u8 = 0xC0;

/// Appends `name` as a length-prefixed label sequence plus the root terminator.
///
/// One trailing dot (absolute form) is accepted and ignored.
pub fn encode_name(name: &str, out: &mut Vec<u8>) -> Result<(), ConstructionError> {
    let relative = name.strip_suffix('.').unwrap_or(name);

    if relative.is_empty() {
        return Err(ConstructionError::InvalidInput(
            "domain name is empty".to_string(),
        ));
    }

    for label in relative.split('.') {
        if label.is_empty() {
            return Err(ConstructionError::InvalidInput(format!(
                "empty label in '{}'",
                name
            )));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(ConstructionError::LabelTooLong {
                label: label.to_string(),
                len: label.len(),
            });
        }
        if label
            .chars()
            .any(|c| c.is_whitespace() || c.is_control())
        {
            return Err(ConstructionError::InvalidInput(format!(
                "label '{}' contains whitespace or control characters",
                label.escape_debug()
            )));
        }

        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }

    out.push(0x00);
    Ok(())
}

/// Reads the name starting at `start`, following RFC 1035 compression pointers.
///
/// Returns the dotted name (no trailing dot) and the position right after the
/// name as it appears at `start`, i.e. after the first pointer if one was taken.
pub fn read_name(message: &[u8], start: usize) -> Result<(String, usize), DecodeError> {
    let mut name = String::new();
    let mut pos = start;
    let mut resume_at: Option<usize> = None;
    let mut hops = 0usize;

    loop {
        let control = byte_at(message, pos)?;

        match control & POINTER_TAG {
            POINTER_TAG => {
                let low = byte_at(message, pos + 1)?;
                hops += 1;
                if hops > MAX_POINTER_HOPS {
                    return Err(DecodeError::MalformedName {
                        offset: pos,
                        reason: "too many compression pointers",
                    });
                }

                let target = (usize::from(control & !POINTER_TAG) << 8) | usize::from(low);
                if target >= message.len() {
                    return Err(DecodeError::MalformedName {
                        offset: pos,
                        reason: "compression pointer outside message",
                    });
                }

                resume_at.get_or_insert(pos + 2);
                pos = target;
            }
            0x00 if control == 0 => {
                return Ok((name, resume_at.unwrap_or(pos + 1)));
            }
            0x00 => {
                let len = usize::from(control);
                let label = message
                    .get(pos + 1..pos + 1 + len)
                    .ok_or(DecodeError::MalformedName {
                        offset: pos,
                        reason: "label runs past end of message",
                    })?;
                push_label(&mut name, label, pos)?;
                pos += 1 + len;
            }
            _ => {
                return Err(DecodeError::MalformedName {
                    offset: pos,
                    reason: "reserved label type",
                });
            }
        }
    }
}

/// Appends a label, separated by `.`, refusing to grow past [`MAX_NAME_LEN`].
pub(crate) fn push_label(name: &mut String, label: &[u8], offset: usize) -> Result<(), DecodeError> {
    let text = String::from_utf8_lossy(label);
    let separator = usize::from(!name.is_empty());
    if name.len() + separator + text.len() > MAX_NAME_LEN {
        return Err(DecodeError::MalformedName {
            offset,
            reason: "name exceeds 255 bytes",
        });
    }

    if separator == 1 {
        name.push('.');
    }
    name.push_str(&text);
    Ok(())
}

pub(crate) fn byte_at(message: &[u8], pos: usize) -> Result<u8, DecodeError> {
    message
        .get(pos)
        .copied()
        .ok_or(DecodeError::MalformedName {
            offset: pos,
            reason: "name runs past end of message",
        })
}
