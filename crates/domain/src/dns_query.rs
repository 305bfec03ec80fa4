use super::{ConstructionError, RecordType};
use std::sync::Arc;

/// Classic DNS-over-UDP message ceiling (RFC 1035 §2.3.4).
pub const MAX_UDP_MESSAGE_SIZE: usize = 512;

/// Every DNS message starts with a fixed 12-byte header.
pub const HEADER_LEN: usize = 12;

/// A fully framed query, ready to transmit.
///
/// Built once per lookup and never mutated afterwards; the wire bytes are
/// only reachable through a shared slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    original_input: Arc<str>,
    qname: Arc<str>,
    record_type: RecordType,
    wire_bytes: Vec<u8>,
}

impl Query {
    /// Wraps already-encoded bytes, checking the framing invariants.
    pub fn from_parts(
        original_input: impl Into<Arc<str>>,
        qname: impl Into<Arc<str>>,
        record_type: RecordType,
        wire_bytes: Vec<u8>,
    ) -> Result<Self, ConstructionError> {
        if wire_bytes.len() > MAX_UDP_MESSAGE_SIZE {
            return Err(ConstructionError::MessageTooLarge {
                len: wire_bytes.len(),
                max: MAX_UDP_MESSAGE_SIZE,
            });
        }
        // header + root label + QTYPE + QCLASS
        if wire_bytes.len() < HEADER_LEN + 5 {
            return Err(ConstructionError::InvalidInput(format!(
                "query message of {} bytes has no question",
                wire_bytes.len()
            )));
        }

        Ok(Self {
            original_input: original_input.into(),
            qname: qname.into(),
            record_type,
            wire_bytes,
        })
    }

    /// The string the user typed, kept for display.
    pub fn original_input(&self) -> &str {
        &self.original_input
    }

    /// The name actually encoded in the question (the `in-addr.arpa` form for reverse lookups).
    pub fn qname(&self) -> &str {
        &self.qname
    }

    pub fn record_type(&self) -> RecordType {
        self.record_type
    }

    pub fn wire_bytes(&self) -> &[u8] {
        &self.wire_bytes
    }

    pub fn len(&self) -> usize {
        self.wire_bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wire_bytes.is_empty()
    }

    pub fn id(&self) -> u16 {
        u16::from_be_bytes([self.wire_bytes[0], self.wire_bytes[1]])
    }
}
