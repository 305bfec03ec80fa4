//! DNS Message Builder
//!
//! Frames a single-question recursive query in wire format. The input decides
//! the lookup kind: a dotted-quad IPv4 address becomes a PTR query for its
//! `in-addr.arpa` name (RFC 1035 §3.5), anything else an A query.

use super::name::encode_name;
use ferrous_lookup_domain::{ConstructionError, Query, RecordType, MAX_UDP_MESSAGE_SIZE};
use std::net::Ipv4Addr;
use tracing::{debug, warn};

const REVERSE_ZONE: &str = "in-addr.arpa";

/// QR=0, OPCODE=QUERY, RD=1
const FLAGS_RECURSIVE_QUERY: [u8; 2] = [0x01, 0x00];

const CLASS_IN: u16 = 1;

/// Longest presentation-form name RFC 1035 allows.
const MAX_PRESENTATION_LEN: usize = 253;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a query with a random transaction ID
    pub fn build_query(input: &str) -> Result<Query, ConstructionError> {
        Self::build_query_with_id(input, fastrand::u16(..))
    }

    /// Build a query with a caller-chosen transaction ID
    pub fn build_query_with_id(input: &str, id: u16) -> Result<Query, ConstructionError> {
        if input.is_empty() {
            return Err(ConstructionError::InvalidInput(
                "nothing to look up".to_string(),
            ));
        }

        let (qname, record_type) = Self::classify(input);
        if qname.trim_end_matches('.').len() > MAX_PRESENTATION_LEN {
            warn!(
                name_len = qname.len(),
                "Name is longer than 253 characters; servers will likely reject it"
            );
        }

        let mut buf = Vec::with_capacity(MAX_UDP_MESSAGE_SIZE);
        buf.extend_from_slice(&id.to_be_bytes());
        buf.extend_from_slice(&FLAGS_RECURSIVE_QUERY);
        buf.extend_from_slice(&1u16.to_be_bytes()); // QDCOUNT
        buf.extend_from_slice(&[0x00; 6]); // ANCOUNT, NSCOUNT, ARCOUNT

        encode_name(&qname, &mut buf)?;
        buf.extend_from_slice(&record_type.to_u16().to_be_bytes());
        buf.extend_from_slice(&CLASS_IN.to_be_bytes());

        if buf.len() > MAX_UDP_MESSAGE_SIZE {
            return Err(ConstructionError::MessageTooLarge {
                len: buf.len(),
                max: MAX_UDP_MESSAGE_SIZE,
            });
        }

        debug!(
            input = input,
            qname = %qname,
            record_type = %record_type,
            id = id,
            bytes = buf.len(),
            "DNS query built"
        );

        Query::from_parts(input, qname, record_type, buf)
    }

    /// Decide the lookup kind and the name to put in the question
    pub fn classify(input: &str) -> (String, RecordType) {
        match Self::parse_dotted_quad(input) {
            Some(addr) => (Self::reverse_name(addr), RecordType::PTR),
            None => (input.to_string(), RecordType::A),
        }
    }

    /// Four dot-separated decimal groups, each 0-255. Unlike
    /// `Ipv4Addr::from_str`, leading zeros are accepted (`192.168.001.1`).
    pub fn parse_dotted_quad(input: &str) -> Option<Ipv4Addr> {
        let mut octets = [0u8; 4];
        let mut groups = input.split('.');

        for octet in octets.iter_mut() {
            let group = groups.next()?;
            if group.is_empty() || !group.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            *octet = group.parse().ok()?;
        }

        match groups.next() {
            Some(_) => None,
            None => Some(Ipv4Addr::from(octets)),
        }
    }

    /// `a.b.c.d` becomes `d.c.b.a.in-addr.arpa`
    pub fn reverse_name(addr: Ipv4Addr) -> String {
        let [a, b, c, d] = addr.octets();
        format!("{}.{}.{}.{}.{}", d, c, b, a, REVERSE_ZONE)
    }
}
