#![allow(dead_code)]
//! Hand-assembled response messages with known byte layouts.

pub const EXAMPLE_ID: u16 = 0x474C;
pub const REVERSE_ID: u16 = 0x0808;

/// QR=1, RD=1, RA=1, RCODE=0
pub const FLAGS_OK: [u8; 2] = [0x81, 0x80];

pub const EXAMPLE_COM: &[u8] = b"\x07example\x03com\x00";
pub const EIGHTS_ARPA: &[u8] = b"\x018\x018\x018\x018\x07in-addr\x04arpa\x00";

pub fn header(id: u16, flags: [u8; 2], counts: [u16; 4]) -> Vec<u8> {
    let mut msg = id.to_be_bytes().to_vec();
    msg.extend_from_slice(&flags);
    for count in counts {
        msg.extend_from_slice(&count.to_be_bytes());
    }
    msg
}

/// Appends a record: owner bytes, TYPE, CLASS IN, TTL 3600, RDLENGTH and RDATA.
pub fn push_record(msg: &mut Vec<u8>, owner: &[u8], rtype: u16, rdata: &[u8]) {
    msg.extend_from_slice(owner);
    msg.extend_from_slice(&rtype.to_be_bytes());
    msg.extend_from_slice(&[0x00, 0x01, 0x00, 0x00, 0x0E, 0x10]);
    msg.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
    msg.extend_from_slice(rdata);
}

/// `example.com A` answered with `93.184.216.34`, owner compressed to `C0 0C`.
pub fn example_com_a() -> Vec<u8> {
    let mut msg = header(EXAMPLE_ID, FLAGS_OK, [1, 1, 0, 0]);
    msg.extend_from_slice(EXAMPLE_COM);
    msg.extend_from_slice(&[0x00, 0x01, 0x00, 0x01]);
    push_record(&mut msg, &[0xC0, 0x0C], 1, &[93, 184, 216, 34]);
    msg
}

/// `example.com A` answered with two addresses.
pub fn example_com_two_a() -> Vec<u8> {
    let mut msg = header(EXAMPLE_ID, FLAGS_OK, [1, 2, 0, 0]);
    msg.extend_from_slice(EXAMPLE_COM);
    msg.extend_from_slice(&[0x00, 0x01, 0x00, 0x01]);
    push_record(&mut msg, &[0xC0, 0x0C], 1, &[93, 184, 216, 34]);
    push_record(&mut msg, &[0xC0, 0x0C], 1, &[93, 184, 216, 35]);
    msg
}

/// `8.8.8.8.in-addr.arpa PTR` answered with `dns.google`.
///
/// The PTR rdata is `03 dns C0 38`; offset 0x38 is the owner of an NS
/// record in the authority section spelling `google`.
pub fn eights_ptr() -> Vec<u8> {
    let mut msg = header(REVERSE_ID, FLAGS_OK, [1, 1, 1, 0]);
    msg.extend_from_slice(EIGHTS_ARPA);
    msg.extend_from_slice(&[0x00, 0x0C, 0x00, 0x01]);
    debug_assert_eq!(msg.len(), 38);

    push_record(&mut msg, &[0xC0, 0x0C], 12, b"\x03dns\xC0\x38");
    debug_assert_eq!(msg.len(), 56);

    push_record(&mut msg, b"\x06google\x00", 2, &[0xC0, 0x32]);
    msg
}

/// Header-only response carrying `rcode`, followed by arbitrary junk.
pub fn rcode_only(id: u16, rcode: u8, junk: &[u8]) -> Vec<u8> {
    let mut msg = header(id, [0x81, 0x80 | rcode], [1, 1, 0, 0]);
    msg.extend_from_slice(junk);
    msg
}

/// `example.com A` answered only with a CNAME (no A record).
pub fn example_com_cname_only() -> Vec<u8> {
    let mut msg = header(EXAMPLE_ID, FLAGS_OK, [1, 1, 0, 0]);
    msg.extend_from_slice(EXAMPLE_COM);
    msg.extend_from_slice(&[0x00, 0x01, 0x00, 0x01]);
    push_record(&mut msg, &[0xC0, 0x0C], 5, b"\x03www\xC0\x0C");
    msg
}

/// Replaces the transaction ID of a fixture.
pub fn with_id(mut msg: Vec<u8>, id: u16) -> Vec<u8> {
    msg[0..2].copy_from_slice(&id.to_be_bytes());
    msg
}
