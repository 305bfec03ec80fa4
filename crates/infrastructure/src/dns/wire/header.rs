use ferrous_lookup_domain::{DecodeError, ResponseCode, HEADER_LEN};

const QR_BIT: u8 = 0x80;
const TC_BIT: u8 = 0x02;

/// Read-only view of the fixed 12-byte message header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageHeader {
    pub id: u16,
    pub flags: [u8; 2],
    pub qdcount: u16,
    pub ancount: u16,
    pub nscount: u16,
    pub arcount: u16,
}

impl MessageHeader {
    pub fn parse(message: &[u8]) -> Result<Self, DecodeError> {
        let header = message
            .get(..HEADER_LEN)
            .ok_or(DecodeError::Truncated {
                len: message.len(),
                needed: HEADER_LEN,
            })?;

        let word = |at: usize| u16::from_be_bytes([header[at], header[at + 1]]);

        Ok(Self {
            id: word(0),
            flags: [header[2], header[3]],
            qdcount: word(4),
            ancount: word(6),
            nscount: word(8),
            arcount: word(10),
        })
    }

    pub fn is_response(&self) -> bool {
        self.flags[0] & QR_BIT != 0
    }

    pub fn is_truncated(&self) -> bool {
        self.flags[0] & TC_BIT != 0
    }

    pub fn response_code(&self) -> ResponseCode {
        ResponseCode::from_flags_byte(self.flags[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header_fields() {
        let bytes = [
            0x12, 0x34, 0x81, 0x83, 0x00, 0x01, 0x00, 0x02, 0x00, 0x03, 0x00, 0x04,
        ];
        let header = MessageHeader::parse(&bytes).unwrap();

        assert_eq!(header.id, 0x1234);
        assert!(header.is_response());
        assert!(!header.is_truncated());
        assert_eq!(header.response_code(), ResponseCode::NXDomain);
        assert_eq!(
            (header.qdcount, header.ancount, header.nscount, header.arcount),
            (1, 2, 3, 4)
        );
    }

    #[test]
    fn test_parse_short_buffer() {
        assert_eq!(
            MessageHeader::parse(&[0u8; 11]),
            Err(DecodeError::Truncated { len: 11, needed: 12 })
        );
    }

    #[test]
    fn test_query_flags() {
        let bytes = [0xAB, 0xCD, 0x01, 0x00, 0x00, 0x01, 0, 0, 0, 0, 0, 0];
        let header = MessageHeader::parse(&bytes).unwrap();
        assert!(!header.is_response());
        assert_eq!(header.response_code(), ResponseCode::NoError);
    }
}
