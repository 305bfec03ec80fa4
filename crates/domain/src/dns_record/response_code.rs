use std::fmt;

/// RCODE carried in the low four bits of the fourth header byte (RFC 1035 §4.1.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    NoError,
    FormErr,
    ServFail,
    NXDomain,
    NotImp,
    Refused,
    Other(u8),
}

impl ResponseCode {
    /// Extracts the RCODE from the flags byte at offset 3.
    pub fn from_flags_byte(byte: u8) -> Self {
        Self::from_u8(byte & 0x0F)
    }

    pub fn from_u8(code: u8) -> Self {
        match code {
            0 => ResponseCode::NoError,
            1 => ResponseCode::FormErr,
            2 => ResponseCode::ServFail,
            3 => ResponseCode::NXDomain,
            4 => ResponseCode::NotImp,
            5 => ResponseCode::Refused,
            other => ResponseCode::Other(other),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::FormErr => "FORMERR",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::Other(_) => "UNKNOWN",
        }
    }

    /// Only SERVFAIL and NXDOMAIN stop the decoder before the answer scan.
    pub fn short_circuits(&self) -> bool {
        matches!(self, ResponseCode::ServFail | ResponseCode::NXDomain)
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseCode::Other(code) => write!(f, "RCODE{}", code),
            known => write!(f, "{}", known.as_str()),
        }
    }
}
