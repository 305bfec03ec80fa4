use std::fmt;

/// Record types this tool can ask for.
///
/// A forward lookup asks for `A`, a reverse lookup for `PTR`. Everything else
/// a server may put in the answer section is skipped by the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    PTR,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::PTR => "PTR",
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::PTR => 12,
        }
    }

    /// Low byte of the QTYPE, the only byte the heuristic answer scan compares.
    pub fn wire_marker(&self) -> u8 {
        self.to_u16() as u8
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
