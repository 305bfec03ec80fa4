use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DecoderConfig {
    #[serde(default)]
    pub mode: DecodeMode,
}

/// How the answer section of a response is located.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DecodeMode {
    /// Walk the question and answer sections as counted in the header.
    #[default]
    Structured,

    /// Byte-scan for `0xC0 ?? ?? <type>` patterns, reproducing the output of
    /// the classic scan-based decoder bit for bit.
    Heuristic,
}

impl DecodeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Structured => "structured",
            Self::Heuristic => "heuristic",
        }
    }
}

impl fmt::Display for DecodeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DecodeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "structured" => Ok(Self::Structured),
            "heuristic" | "compat" => Ok(Self::Heuristic),
            _ => Err(format!("Unknown decode mode: {}", s)),
        }
    }
}
