use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Print hex dumps of the outgoing query and the raw response.
    #[serde(default = "default_hex_dump")]
    pub hex_dump: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            hex_dump: default_hex_dump(),
        }
    }
}

fn default_hex_dump() -> bool {
    true
}
