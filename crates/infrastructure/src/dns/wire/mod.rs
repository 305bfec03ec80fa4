//! DNS wire-format codec: query framing and response decoding.

pub mod header;
pub mod heuristic;
pub mod message_builder;
pub mod name;
pub mod response_parser;

use ferrous_lookup_application::ports::MessageCodec;
use ferrous_lookup_domain::{ConstructionError, DecodeError, DecodeMode, LookupOutcome, Query};
use tracing::debug;

pub use header::MessageHeader;
pub use message_builder::MessageBuilder;
pub use response_parser::ResponseParser;

/// [`MessageCodec`] over the raw RFC 1035 wire format.
pub struct WireCodec {
    parser: ResponseParser,
}

impl WireCodec {
    pub fn new(mode: DecodeMode) -> Self {
        Self {
            parser: ResponseParser::new(mode),
        }
    }

    pub fn mode(&self) -> DecodeMode {
        self.parser.mode()
    }
}

impl Default for WireCodec {
    fn default() -> Self {
        Self::new(DecodeMode::default())
    }
}

impl MessageCodec for WireCodec {
    fn build_query(&self, input: &str) -> Result<Query, ConstructionError> {
        MessageBuilder::build_query(input)
    }

    fn decode_response(
        &self,
        response: &[u8],
        query: &Query,
    ) -> Result<LookupOutcome, DecodeError> {
        debug!(
            input = %query.original_input(),
            bytes = response.len(),
            mode = %self.parser.mode(),
            "Decoding response"
        );
        self.parser.decode(response, query.record_type())
    }
}
