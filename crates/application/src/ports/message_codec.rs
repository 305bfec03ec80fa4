use ferrous_lookup_domain::{ConstructionError, DecodeError, LookupOutcome, Query};

/// Turns lookup input into wire bytes and wire bytes back into an outcome.
pub trait MessageCodec: Send + Sync {
    fn build_query(&self, input: &str) -> Result<Query, ConstructionError>;

    /// Decode `response` in the context of the query that produced it.
    fn decode_response(&self, response: &[u8], query: &Query)
        -> Result<LookupOutcome, DecodeError>;
}
