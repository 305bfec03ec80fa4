use crate::ports::{MessageCodec, UpstreamTransport};
use ferrous_lookup_domain::{DomainError, LookupOutcome, Query};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Raw result of one round trip to the nameserver.
#[derive(Debug, Clone)]
pub struct Exchange {
    pub response: Vec<u8>,
    pub elapsed: Duration,
    pub server: SocketAddr,
}

impl Exchange {
    pub fn response_id(&self) -> Option<u16> {
        match self.response.get(..2) {
            Some(&[hi, lo]) => Some(u16::from_be_bytes([hi, lo])),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LookupReport {
    pub query: Query,
    pub exchange: Exchange,
    pub outcome: LookupOutcome,
}

/// Single lookup: build the query, exchange it once, decode the answer.
///
/// The steps are exposed separately so callers can inspect the raw bytes in
/// between; [`LookupUseCase::execute`] runs all three.
pub struct LookupUseCase {
    codec: Arc<dyn MessageCodec>,
    transport: Arc<dyn UpstreamTransport>,
}

impl LookupUseCase {
    pub fn new(codec: Arc<dyn MessageCodec>, transport: Arc<dyn UpstreamTransport>) -> Self {
        Self { codec, transport }
    }

    pub fn prepare(&self, input: &str) -> Result<Query, DomainError> {
        let query = self.codec.build_query(input)?;

        debug!(
            input = %query.original_input(),
            qname = %query.qname(),
            record_type = %query.record_type(),
            id = query.id(),
            "Lookup prepared"
        );

        Ok(query)
    }

    pub async fn exchange(&self, query: &Query) -> Result<Exchange, DomainError> {
        let start = Instant::now();
        let response = self.transport.exchange(query.wire_bytes()).await?;

        let exchange = Exchange {
            response,
            elapsed: start.elapsed(),
            server: self.transport.server(),
        };

        if let Some(id) = exchange.response_id() {
            if id != query.id() {
                warn!(
                    expected = query.id(),
                    received = id,
                    server = %exchange.server,
                    "Response transaction ID does not match query"
                );
            }
        }

        debug!(
            server = %exchange.server,
            protocol = self.transport.protocol_name(),
            bytes = exchange.response.len(),
            elapsed_ms = exchange.elapsed.as_millis() as u64,
            "Exchange completed"
        );

        Ok(exchange)
    }

    pub fn decode(&self, query: &Query, exchange: &Exchange) -> Result<LookupOutcome, DomainError> {
        let outcome = self.codec.decode_response(&exchange.response, query)?;

        debug!(
            input = %query.original_input(),
            status = outcome.status(),
            records = outcome.records().len(),
            "Lookup decoded"
        );

        Ok(outcome)
    }

    pub async fn execute(&self, input: &str) -> Result<LookupReport, DomainError> {
        let query = self.prepare(input)?;
        let exchange = self.exchange(&query).await?;
        let outcome = self.decode(&query, &exchange)?;

        Ok(LookupReport {
            query,
            exchange,
            outcome,
        })
    }
}
