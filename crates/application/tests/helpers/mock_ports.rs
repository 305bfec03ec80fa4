#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_lookup_application::ports::{MessageCodec, UpstreamTransport};
use ferrous_lookup_domain::{
    ConstructionError, DecodeError, LookupOutcome, Query, RecordType, TransportError,
};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

pub const QUERY_ID: u16 = 0x474C;

/// `example.com A` with [`QUERY_ID`].
pub fn example_query_bytes() -> Vec<u8> {
    let mut bytes = QUERY_ID.to_be_bytes().to_vec();
    bytes.extend_from_slice(&[0x01, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);
    bytes.extend_from_slice(b"\x07example\x03com\x00\x00\x01\x00\x01");
    bytes
}

pub fn response_with_id(id: u16) -> Vec<u8> {
    let mut bytes = example_query_bytes();
    bytes[0..2].copy_from_slice(&id.to_be_bytes());
    bytes[2] = 0x81;
    bytes[3] = 0x80;
    bytes
}

#[derive(Clone)]
pub struct MockCodec {
    outcome: Arc<Mutex<Result<LookupOutcome, DecodeError>>>,
    build_error: Arc<Mutex<Option<ConstructionError>>>,
    decoded: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl MockCodec {
    pub fn new() -> Self {
        Self {
            outcome: Arc::new(Mutex::new(Ok(LookupOutcome::NoRecordsFound))),
            build_error: Arc::new(Mutex::new(None)),
            decoded: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn set_outcome(&self, outcome: Result<LookupOutcome, DecodeError>) {
        *self.outcome.lock().unwrap() = outcome;
    }

    pub fn set_build_error(&self, error: ConstructionError) {
        *self.build_error.lock().unwrap() = Some(error);
    }

    pub fn decoded_responses(&self) -> Vec<Vec<u8>> {
        self.decoded.lock().unwrap().clone()
    }
}

impl Default for MockCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageCodec for MockCodec {
    fn build_query(&self, input: &str) -> Result<Query, ConstructionError> {
        if let Some(error) = self.build_error.lock().unwrap().clone() {
            return Err(error);
        }
        Query::from_parts(input, "example.com", RecordType::A, example_query_bytes())
    }

    fn decode_response(
        &self,
        response: &[u8],
        _query: &Query,
    ) -> Result<LookupOutcome, DecodeError> {
        self.decoded.lock().unwrap().push(response.to_vec());
        self.outcome.lock().unwrap().clone()
    }
}

#[derive(Clone)]
pub struct MockTransport {
    server: SocketAddr,
    response: Arc<Mutex<Result<Vec<u8>, TransportError>>>,
    sent: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            server: "127.0.0.1:5353".parse().unwrap(),
            response: Arc::new(Mutex::new(Ok(response_with_id(QUERY_ID)))),
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn set_response(&self, response: Result<Vec<u8>, TransportError>) {
        *self.response.lock().unwrap() = response;
    }

    pub fn sent_messages(&self) -> Vec<Vec<u8>> {
        self.sent.lock().unwrap().clone()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UpstreamTransport for MockTransport {
    async fn exchange(&self, message_bytes: &[u8]) -> Result<Vec<u8>, TransportError> {
        self.sent.lock().unwrap().push(message_bytes.to_vec());
        self.response.lock().unwrap().clone()
    }

    fn server(&self) -> SocketAddr {
        self.server
    }

    fn protocol_name(&self) -> &'static str {
        "MOCK"
    }
}
