//! Ferrous Lookup Domain Layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod lookup_outcome;

pub use config::{CliOverrides, Config, ConfigError, DecodeMode};
pub use dns_query::{Query, HEADER_LEN, MAX_UDP_MESSAGE_SIZE};
pub use dns_record::{RecordType, ResponseCode};
pub use errors::{ConstructionError, DecodeError, DomainError, TransportError};
pub use lookup_outcome::LookupOutcome;
