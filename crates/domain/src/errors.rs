use thiserror::Error;

/// Failures while turning user input into a query message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    #[error("Label '{label}' is {len} bytes long (max 63)")]
    LabelTooLong { label: String, len: usize },

    #[error("Encoded query is {len} bytes, exceeding the {max}-byte UDP limit")]
    MessageTooLarge { len: usize, max: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Failures of the single UDP exchange with the nameserver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Failed to create UDP socket: {0}")]
    SocketCreateFailed(String),

    #[error("Failed to send query to {server}: {reason}")]
    SendFailed { server: String, reason: String },

    #[error("Failed to receive response from {server}: {reason}")]
    ReceiveFailed { server: String, reason: String },

    #[error("Timed out after {timeout_ms}ms waiting for {server}")]
    Timeout { server: String, timeout_ms: u64 },
}

/// Failures while reading a response buffer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Response truncated: {len} bytes, need at least {needed}")]
    Truncated { len: usize, needed: usize },

    #[error("Malformed name at offset {offset}: {reason}")]
    MalformedName { offset: usize, reason: &'static str },

    #[error("Malformed record at offset {offset}: {reason}")]
    MalformedRecord { offset: usize, reason: &'static str },

    #[error("Message is a query, not a response")]
    NotAResponse,
}

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}
