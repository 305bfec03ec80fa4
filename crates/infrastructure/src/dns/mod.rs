pub mod transport;
pub mod wire;

pub use transport::{create_transport, UdpTransport};
pub use wire::{MessageBuilder, ResponseParser, WireCodec};
