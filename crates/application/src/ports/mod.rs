mod message_codec;
mod upstream_transport;

pub use message_codec::MessageCodec;
pub use upstream_transport::UpstreamTransport;
