mod record_type;
mod response_code;

pub use record_type::RecordType;
pub use response_code::ResponseCode;
