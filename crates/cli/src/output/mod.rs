pub mod hex_dump;
pub mod report;
