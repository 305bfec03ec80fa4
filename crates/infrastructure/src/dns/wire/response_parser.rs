use super::header::MessageHeader;
use super::heuristic;
use super::name::read_name;
use ferrous_lookup_domain::{
    DecodeError, DecodeMode, LookupOutcome, RecordType, ResponseCode, HEADER_LEN,
};
use std::net::Ipv4Addr;
use tracing::{debug, warn};

const CLASS_IN: u16 = 1;

/// TYPE(2) + CLASS(2) + TTL(4) + RDLENGTH(2)
const RECORD_FIXED_LEN: usize = 10;

/// QTYPE(2) + QCLASS(2)
const QUESTION_FIXED_LEN: usize = 4;

pub struct ResponseParser {
    mode: DecodeMode,
}

impl ResponseParser {
    pub fn new(mode: DecodeMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> DecodeMode {
        self.mode
    }

    /// Decode a raw response into the answers matching `record_type`.
    ///
    /// SERVFAIL and NXDOMAIN are reported before anything past the header is
    /// looked at.
    pub fn decode(
        &self,
        message: &[u8],
        record_type: RecordType,
    ) -> Result<LookupOutcome, DecodeError> {
        let header = MessageHeader::parse(message)?;

        let rcode = header.response_code();
        if rcode.short_circuits() {
            return Ok(match rcode {
                ResponseCode::ServFail => LookupOutcome::ServerFailure,
                _ => LookupOutcome::NameError,
            });
        }
        if rcode != ResponseCode::NoError {
            debug!(rcode = %rcode, "Non-fatal response code, scanning answers anyway");
        }

        let records = match self.mode {
            DecodeMode::Structured => Self::walk_answers(message, &header, record_type)?,
            DecodeMode::Heuristic => heuristic::scan(message, record_type)?,
        };

        debug!(
            mode = %self.mode,
            record_type = %record_type,
            ancount = header.ancount,
            matched = records.len(),
            "DNS response decoded"
        );

        Ok(LookupOutcome::from(records))
    }

    fn walk_answers(
        message: &[u8],
        header: &MessageHeader,
        record_type: RecordType,
    ) -> Result<Vec<String>, DecodeError> {
        if !header.is_response() {
            return Err(DecodeError::NotAResponse);
        }

        let mut records = Vec::new();
        match Self::collect(message, header, record_type, &mut records) {
            Ok(()) => Ok(records),
            Err(e) if header.is_truncated() => {
                warn!(
                    error = %e,
                    kept = records.len(),
                    "Truncated response (TC=1), keeping the answers read so far"
                );
                Ok(records)
            }
            Err(e) => Err(e),
        }
    }

    fn collect(
        message: &[u8],
        header: &MessageHeader,
        record_type: RecordType,
        records: &mut Vec<String>,
    ) -> Result<(), DecodeError> {
        let mut pos = HEADER_LEN;

        for _ in 0..header.qdcount {
            let (_, after_name) = read_name(message, pos)?;
            pos = after_name + QUESTION_FIXED_LEN;
            if pos > message.len() {
                return Err(DecodeError::MalformedRecord {
                    offset: after_name,
                    reason: "question runs past end of message",
                });
            }
        }

        for _ in 0..header.ancount {
            let (_, after_owner) = read_name(message, pos)?;
            let fixed = message
                .get(after_owner..after_owner + RECORD_FIXED_LEN)
                .ok_or(DecodeError::MalformedRecord {
                    offset: after_owner,
                    reason: "record header runs past end of message",
                })?;

            let rtype = u16::from_be_bytes([fixed[0], fixed[1]]);
            let class = u16::from_be_bytes([fixed[2], fixed[3]]);
            let rdlength = usize::from(u16::from_be_bytes([fixed[8], fixed[9]]));

            let rdata_start = after_owner + RECORD_FIXED_LEN;
            let rdata = message
                .get(rdata_start..rdata_start + rdlength)
                .ok_or(DecodeError::MalformedRecord {
                    offset: rdata_start,
                    reason: "rdata runs past end of message",
                })?;

            if class == CLASS_IN && rtype == record_type.to_u16() {
                match record_type {
                    RecordType::A => {
                        let octets: [u8; 4] =
                            rdata.try_into().map_err(|_| DecodeError::MalformedRecord {
                                offset: rdata_start,
                                reason: "A record rdata is not 4 bytes",
                            })?;
                        records.push(Ipv4Addr::from(octets).to_string());
                    }
                    RecordType::PTR => {
                        let (name, _) = read_name(message, rdata_start)?;
                        records.push(name);
                    }
                }
            }

            pos = rdata_start + rdlength;
        }

        Ok(())
    }
}
