use super::hex_dump;
use ferrous_lookup_domain::{LookupOutcome, RecordType};
use std::fmt::Write;
use std::net::SocketAddr;
use std::time::Duration;

/// Titled hex dump of one message, e.g. `DNS Query (29 bytes):`.
pub fn render_dump(title: &str, bytes: &[u8]) -> String {
    format!("{} ({} bytes):\n{}\n", title, bytes.len(), hex_dump::render(bytes))
}

/// Human-readable answer for one lookup.
pub fn render_outcome(
    input: &str,
    record_type: RecordType,
    server: SocketAddr,
    outcome: &LookupOutcome,
) -> String {
    let mut out = String::new();

    match outcome {
        LookupOutcome::ServerFailure => {
            let _ = writeln!(out, "nameserver {} returned SERVFAIL:", server.ip());
            out.push_str("  the name server was unable to process this query due to a\n");
            out.push_str("  problem with the name server.\n");
        }
        LookupOutcome::NameError => {
            let _ = writeln!(out, "nameserver {} returned NXDOMAIN for {}:", server.ip(), input);
            out.push_str("  the domain name referenced in the query does not exist\n");
        }
        LookupOutcome::Success(records) => {
            let _ = writeln!(out, "{} for {}:", heading(record_type), input);
            for record in records {
                let _ = writeln!(out, "  {}", record);
            }
        }
        LookupOutcome::NoRecordsFound => {
            let _ = writeln!(out, "{} for {}:", heading(record_type), input);
            let _ = writeln!(out, "  no {} found in the DNS response!", missing(record_type));
        }
    }

    out
}

pub fn render_timing(server: SocketAddr, elapsed: Duration, outcome: &LookupOutcome) -> String {
    format!(
        ";; {} from {} in {} ms\n",
        outcome.status(),
        server,
        elapsed.as_millis()
    )
}

fn heading(record_type: RecordType) -> &'static str {
    match record_type {
        RecordType::A => "IPv4 address(es)",
        RecordType::PTR => "Domain name(s)",
    }
}

fn missing(record_type: RecordType) -> &'static str {
    match record_type {
        RecordType::A => "IPv4 address",
        RecordType::PTR => "domain name",
    }
}
