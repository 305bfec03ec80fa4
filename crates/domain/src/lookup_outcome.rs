/// What a successfully parsed response says about the lookup.
///
/// These are not errors: the response was well-formed, it just may not
/// carry the answer that was asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// Decoded values in scan order: dotted-quad addresses for `A`, names for `PTR`.
    Success(Vec<String>),

    /// RCODE 2: the server could not process the query.
    ServerFailure,

    /// RCODE 3 (NXDOMAIN): the queried name does not exist.
    NameError,

    /// The response carried no answer of the requested type.
    NoRecordsFound,
}

impl LookupOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, LookupOutcome::Success(_))
    }

    pub fn records(&self) -> &[String] {
        match self {
            LookupOutcome::Success(records) => records,
            _ => &[],
        }
    }

    pub fn status(&self) -> &'static str {
        match self {
            LookupOutcome::Success(_) => "NOERROR",
            LookupOutcome::ServerFailure => "SERVFAIL",
            LookupOutcome::NameError => "NXDOMAIN",
            LookupOutcome::NoRecordsFound => "NODATA",
        }
    }
}

impl From<Vec<String>> for LookupOutcome {
    fn from(records: Vec<String>) -> Self {
        if records.is_empty() {
            LookupOutcome::NoRecordsFound
        } else {
            LookupOutcome::Success(records)
        }
    }
}
