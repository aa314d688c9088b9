//! The match stage: parsing range responses and extracting breach counts.

use tracing::warn;

/// One `SUFFIX:COUNT` record from a range response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub suffix: String,
    pub count: u64,
}

/// A response line that does not conform to `SUFFIX:COUNT`.
#[derive(Debug, thiserror::Error)]
#[error("malformed range record {line:?}: expected SUFFIX:COUNT")]
pub struct MalformedRecord {
    pub line: String,
}

impl Record {
    /// Parses a single record line, splitting on the first colon.
    pub fn parse(line: &str) -> Result<Self, MalformedRecord> {
        let malformed = || MalformedRecord { line: line.to_string() };

        let (suffix, count) = line.split_once(':').ok_or_else(malformed)?;
        if suffix.is_empty() {
            return Err(malformed());
        }
        let count = count.trim().parse::<u64>().map_err(|_| malformed())?;

        Ok(Record { suffix: suffix.to_string(), count })
    }
}

/// Every known fingerprint suffix sharing one queried prefix, with breach
/// counts. Lives only for the duration of a single match.
#[derive(Debug, Default)]
pub struct CandidateBatch {
    records: Vec<Record>,
}

impl CandidateBatch {
    /// Parses a range response body (newline-delimited records, CRLF
    /// tolerated).
    ///
    /// The body is externally produced, so a malformed record is skipped
    /// with a warning rather than sinking the hundreds of valid records
    /// around it.
    pub fn parse(body: &str) -> Self {
        let mut records = Vec::new();
        for line in body.lines() {
            if line.is_empty() {
                continue;
            }
            match Record::parse(line) {
                Ok(record) => records.push(record),
                Err(e) => warn!("skipping {e}"),
            }
        }
        CandidateBatch { records }
    }

    /// Number of breaches the given suffix appears in, 0 when absent.
    ///
    /// Comparison is exact but ignores hex casing, so a lowercase record
    /// can never silently fail to match an uppercase suffix. The first
    /// matching record wins.
    pub fn leak_count(&self, suffix: &str) -> u64 {
        self.records
            .iter()
            .find(|record| record.suffix.eq_ignore_ascii_case(suffix))
            .map_or(0, |record| record.count)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
