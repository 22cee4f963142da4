use std::io;
use thiserror::Error;

/// Errors from FASTQ parsing. Record numbers are 1-based.
#[derive(Debug, Error)]
pub enum FastqError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("FASTQ record {record}: file ends inside the record")]
    Truncated { record: u64 },

    #[error("FASTQ record {record}: header line does not start with '@'")]
    MissingHeaderMarker { record: u64 },

    #[error("FASTQ record {record}: separator line does not start with '+'")]
    MissingSeparator { record: u64 },

    #[error("FASTQ record {record}: quality line has different length than sequence line ({qual_len} vs {seq_len})")]
    QualityLengthMismatch {
        record: u64,
        seq_len: usize,
        qual_len: usize,
    },

    #[error("FASTQ record {record}: {source}")]
    Malformed {
        record: u64,
        #[source]
        source: seq_io::fastq::Error,
    },
}

impl FastqError {
    pub(crate) fn from_seq_io(e: seq_io::fastq::Error, record: u64) -> Self {
        use seq_io::fastq::Error as E;
        match e {
            E::Io(e) => FastqError::Io(e),
            E::UnexpectedEnd { .. } => FastqError::Truncated { record },
            E::InvalidStart { .. } => FastqError::MissingHeaderMarker { record },
            E::InvalidSep { .. } => FastqError::MissingSeparator { record },
            E::UnequalLengths { seq, qual, .. } => FastqError::QualityLengthMismatch { record, seq_len: seq, qual_len: qual },
            other => FastqError::Malformed { record, source: other },
        }
    }
}
