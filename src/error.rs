use std::fmt;
use std::io;
use std::path::PathBuf;

use fastq_io::FastqError;
use thiserror::Error;

// Which of the two input files something refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mate {
    Read1,
    Read2,
}

impl fmt::Display for Mate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mate::Read1 => write!(f, "read1"),
            Mate::Read2 => write!(f, "read2"),
        }
    }
}

#[derive(Debug, Error)]
pub enum InterleaveError {
    /// The identifier tokens of the two records of a pair differ. `pair` is 1-based.
    #[error("Read FASTQ headers mismatch at pair {pair}: \"{header1}\" vs \"{header2}\"")]
    Mismatch {
        pair: u64,
        header1: String,
        header2: String,
    },

    #[error("Could not open {}: {}", .path.display(), .source)]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error parsing {mate}: {source}")]
    Parse {
        mate: Mate,
        #[source]
        source: FastqError,
    },

    #[error("Error writing output: {0}")]
    Io(#[from] io::Error),
}
