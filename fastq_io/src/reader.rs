use std::fs::File;
use std::io;
use std::path::Path;

use seq_io::fastq::Record as _;

use crate::error::FastqError;
use crate::record::RefRecord;

// Thin layer over seq_io's FASTQ reader that counts records so errors can name the failing one
pub struct FastqReader<R: io::Read>{
    reader: seq_io::fastq::Reader<R>,
    records_read: u64,
}

impl FastqReader<File>{
    pub fn from_path<P: AsRef<Path>>(path: P) -> io::Result<Self>{
        let file = File::open(path)?;
        Ok(Self::new(file))
    }
}

impl<R: io::Read> FastqReader<R>{

    // No need to give a buffered reader. seq_io buffers internally.
    pub fn new(input: R) -> Self{
        FastqReader{reader: seq_io::fastq::Reader::new(input), records_read: 0}
    }

    // Number of records returned so far
    pub fn records_read(&self) -> u64{
        self.records_read
    }

    /// Reads the next four-line record. Returns `Ok(None)` only when the
    /// stream ends cleanly at a record boundary.
    pub fn read_next(&mut self) -> Result<Option<RefRecord<'_>>, FastqError>{
        let record = self.records_read + 1;
        match self.reader.next(){
            None => Ok(None), // End of stream
            Some(Err(e)) => Err(FastqError::from_seq_io(e, record)),
            Some(Ok(rec)) => {
                // The quality line must cover the sequence exactly
                if rec.seq().len() != rec.qual().len(){
                    return Err(FastqError::QualityLengthMismatch{record, seq_len: rec.seq().len(), qual_len: rec.qual().len()});
                }
                self.records_read = record;
                Ok(Some(RefRecord::new(rec)))
            }
        }
    }
}
