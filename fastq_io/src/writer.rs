use std::fs::File;
use std::io;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

use crate::record::Record;

pub struct FastqWriter<W: Write>{
    output: BufWriter<W>,
    records_written: u64,
}

impl FastqWriter<File>{
    // Truncates an existing file
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self>{
        Ok(Self::new(File::create(path)?))
    }
}

impl<W: Write> FastqWriter<W>{

    // No need to give a buffered writer. Buffering is handled internally.
    pub fn new(output: W) -> Self{
        Self{
            output: BufWriter::<W>::new(output),
            records_written: 0,
        }
    }

    pub fn write<Rec: Record>(&mut self, rec: &Rec) -> io::Result<()>{
        seq_io::fastq::write_to(&mut self.output, rec.head(), rec.seq(), rec.qual())?;
        self.records_written += 1;
        Ok(())
    }

    pub fn records_written(&self) -> u64{
        self.records_written
    }

    pub fn flush(&mut self) -> io::Result<()>{
        self.output.flush()
    }

    // Flushes and gives back the underlying stream
    pub fn into_inner(self) -> io::Result<W>{
        self.output.into_inner().map_err(|e| e.into_error())
    }
}
