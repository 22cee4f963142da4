use std::fmt;

use seq_io::fastq::Record as SeqIoRecord;

pub trait Record{
    fn head(&self) -> &[u8];
    fn seq(&self) -> &[u8];
    fn qual(&self) -> &[u8];

    // The pairing key: everything in the header before the first space.
    fn id_token(&self) -> &[u8]{
        id_token(self.head())
    }
}

// Borrows the reader's buffer, so it is only valid until the next read.
pub struct RefRecord<'a>{
    inner: seq_io::fastq::RefRecord<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedRecord{
    pub head: Vec<u8>, // Without the leading '@'
    pub seq: Vec<u8>,
    pub qual: Vec<u8>,
}

impl<'a> Record for RefRecord<'a>{
    fn head(&self) -> &[u8]{self.inner.head()}
    fn seq(&self) -> &[u8]{self.inner.seq()}
    fn qual(&self) -> &[u8]{self.inner.qual()}
}

impl Record for OwnedRecord{
    fn head(&self) -> &[u8]{self.head.as_slice()}
    fn seq(&self) -> &[u8]{self.seq.as_slice()}
    fn qual(&self) -> &[u8]{self.qual.as_slice()}
}

impl<'a> RefRecord<'a>{
    pub(crate) fn new(inner: seq_io::fastq::RefRecord<'a>) -> Self{
        RefRecord{inner}
    }

    pub fn to_owned(&self) -> OwnedRecord{
        OwnedRecord {
            head: self.head().to_vec(),
            seq: self.seq().to_vec(),
            qual: self.qual().to_vec(),
        }
    }
}

pub fn id_token(head: &[u8]) -> &[u8]{
    match head.iter().position(|&c| c == b' '){
        Some(end) => &head[..end],
        None => head,
    }
}

fn write_fastq(f: &mut fmt::Formatter<'_>, rec: &impl Record) -> fmt::Result{
    write!(f,
           "@{}\n{}\n+\n{}",
           String::from_utf8_lossy(rec.head()),
           String::from_utf8_lossy(rec.seq()),
           String::from_utf8_lossy(rec.qual()),
    )
}

impl<'a> fmt::Display for RefRecord<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_fastq(f, self)
    }
}

impl<'a> fmt::Debug for RefRecord<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RefRecord")
            .field("head", &String::from_utf8_lossy(self.head()))
            .field("seq", &String::from_utf8_lossy(self.seq()))
            .field("qual", &String::from_utf8_lossy(self.qual()))
            .finish()
    }
}

impl fmt::Display for OwnedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_fastq(f, self)
    }
}
