pub mod error;
pub mod reader;
pub mod record;
pub mod writer;

pub use error::FastqError;
pub use reader::FastqReader;
pub use record::{OwnedRecord, Record, RefRecord};
pub use writer::FastqWriter;
