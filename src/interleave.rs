use std::io::{Read, Write};
use std::path::Path;

use fastq_io::{FastqError, FastqReader, FastqWriter, Record};

use crate::error::{InterleaveError, Mate};
use crate::progress::DotProgress;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterleaveStats {
    pub pairs_written: u64,
    // The longer input, if the two had different numbers of records
    pub leftover: Option<Mate>,
}

fn parse_error(mate: Mate) -> impl Fn(FastqError) -> InterleaveError {
    move |source| InterleaveError::Parse { mate, source }
}

/// Writes r1[0], r2[0], r1[1], r2[1], ... to `writer`, checking that the
/// identifier tokens of every pair agree.
///
/// Stops as soon as either input runs out; the rest of the longer input is
/// not written. On a mismatch, every earlier pair has been flushed to the
/// output and nothing of the mismatching pair has.
pub fn interleave_pairs<R1: Read, R2: Read, W: Write, S: Write>(
    read1: &mut FastqReader<R1>,
    read2: &mut FastqReader<R2>,
    writer: &mut FastqWriter<W>,
    progress: &mut DotProgress<S>,
) -> Result<InterleaveStats, InterleaveError> {
    progress.start();

    let mut pairs_written = 0_u64;
    let leftover = loop {
        let rec1 = match read1.read_next().map_err(parse_error(Mate::Read1))? {
            Some(rec) => rec,
            None => {
                // Only a look: whatever read2 holds past this point is dropped,
                // so a malformed tail there is not an error either.
                let read2_has_more = !matches!(read2.read_next(), Ok(None));
                break read2_has_more.then_some(Mate::Read2);
            }
        };
        let rec2 = match read2.read_next().map_err(parse_error(Mate::Read2))? {
            Some(rec) => rec,
            None => break Some(Mate::Read1),
        };

        if rec1.id_token() != rec2.id_token() {
            writer.flush()?;
            return Err(InterleaveError::Mismatch {
                pair: pairs_written + 1,
                header1: String::from_utf8_lossy(rec1.head()).into_owned(),
                header2: String::from_utf8_lossy(rec2.head()).into_owned(),
            });
        }

        writer.write(&rec1)?;
        writer.write(&rec2)?;
        progress.pair_written(pairs_written);
        pairs_written += 1;
    };

    writer.flush()?;
    progress.finish();
    log::debug!(
        "Stopped after {} pairs: {} read1 and {} read2 records read, {} records written",
        pairs_written,
        read1.records_read(),
        read2.records_read(),
        writer.records_written()
    );

    Ok(InterleaveStats { pairs_written, leftover })
}

/// Opens the three files and runs [`interleave_pairs`]. The output file is
/// only created once both inputs have been opened.
pub fn interleave_files<S: Write>(
    read1_path: &Path,
    read2_path: &Path,
    output_path: &Path,
    progress: &mut DotProgress<S>,
) -> Result<InterleaveStats, InterleaveError> {
    let open_error = |path: &Path| {
        let path = path.to_path_buf();
        move |source| InterleaveError::Open { path, source }
    };

    let mut read1 = FastqReader::from_path(read1_path).map_err(open_error(read1_path))?;
    let mut read2 = FastqReader::from_path(read2_path).map_err(open_error(read2_path))?;
    let mut writer = FastqWriter::create(output_path).map_err(open_error(output_path))?;

    interleave_pairs(&mut read1, &mut read2, &mut writer, progress)
}
