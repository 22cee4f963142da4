use fastq_io::{FastqError, FastqReader, FastqWriter, OwnedRecord, Record};
use std::io::BufReader;

fn test_data() -> (Vec<&'static str>, Vec<&'static str>, Vec<&'static str>) {
    let headers = vec!(
        "SRR403017.1 HWUSI-EAS108E_0007:3:1:3797:973/1",
        "SRR403017.2 HWUSI-EAS108E_0007:3:1:10327:976/1",
        "SRR403017.3 HWUSI-EAS108E_0007:3:1:13569:972/1");
    let seqs = vec!(
        "TTGGACCGGCGCAAGACGGACCAGNGCGAAAGCATTTGCCAAGAANNNN",
        "CAACTTTCTATCTGGCATTCCCTGNGGAGGAAATAGAATGCGCGCNNNN",
        "GATCGGAAGAGCACACGTCTGAACNCCAGTCACTTAGGCATCTCGNNNN",
    );
    let quals = vec!(
        "!\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQ",
        "RSTUVWXYZ[\\]^_`abcdefghijklmnopqrstuvwxyz{|}~####",
        "@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@"
    );
    (headers, seqs, quals)
}

#[test]
fn fastq_read_then_write() {
    let (headers, seqs, quals) = test_data();

    let n_seqs = headers.len();
    let mut fastq_data: String = "".to_owned();
    for i in 0..n_seqs{
        fastq_data.push_str(format!("@{}\n", headers[i]).as_str());
        fastq_data.push_str(format!("{}\n", seqs[i]).as_str());
        // Separator lines may repeat the header
        fastq_data.push_str(format!("+{}\n", headers[i]).as_str());
        fastq_data.push_str(format!("{}\n", quals[i]).as_str());
    }

    let input = BufReader::new(fastq_data.as_bytes());
    let mut reader = FastqReader::new(input);

    let mut owned_records: Vec<OwnedRecord> = vec![];
    let mut seqs_read = 0;
    while let Some(record) = reader.read_next().unwrap(){
        assert_eq!(record.head(), headers[seqs_read].as_bytes());
        assert_eq!(record.seq(), seqs[seqs_read].as_bytes());
        assert_eq!(record.qual(), quals[seqs_read].as_bytes());
        owned_records.push(record.to_owned());
        seqs_read += 1;
    }
    assert_eq!(seqs_read, n_seqs);

    // Test writer
    let mut writer = FastqWriter::<Vec<u8>>::new(vec![]);
    for rec in owned_records.iter() {
        writer.write(rec).unwrap();
    }
    assert_eq!(writer.records_written(), n_seqs as u64);
    let written_data = writer.into_inner().unwrap();

    // The separator comes out bare
    assert!(String::from_utf8(written_data.clone()).unwrap().contains("NNNN\n+\n!\"#"));

    // Read the records back from written data and compare to originals.
    let mut reader2 = FastqReader::new(written_data.as_slice());
    let mut seqs_read2 = 0;
    while let Some(record) = reader2.read_next().unwrap(){
        assert_eq!(record.to_owned(), owned_records[seqs_read2]);
        seqs_read2 += 1;
    }
    assert_eq!(seqs_read2, n_seqs);
}

#[test]
fn id_tokens_ignore_annotations() {
    let (headers, _, _) = test_data();
    let data = format!("@{}\nA\n+\nI\n", headers[0]);
    let mut reader = FastqReader::new(data.as_bytes());
    let rec = reader.read_next().unwrap().unwrap();
    assert_eq!(rec.id_token(), b"SRR403017.1");
}

#[test]
fn parse_errors_name_the_record() {
    let data = "@r1\nAC\n+\nII\n@r2\nAC\n+\nI\n";
    let mut reader = FastqReader::new(data.as_bytes());
    reader.read_next().unwrap();
    let err = reader.read_next().unwrap_err();
    assert!(matches!(err, FastqError::QualityLengthMismatch{record: 2, ..}));
    assert_eq!(err.to_string(), "FASTQ record 2: quality line has different length than sequence line (1 vs 2)");
}
