use clap::{value_parser, Arg, Command};
use std::path::PathBuf;

pub fn build_cli() -> Command {
    Command::new("interleave_reads")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Interleave R1 and R2 split FASTQ files")
        .long_about(
            "Interleave R1 and R2 split FASTQ files into one file: R1[0], R2[0], R1[1], R2[1], ...\n\
             Stops at the end of the shorter input. Fails if the read identifiers of a pair differ.",
        )
        .arg_required_else_help(true)
        .arg(
            Arg::new("read1")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("The read1 FASTQ file"),
        )
        .arg(
            Arg::new("read2")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("The read2 FASTQ file"),
        )
        .arg(
            Arg::new("output")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("The output interleaved FASTQ file"),
        )
}
