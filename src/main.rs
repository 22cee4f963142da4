use interleave_reads::cli::build_cli;
use interleave_reads::{interleave_files, DotProgress};
use std::io;
use std::path::PathBuf;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let matches = build_cli().get_matches();
    // All three are required, so clap has already rejected a missing one
    let read1 = matches.get_one::<PathBuf>("read1").expect("read1 is required");
    let read2 = matches.get_one::<PathBuf>("read2").expect("read2 is required");
    let output = matches.get_one::<PathBuf>("output").expect("output is required");

    log::info!("Interleaving {} and {} into {}", read1.display(), read2.display(), output.display());

    let mut progress = DotProgress::new(io::stdout());
    match interleave_files(read1, read2, output, &mut progress) {
        Ok(stats) => {
            if let Some(longer) = stats.leftover {
                log::warn!("{} has more records than the other input; the extra records were not written", longer);
            }
            log::info!("Wrote {} pairs", stats.pairs_written);
        }
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }
}
