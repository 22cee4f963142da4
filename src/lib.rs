pub mod cli;
pub mod error;
pub mod interleave;
pub mod progress;

pub use error::{InterleaveError, Mate};
pub use interleave::{interleave_files, interleave_pairs, InterleaveStats};
pub use progress::DotProgress;
