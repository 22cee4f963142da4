use std::io::Write;

pub const PAIRS_PER_DOT: u64 = 10_000;

// Dots go out for pair indices 10000, 20000, ... but never for the first pair.
pub fn is_progress_tick(pair_index: u64) -> bool {
    pair_index != 0 && pair_index % PAIRS_PER_DOT == 0
}

/// Cosmetic progress channel: a banner, then one dot per 10,000 pairs.
/// Kept apart from the data output. A write failure here switches the
/// channel off and is otherwise ignored.
pub struct DotProgress<W: Write> {
    out: W,
    enabled: bool,
}

impl<W: Write> DotProgress<W> {
    pub fn new(out: W) -> Self {
        Self { out, enabled: true }
    }

    pub fn start(&mut self) {
        self.emit(b"Interleaving reads (1 dot = 10,000 pairs): ");
    }

    // Called once per written pair with its 0-based index
    pub fn pair_written(&mut self, pair_index: u64) {
        if is_progress_tick(pair_index) {
            self.emit(b".");
        }
    }

    pub fn finish(&mut self) {
        self.emit(b"\n");
    }

    fn emit(&mut self, bytes: &[u8]) {
        if !self.enabled {
            return;
        }
        if let Err(e) = self.out.write_all(bytes).and_then(|_| self.out.flush()) {
            log::warn!("Progress output disabled: {}", e);
            self.enabled = false;
        }
    }
}

#[cfg(test)]
impl DotProgress<Vec<u8>> {
    // The banner has no dots in it
    pub(crate) fn dots(&self) -> usize {
        self.out.iter().filter(|&&c| c == b'.').count()
    }
}

#[cfg(test)]
impl<W: Write> DotProgress<W> {
    pub(crate) fn into_inner(self) -> W {
        self.out
    }
}
