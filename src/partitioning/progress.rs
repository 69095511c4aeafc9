//! Periodic progress logging for long edge streams.

use std::time::Instant;

/// Counts edges for one pass and logs every `interval` of them.
#[derive(Debug)]
pub struct Progress {
    label: &'static str,
    interval: u64,
    seen: u64,
    start: Instant,
}

impl Progress {
    /// `interval == 0` disables the periodic message.
    pub fn new(label: &'static str, interval: u64) -> Self {
        Self {
            label,
            interval,
            seen: 0,
            start: Instant::now(),
        }
    }

    #[inline]
    pub fn tick(&mut self) {
        self.seen += 1;
        if self.interval != 0 && self.seen % self.interval == 0 {
            log::info!(
                "{}: processed {} edges in {:.3?}",
                self.label,
                self.seen,
                self.start.elapsed()
            );
        }
    }

    pub fn seen(&self) -> u64 {
        self.seen
    }

    /// Log the end of the pass at debug level and return the edge count.
    pub fn finish(self) -> u64 {
        log::debug!(
            "{}: {} edges in {:.3?}",
            self.label,
            self.seen,
            self.start.elapsed()
        );
        self.seen
    }
}
