use std::num::NonZeroUsize;

use super::progress::Progress;

/// Splits [0, 1] into `count` equal buckets and picks the one `progress`
/// falls in. The last bucket also owns progress == 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepSelector {
    count: NonZeroUsize,
}

impl StepSelector {
    pub fn new(count: NonZeroUsize) -> Self {
        Self { count }
    }

    pub fn select(&self, progress: Progress) -> usize {
        let n = self.count.get();
        let bucket = (progress.value() * n as f64).floor() as usize;
        bucket.min(n - 1)
    }
}
