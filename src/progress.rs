//! Progress reporting for the long page walks (what's new, PEP rows)
//!
//! Purely cosmetic: extractors call into it, results never depend on it.

/// Observer notified as an extractor works through a list of pages
pub trait Progress {
    /// Called before the walk with the number of items
    fn begin(&mut self, _total: usize) {}

    /// Called after one item has been processed
    fn advance(&mut self, _label: &str) {}

    /// Called when the walk ends
    fn finish(&mut self) {}
}

/// A no-op progress sink
pub struct NullProgress;

impl Progress for NullProgress {}

/// Logs the start and end of a walk at info level, each step at debug
#[derive(Debug, Default)]
pub struct LogProgress {
    total: usize,
    done: usize,
}

impl LogProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn done(&self) -> usize {
        self.done
    }
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
        tracing::info!("Processing {} items", total);
    }

    fn advance(&mut self, label: &str) {
        self.done += 1;
        tracing::debug!("[{}/{}] {}", self.done, self.total, label);
    }

    fn finish(&mut self) {
        tracing::info!("Processed {}/{} items", self.done, self.total);
    }
}
