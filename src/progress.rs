// src/progress.rs
/// Lightweight progress reporting used by long-running operations (country
/// pass, backfill). Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one logical unit completes (a country page, an area page).
    fn item_done(&mut self, _name: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Counts calls. Handy for tests and for callers that only want totals.
#[derive(Debug, Default)]
pub struct CountingProgress {
    pub total: usize,
    pub done: Vec<String>,
    pub finished: bool,
}

impl Progress for CountingProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }

    fn item_done(&mut self, name: &str) {
        self.done.push(s!(name));
    }

    fn finish(&mut self) {
        self.finished = true;
    }
}
