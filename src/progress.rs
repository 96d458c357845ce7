// src/progress.rs
/// Lightweight progress reporting for batch lookups.
/// Frontends implement this to surface status to users; every method has a
/// no-op default.
pub trait Progress {
    /// Called at the start with the number of words in the batch.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One word finished with `records` results.
    fn item_done(&mut self, _word: &str, _records: usize) {}

    /// One word failed on every source.
    fn item_failed(&mut self, _word: &str, _error: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
