// src/progress.rs
use crate::error::ExtractError;

/// Lightweight progress reporting for the extraction pass.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of entries found.
    fn begin(&mut self, _total: usize) {}

    /// One entry became a record.
    fn item_done(&mut self, _entry: usize) {}

    /// One entry was dropped.
    fn item_failed(&mut self, _entry: usize, _err: &ExtractError) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
