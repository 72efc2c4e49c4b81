//! Request-generation counter for list screens.
//!
//! Two list loads for the same screen can be in flight at once (the user
//! types in the search box faster than the server answers) and nothing in
//! the transport orders their completions. A screen keeps one
//! `RequestGeneration` per logical query, calls `begin()` before each load
//! and applies the result only if `is_current()` still holds.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct RequestGeneration {
    latest: AtomicU64,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new load; every earlier generation becomes stale
    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// May a load started at `generation` still apply its result?
    pub fn is_current(&self, generation: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_load_supersedes_older() {
        let generation = RequestGeneration::new();
        let first = generation.begin();
        let second = generation.begin();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn test_single_load_stays_current() {
        let generation = RequestGeneration::new();
        let only = generation.begin();
        assert!(generation.is_current(only));
    }
}
