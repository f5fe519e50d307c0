//! Client-facing pagination types.

use serde::Serialize;

/// A resolved client page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub offset: u64,
    pub limit: u64,
}

/// A page of results as returned to API clients.
///
/// `count` is the total number of matching items, not the page length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub count: u64,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    #[must_use]
    pub const fn new(results: Vec<T>, count: u64) -> Self {
        Self { count, results }
    }

    /// Transform each item, preserving order and count.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            count: self.count,
            results: self.results.into_iter().map(f).collect(),
        }
    }
}
