use serde::{Deserialize, Serialize};

/// One page of a paginated list response: `{ items[], page, pages, total }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub pages: u32,
    pub total: u64,
}

impl<T> Page<T> {
    /// A single empty page, useful as a mock baseline in tests.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            pages: 1,
            total: 0,
        }
    }
}
