//! Fixed-size pagination for folder listings.

/// Number of records returned per listing page.
pub const PAGE_SIZE: u64 = 20;

/// A zero-based page index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
}

impl PageRequest {
    pub fn new(page: u64) -> Self {
        Self { page }
    }

    /// Parse a query-string page. Absent, negative or malformed input is page 0.
    pub fn parse_lenient(raw: Option<&str>) -> Self {
        let page = raw.and_then(|p| p.trim().parse::<u64>().ok()).unwrap_or(0);
        Self { page }
    }

    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(PAGE_SIZE)
    }

    pub fn limit(&self) -> u64 {
        PAGE_SIZE
    }
}
