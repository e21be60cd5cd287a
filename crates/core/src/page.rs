//! List-response envelope types.
//!
//! All list endpoints wrap results as `{ "data": [...], "meta": {...} }`.

use serde::{Deserialize, Serialize};

/// Page size the backend uses when the fixture store builds a
/// single-page envelope.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Pagination metadata accompanying every list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageMeta {
    pub page: i64,
    pub page_size: i64,
    /// Total record count across all pages.
    pub total: i64,
    pub total_pages: i64,
}

impl PageMeta {
    /// Envelope for a result set that fits on one page.
    pub fn single_page(total: i64) -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            total,
            total_pages: 1,
        }
    }
}

/// Standard `{ data, meta }` list envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}
