//! Page-number pagination.
//!
//! A [`PageRequest`] is a 1-based page number plus a page size. It translates
//! into a LIMIT/OFFSET window for SQL and into a slice window for in-memory
//! sequences. A [`Page`] carries the windowed items alongside the unwindowed
//! total.

use std::future::Future;

use serde::Serialize;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: DEFAULT_PAGE, size: DEFAULT_PAGE_SIZE }
    }
}

impl PageRequest {
    /// Build a request from raw query values.
    ///
    /// Missing or non-positive pages become page 1, missing or non-positive
    /// sizes become `default_size`, and sizes above `max_size` are capped.
    pub fn new(page: Option<i64>, size: Option<i64>, default_size: u32, max_size: u32) -> Self {
        let page = match page {
            Some(p) if p >= 1 => u32::try_from(p).unwrap_or(u32::MAX),
            _ => DEFAULT_PAGE,
        };

        let requested = match size {
            Some(s) if s >= 1 => u32::try_from(s).unwrap_or(u32::MAX),
            _ => default_size,
        };
        let size = if requested > max_size {
            tracing::warn!("Page size {} exceeds max {}, capping to max", requested, max_size);
            max_size
        } else {
            requested
        };

        Self { page, size }
    }

    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1) * i64::from(self.size)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }

    /// Apply the window to an ordered in-memory sequence.
    pub fn slice<T: Clone>(&self, items: &[T]) -> Vec<T> {
        let start = usize::try_from(self.offset()).unwrap_or(usize::MAX);
        let len = usize::try_from(self.limit()).unwrap_or(usize::MAX);
        items.iter().skip(start).take(len).cloned().collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: u32,
    pub size: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: i64, request: PageRequest) -> Self {
        Self { items, total, page: request.page, size: request.size }
    }
}

/// Run the count and the windowed fetch for one page.
///
/// The count runs first so the total reflects every match, not only the ones
/// that landed in the window.
pub async fn paginate<T, E, C, F>(request: PageRequest, count: C, fetch: F) -> Result<Page<T>, E>
where
    C: Future<Output = Result<i64, E>>,
    F: Future<Output = Result<Vec<T>, E>>,
{
    let total = count.await?;
    let items = fetch.await?;
    Ok(Page::new(items, total, request))
}
