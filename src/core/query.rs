//! Paging parameters and paged results

use serde::{Deserialize, Serialize};

/// Raw `?page&size` query string
///
/// Both parameters are optional; [`PageParams::resolve`] fills defaults and
/// clamps the size.
///
/// # Example
/// ```text
/// GET /api/product/paginated?page=2&size=5
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    /// Zero-based page number
    pub page: Option<usize>,

    /// Number of items per page
    pub size: Option<usize>,
}

impl PageParams {
    pub fn resolve(&self, default_size: usize, max_size: usize) -> PageRequest {
        let max_size = max_size.max(1);
        PageRequest {
            page: self.page.unwrap_or(0),
            size: self.size.unwrap_or(default_size).clamp(1, max_size),
        }
    }
}

/// Offset/limit window over a full scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based page number
    pub page: usize,
    /// Items per page, at least 1
    pub size: usize,
}

impl PageRequest {
    pub fn new(page: usize, size: usize) -> Self {
        Self {
            page,
            size: size.max(1),
        }
    }

    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.size)
    }
}

/// One page of items plus window metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            data: self.data.into_iter().map(f).collect(),
            pagination: self.pagination,
        }
    }
}

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    /// Current page number (starts at 0)
    pub page: usize,

    /// Number of items per page
    pub size: usize,

    /// Total number of items in the store
    pub total: usize,

    pub total_pages: usize,

    pub has_next: bool,

    pub has_prev: bool,
}

impl PaginationMeta {
    pub fn new(page: usize, size: usize, total: usize) -> Self {
        // Ensure size is at least 1 to avoid division by zero
        let size = size.max(1);
        let total_pages = total.div_ceil(size);
        let start = page.saturating_mul(size);

        Self {
            page,
            size,
            total,
            total_pages,
            has_next: start.saturating_add(size) < total,
            has_prev: page > 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_params_defaults() {
        let request = PageParams::default().resolve(10, 100);
        assert_eq!(request, PageRequest { page: 0, size: 10 });
    }

    #[test]
    fn test_page_params_clamp_size() {
        let params = PageParams {
            page: Some(1),
            size: Some(500),
        };
        assert_eq!(params.resolve(10, 100).size, 100);

        let params = PageParams {
            page: None,
            size: Some(0),
        };
        assert_eq!(params.resolve(10, 100).size, 1);
    }

    #[test]
    fn test_pagination_meta() {
        let meta = PaginationMeta::new(0, 20, 145);
        assert_eq!(meta.total, 145);
        assert_eq!(meta.total_pages, 8);
        assert!(!meta.has_prev);
        assert!(meta.has_next);

        let last = PaginationMeta::new(7, 20, 145);
        assert!(last.has_prev);
        assert!(!last.has_next);
    }

    #[test]
    fn test_empty_pagination_meta() {
        let meta = PaginationMeta::new(0, 10, 0);
        assert_eq!(meta.total_pages, 0);
        assert!(!meta.has_next);
    }
}
