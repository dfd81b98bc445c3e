//! Pagination related types for list endpoints

use serde::{Deserialize, Serialize};

/// Largest accepted page size
pub const MAX_PAGE_SIZE: u32 = 100;

/// Pagination parameters for list endpoints
///
/// Out-of-range values are corrected rather than rejected: a zero page
/// becomes page 1 and a zero page size falls back to the default of 10.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page number (1-indexed)
    #[serde(default = "default_page")]
    pub page: u32,

    /// Number of items per page
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

impl Pagination {
    /// Create a new pagination, normalizing out-of-range values
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }.normalize()
    }

    /// Correct zero or oversized values
    pub fn normalize(mut self) -> Self {
        if self.page == 0 {
            self.page = default_page();
        }
        if self.page_size == 0 {
            self.page_size = default_page_size();
        }
        self.page_size = self.page_size.min(MAX_PAGE_SIZE);
        self
    }

    /// Calculate the offset for storage queries
    pub fn offset(&self) -> u64 {
        (self.page.saturating_sub(1) as u64) * self.page_size as u64
    }

    /// Get the limit for storage queries
    pub fn limit(&self) -> u64 {
        self.page_size as u64
    }
}

/// Paginated response wrapper with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    /// The actual data items
    pub data: Vec<T>,

    /// Current page number
    pub current_page: u32,

    /// Items per page
    pub page_size: u32,

    /// Total number of matching records
    pub total_records: u64,

    /// Total number of pages
    pub total_pages: u32,
}

impl<T> PaginatedResponse<T> {
    /// Create a new paginated response
    pub fn new(data: Vec<T>, pagination: Pagination, total_records: u64) -> Self {
        Self {
            data,
            current_page: pagination.page,
            page_size: pagination.page_size,
            total_records,
            total_pages: Self::calculate_total_pages(total_records, pagination.page_size),
        }
    }

    /// Calculate total pages from total records and page size
    fn calculate_total_pages(total: u64, page_size: u32) -> u32 {
        if total == 0 {
            return 0;
        }
        total.div_ceil(page_size as u64) as u32
    }

    /// Check if the response holds no items
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_normalizes_zero_values() {
        let pagination = Pagination::new(0, 0);
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.page_size, 10);
    }

    #[test]
    fn test_pagination_caps_page_size() {
        let pagination = Pagination::new(2, 10_000);
        assert_eq!(pagination.page_size, MAX_PAGE_SIZE);
    }

    #[test]
    fn test_pagination_offset() {
        assert_eq!(Pagination::new(1, 10).offset(), 0);
        assert_eq!(Pagination::new(3, 10).offset(), 20);
    }

    #[test]
    fn test_paginated_response_total_pages_rounds_up() {
        let response = PaginatedResponse::new(vec![1, 2, 3], Pagination::new(1, 10), 21);
        assert_eq!(response.total_pages, 3);
        assert_eq!(response.total_records, 21);
    }

    #[test]
    fn test_paginated_response_empty() {
        let response: PaginatedResponse<i32> =
            PaginatedResponse::new(Vec::new(), Pagination::default(), 0);
        assert!(response.is_empty());
        assert_eq!(response.total_pages, 0);
    }

    #[test]
    fn test_paginated_response_camel_case_wire_format() {
        let response = PaginatedResponse::new(vec![1], Pagination::new(2, 10), 11);
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"currentPage\":2"));
        assert!(json.contains("\"pageSize\":10"));
        assert!(json.contains("\"totalRecords\":11"));
        assert!(json.contains("\"totalPages\":2"));
    }
}
