//! Query results and pagination.

use crate::catalog::Score;
use serde::{Deserialize, Serialize};

/// Pagination info for a catalog listing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: i64,
    /// Items per page.
    pub per_page: i64,
    /// Total number of matching items.
    pub total: i64,
    /// Total number of pages (at least 1).
    pub total_pages: i64,
    /// Whether there is a next page.
    pub has_next: bool,
    /// Whether there is a previous page.
    pub has_prev: bool,
}

impl Pagination {
    /// Create pagination info. A non-positive `per_page` is treated as 1.
    pub fn new(page: i64, per_page: i64, total: i64) -> Self {
        let per_page = per_page.max(1);
        let total_pages = if total == 0 {
            1
        } else {
            (total + per_page - 1) / per_page
        };

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Number of items to skip before this page.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.per_page
    }

    /// Check if on the first page.
    pub fn is_first(&self) -> bool {
        self.page == 1
    }

    /// Check if on the last page.
    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }

    /// 1-indexed number of the first item on this page (0 when empty).
    pub fn start_item(&self) -> i64 {
        if self.total == 0 {
            0
        } else {
            (self.page - 1) * self.per_page + 1
        }
    }

    /// 1-indexed number of the last item on this page.
    pub fn end_item(&self) -> i64 {
        (self.page * self.per_page).min(self.total)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, 20, 0)
    }
}

/// One page of catalog query results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScorePage {
    /// The scores on this page, in query order.
    pub scores: Vec<Score>,
    /// Pagination info.
    pub pagination: Pagination,
}

impl ScorePage {
    /// Create an empty page.
    pub fn empty() -> Self {
        Self {
            scores: Vec::new(),
            pagination: Pagination::default(),
        }
    }

    /// Check if the page has no results.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Number of scores on this page.
    pub fn len(&self) -> usize {
        self.scores.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_basics() {
        let p = Pagination::new(2, 10, 45);
        assert_eq!(p.total_pages, 5);
        assert!(p.has_next);
        assert!(p.has_prev);
        assert_eq!(p.offset(), 10);
    }

    #[test]
    fn test_pagination_edges() {
        let first = Pagination::new(1, 10, 45);
        assert!(first.is_first() && !first.is_last());
        assert!(!first.has_prev && first.has_next);

        let last = Pagination::new(5, 10, 45);
        assert!(last.is_last() && !last.has_next);
    }

    #[test]
    fn test_pagination_zero_per_page_does_not_panic() {
        let p = Pagination::new(1, 0, 5);
        assert_eq!(p.per_page, 1);
        assert_eq!(p.total_pages, 5);
    }

    #[test]
    fn test_pagination_empty_set_has_one_page() {
        let p = Pagination::new(1, 10, 0);
        assert_eq!(p.total_pages, 1);
        assert_eq!(p.start_item(), 0);
        assert!(!p.has_next && !p.has_prev);
    }

    #[test]
    fn test_pagination_item_range() {
        let p = Pagination::new(2, 10, 45);
        assert_eq!(p.start_item(), 11);
        assert_eq!(p.end_item(), 20);

        let tail = Pagination::new(5, 10, 45);
        assert_eq!(tail.end_item(), 45);
    }

    #[test]
    fn test_pagination_meta_json_is_camel_case() {
        let p = Pagination::new(1, 20, 3);
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("\"perPage\":20"));
        assert!(json.contains("\"totalPages\":1"));
    }

    #[test]
    fn test_empty_page() {
        let page = ScorePage::empty();
        assert!(page.is_empty());
        assert_eq!(page.len(), 0);
    }
}
