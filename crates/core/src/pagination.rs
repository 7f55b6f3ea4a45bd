//! Page-number pagination used by question listing and search.

/// Number of questions per page on listing and search endpoints.
pub const ITEMS_PER_PAGE: i64 = 10;

/// A resolved `?page=N` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// 1-based page number, never below 1.
    pub number: i64,
    pub per_page: i64,
}

impl Page {
    /// Resolve an optional, possibly nonsensical page number.
    pub fn new(page: Option<i64>) -> Self {
        Self {
            number: page.unwrap_or(1).max(1),
            per_page: ITEMS_PER_PAGE,
        }
    }

    pub fn limit(&self) -> i64 {
        self.per_page
    }

    pub fn offset(&self) -> i64 {
        (self.number - 1).saturating_mul(self.per_page)
    }
}

/// Number of pages needed to show `total` items, `per_page` at a time.
pub fn total_pages(total: i64, per_page: i64) -> i64 {
    if total <= 0 || per_page <= 0 {
        return 0;
    }
    (total + per_page - 1) / per_page
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_invalid_page_defaults_to_first() {
        assert_eq!(Page::new(None).number, 1);
        assert_eq!(Page::new(Some(0)).number, 1);
        assert_eq!(Page::new(Some(-3)).offset(), 0);
    }

    #[test]
    fn offset_skips_previous_pages() {
        assert_eq!(Page::new(Some(3)).offset(), 20);
        assert_eq!(Page::new(Some(3)).limit(), ITEMS_PER_PAGE);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
    }
}
