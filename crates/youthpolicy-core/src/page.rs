//! Page arithmetic for the result list.

/// Records requested per page.
pub const PAGE_SIZE: u32 = 20;

/// Previous/next controls for a result list spanning several pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub total_pages: u32,
}

impl Pagination {
    /// Controls for `page` of a `total`-record result, or `None` when
    /// everything fits on one page.
    ///
    /// A zero `page_size` falls back to [`PAGE_SIZE`].
    pub fn compute(total: u64, page: u32, page_size: u32) -> Option<Self> {
        let page_size = if page_size == 0 { PAGE_SIZE } else { page_size };
        if total <= u64::from(page_size) {
            return None;
        }
        Some(Self {
            page,
            total_pages: total_pages(total, page_size),
        })
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn previous(&self) -> Option<u32> {
        self.has_previous().then(|| self.page - 1)
    }

    pub fn next(&self) -> Option<u32> {
        self.has_next().then(|| self.page + 1)
    }

    /// `"page / total_pages"`.
    pub fn indicator(&self) -> String {
        format!("{} / {}", self.page, self.total_pages)
    }
}

/// `ceil(total / page_size)`, never less than 1.
pub fn total_pages(total: u64, page_size: u32) -> u32 {
    let page_size = u64::from(page_size.max(1));
    let pages = total.div_ceil(page_size).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forty_five_records_make_three_pages() {
        assert_eq!(total_pages(45, 20), 3);

        let first = Pagination::compute(45, 1, 20).unwrap();
        assert_eq!(first.total_pages, 3);
        assert!(!first.has_previous());
        assert!(first.has_next());
        assert_eq!(first.previous(), None);
        assert_eq!(first.next(), Some(2));

        let last = Pagination::compute(45, 3, 20).unwrap();
        assert!(last.has_previous());
        assert!(!last.has_next());
        assert_eq!(last.next(), None);
        assert_eq!(last.indicator(), "3 / 3");
    }

    #[test]
    fn single_page_has_no_controls() {
        assert_eq!(Pagination::compute(10, 1, 20), None);
        assert_eq!(Pagination::compute(20, 1, 20), None);
        assert_eq!(Pagination::compute(0, 1, 20), None);
        assert!(Pagination::compute(21, 1, 20).is_some());
    }

    #[test]
    fn minimum_one_page() {
        assert_eq!(total_pages(0, 20), 1);
        assert_eq!(total_pages(1, 20), 1);
        assert_eq!(total_pages(40, 20), 2);
        assert_eq!(total_pages(41, 20), 3);
    }

    #[test]
    fn zero_page_size_uses_default() {
        let p = Pagination::compute(45, 2, 0).unwrap();
        assert_eq!(p.total_pages, 3);
        assert_eq!(p.indicator(), "2 / 3");
    }
}
