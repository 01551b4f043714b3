//! Pagination computation and navigation-link model.
//!
//! Pure computation: total count + requested page in, offset/limit and a
//! navigation model out. Out-of-range pages never render silently empty;
//! they resolve to [`PageResolution::OutOfRange`] and the calling layer
//! redirects to page 1.

use crate::defaults::PAGES_PAIR_LIMIT;

/// Resolved pagination state for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based current page.
    pub current_page: u32,
    /// Total pages, always >= 1 (an empty result set still has page 1).
    pub total_pages: u32,
    /// Row offset for the page fetch.
    pub offset: i64,
    /// Row limit for the page fetch (the page size).
    pub limit: i64,
}

/// Outcome of resolving a requested page against the total row count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageResolution {
    /// The requested page exists.
    Resolved(Pagination),
    /// Requested page > total pages; the caller should redirect to page 1.
    OutOfRange,
}

/// One entry in the rendered pagination nav, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    /// Link to the previous page. Emitted only when current > 1.
    Previous(u32),
    /// Clickable page-number link.
    Number(u32),
    /// The current page, rendered non-clickable.
    Current(u32),
    /// Collapsed range marker ("…").
    Gap,
    /// Link to the next page. Emitted only when current < total.
    Next(u32),
}

impl Pagination {
    /// Resolve a requested page against the total matching row count.
    ///
    /// # Panics
    ///
    /// Panics on `page_size == 0` or `requested_page == 0`; both are
    /// programmer errors, not request conditions (the parser never produces
    /// page 0).
    pub fn resolve(total_count: i64, requested_page: u32, page_size: u32) -> PageResolution {
        assert!(page_size > 0, "page size must be positive");
        assert!(requested_page >= 1, "requested page is 1-based");

        let total = total_count.max(0) as u64;
        let total_pages = total.div_ceil(page_size as u64).max(1);
        // A listing can't meaningfully exceed u32 pages; clamp rather than wrap.
        let total_pages = u32::try_from(total_pages).unwrap_or(u32::MAX);

        if requested_page > total_pages {
            return PageResolution::OutOfRange;
        }

        PageResolution::Resolved(Pagination {
            current_page: requested_page,
            total_pages,
            offset: i64::from(requested_page - 1) * i64::from(page_size),
            limit: i64::from(page_size),
        })
    }

    /// The ordered navigation entries: previous link, page numbers with
    /// gap collapsing, next link.
    ///
    /// Numbered links cover the first and last [`PAGES_PAIR_LIMIT`] pages
    /// plus a ±1 window around the current page; skipped ranges collapse to
    /// a single [`PageLink::Gap`].
    pub fn page_links(&self) -> Vec<PageLink> {
        let mut links = Vec::new();

        if self.current_page > 1 {
            links.push(PageLink::Previous(self.current_page - 1));
        }

        let mut last_emitted = 0u32;
        for n in 1..=self.total_pages {
            let near_start = n <= PAGES_PAIR_LIMIT;
            let near_end = n > self.total_pages.saturating_sub(PAGES_PAIR_LIMIT);
            let near_current = n.abs_diff(self.current_page) <= 1;
            if !(near_start || near_end || near_current) {
                continue;
            }
            if last_emitted != 0 && n > last_emitted + 1 {
                links.push(PageLink::Gap);
            }
            links.push(if n == self.current_page {
                PageLink::Current(n)
            } else {
                PageLink::Number(n)
            });
            last_emitted = n;
        }

        if self.current_page < self.total_pages {
            links.push(PageLink::Next(self.current_page + 1));
        }

        links
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(total: i64, page: u32) -> Pagination {
        match Pagination::resolve(total, page, 30) {
            PageResolution::Resolved(p) => p,
            PageResolution::OutOfRange => panic!("page {} unexpectedly out of range", page),
        }
    }

    #[test]
    fn test_empty_result_set_still_has_one_page() {
        let pg = resolved(0, 1);
        assert_eq!(pg.total_pages, 1);
        assert_eq!(pg.offset, 0);
        assert_eq!(pg.limit, 30);
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        assert_eq!(resolved(30, 1).total_pages, 1);
        assert_eq!(resolved(31, 1).total_pages, 2);
        assert_eq!(resolved(43, 1).total_pages, 2);
        assert_eq!(resolved(90, 1).total_pages, 3);
    }

    #[test]
    fn test_offset_advances_by_page_size() {
        assert_eq!(resolved(100, 1).offset, 0);
        assert_eq!(resolved(100, 2).offset, 30);
        assert_eq!(resolved(100, 4).offset, 90);
    }

    #[test]
    fn test_out_of_range_page_signals_redirect() {
        assert_eq!(
            Pagination::resolve(43, 3, 30),
            PageResolution::OutOfRange
        );
        assert_eq!(Pagination::resolve(0, 2, 30), PageResolution::OutOfRange);
    }

    #[test]
    fn test_last_valid_page_is_in_range() {
        assert!(matches!(
            Pagination::resolve(43, 2, 30),
            PageResolution::Resolved(_)
        ));
    }

    #[test]
    #[should_panic(expected = "page size must be positive")]
    fn test_zero_page_size_is_a_precondition_violation() {
        Pagination::resolve(10, 1, 0);
    }

    #[test]
    fn test_single_page_has_no_nav_links() {
        let pg = resolved(10, 1);
        assert_eq!(pg.page_links(), vec![PageLink::Current(1)]);
    }

    #[test]
    fn test_first_page_of_two_has_next_but_no_previous() {
        let pg = resolved(43, 1);
        assert_eq!(
            pg.page_links(),
            vec![
                PageLink::Current(1),
                PageLink::Number(2),
                PageLink::Next(2)
            ]
        );
    }

    #[test]
    fn test_last_page_of_two_has_previous_but_no_next() {
        let pg = resolved(43, 2);
        assert_eq!(
            pg.page_links(),
            vec![
                PageLink::Previous(1),
                PageLink::Number(1),
                PageLink::Current(2)
            ]
        );
    }

    #[test]
    fn test_far_pages_collapse_to_gaps() {
        // 10 pages, currently on page 5: expect 1 … 4 [5] 6 … 10.
        let pg = resolved(300, 5);
        assert_eq!(
            pg.page_links(),
            vec![
                PageLink::Previous(4),
                PageLink::Number(1),
                PageLink::Gap,
                PageLink::Number(4),
                PageLink::Current(5),
                PageLink::Number(6),
                PageLink::Gap,
                PageLink::Number(10),
                PageLink::Next(6),
            ]
        );
    }

    #[test]
    fn test_adjacent_windows_do_not_emit_gap() {
        // 4 pages, current 2: window {1,2,3} touches edge page 4, one gapless run.
        let pg = resolved(120, 2);
        assert_eq!(
            pg.page_links(),
            vec![
                PageLink::Previous(1),
                PageLink::Number(1),
                PageLink::Current(2),
                PageLink::Number(3),
                PageLink::Number(4),
                PageLink::Next(3),
            ]
        );
    }
}
