//! Client-side pagination over an in-memory record list.
//!
//! Every function here is pure: the only mutable piece is the current page
//! number inside [`PaginationState`], which the caller owns and changes only
//! through explicit navigation.

use serde::Serialize;

/// Navigation request: one page back or one page forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// A bounded view over a slice of records plus navigation metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-indexed, always within `1..=max(total_pages, 1)`.
    pub page_number: usize,
    pub total_pages: usize,
    pub has_prev: bool,
    pub has_next: bool,
    /// Index of `items[0]` in the full record list.
    #[serde(skip)]
    pub offset: usize,
}

impl<T> Page<'_, T> {
    /// Running 1-based row number of `items[index]` across all pages.
    pub fn row_number(&self, index: usize) -> usize {
        self.offset + index + 1
    }
}

/// Number of pages needed for `count` records; zero when `page_size` is zero.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Returns page `page_number` of `records`. Out-of-range page numbers are
/// clamped into `1..=max(total_pages, 1)`, never rejected.
pub fn get_page<T>(records: &[T], page_size: usize, page_number: usize) -> Page<'_, T> {
    let total = total_pages(records.len(), page_size);
    let page_number = page_number.clamp(1, total.max(1));
    let start = (page_number - 1)
        .saturating_mul(page_size)
        .min(records.len());
    let end = start.saturating_add(page_size).min(records.len());

    Page {
        items: &records[start..end],
        page_number,
        total_pages: total,
        has_prev: page_number > 1,
        has_next: page_number < total,
        offset: start,
    }
}

/// Moves one page in `direction`. Stepping past either end is a no-op, and
/// the result is never below page 1.
pub fn advance(direction: Direction, current_page: usize, total_pages: usize) -> usize {
    match direction {
        Direction::Next => current_page.saturating_add(1).min(total_pages).max(1),
        Direction::Prev => current_page.saturating_sub(1).max(1),
    }
}

/// Caller-owned pagination position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    page_size: usize,
    page_number: usize,
}

impl PaginationState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            page_number: 1,
        }
    }

    /// Starts at `page_number`; it is clamped against the records when a page is taken.
    pub fn at_page(page_size: usize, page_number: usize) -> Self {
        Self {
            page_size,
            page_number: page_number.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_number(&self) -> usize {
        self.page_number
    }

    /// Takes the current page of `records`, storing the clamped page number.
    pub fn page<'a, T>(&mut self, records: &'a [T]) -> Page<'a, T> {
        let page = get_page(records, self.page_size, self.page_number);
        self.page_number = page.page_number;
        page
    }

    pub fn navigate(&mut self, direction: Direction, total_pages: usize) {
        self.page_number = advance(direction, self.page_number, total_pages);
    }

    pub fn next(&mut self, total_pages: usize) {
        self.navigate(Direction::Next, total_pages);
    }

    pub fn prev(&mut self) {
        // total_pages does not bound a backward step
        self.navigate(Direction::Prev, self.page_number);
    }

    /// Back to page 1. Call whenever the underlying record list changes.
    pub fn reset(&mut self) {
        self.page_number = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn total_pages_is_ceiling() {
        for n in 0..60 {
            for size in 1..12 {
                let expected = (n + size - 1) / size;
                assert_eq!(total_pages(n, size), expected, "n={} size={}", n, size);
            }
        }
    }

    #[test]
    fn total_pages_zero_page_size() {
        assert_eq!(total_pages(25, 0), 0);
    }

    #[test]
    fn empty_records() {
        let empty: Vec<usize> = Vec::new();
        let page = get_page(&empty, 10, 1);
        assert!(page.items.is_empty());
        assert_eq!(page.page_number, 1);
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_prev);
        assert!(!page.has_next);
    }

    #[test]
    fn last_partial_page() {
        let data = records(25);
        let page = get_page(&data, 10, 3);
        assert_eq!(page.items.len(), 5);
        assert_eq!(page.items, &[20, 21, 22, 23, 24]);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_prev);
        assert!(!page.has_next);
    }

    #[test]
    fn middle_page_flags() {
        let data = records(25);
        let page = get_page(&data, 10, 2);
        assert_eq!(page.items.first(), Some(&10));
        assert!(page.has_prev);
        assert!(page.has_next);
    }

    #[test]
    fn page_number_clamped_high_and_low() {
        let data = records(25);
        assert_eq!(get_page(&data, 10, 99).page_number, 3);
        assert_eq!(get_page(&data, 10, 0).page_number, 1);
        assert_eq!(get_page(&data, 10, 0).items.len(), 10);
    }

    #[test]
    fn zero_page_size_is_empty_page() {
        let data = records(5);
        let page = get_page(&data, 0, 4);
        assert!(page.items.is_empty());
        assert_eq!(page.page_number, 1);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn pages_partition_records() {
        for n in [0usize, 1, 9, 10, 11, 25, 100] {
            for size in [1usize, 3, 10, 50] {
                let data = records(n);
                let total = total_pages(n, size);
                let mut seen = Vec::new();
                for p in 1..=total {
                    let page = get_page(&data, size, p);
                    assert!(page.items.len() <= size);
                    seen.extend_from_slice(page.items);
                }
                assert_eq!(seen, data, "n={} size={}", n, size);
            }
        }
    }

    #[test]
    fn row_numbers_continue_across_pages() {
        let data = records(25);
        let page = get_page(&data, 10, 2);
        assert_eq!(page.row_number(0), 11);
        assert_eq!(page.row_number(9), 20);
    }

    #[test]
    fn advance_is_idempotent_at_bounds() {
        assert_eq!(advance(Direction::Next, 3, 3), 3);
        assert_eq!(advance(Direction::Prev, 1, 3), 1);
        assert_eq!(advance(Direction::Next, 1, 0), 1);
    }

    #[test]
    fn advance_round_trip_inside_bounds() {
        let total = 5;
        for p in 1..total {
            let forward = advance(Direction::Next, p, total);
            assert_eq!(advance(Direction::Prev, forward, total), p);
        }
        for p in 2..=total {
            let back = advance(Direction::Prev, p, total);
            assert_eq!(advance(Direction::Next, back, total), p);
        }
    }

    #[test]
    fn state_navigation_and_reset() {
        let data = records(25);
        let mut state = PaginationState::new(10);
        let total = state.page(&data).total_pages;

        state.next(total);
        state.next(total);
        state.next(total);
        assert_eq!(state.page_number(), 3);
        assert_eq!(state.page(&data).items.len(), 5);

        state.prev();
        assert_eq!(state.page_number(), 2);

        state.reset();
        assert_eq!(state.page_number(), 1);
        assert!(!state.page(&data).has_prev);
    }

    #[test]
    fn state_clamps_when_records_shrink() {
        let mut state = PaginationState::at_page(10, 3);
        let fewer = records(12);
        let page = state.page(&fewer);
        assert_eq!(page.page_number, 2);
        assert_eq!(state.page_number(), 2);
    }
}
