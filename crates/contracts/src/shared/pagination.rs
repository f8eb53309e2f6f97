use serde::{Deserialize, Serialize};

/// Paginators with at most this many pages render every page without ellipses.
pub const FULL_WINDOW_LIMIT: usize = 7;

/// One rendered unit of a pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "page", rename_all = "snake_case")]
pub enum PageSlot {
    Page(usize),
    Ellipsis,
}

impl PageSlot {
    pub fn page(&self) -> Option<usize> {
        match self {
            PageSlot::Page(p) => Some(*p),
            PageSlot::Ellipsis => None,
        }
    }

    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PageSlot::Ellipsis)
    }
}

/// Computes the slots a paginator renders for a 1-indexed `current_page`.
///
/// `total_pages == 0` is normalized to a single page and `current_page` is
/// clamped into `1..=total_pages`, so the result always starts with page 1
/// and ends with the last page.
///
/// ```
/// use contracts::shared::pagination::{page_window, PageSlot::*};
/// assert_eq!(
///     page_window(10, 20),
///     vec![Page(1), Ellipsis, Page(9), Page(10), Page(11), Ellipsis, Page(20)]
/// );
/// ```
pub fn page_window(current_page: usize, total_pages: usize) -> Vec<PageSlot> {
    let last = total_pages.max(1);
    let current = current_page.clamp(1, last);

    if last <= FULL_WINDOW_LIMIT {
        return (1..=last).map(PageSlot::Page).collect();
    }

    let mut slots = Vec::with_capacity(FULL_WINDOW_LIMIT);
    slots.push(PageSlot::Page(1));

    if current <= 3 {
        slots.extend((2..=3).map(PageSlot::Page));
        slots.push(PageSlot::Ellipsis);
    } else if current >= last - 2 {
        slots.push(PageSlot::Ellipsis);
        slots.extend((last - 2..last).map(PageSlot::Page));
    } else {
        slots.push(PageSlot::Ellipsis);
        slots.extend((current - 1..=current + 1).map(PageSlot::Page));
        slots.push(PageSlot::Ellipsis);
    }

    slots.push(PageSlot::Page(last));
    slots
}

/// Pagination bookkeeping for a list view (1-indexed pages).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
}

impl PageState {
    pub fn new(page_size: usize, total_count: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            total_count,
        }
    }

    pub fn total_pages(&self) -> usize {
        self.total_count.div_ceil(self.page_size.max(1)).max(1)
    }

    /// Number of rows to skip before the current page.
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1) * self.page_size
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Moves to `page`, clamped into range. Returns `true` if the page changed.
    pub fn go_to(&mut self, page: usize) -> bool {
        let target = page.clamp(1, self.total_pages());
        let changed = target != self.page;
        self.page = target;
        changed
    }

    /// Changing the page size always starts over from the first page.
    pub fn set_page_size(&mut self, page_size: usize) {
        if page_size == 0 {
            return;
        }
        self.page_size = page_size;
        self.page = 1;
    }

    pub fn set_total_count(&mut self, total_count: usize) {
        self.total_count = total_count;
        self.page = self.page.clamp(1, self.total_pages());
    }

    pub fn slots(&self) -> Vec<PageSlot> {
        page_window(self.page, self.total_pages())
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(25, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::PageSlot::{Ellipsis, Page};
    use super::*;

    fn pages(slots: &[PageSlot]) -> Vec<usize> {
        slots.iter().filter_map(PageSlot::page).collect()
    }

    #[test]
    fn test_small_totals_render_every_page() {
        for total in 1..=FULL_WINDOW_LIMIT {
            for current in 1..=total {
                let slots = page_window(current, total);
                assert_eq!(slots.len(), total);
                assert!(slots.iter().all(|s| !s.is_ellipsis()));
                assert_eq!(pages(&slots), (1..=total).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn test_known_windows() {
        assert_eq!(
            page_window(2, 20),
            vec![Page(1), Page(2), Page(3), Ellipsis, Page(20)]
        );
        assert_eq!(
            page_window(19, 20),
            vec![Page(1), Ellipsis, Page(18), Page(19), Page(20)]
        );
        assert_eq!(
            page_window(10, 20),
            vec![Page(1), Ellipsis, Page(9), Page(10), Page(11), Ellipsis, Page(20)]
        );
        assert_eq!(
            page_window(4, 7),
            (1..=7).map(Page).collect::<Vec<_>>()
        );
        assert_eq!(page_window(1, 1), vec![Page(1)]);
    }

    #[test]
    fn test_near_start_and_end_boundaries() {
        assert_eq!(
            page_window(3, 8),
            vec![Page(1), Page(2), Page(3), Ellipsis, Page(8)]
        );
        assert_eq!(
            page_window(6, 8),
            vec![Page(1), Ellipsis, Page(6), Page(7), Page(8)]
        );
        assert_eq!(
            page_window(4, 8),
            vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Ellipsis, Page(8)]
        );
    }

    #[test]
    fn test_invariants_for_large_totals() {
        for total in 8..=40 {
            for current in 1..=total {
                let slots = page_window(current, total);
                assert_eq!(slots.first(), Some(&Page(1)));
                assert_eq!(slots.last(), Some(&Page(total)));
                assert!(slots.iter().filter(|s| s.is_ellipsis()).count() <= 2);
                let p = pages(&slots);
                assert!(p.windows(2).all(|w| w[0] < w[1]), "{current}/{total}: {p:?}");
                assert!(!slots.windows(2).any(|w| w[0].is_ellipsis() && w[1].is_ellipsis()));
            }
        }
    }

    #[test]
    fn test_out_of_range_inputs_are_normalized() {
        assert_eq!(page_window(1, 0), vec![Page(1)]);
        assert_eq!(page_window(0, 0), vec![Page(1)]);
        assert_eq!(page_window(0, 20), page_window(1, 20));
        assert_eq!(page_window(99, 20), page_window(20, 20));
        assert_eq!(page_window(9, 5), page_window(5, 5));
    }

    #[test]
    fn test_page_state_navigation() {
        let mut state = PageState::new(25, 101);
        assert_eq!(state.total_pages(), 5);
        assert!(!state.has_prev());
        assert!(state.go_to(3));
        assert_eq!(state.offset(), 50);
        assert!(!state.go_to(3));
        assert!(state.go_to(42));
        assert_eq!(state.page, 5);
        assert!(!state.has_next());
    }

    #[test]
    fn test_page_state_size_and_count_changes() {
        let mut state = PageState::new(10, 95);
        state.go_to(7);
        state.set_page_size(50);
        assert_eq!(state.page, 1);
        assert_eq!(state.total_pages(), 2);

        state.set_page_size(0);
        assert_eq!(state.page_size, 50);

        state.go_to(2);
        state.set_total_count(10);
        assert_eq!(state.page, 1);

        state.set_total_count(0);
        assert_eq!(state.total_pages(), 1);
        assert_eq!(state.slots(), vec![Page(1)]);
    }
}
