use serde::Serialize;

/// Page size used when no configuration overrides it.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;

/// Number of pages needed to show `total_items`.
pub fn total_pages(total_items: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        return 0;
    }
    total_items.div_ceil(items_per_page)
}

/// Page links to render: numbers around the edges and the current page,
/// `None` marking a gap.
fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let current_page = current_page.min(last_page);
    let past_last = last_page.saturating_add(1);
    let mut pages = Vec::new();

    let left_end = left_edge.saturating_add(1).min(past_last);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = current_page
        .saturating_add(right_current)
        .saturating_add(1)
        .min(past_last);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// State of the pagination control under a list: which pages can be
/// selected and which item range is on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationControl {
    pub active_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub pages: Vec<Option<usize>>,
    /// One-based index of the first item on the active page, 0 when empty.
    pub first_item: usize,
    /// One-based index of the last item on the active page, 0 when empty.
    pub last_item: usize,
}

impl PaginationControl {
    pub fn new(active_page: usize, items_per_page: usize, total_items: usize) -> Self {
        let active_page = active_page.max(1);
        let total_pages = total_pages(total_items, items_per_page);
        let pages = get_pages(total_pages, active_page, 2, 2, 4, 2);

        let (first_item, last_item) = if total_items == 0 || items_per_page == 0 {
            (0, 0)
        } else {
            let first = (active_page - 1).saturating_mul(items_per_page).saturating_add(1);
            let last = active_page.saturating_mul(items_per_page).min(total_items);
            (first.min(total_items), last)
        };

        Self {
            active_page,
            total_pages,
            total_items,
            pages,
            first_item,
            last_item,
        }
    }

    /// Last page that may be selected; an empty list still has page 1.
    pub fn last_page(&self) -> usize {
        self.total_pages.max(1)
    }

    pub fn is_selectable(&self, page: usize) -> bool {
        (1..=self.last_page()).contains(&page)
    }

    pub fn previous(&self) -> Option<usize> {
        (self.active_page > 1).then(|| self.active_page - 1)
    }

    pub fn next(&self) -> Option<usize> {
        (self.active_page < self.total_pages).then(|| self.active_page + 1)
    }
}
