//! Request and response shapes of the collection endpoints.

use crate::list::SortSpec;
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;

/// Page of a collection to fetch. `page` is zero-based, as the backend
/// counts pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub size: usize,
    pub sort: SortSpec,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_ITEMS_PER_PAGE,
            sort: SortSpec::default(),
        }
    }
}

impl PageRequest {
    pub fn new(page: usize, size: usize, sort: SortSpec) -> Self {
        Self { page, size, sort }
    }

    /// `page`, `size` and `sort` query parameters.
    pub fn query_pairs(&self) -> [(&'static str, String); 3] {
        [
            ("page", self.page.to_string()),
            ("size", self.size.to_string()),
            ("sort", self.sort.to_string()),
        ]
    }
}

/// One page of a collection together with the collection's total size.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_items: usize,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total_items: usize) -> Self {
        Self { items, total_items }
    }

    /// Unpaginated response: the total is the number of items returned.
    pub fn complete(items: Vec<T>) -> Self {
        let total_items = items.len();
        Self { items, total_items }
    }
}
