//! List-view state machine shared by every collection resource.
//!
//! A [`ListView`] keeps three things aligned: the `page`/`sort` parameters of
//! the location query, the in-memory [`PaginationState`], and the last page of
//! entities fetched from the backend. Every fetch it issues carries a sequence
//! number so late responses can be recognised when they land.

mod query;
mod sort;
mod view;

pub use query::{LocationQuery, PAGE_PARAM, SORT_PARAM};
pub use sort::{DEFAULT_SORT_FIELD, SortOrder, SortSpec};
pub use view::{
    EntityCollectionState, FetchOutcome, ListError, ListView, PaginationState, PendingFetch,
    StaleResponsePolicy,
};
