use std::fmt::Display;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dto::api::{Page, PageRequest};
use crate::list::query::LocationQuery;
use crate::list::sort::SortSpec;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, PaginationControl};

/// Handling of list responses that resolve after a newer fetch was issued.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaleResponsePolicy {
    /// Only the response to the latest issued fetch is applied.
    #[default]
    Discard,
    /// Every response is applied; the last one to resolve wins.
    Accept,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListError {
    #[error("page {requested} is outside of 1..={last_page}")]
    PageOutOfRange { requested: usize, last_page: usize },
}

/// Page and sort currently shown. `active_page` is one-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    pub active_page: usize,
    pub items_per_page: usize,
    pub sort: SortSpec,
}

impl PaginationState {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            active_page: 1,
            items_per_page: items_per_page.max(1),
            sort: SortSpec::default(),
        }
    }

    /// Starts from the defaults and takes whatever `page`/`sort` the query has.
    pub fn from_query(query: &LocationQuery, items_per_page: usize) -> Self {
        let mut state = Self::new(items_per_page);
        if let Some(page) = query.page {
            state.active_page = page;
        }
        if let Some(sort) = &query.sort {
            state.sort = sort.clone();
        }
        state
    }

    /// Location query matching this state, without the leading `?`.
    pub fn to_query(&self) -> String {
        LocationQuery::render(self.active_page, &self.sort)
    }

    /// Backend request for the active page.
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(
            self.active_page.saturating_sub(1),
            self.items_per_page,
            self.sort.clone(),
        )
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(DEFAULT_ITEMS_PER_PAGE)
    }
}

/// Collection data of one resource plus the flags of its edit/delete dialogs.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityCollectionState<T> {
    pub entities: Vec<T>,
    pub total_items: usize,
    pub loading: bool,
    pub updating: bool,
    pub update_success: bool,
    /// Entity shown in a detail or edit view.
    pub entity: Option<T>,
    pub error_message: Option<String>,
}

impl<T> Default for EntityCollectionState<T> {
    fn default() -> Self {
        Self {
            entities: Vec::new(),
            total_items: 0,
            loading: false,
            updating: false,
            update_success: false,
            entity: None,
            error_message: None,
        }
    }
}

/// Fetch issued by a [`ListView`]. The caller performs `request` and hands
/// the result back through [`ListView::apply`] together with `seq`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFetch {
    pub seq: u64,
    pub request: PageRequest,
    /// Location query to navigate to, when it differs from the current one.
    pub navigate_to: Option<String>,
}

/// What [`ListView::apply`] did with a response.
#[derive(Debug, PartialEq, Eq)]
pub enum FetchOutcome<E> {
    Applied,
    /// The fetch failed; prior entities stay visible.
    Failed(E),
    /// A newer fetch was issued after this one; the response was dropped.
    Discarded,
}

#[derive(Debug, Clone)]
pub struct ListView<T> {
    pagination: PaginationState,
    collection: EntityCollectionState<T>,
    location: String,
    latest_issued: u64,
    policy: StaleResponsePolicy,
}

impl<T> ListView<T> {
    /// Builds the initial state from the location query. Missing parameters
    /// default to page 1 sorted by `id` ascending.
    pub fn initialize(
        location_query: &str,
        items_per_page: usize,
        policy: StaleResponsePolicy,
    ) -> Self {
        let location = location_query.trim_start_matches('?').to_string();
        let pagination =
            PaginationState::from_query(&LocationQuery::parse(&location), items_per_page);

        Self {
            pagination,
            collection: EntityCollectionState::default(),
            location,
            latest_issued: 0,
            policy,
        }
    }

    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    pub fn collection(&self) -> &EntityCollectionState<T> {
        &self.collection
    }

    pub fn entities(&self) -> &[T] {
        &self.collection.entities
    }

    pub fn total_items(&self) -> usize {
        self.collection.total_items
    }

    pub fn is_loading(&self) -> bool {
        self.collection.loading
    }

    /// Current location query, without the leading `?`.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Sequence number of the most recently issued fetch, 0 before the first.
    pub fn latest_issued(&self) -> u64 {
        self.latest_issued
    }

    pub fn policy(&self) -> StaleResponsePolicy {
        self.policy
    }

    pub fn pagination_control(&self) -> PaginationControl {
        PaginationControl::new(
            self.pagination.active_page,
            self.pagination.items_per_page,
            self.collection.total_items,
        )
    }

    /// Clears the collection back to its initial, empty state.
    pub fn reset(&mut self) {
        self.collection = EntityCollectionState::default();
    }

    /// Navigation to the list page: empties the collection, re-reads the
    /// location query and fetches the requested page.
    pub fn mount(&mut self, location_query: &str) -> PendingFetch {
        self.reset();
        self.location = location_query.trim_start_matches('?').to_string();
        self.pagination = PaginationState::from_query(
            &LocationQuery::parse(&self.location),
            self.pagination.items_per_page,
        );
        self.refetch()
    }

    pub fn change_sort(&mut self, field: &str) -> PendingFetch {
        self.pagination.sort = self.pagination.sort.toggled(field);
        self.refetch()
    }

    /// Selects another page. Pages the pagination control would not offer are
    /// rejected and leave the state untouched.
    pub fn change_page(&mut self, page: usize) -> Result<PendingFetch, ListError> {
        let control = self.pagination_control();
        if !control.is_selectable(page) {
            return Err(ListError::PageOutOfRange {
                requested: page,
                last_page: control.last_page(),
            });
        }
        self.pagination.active_page = page;
        Ok(self.refetch())
    }

    /// Moves back to the last page when the total shrank below the active
    /// page, e.g. after the only row of the last page was deleted.
    pub fn clamp_to_last_page(&mut self) -> Option<PendingFetch> {
        let last_page = self.pagination_control().last_page();
        if self.pagination.active_page <= last_page {
            return None;
        }
        log::debug!(
            "Page {} no longer exists, moving to page {last_page}",
            self.pagination.active_page
        );
        self.pagination.active_page = last_page;
        Some(self.refetch())
    }

    /// Issues a fetch for the current page and sort and moves the location
    /// query along with it.
    pub fn refetch(&mut self) -> PendingFetch {
        self.latest_issued += 1;
        self.collection.loading = true;

        let target = self.pagination.to_query();
        let navigate_to = if self.location != target {
            self.location = target.clone();
            Some(target)
        } else {
            None
        };

        PendingFetch {
            seq: self.latest_issued,
            request: self.pagination.page_request(),
            navigate_to,
        }
    }

    /// Reconciles the state with a location changed from outside (history
    /// navigation). Only queries carrying both `page` and `sort` are taken
    /// into account. A fetch is returned when page or sort actually changed;
    /// the echo of a navigation this view issued itself yields `None`.
    pub fn sync_from_url(&mut self, location_query: &str) -> Option<PendingFetch> {
        let location = location_query.trim_start_matches('?');
        let query = LocationQuery::parse(location);
        self.location = location.to_string();

        let (Some(page), Some(sort)) = (query.page, query.sort) else {
            return None;
        };

        let synced = PaginationState {
            active_page: page,
            items_per_page: self.pagination.items_per_page,
            sort,
        };
        if synced == self.pagination {
            return None;
        }

        self.pagination = synced;
        Some(self.refetch())
    }

    /// Applies the result of the fetch numbered `seq`. On success the
    /// collection is replaced wholesale; on failure the previous entities
    /// stay in place.
    pub fn apply<E: Display>(&mut self, seq: u64, result: Result<Page<T>, E>) -> FetchOutcome<E> {
        if seq > self.latest_issued {
            log::warn!(
                "Dropping response #{seq}: only {} fetches were issued",
                self.latest_issued
            );
            return FetchOutcome::Discarded;
        }
        if self.policy == StaleResponsePolicy::Discard && seq != self.latest_issued {
            log::debug!(
                "Discarding stale response #{seq}, latest issued is #{}",
                self.latest_issued
            );
            return FetchOutcome::Discarded;
        }

        self.collection.loading = false;
        match result {
            Ok(page) => {
                self.collection.entities = page.items;
                self.collection.total_items = page.total_items;
                self.collection.error_message = None;
                FetchOutcome::Applied
            }
            Err(err) => {
                self.collection.error_message = Some(err.to_string());
                FetchOutcome::Failed(err)
            }
        }
    }

    /// Marks the start of a create, update or delete.
    pub fn begin_update(&mut self) {
        self.collection.updating = true;
        self.collection.update_success = false;
        self.collection.error_message = None;
    }

    pub fn update_succeeded(&mut self) {
        self.collection.updating = false;
        self.collection.update_success = true;
    }

    pub fn update_failed(&mut self, message: impl Into<String>) {
        self.collection.updating = false;
        self.collection.update_success = false;
        self.collection.error_message = Some(message.into());
    }

    pub fn begin_entity_load(&mut self) {
        self.collection.loading = true;
        self.collection.error_message = None;
    }

    pub fn entity_loaded(&mut self, entity: T) {
        self.collection.loading = false;
        self.collection.entity = Some(entity);
    }

    /// Empties the detail/edit slot.
    pub fn entity_removed(&mut self) {
        self.collection.entity = None;
    }

    pub fn entity_load_failed(&mut self, message: impl Into<String>) {
        self.collection.loading = false;
        self.collection.error_message = Some(message.into());
    }
}
