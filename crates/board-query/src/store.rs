//! Collection store: the raw collection of one view plus its query inputs.
//!
//! The store owns the fetched records and the current filter, search, sort
//! and page window. [`CollectionStore::view`] derives the visible page from
//! scratch every time (filter, then sort, then paginate), so no derived state
//! can drift from the raw collection.
//!
//! Loading follows `Idle -> Loading -> {Loaded | Failed}`. Each load is tagged
//! with a generation number; a result carrying an older generation than the
//! latest [`CollectionStore::begin_load`] is discarded so a slow response can
//! never overwrite a newer one.

use std::num::NonZeroUsize;

use board_model::{Record, RecordId};
use tracing::{debug, warn};

use crate::dedupe::dedupe_by_id;
use crate::error::{QueryError, Result};
use crate::filter::{PredicateSet, SearchQuery, apply_filters, apply_search};
use crate::page::{PageWindow, paginate};
use crate::sort::{SortKey, apply_sort};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    /// The last load failed; the previous (possibly empty) collection is kept.
    Failed { message: String },
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }
}

/// Handle for one load request, redeemed with [`CollectionStore::finish_load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    /// A newer load was started after this one; the result was dropped.
    Stale,
}

/// The derived, displayable slice of a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct View<'a, R> {
    pub records: Vec<&'a R>,
    pub current_page: usize,
    pub total_pages: usize,
    /// Records left after filtering and search, across all pages.
    pub total_matches: usize,
    /// Records in the raw collection.
    pub total_records: usize,
}

#[derive(Debug, Clone)]
pub struct CollectionStore<R: Record> {
    records: Vec<R>,
    state: LoadState,
    generation: u64,
    predicates: PredicateSet,
    search: Option<SearchQuery>,
    sort: Option<SortKey>,
    window: PageWindow,
}

impl<R: Record> Default for CollectionStore<R> {
    fn default() -> Self {
        Self::new(PageWindow::default())
    }
}

impl<R: Record> CollectionStore<R> {
    pub fn new(window: PageWindow) -> Self {
        Self {
            records: Vec::new(),
            state: LoadState::Idle,
            generation: 0,
            predicates: PredicateSet::new(),
            search: None,
            sort: None,
            window,
        }
    }

    pub fn with_page_size(page_size: NonZeroUsize) -> Self {
        Self::new(PageWindow::first(page_size))
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn window(&self) -> PageWindow {
        self.window
    }

    pub fn sort_key(&self) -> Option<&SortKey> {
        self.sort.as_ref()
    }

    /// Replaces the raw collection (deduplicated by id) and resets to page 1.
    pub fn set_all(&mut self, records: Vec<R>) {
        self.records = dedupe_by_id(records);
        self.reset_page();
    }

    /// Removes one record locally. Call only after the remote delete
    /// succeeded. Returns whether a record with that id was present.
    pub fn remove_by_id(&mut self, id: RecordId) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id() != id);
        let removed = self.records.len() != before;
        if removed {
            debug!(kind = R::KIND, %id, "removed record");
        }
        removed
    }

    pub fn find(&self, id: RecordId) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    // -------------------------------------------------------------------------
    // Loading
    // -------------------------------------------------------------------------

    /// Enters `Loading` and returns the ticket for the new request. Any ticket
    /// handed out earlier becomes stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.state = LoadState::Loading;
        LoadTicket {
            generation: self.generation,
        }
    }

    /// Applies the result of the request `ticket` was issued for, unless a
    /// newer request has been started since.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: std::result::Result<Vec<R>, String>,
    ) -> LoadOutcome {
        if ticket.generation != self.generation {
            warn!(
                kind = R::KIND,
                stale = ticket.generation,
                latest = self.generation,
                "discarding stale load result"
            );
            return LoadOutcome::Stale;
        }
        match result {
            Ok(records) => {
                self.set_all(records);
                self.state = LoadState::Loaded;
            }
            Err(message) => {
                self.state = LoadState::Failed { message };
            }
        }
        LoadOutcome::Applied
    }

    // -------------------------------------------------------------------------
    // Query inputs
    // -------------------------------------------------------------------------

    /// Replaces the predicate set; unknown dimensions are rejected.
    pub fn set_filters(&mut self, predicates: PredicateSet) -> Result<()> {
        predicates.check::<R>()?;
        self.predicates = predicates;
        self.reset_page();
        Ok(())
    }

    pub fn filters(&self) -> &PredicateSet {
        &self.predicates
    }

    pub fn set_search(&mut self, query: &str) {
        self.search = SearchQuery::new(query);
        self.reset_page();
    }

    /// Switches the single active sort key; `None` restores server order.
    pub fn set_sort(&mut self, key: Option<SortKey>) -> Result<()> {
        if let Some(key) = &key {
            SortKey::for_record::<R>(key.field(), key.direction())?;
        }
        self.sort = key;
        self.reset_page();
        Ok(())
    }

    /// Requests a page. Values past the end are clamped when the view is
    /// derived.
    pub fn set_page(&mut self, page: usize) -> Result<()> {
        let page = NonZeroUsize::new(page).ok_or(QueryError::ZeroPage)?;
        self.window = self.window.with_page(page);
        Ok(())
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Result<()> {
        let size = NonZeroUsize::new(page_size).ok_or(QueryError::ZeroPageSize)?;
        self.window = PageWindow::first(size);
        Ok(())
    }

    fn reset_page(&mut self) {
        self.window = self.window.with_page(NonZeroUsize::MIN);
    }

    // -------------------------------------------------------------------------
    // Derived view
    // -------------------------------------------------------------------------

    /// Filtered and searched records in sorted order, before pagination.
    pub fn matching(&self) -> Vec<&R> {
        let filtered = apply_filters(&self.records, &self.predicates);
        let searched = apply_search(filtered, self.search.as_ref());
        match &self.sort {
            Some(key) => apply_sort(searched, key),
            None => searched,
        }
    }

    pub fn view(&self) -> View<'_, R> {
        let matching = self.matching();
        let page = paginate(&matching, self.window);
        View {
            records: page.items.to_vec(),
            current_page: page.current_page,
            total_pages: page.total_pages,
            total_matches: page.total_items,
            total_records: self.records.len(),
        }
    }
}
