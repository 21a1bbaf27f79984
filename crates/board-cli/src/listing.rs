//! The list flow shared by companies, jobs and the team directory.

use anyhow::{Context, Result};
use board_model::Record;
use board_query::{CollectionStore, PredicateSet, SortDirection, SortKey, facet_values};

/// Sort applied to the jobs list when no `--sort` is given: newest first.
pub const JOBS_DEFAULT_SORT: (&str, SortDirection) = ("postedAt", SortDirection::Descending);

/// Query inputs for one list invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    /// `DIMENSION=VALUE` pairs; repeated dimensions OR together.
    pub filters: Vec<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub descending: bool,
    pub page: usize,
    pub page_size: usize,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            filters: Vec::new(),
            search: None,
            sort: None,
            descending: false,
            page: 1,
            page_size: board_client::config::DEFAULT_PAGE_SIZE,
        }
    }
}

impl ListOptions {
    pub fn predicates(&self) -> Result<PredicateSet> {
        let mut predicates = PredicateSet::new();
        for pair in &self.filters {
            predicates.accept_pair(pair)?;
        }
        Ok(predicates)
    }

    /// Uses `field` in `direction` unless a sort was already chosen.
    #[must_use]
    pub fn with_default_sort(mut self, (field, direction): (&str, SortDirection)) -> Self {
        if self.sort.is_none() {
            self.sort = Some(field.to_string());
            self.descending = direction == SortDirection::Descending;
        }
        self
    }

    pub fn direction(&self) -> SortDirection {
        if self.descending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }
}

/// Pushes `options` into `store`. Page size is applied first and the page
/// last, since every other input resets the page.
pub fn apply_options<R: Record>(store: &mut CollectionStore<R>, options: &ListOptions) -> Result<()> {
    store.set_page_size(options.page_size)?;
    store
        .set_filters(options.predicates()?)
        .context("invalid --filter")?;
    store.set_search(options.search.as_deref().unwrap_or_default());
    let key = options
        .sort
        .as_deref()
        .map(|field| SortKey::for_record::<R>(field, options.direction()))
        .transpose()
        .context("invalid --sort")?;
    store.set_sort(key)?;
    store.set_page(options.page).context("invalid --page")?;
    Ok(())
}

/// Distinct values per filter dimension, in first-seen order.
pub fn facets<R: Record>(records: &[R]) -> Vec<(&'static str, Vec<String>)> {
    R::DIMENSIONS
        .iter()
        .map(|dimension| (*dimension, facet_values(records, dimension)))
        .collect()
}
