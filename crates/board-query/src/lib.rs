//! Client-side query engine for fetched collections.
//!
//! Three pure stages applied in a fixed order (filter, sort, paginate), plus
//! the [`CollectionStore`] that owns one view's raw records and query inputs.
//!
//! ```
//! use board_model::{Company, Industry, RecordId};
//! use board_query::{PageWindow, PredicateSet, SortDirection, SortKey};
//!
//! let companies = vec![
//!     Company {
//!         id: RecordId::new(1),
//!         name: "Beta".into(),
//!         industry: Industry::Finance,
//!         website: String::new(),
//!         headquarters: String::new(),
//!         created_at: None,
//!     },
//! ];
//! let filtered = board_query::apply_filters(
//!     &companies,
//!     &PredicateSet::new().with("industry", ["FINANCE"]),
//! );
//! let sorted = board_query::apply_sort(filtered, &SortKey::new("name", SortDirection::Ascending));
//! let page = board_query::paginate(&sorted, PageWindow::new(10, 1).unwrap());
//! assert_eq!(page.total_pages, 1);
//! ```

pub mod dedupe;
pub mod error;
pub mod facets;
pub mod filter;
pub mod page;
pub mod sort;
pub mod store;

pub use dedupe::dedupe_by_id;
pub use error::{QueryError, Result};
pub use facets::facet_values;
pub use filter::{PredicateSet, SearchQuery, apply_filters, apply_search};
pub use page::{DEFAULT_PAGE_SIZE, Page, PageWindow, paginate, total_pages};
pub use sort::{SortDirection, SortKey, apply_sort};
pub use store::{CollectionStore, LoadOutcome, LoadState, LoadTicket, View};
