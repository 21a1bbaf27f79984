//! Pagination stage.

use std::num::NonZeroUsize;

use crate::error::{QueryError, Result};

/// Rows per page used when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(size) => size,
    None => unreachable!(),
};

/// Requested `(page_size, current_page)` pair, both 1-based and positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    page_size: NonZeroUsize,
    current_page: NonZeroUsize,
}

impl PageWindow {
    pub fn new(page_size: usize, current_page: usize) -> Result<Self> {
        Ok(Self {
            page_size: NonZeroUsize::new(page_size).ok_or(QueryError::ZeroPageSize)?,
            current_page: NonZeroUsize::new(current_page).ok_or(QueryError::ZeroPage)?,
        })
    }

    /// First page with the given size.
    pub fn first(page_size: NonZeroUsize) -> Self {
        Self {
            page_size,
            current_page: NonZeroUsize::MIN,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    pub fn current_page(&self) -> usize {
        self.current_page.get()
    }

    #[must_use]
    pub fn with_page(self, page: NonZeroUsize) -> Self {
        Self {
            current_page: page,
            ..self
        }
    }

    #[must_use]
    pub fn with_page_size(self, page_size: NonZeroUsize) -> Self {
        Self { page_size, ..self }
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::first(DEFAULT_PAGE_SIZE)
    }
}

/// One page of a derived list plus the numbers page controls need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// Page actually shown, after clamping.
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub page_size: usize,
}

impl<T> Page<'_, T> {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// 1-based index of the first item on the page, 0 when the page is empty.
    pub fn first_item(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.current_page - 1) * self.page_size + 1
        }
    }

    pub fn last_item(&self) -> usize {
        (self.current_page - 1) * self.page_size + self.items.len()
    }
}

/// `ceil(len / page_size)`; zero for an empty list.
pub fn total_pages(len: usize, page_size: NonZeroUsize) -> usize {
    len.div_ceil(page_size.get())
}

/// Slices out `[(page - 1) * size, page * size)`.
///
/// A page past the end is clamped to the last page (or page 1 for an empty
/// list), so the returned `current_page` always agrees with the items.
pub fn paginate<T>(items: &[T], window: PageWindow) -> Page<'_, T> {
    let total_pages = total_pages(items.len(), window.page_size);
    let current_page = window.current_page().min(total_pages.max(1));
    let size = window.page_size();
    let start = ((current_page - 1) * size).min(items.len());
    let end = start.saturating_add(size).min(items.len());
    Page {
        items: &items[start..end],
        current_page,
        total_pages,
        total_items: items.len(),
        page_size: size,
    }
}
