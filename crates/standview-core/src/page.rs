//! Fixed-size pagination over a filtered result set.
//!
//! [`paginate`] never renumbers: asking for a page past the end returns an
//! empty page. Callers that want to stay on a valid page use [`clamp_page`]
//! and reset to page 1 whenever the filtered set changes.

use serde::Serialize;

/// Records per page on the listing view.
pub const DEFAULT_PAGE_SIZE: usize = 9;

/// One page of results plus the numbers needed to render navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page that was requested.
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Navigation affordances for this page.
    #[must_use]
    pub const fn nav(&self) -> PageNav {
        PageNav::new(self.page, self.total_pages)
    }
}

/// Number of pages needed for `total_items` at `page_size`.
///
/// A zero page size is treated as 1.
#[must_use]
pub const fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(effective_page_size(page_size))
}

const fn effective_page_size(page_size: usize) -> usize {
    if page_size == 0 { 1 } else { page_size }
}

/// Clamp a requested page into `[1, max(total_pages, 1)]`.
#[must_use]
pub const fn clamp_page(page: usize, total_pages: usize) -> usize {
    let last = if total_pages == 0 { 1 } else { total_pages };
    if page == 0 {
        1
    } else if page > last {
        last
    } else {
        page
    }
}

/// Slice `items` into page `page` (1-based) of size `page_size`.
///
/// Page 0 and pages past the end yield no items. A zero page size is
/// treated as 1 so the page count is always defined.
#[must_use]
pub fn paginate<T: Clone>(items: &[T], page_size: usize, page: usize) -> Page<T> {
    let size = effective_page_size(page_size);
    let total_items = items.len();

    let slice = if page == 0 {
        &[][..]
    } else {
        let start = (page - 1).saturating_mul(size).min(total_items);
        let end = page.saturating_mul(size).min(total_items);
        &items[start..end]
    };

    Page {
        items: slice.to_vec(),
        page,
        page_size: size,
        total_items,
        total_pages: total_pages(total_items, size),
    }
}

/// First/previous/next/last targets and the page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageNav {
    pub current: usize,
    pub total_pages: usize,
}

impl PageNav {
    #[must_use]
    pub const fn new(current: usize, total_pages: usize) -> Self {
        Self {
            current,
            total_pages,
        }
    }

    /// Controls are only worth drawing when there is more than one page.
    #[must_use]
    pub const fn show_controls(&self) -> bool {
        self.total_pages > 1
    }

    /// "First" target, `None` when already on page 1.
    #[must_use]
    pub const fn first(&self) -> Option<usize> {
        if self.current <= 1 || self.total_pages == 0 {
            None
        } else {
            Some(1)
        }
    }

    #[must_use]
    pub const fn prev(&self) -> Option<usize> {
        if self.current <= 1 || self.total_pages == 0 {
            None
        } else {
            Some(clamp_page(self.current - 1, self.total_pages))
        }
    }

    #[must_use]
    pub const fn next(&self) -> Option<usize> {
        if self.current >= self.total_pages {
            None
        } else {
            Some(self.current + 1)
        }
    }

    /// "Last" target, `None` when already on the last page.
    #[must_use]
    pub const fn last(&self) -> Option<usize> {
        if self.current >= self.total_pages {
            None
        } else {
            Some(self.total_pages)
        }
    }

    /// Every page number, 1-based.
    pub fn pages(&self) -> impl Iterator<Item = usize> {
        1..=self.total_pages
    }
}
