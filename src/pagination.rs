//! Pure page slicing over an ordered sequence.
//!
//! [`paginate`] is total: any page number and page size produce a slice that
//! is in bounds, possibly empty.

use crate::config::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};
use crate::models::PageInfo;

// ---------------------------------------------------------------------------
// PageRequest
// ---------------------------------------------------------------------------

/// A validated page request. Both fields are always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_number: usize,
    page_size: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_number: DEFAULT_PAGE_NUMBER,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Coerce raw numbers into a request. A non-positive page number becomes
    /// 1 and a non-positive page size becomes the default of 20.
    pub fn new(page_number: i64, page_size: i64) -> Self {
        Self {
            page_number: positive_or(page_number, DEFAULT_PAGE_NUMBER),
            page_size: positive_or(page_size, DEFAULT_PAGE_SIZE),
        }
    }

    /// Build a request from optional query-string values, page number first
    /// like [`new`](Self::new).
    ///
    /// Absent, empty or non-numeric input falls back to the defaults; a parse
    /// failure is never reported.
    pub fn from_query(page_number: Option<&str>, page_size: Option<&str>) -> Self {
        let parse = |raw: Option<&str>| raw.and_then(|s| s.trim().parse::<i64>().ok()).unwrap_or(0);
        Self::new(parse(page_number), parse(page_size))
    }

    pub fn page_number(&self) -> usize {
        self.page_number
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

fn positive_or(value: i64, default: usize) -> usize {
    if value >= 1 {
        usize::try_from(value).unwrap_or(usize::MAX)
    } else {
        default
    }
}

// ---------------------------------------------------------------------------
// paginate
// ---------------------------------------------------------------------------

/// Slice `items` to the requested page and describe the surrounding pages.
///
/// `previous_page` and `next_page` stay within `[1, total_pages]`. When there
/// are no items at all, both equal the requested page.
pub fn paginate<'a, T>(items: &'a [T], request: &PageRequest) -> (&'a [T], PageInfo) {
    let page_number = request.page_number;
    let page_size = request.page_size;

    let start = (page_number - 1).saturating_mul(page_size);
    let page = if start >= items.len() {
        &items[..0]
    } else {
        let end = start.saturating_add(page_size).min(items.len());
        &items[start..end]
    };

    let total_pages = items.len().div_ceil(page_size);
    let (previous_page, next_page) = if total_pages == 0 {
        (page_number, page_number)
    } else {
        (
            page_number.saturating_sub(1).clamp(1, total_pages),
            page_number.saturating_add(1).clamp(1, total_pages),
        )
    };

    let info = PageInfo {
        total_pages,
        current_page: page_number,
        previous_page,
        next_page,
    };
    (page, info)
}
