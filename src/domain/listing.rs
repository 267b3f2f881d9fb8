//! Generic filter / sort / paginate over in-memory lists.
//!
//! Catalog screens (exercises, favorite foods, community groups) all need
//! the same three operations on an already-fetched list. `list` performs
//! them in that order and returns one page.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Default page size when none is given.
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Items that can be matched against a free-text search.
pub trait Searchable {
    /// Text the search needle is matched against.
    fn search_text(&self) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Options for listing items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    /// Case-insensitive substring filter (None = no filter).
    pub search: Option<String>,

    pub direction: SortDirection,

    /// 1-based page number.
    pub page: u32,

    pub per_page: u32,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self::paginated(1, DEFAULT_PER_PAGE)
    }
}

impl ListOptions {
    /// Create options for a paginated query.
    pub fn paginated(page: u32, per_page: u32) -> Self {
        Self {
            search: None,
            direction: SortDirection::Ascending,
            page,
            per_page,
        }
    }

    /// Filter to items whose search text contains `needle`.
    pub fn with_search(mut self, needle: impl Into<String>) -> Self {
        self.search = Some(needle.into());
        self
    }

    pub fn descending(mut self) -> Self {
        self.direction = SortDirection::Descending;
        self
    }

    fn effective_page(&self) -> u32 {
        self.page.max(1)
    }

    fn effective_per_page(&self) -> u32 {
        if self.per_page == 0 {
            DEFAULT_PER_PAGE
        } else {
            self.per_page
        }
    }

    /// Number of items to skip.
    pub fn offset(&self) -> usize {
        ((self.effective_page() - 1) as usize) * self.effective_per_page() as usize
    }
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListPage<T> {
    pub items: Vec<T>,

    /// Number of items matching the filter, across all pages.
    pub total: usize,

    pub page: u32,
    pub per_page: u32,
    pub has_more: bool,
}

impl<T> ListPage<T> {
    pub fn total_pages(&self) -> u32 {
        if self.per_page == 0 {
            return 0;
        }
        self.total.div_ceil(self.per_page as usize) as u32
    }
}

/// Filters, sorts by `sort_key` and returns the requested page.
///
/// Sorting is stable; keys that do not compare (NaN) are treated as equal.
pub fn list<T, K, F>(items: &[T], options: &ListOptions, sort_key: F) -> ListPage<T>
where
    T: Clone + Searchable,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    let needle = options
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    let mut matched: Vec<&T> = items
        .iter()
        .filter(|item| match &needle {
            Some(needle) => item.search_text().to_lowercase().contains(needle.as_str()),
            None => true,
        })
        .collect();

    matched.sort_by(|a, b| {
        let ord = sort_key(*a)
            .partial_cmp(&sort_key(*b))
            .unwrap_or(Ordering::Equal);
        match options.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });

    let total = matched.len();
    let per_page = options.effective_per_page();
    let offset = options.offset();
    let page_items: Vec<T> = matched
        .into_iter()
        .skip(offset)
        .take(per_page as usize)
        .cloned()
        .collect();

    ListPage {
        has_more: offset + page_items.len() < total,
        items: page_items,
        total,
        page: options.effective_page(),
        per_page,
    }
}
