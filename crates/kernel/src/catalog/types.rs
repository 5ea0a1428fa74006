//! Catalog query and result types.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Fixed number of games per catalog page.
pub const CATALOG_PAGE_SIZE: usize = 10;

/// A catalog listing query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogQuery {
    /// Case-insensitive title substring. Empty or absent means no constraint.
    #[serde(default)]
    pub search: Option<String>,

    /// Tag ids a game must all carry. Empty means no constraint.
    #[serde(default)]
    pub tag_ids: BTreeSet<i64>,
}

impl CatalogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_tags(mut self, tag_ids: impl IntoIterator<Item = i64>) -> Self {
        self.tag_ids.extend(tag_ids);
        self
    }

    /// The search text, if it actually constrains anything.
    pub fn search_text(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }
}

/// One page of catalog results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogPage<T> {
    /// Items on this page.
    pub items: Vec<T>,

    /// Total matching items (before paging).
    pub total: usize,

    /// Current page number (1-indexed).
    pub page: usize,

    pub per_page: usize,

    pub total_pages: usize,

    pub has_next: bool,

    pub has_prev: bool,
}

impl<T> CatalogPage<T> {
    /// Create a page with paging calculations.
    pub fn new(items: Vec<T>, total: usize, page: usize, per_page: usize) -> Self {
        let total_pages = super::pager::total_pages(total, per_page);

        Self {
            items,
            total,
            page,
            per_page,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}
