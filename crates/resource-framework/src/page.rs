//! # Paging
//!
//! List queries are zero-based pages. The response shape mirrors what the REST
//! backend returns (`page`, `size`, `total`, `pageCount`, `content`).

use serde::{Deserialize, Serialize};

/// A page request with resource-specific filter criteria.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageRequest<F> {
    pub page: u32,
    pub size: u32,
    pub filter: F,
}

impl<F> PageRequest<F> {
    pub fn new(page: u32, size: u32, filter: F) -> Self {
        Self { page, size, filter }
    }
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub page: u32,
    pub size: u32,
    pub total: u64,
    pub page_count: u64,
    pub content: Vec<T>,
}

impl<T> Page<T> {
    /// Cuts page `page` of `size` records out of the full, already ordered match list.
    ///
    /// A `size` of zero yields an empty page with a `page_count` of zero.
    pub fn from_matches(matches: Vec<T>, page: u32, size: u32) -> Self {
        let total = matches.len() as u64;
        if size == 0 {
            return Self {
                page,
                size,
                total,
                page_count: 0,
                content: Vec::new(),
            };
        }

        let page_count = total.div_ceil(u64::from(size));
        let skip = usize::try_from(u64::from(page) * u64::from(size)).unwrap_or(usize::MAX);
        let content = matches
            .into_iter()
            .skip(skip)
            .take(size as usize)
            .collect();

        Self {
            page,
            size,
            total,
            page_count,
            content,
        }
    }

    /// An empty first page.
    pub fn empty(size: u32) -> Self {
        Self::from_matches(Vec::new(), 0, size)
    }

    /// The same page position carrying `content` instead.
    pub fn with_content<U>(self, content: Vec<U>) -> Page<U> {
        Page {
            page: self.page,
            size: self.size,
            total: self.total,
            page_count: self.page_count,
            content,
        }
    }

    /// Whether another page follows this one.
    pub fn has_next(&self) -> bool {
        u64::from(self.page) + 1 < self.page_count
    }
}
