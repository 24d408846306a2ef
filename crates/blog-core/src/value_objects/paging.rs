//! Paging and sorting parameters shared by every list query

use serde::{Deserialize, Serialize};

/// Sort order for list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Normalized page request.
///
/// `sort_by` holds the API field name (for example `createdAt`); repositories
/// translate it through their own whitelist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub page_number: u32,
    pub page_size: u32,
    pub sort_by: String,
    pub sort_direction: SortDirection,
}

impl PageQuery {
    pub const DEFAULT_PAGE_SIZE: u32 = 10;
    pub const MAX_PAGE_SIZE: u32 = 100;
    pub const DEFAULT_SORT_BY: &'static str = "createdAt";

    /// Build a query, clamping page number and size into range
    pub fn new(
        page_number: Option<u32>,
        page_size: Option<u32>,
        sort_by: Option<String>,
        sort_direction: Option<SortDirection>,
    ) -> Self {
        Self {
            page_number: page_number.unwrap_or(1).max(1),
            page_size: page_size
                .unwrap_or(Self::DEFAULT_PAGE_SIZE)
                .clamp(1, Self::MAX_PAGE_SIZE),
            sort_by: sort_by
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| Self::DEFAULT_SORT_BY.to_string()),
            sort_direction: sort_direction.unwrap_or_default(),
        }
    }

    #[inline]
    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }

    #[inline]
    pub fn offset(&self) -> i64 {
        i64::from(self.page_number - 1) * i64::from(self.page_size)
    }

    /// Resolve `sort_by` against `(api_field, column)` pairs.
    /// Unknown fields fall back to the first entry.
    pub fn sort_column<'a>(&self, whitelist: &[(&str, &'a str)]) -> &'a str {
        whitelist
            .iter()
            .find(|(field, _)| *field == self.sort_by)
            .or_else(|| whitelist.first())
            .map_or("created_at", |(_, column)| *column)
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::new(None, None, None, None)
    }
}

/// One page of results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: i64,
    pub page: u32,
    pub page_size: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total_count: i64, query: &PageQuery) -> Self {
        Self {
            items,
            total_count,
            page: query.page_number,
            page_size: query.page_size,
        }
    }

    pub fn pages_count(&self) -> i64 {
        if self.page_size == 0 {
            return 0;
        }
        let size = i64::from(self.page_size);
        (self.total_count + size - 1) / size
    }

    /// Convert items while keeping the paging metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            page: self.page,
            page_size: self.page_size,
        }
    }
}
