//! Paging query extractor
//!
//! Reads `pageNumber`, `pageSize`, `sortBy`, `sortDirection` and the search
//! terms. Malformed numbers fall back to their defaults.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use blog_core::traits::{BlogQuery, UserQuery};
use blog_core::{PageQuery, SortDirection};
use serde::Deserialize;

use crate::response::ApiError;

/// Raw paging query parameters
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    #[serde(default)]
    pub page_number: Option<String>,
    #[serde(default)]
    pub page_size: Option<String>,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub sort_direction: Option<String>,
    #[serde(default)]
    pub search_name_term: Option<String>,
    #[serde(default)]
    pub search_login_term: Option<String>,
    #[serde(default)]
    pub search_email_term: Option<String>,
}

fn non_empty(term: Option<String>) -> Option<String> {
    term.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
}

impl PageParams {
    /// Normalized page request
    pub fn page(&self) -> PageQuery {
        let direction = match self.sort_direction.as_deref().map(str::to_ascii_lowercase) {
            Some(d) if d == "asc" => Some(SortDirection::Asc),
            Some(d) if d == "desc" => Some(SortDirection::Desc),
            _ => None,
        };

        PageQuery::new(
            self.page_number.as_deref().and_then(|n| n.trim().parse().ok()),
            self.page_size.as_deref().and_then(|n| n.trim().parse().ok()),
            self.sort_by.clone(),
            direction,
        )
    }

    /// Blog listing filter
    pub fn blog_query(self) -> BlogQuery {
        BlogQuery {
            page: self.page(),
            search_name_term: non_empty(self.search_name_term),
        }
    }

    /// Admin user listing filter
    pub fn user_query(self) -> UserQuery {
        UserQuery {
            page: self.page(),
            search_login_term: non_empty(self.search_login_term),
            search_email_term: non_empty(self.search_email_term),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for PageParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PageParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        Ok(params)
    }
}
