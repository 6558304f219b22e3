use serde::{Deserialize, Serialize};

/// Filter criteria applied to paginated list endpoints.
///
/// Sorting and filtering are delegated to the server: the client only
/// serializes these into query parameters, it never reorders results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFilters {
    pub search: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
    pub sort_by: Option<String>,
}

impl ListFilters {
    pub fn is_empty(&self) -> bool {
        self.search.is_none()
            && self.status.is_none()
            && self.category.is_none()
            && self.sort_by.is_none()
    }
}

/// A fully resolved list request: current page plus filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub filters: ListFilters,
}

impl ListQuery {
    pub fn new(page: u32, filters: ListFilters) -> Self {
        Self { page, filters }
    }

    /// Wire query parameters in a stable order. Only set filters are
    /// emitted; `page` is always present.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", self.page.max(1).to_string())];
        if let Some(search) = &self.filters.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(status) = &self.filters.status {
            pairs.push(("status", status.clone()));
        }
        if let Some(category) = &self.filters.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(sort_by) = &self.filters.sort_by {
            pairs.push(("sortBy", sort_by.clone()));
        }
        pairs
    }

    /// Percent-encoded query string, without the leading `?`.
    pub fn to_query_string(&self) -> String {
        self.to_query_pairs()
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}
