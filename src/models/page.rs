//! Pagination, sorting and query-string shapes shared by every service

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ApiError, ApiResult};

/// Backend field an entity listing can be sorted by
pub trait SortField {
    fn as_str(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortBy<F> {
    pub key: F,
    pub order: SortOrder,
}

impl<F> SortBy<F> {
    pub fn asc(key: F) -> Self {
        Self { key, order: SortOrder::Asc }
    }

    pub fn desc(key: F) -> Self {
        Self { key, order: SortOrder::Desc }
    }
}

/// Paging and sorting state of a server-side data table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery<F> {
    pub page: u32,
    pub size: u32,
    pub sort_by: Vec<SortBy<F>>,
}

impl<F: SortField> PageQuery<F> {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size,
            sort_by: Vec::new(),
        }
    }

    pub fn sorted(mut self, sort: SortBy<F>) -> Self {
        self.sort_by.push(sort);
        self
    }

    /// `"<key>,<order>"` of the first sort entry; later entries are ignored.
    /// Without any entry the listing is sorted by `id` descending.
    pub fn sort_param(&self) -> String {
        match self.sort_by.first() {
            Some(sort) => format!("{},{}", sort.key.as_str(), sort.order.as_str()),
            None => "id,desc".to_string(),
        }
    }

    /// Query string for a search request: `search`, the entity filters,
    /// then `page`, `size` and `sort`.
    pub fn to_params(&self, search: Option<&str>, filters: QueryParams) -> QueryParams {
        let mut params = QueryParams::new().push("search", search.unwrap_or(""));
        params.0.extend(filters.0);
        params
            .push("page", self.page)
            .push("size", self.size)
            .push("sort", self.sort_param())
    }
}

impl<F: SortField> Default for PageQuery<F> {
    fn default() -> Self {
        Self::new(0, 10)
    }
}

/// Ordered query-string pairs; absent optional filters are left out
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(&'static str, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(mut self, key: &'static str, value: impl ToString) -> Self {
        self.0.push((key, value.to_string()));
        self
    }

    pub fn push_opt<V: ToString>(self, key: &'static str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.push(key, value),
            None => self,
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn as_slice(&self) -> &[(&'static str, String)] {
        &self.0
    }
}

/// One page of a listing: the `content` array plus the untouched metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Map<String, Value>,
}

impl<T: serde::de::DeserializeOwned> Page<T> {
    pub fn from_body(body: Value) -> ApiResult<Self> {
        let mut pagination = match body {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                return Err(ApiError::Decode(format!(
                    "expected a page object, got {}",
                    other
                )))
            }
        };

        let items = match pagination.remove("content") {
            Some(content) => serde_json::from_value(content)?,
            None => Vec::new(),
        };

        Ok(Self { items, pagination })
    }
}

impl<T> Page<T> {
    pub fn total_elements(&self) -> Option<u64> {
        self.pagination.get("totalElements").and_then(Value::as_u64)
    }

    pub fn total_pages(&self) -> Option<u64> {
        self.pagination.get("totalPages").and_then(Value::as_u64)
    }
}

/// Unwrap `_embedded.<collection>` from a hypermedia listing
pub fn embedded<T: serde::de::DeserializeOwned>(
    body: Value,
    collection: &str,
) -> ApiResult<Vec<T>> {
    match body.get("_embedded").and_then(|e| e.get(collection)) {
        Some(list) => Ok(serde_json::from_value(list.clone())?),
        None => Err(ApiError::Decode(format!(
            "missing `_embedded.{}` in response",
            collection
        ))),
    }
}
