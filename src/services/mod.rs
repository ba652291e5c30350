//! Per-entity API services
//!
//! Each service wraps one backend resource (`/autores`, `/livros`, ...) and
//! translates table actions into paginated, sorted requests. The shared
//! request shapes live in [`Endpoint`].

pub mod authors;
pub mod books;
pub mod collections;
pub mod loans;
pub mod readers;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{
    error::{ApiError, ApiResult},
    http::HttpClient,
    models::{page::embedded, Page, PageQuery, QueryParams, SortField},
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub authors: authors::AuthorsService,
    pub collections: collections::CollectionsService,
    pub books: books::BooksService,
    pub readers: readers::ReadersService,
    pub loans: loans::LoansService,
}

impl Services {
    /// Create all services on top of one HTTP client
    pub fn new(http: HttpClient) -> Self {
        Self {
            authors: authors::AuthorsService::new(http.clone()),
            collections: collections::CollectionsService::new(http.clone()),
            books: books::BooksService::new(http.clone()),
            readers: readers::ReadersService::new(http.clone()),
            loans: loans::LoansService::new(http),
        }
    }
}

/// One backend resource rooted at `/<path>`
#[derive(Clone)]
pub(crate) struct Endpoint {
    http: HttpClient,
    path: &'static str,
}

impl Endpoint {
    pub(crate) fn new(http: HttpClient, path: &'static str) -> Self {
        Self { http, path }
    }

    pub(crate) fn http(&self) -> &HttpClient {
        &self.http
    }

    pub(crate) fn path(&self) -> &'static str {
        self.path
    }

    /// `GET /<path>/buscar`
    pub(crate) async fn search<T, F>(
        &self,
        query: &PageQuery<F>,
        search: Option<&str>,
        filters: QueryParams,
    ) -> ApiResult<Page<T>>
    where
        T: DeserializeOwned,
        F: SortField,
    {
        let url = format!("/{}/buscar", self.path);
        self.search_at(&url, query, search, filters).await
    }

    /// Paginated search under an arbitrary sub-path (nested listings)
    pub(crate) async fn search_at<T, F>(
        &self,
        url: &str,
        query: &PageQuery<F>,
        search: Option<&str>,
        filters: QueryParams,
    ) -> ApiResult<Page<T>>
    where
        T: DeserializeOwned,
        F: SortField,
    {
        let params = query.to_params(search, filters);
        let body = self.http.get(url, &params).await?;
        Page::from_body(body)
    }

    /// `GET /<path>/{id}`; the server payload is kept raw in the error
    pub(crate) async fn get_by_id<T: DeserializeOwned>(&self, id: i64) -> ApiResult<T> {
        let body = self
            .http
            .get(&format!("/{}/{}", self.path, id), &QueryParams::new())
            .await?;
        Ok(serde_json::from_value(body)?)
    }

    /// `POST /<path>`; a rejection carries the JSON-encoded server payload
    pub(crate) async fn create<T>(&self, entity: &T) -> ApiResult<T>
    where
        T: Serialize + DeserializeOwned,
    {
        let body = serde_json::to_value(entity)?;
        let created = self
            .http
            .post(&format!("/{}", self.path), &QueryParams::new(), Some(&body))
            .await
            .map_err(ApiError::into_rejected)?;
        Ok(serde_json::from_value(created)?)
    }

    /// `PUT /<path>/{id}` with the full representation
    pub(crate) async fn update<T>(&self, entity: &T, id: i64) -> ApiResult<T>
    where
        T: Serialize + DeserializeOwned,
    {
        let body = serde_json::to_value(entity)?;
        let updated = self
            .http
            .put(&format!("/{}/{}", self.path, id), &body)
            .await?;
        Ok(serde_json::from_value(updated)?)
    }

    /// `DELETE /<path>/{id}`; `None` when the backend answers with no body
    pub(crate) async fn delete<T: DeserializeOwned>(&self, id: i64) -> ApiResult<Option<T>> {
        let body = self.http.delete(&format!("/{}/{}", self.path, id)).await?;
        match body {
            Value::Null => Ok(None),
            body => Ok(Some(serde_json::from_value(body)?)),
        }
    }

    /// `GET /<path>/search/<finder>?search=`, unwrapping `_embedded.<path>`
    pub(crate) async fn find_all_with<T: DeserializeOwned>(
        &self,
        finder: &str,
        search: &str,
    ) -> ApiResult<Vec<T>> {
        let params = QueryParams::new().push("search", search);
        let body = self
            .http
            .get(&format!("/{}/search/{}", self.path, finder), &params)
            .await?;
        embedded(body, self.path)
    }
}
