//! Collection service (`/colecoes`)

use crate::{
    error::ApiResult,
    http::HttpClient,
    models::{Book, BookField, Collection, CollectionField, Page, PageQuery, QueryParams},
};

use super::Endpoint;

#[derive(Clone)]
pub struct CollectionsService {
    endpoint: Endpoint,
}

impl CollectionsService {
    pub fn new(http: HttpClient) -> Self {
        Self {
            endpoint: Endpoint::new(http, "colecoes"),
        }
    }

    pub async fn find_search(
        &self,
        query: &PageQuery<CollectionField>,
        search: Option<&str>,
    ) -> ApiResult<Page<Collection>> {
        self.endpoint.search(query, search, QueryParams::new()).await
    }

    pub async fn get_by_id(&self, id: i64) -> ApiResult<Collection> {
        self.endpoint.get_by_id(id).await
    }

    pub async fn create(&self, collection: &Collection) -> ApiResult<Collection> {
        self.endpoint.create(collection).await
    }

    pub async fn update(&self, collection: &Collection, id: i64) -> ApiResult<Collection> {
        self.endpoint.update(collection, id).await
    }

    pub async fn delete(&self, id: i64) -> ApiResult<Option<Collection>> {
        self.endpoint.delete(id).await
    }

    /// Books in a collection, optionally by one author
    pub async fn find_search_books_by_collection_id(
        &self,
        query: &PageQuery<BookField>,
        search: Option<&str>,
        collection_id: i64,
        author_id: Option<i64>,
    ) -> ApiResult<Page<Book>> {
        let url = format!("/{}/{}/livros", self.endpoint.path(), collection_id);
        let filters = QueryParams::new().push_opt("autorId", author_id);
        self.endpoint.search_at(&url, query, search, filters).await
    }

    /// Autocomplete by name
    pub async fn find_all_with_name_filter(&self, search: &str) -> ApiResult<Vec<Collection>> {
        self.endpoint.find_all_with("findAllWithFilter", search).await
    }
}
