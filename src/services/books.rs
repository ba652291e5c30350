//! Book service (`/livros`)

use crate::{
    error::ApiResult,
    http::HttpClient,
    models::{Book, BookField, Page, PageQuery, QueryParams},
};

use super::Endpoint;

#[derive(Clone)]
pub struct BooksService {
    endpoint: Endpoint,
}

impl BooksService {
    pub fn new(http: HttpClient) -> Self {
        Self {
            endpoint: Endpoint::new(http, "livros"),
        }
    }

    /// Search the catalog, optionally by collection and/or author
    pub async fn find_search(
        &self,
        query: &PageQuery<BookField>,
        search: Option<&str>,
        collection_id: Option<i64>,
        author_id: Option<i64>,
    ) -> ApiResult<Page<Book>> {
        let filters = QueryParams::new()
            .push_opt("colecaoId", collection_id)
            .push_opt("autorId", author_id);
        self.endpoint.search(query, search, filters).await
    }

    pub async fn get_by_id(&self, id: i64) -> ApiResult<Book> {
        self.endpoint.get_by_id(id).await
    }

    pub async fn create(&self, book: &Book) -> ApiResult<Book> {
        self.endpoint.create(book).await
    }

    pub async fn update(&self, book: &Book, id: i64) -> ApiResult<Book> {
        self.endpoint.update(book, id).await
    }

    pub async fn delete(&self, id: i64) -> ApiResult<Option<Book>> {
        self.endpoint.delete(id).await
    }

    /// Autocomplete by ISBN prefix
    pub async fn find_all_with_isbn_filter(&self, search: &str) -> ApiResult<Vec<Book>> {
        self.endpoint.find_all_with("findAllWithISBNFilter", search).await
    }
}
