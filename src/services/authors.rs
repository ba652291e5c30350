//! Author service (`/autores`)

use crate::{
    error::ApiResult,
    http::HttpClient,
    models::{Author, AuthorField, Book, BookField, Nationality, Page, PageQuery, QueryParams},
};

use super::Endpoint;

#[derive(Clone)]
pub struct AuthorsService {
    endpoint: Endpoint,
}

impl AuthorsService {
    pub fn new(http: HttpClient) -> Self {
        Self {
            endpoint: Endpoint::new(http, "autores"),
        }
    }

    /// Search authors, optionally restricted to one nationality
    pub async fn find_search(
        &self,
        query: &PageQuery<AuthorField>,
        search: Option<&str>,
        nationality: Option<Nationality>,
    ) -> ApiResult<Page<Author>> {
        let filters = QueryParams::new().push_opt("nacionalidade", nationality);
        self.endpoint.search(query, search, filters).await
    }

    pub async fn get_by_id(&self, id: i64) -> ApiResult<Author> {
        self.endpoint.get_by_id(id).await
    }

    pub async fn create(&self, author: &Author) -> ApiResult<Author> {
        self.endpoint.create(author).await
    }

    pub async fn update(&self, author: &Author, id: i64) -> ApiResult<Author> {
        self.endpoint.update(author, id).await
    }

    pub async fn delete(&self, id: i64) -> ApiResult<Option<Author>> {
        self.endpoint.delete(id).await
    }

    /// Books written by an author, optionally within one collection
    pub async fn find_search_books_by_author_id(
        &self,
        query: &PageQuery<BookField>,
        search: Option<&str>,
        author_id: i64,
        collection_id: Option<i64>,
    ) -> ApiResult<Page<Book>> {
        let url = format!("/{}/{}/livros", self.endpoint.path(), author_id);
        let filters = QueryParams::new().push_opt("colecaoId", collection_id);
        self.endpoint.search_at(&url, query, search, filters).await
    }

    /// Autocomplete by name
    pub async fn find_all_with_name_filter(&self, search: &str) -> ApiResult<Vec<Author>> {
        self.endpoint.find_all_with("findAllWithFilter", search).await
    }
}
