//! Reader service (`/leitores`) with the reader's loans and reservations

use crate::{
    error::ApiResult,
    http::HttpClient,
    models::{
        Loan, LoanField, Page, PageQuery, QueryParams, Reader, ReaderField, Reservation,
        ReservationField, ReservationStatus,
    },
};

use super::Endpoint;

#[derive(Clone)]
pub struct ReadersService {
    endpoint: Endpoint,
}

impl ReadersService {
    pub fn new(http: HttpClient) -> Self {
        Self {
            endpoint: Endpoint::new(http, "leitores"),
        }
    }

    pub async fn find_search(
        &self,
        query: &PageQuery<ReaderField>,
        search: Option<&str>,
    ) -> ApiResult<Page<Reader>> {
        self.endpoint.search(query, search, QueryParams::new()).await
    }

    pub async fn get_by_id(&self, id: i64) -> ApiResult<Reader> {
        self.endpoint.get_by_id(id).await
    }

    pub async fn create(&self, reader: &Reader) -> ApiResult<Reader> {
        self.endpoint.create(reader).await
    }

    pub async fn update(&self, reader: &Reader, id: i64) -> ApiResult<Reader> {
        self.endpoint.update(reader, id).await
    }

    pub async fn delete(&self, id: i64) -> ApiResult<Option<Reader>> {
        self.endpoint.delete(id).await
    }

    /// Loans of a reader, optionally for one book and/or by returned flag
    pub async fn find_search_loans_by_reader_id(
        &self,
        query: &PageQuery<LoanField>,
        search: Option<&str>,
        reader_id: i64,
        book_id: Option<i64>,
        returned: Option<bool>,
    ) -> ApiResult<Page<Loan>> {
        let url = format!("/{}/{}/emprestimos", self.endpoint.path(), reader_id);
        let filters = QueryParams::new()
            .push_opt("livroId", book_id)
            .push_opt("devolvido", returned);
        self.endpoint.search_at(&url, query, search, filters).await
    }

    /// Reservations of a reader, optionally in one status
    pub async fn find_search_reservations_by_reader_id(
        &self,
        query: &PageQuery<ReservationField>,
        search: Option<&str>,
        reader_id: i64,
        status: Option<ReservationStatus>,
    ) -> ApiResult<Page<Reservation>> {
        let url = format!("/{}/{}/reservas", self.endpoint.path(), reader_id);
        let filters = QueryParams::new().push_opt("status", status);
        self.endpoint.search_at(&url, query, search, filters).await
    }
}
