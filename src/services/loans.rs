//! Loan service (`/emprestimos`)

use crate::{
    error::{ApiError, ApiResult},
    http::HttpClient,
    models::{Loan, LoanField, Page, PageQuery, QueryParams},
};

use super::Endpoint;

#[derive(Clone)]
pub struct LoansService {
    endpoint: Endpoint,
}

impl LoansService {
    pub fn new(http: HttpClient) -> Self {
        Self {
            endpoint: Endpoint::new(http, "emprestimos"),
        }
    }

    pub async fn find_search(
        &self,
        query: &PageQuery<LoanField>,
        search: Option<&str>,
        returned: Option<bool>,
    ) -> ApiResult<Page<Loan>> {
        let filters = QueryParams::new().push_opt("devolvido", returned);
        self.endpoint.search(query, search, filters).await
    }

    pub async fn get_by_id(&self, id: i64) -> ApiResult<Loan> {
        self.endpoint.get_by_id(id).await
    }

    pub async fn create(&self, loan: &Loan) -> ApiResult<Loan> {
        self.endpoint.create(loan).await
    }

    pub async fn update(&self, loan: &Loan, id: i64) -> ApiResult<Loan> {
        self.endpoint.update(loan, id).await
    }

    pub async fn delete(&self, id: i64) -> ApiResult<Option<Loan>> {
        self.endpoint.delete(id).await
    }

    /// Lend a book to a reader; the reader confirms with their password.
    /// The backend computes dates and fees.
    pub async fn lend(&self, reader_id: i64, book_id: i64, password: &str) -> ApiResult<Loan> {
        let params = QueryParams::new()
            .push("leitorId", reader_id)
            .push("livroId", book_id)
            .push("senha", password);
        let url = format!("/{}/emprestar", self.endpoint.path());
        let body = self
            .endpoint
            .http()
            .post(&url, &params, None)
            .await
            .map_err(ApiError::into_rejected)?;
        Ok(serde_json::from_value(body)?)
    }
}
