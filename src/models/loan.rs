//! Loan (borrow) model and related types

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::book::Book;
use super::page::SortField;
use super::reader::Reader;

/// Loan of one book copy to a reader
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "leitor")]
    pub reader: Reader,
    #[serde(rename = "livro")]
    pub book: Book,
    #[serde(rename = "dataEmprestimo")]
    pub loan_date: NaiveDate,
    #[serde(rename = "dataPrevistaDevolucao")]
    pub due_date: NaiveDate,
    /// Set exactly when `returned` is true
    #[serde(rename = "dataDevolucao", default)]
    pub return_date: Option<NaiveDate>,
    #[serde(rename = "quantidadeRenovacoes", default)]
    pub renewals: u32,
    #[serde(rename = "valorBase", default)]
    pub base_fee: Decimal,
    #[serde(rename = "multa", default)]
    pub penalty: Decimal,
    #[serde(rename = "valorTotal", default)]
    pub total_amount: Decimal,
    #[serde(rename = "devolvido", default)]
    pub returned: bool,
}

impl Loan {
    /// Still out past its due date on `today`
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.returned && today > self.due_date
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoanField {
    Id,
    LoanDate,
    DueDate,
    ReturnDate,
    Renewals,
    TotalAmount,
}

impl SortField for LoanField {
    fn as_str(&self) -> &'static str {
        match self {
            LoanField::Id => "id",
            LoanField::LoanDate => "dataEmprestimo",
            LoanField::DueDate => "dataPrevistaDevolucao",
            LoanField::ReturnDate => "dataDevolucao",
            LoanField::Renewals => "quantidadeRenovacoes",
            LoanField::TotalAmount => "valorTotal",
        }
    }
}
