//! Reservation model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::book::Book;
use super::enums::ReservationStatus;
use super::page::SortField;
use super::reader::Reader;

/// Hold placed by a reader on a book with no copy available
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "leitor")]
    pub reader: Reader,
    #[serde(rename = "livro")]
    pub book: Book,
    #[serde(rename = "dataCadastro")]
    pub registration_date: NaiveDate,
    #[serde(rename = "dataVencimento")]
    pub due_date: NaiveDate,
    #[serde(rename = "quantidadeRenovacoes", default)]
    pub renewals: u32,
    pub status: ReservationStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationField {
    Id,
    RegistrationDate,
    DueDate,
    Status,
}

impl SortField for ReservationField {
    fn as_str(&self) -> &'static str {
        match self {
            ReservationField::Id => "id",
            ReservationField::RegistrationDate => "dataCadastro",
            ReservationField::DueDate => "dataVencimento",
            ReservationField::Status => "status",
        }
    }
}
