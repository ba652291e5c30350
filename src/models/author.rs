//! Author model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::Nationality;
use super::page::SortField;

/// Author as exchanged with the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "nomeCompleto")]
    pub full_name: String,
    #[serde(rename = "dataNascimento", default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(rename = "nacionalidade", default)]
    pub nationality: Option<Nationality>,
    #[serde(rename = "biografia", default)]
    pub biography: Option<String>,
}

/// Sortable author columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorField {
    Id,
    FullName,
    BirthDate,
    Nationality,
}

impl SortField for AuthorField {
    fn as_str(&self) -> &'static str {
        match self {
            AuthorField::Id => "id",
            AuthorField::FullName => "nomeCompleto",
            AuthorField::BirthDate => "dataNascimento",
            AuthorField::Nationality => "nacionalidade",
        }
    }
}
