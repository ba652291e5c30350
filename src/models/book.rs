//! Book model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::author::Author;
use super::collection::Collection;
use super::page::SortField;

/// Catalogued title with its copy counters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "titulo")]
    pub title: String,
    pub isbn: String,
    #[serde(rename = "dataPublicacao", default)]
    pub publication_date: Option<NaiveDate>,
    #[serde(rename = "numeroPaginas", default)]
    pub page_count: Option<u32>,
    #[serde(rename = "totalExemplares", default)]
    pub total_copies: u32,
    #[serde(rename = "exemplaresDisponiveis", default)]
    pub available_copies: u32,
    #[serde(rename = "autores", default)]
    pub authors: Vec<Author>,
    #[serde(rename = "colecoes", default)]
    pub collections: Vec<Collection>,
}

impl Book {
    /// At least one copy can be lent right now
    pub fn is_available(&self) -> bool {
        self.available_copies > 0
    }

    /// Copies currently out on loan
    pub fn lent_copies(&self) -> u32 {
        self.total_copies.saturating_sub(self.available_copies)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookField {
    Id,
    Title,
    Isbn,
    PublicationDate,
    PageCount,
    AvailableCopies,
}

impl SortField for BookField {
    fn as_str(&self) -> &'static str {
        match self {
            BookField::Id => "id",
            BookField::Title => "titulo",
            BookField::Isbn => "isbn",
            BookField::PublicationDate => "dataPublicacao",
            BookField::PageCount => "numeroPaginas",
            BookField::AvailableCopies => "exemplaresDisponiveis",
        }
    }
}
