//! Collection model

use serde::{Deserialize, Serialize};

use super::page::SortField;

/// Named group of books (series, thematic shelf, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionField {
    Id,
    Name,
    Description,
}

impl SortField for CollectionField {
    fn as_str(&self) -> &'static str {
        match self {
            CollectionField::Id => "id",
            CollectionField::Name => "nome",
            CollectionField::Description => "descricao",
        }
    }
}
