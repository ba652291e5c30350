//! Reader (library member) and user account models

use serde::{Deserialize, Serialize};

use super::page::SortField;

/// Login account attached to a reader
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reader {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "nomeCompleto")]
    pub full_name: String,
    /// National id (CPF)
    pub cpf: String,
    #[serde(rename = "telefone", default)]
    pub phone: Option<String>,
    #[serde(rename = "usuario", default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderField {
    Id,
    FullName,
    Cpf,
    Phone,
}

impl SortField for ReaderField {
    fn as_str(&self) -> &'static str {
        match self {
            ReaderField::Id => "id",
            ReaderField::FullName => "nomeCompleto",
            ReaderField::Cpf => "cpf",
            ReaderField::Phone => "telefone",
        }
    }
}
