//! Shared domain enums (tags defined by the backend)

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Nationality
// ---------------------------------------------------------------------------

/// Author nationality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Nationality {
    Brasileiro,
    Portugues,
    Angolano,
    Mocambicano,
    Americano,
    Argentino,
    Ingles,
    Frances,
    Alemao,
    Italiano,
    Espanhol,
    Russo,
    Japones,
    Outro,
}

impl Nationality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Nationality::Brasileiro => "BRASILEIRO",
            Nationality::Portugues => "PORTUGUES",
            Nationality::Angolano => "ANGOLANO",
            Nationality::Mocambicano => "MOCAMBICANO",
            Nationality::Americano => "AMERICANO",
            Nationality::Argentino => "ARGENTINO",
            Nationality::Ingles => "INGLES",
            Nationality::Frances => "FRANCES",
            Nationality::Alemao => "ALEMAO",
            Nationality::Italiano => "ITALIANO",
            Nationality::Espanhol => "ESPANHOL",
            Nationality::Russo => "RUSSO",
            Nationality::Japones => "JAPONES",
            Nationality::Outro => "OUTRO",
        }
    }
}

impl std::fmt::Display for Nationality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ReservationStatus
// ---------------------------------------------------------------------------

/// Reservation lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    Ativa,
    Atendida,
    Expirada,
    Cancelada,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Ativa => "ATIVA",
            ReservationStatus::Atendida => "ATENDIDA",
            ReservationStatus::Expirada => "EXPIRADA",
            ReservationStatus::Cancelada => "CANCELADA",
        }
    }

    /// Whether the reservation still holds a copy for the reader
    pub fn is_open(&self) -> bool {
        matches!(self, ReservationStatus::Ativa)
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
