use crate::ids::ClientId;
use crate::Money;

use std::fmt;

/// Canonical client record. Only raw values are stored; masked variants are
/// projections computed at display time (see `privacy`).
#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    pub id: ClientId,
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub balance: Money,
    pub status: ClientStatus,
    pub registered_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientStatus {
    Active,
    Guest,
}

impl ClientStatus {
    /// Clients who left an email address are considered registered
    pub fn from_email(email: &str) -> Self {
        if email.trim().is_empty() {
            return Self::Guest;
        }

        return Self::Active;
    }
}

impl fmt::Display for ClientStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return match self {
            Self::Active => write!(f, "Active"),
            Self::Guest => write!(f, "Guest"),
        };
    }
}
