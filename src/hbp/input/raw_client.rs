use super::fields::{first_text, money, text};

use crate::ids::ClientId;
use crate::models::{Client, ClientStatus};

use serde::Deserialize;
use serde_json::Value;

/// Client exactly as the backend sends it
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct RawClient {
    pub client_id: Option<Value>,
    pub id: Option<Value>,
    pub nom: Option<Value>,
    pub prenom: Option<Value>,
    pub telephone: Option<Value>,
    pub email: Option<Value>,
    pub balance: Option<Value>,
    pub date: Option<Value>,
}

impl RawClient {
    pub fn from_value(value: Value) -> Self {
        return match serde_json::from_value(value) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("Unreadable client record, using defaults: {e}");
                Self::default()
            }
        };
    }

    pub fn parse_client(self) -> Client {
        let id = match first_text(&[&self.client_id, &self.id]) {
            Some(id) => ClientId(id),
            None => ClientId::synthesize(),
        };

        let full_name = [text(&self.nom), text(&self.prenom)]
            .into_iter()
            .flatten()
            .map(|part| part.trim().to_string())
            .collect::<Vec<String>>()
            .join(" ");

        let email = text(&self.email).unwrap_or_default();

        let client = Client {
            id,
            full_name,
            phone: text(&self.telephone).unwrap_or_default(),
            status: ClientStatus::from_email(&email),
            email,
            balance: money(&self.balance),
            registered_at: text(&self.date),
        };

        log::debug!("Mapped client: {client:?}");

        return client;
    }
}
