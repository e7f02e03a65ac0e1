use super::fields::{first_text, money, text};
use super::MappingContext;

use crate::ids::{ClientId, TransactionId};
use crate::models::Transaction;
use crate::Status;

use serde::Deserialize;
use serde_json::Value;

/// Transaction exactly as the backend sends it. Every field is optional and untyped.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct RawTransaction {
    pub transactions_id: Option<Value>,
    pub id: Option<Value>,
    pub date: Option<Value>,
    pub client_nom: Option<Value>,
    pub client_id: Option<Value>,
    pub operateur_nom: Option<Value>,
    pub produit_libelle: Option<Value>,
    pub numero_payeur: Option<Value>,
    pub numero_recepteur: Option<Value>,
    pub montant: Option<Value>,
    pub amount: Option<Value>,
    pub status_paiement: Option<Value>,
    pub status_transaction: Option<Value>,
    pub methode_paiement_nom: Option<Value>,
    pub error_message: Option<Value>,
}

impl RawTransaction {
    /// Anything that is not an object still becomes a (fully defaulted) record
    pub fn from_value(value: Value) -> Self {
        return match serde_json::from_value(value) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("Unreadable transaction record, using defaults: {e}");
                Self::default()
            }
        };
    }

    pub fn parse_transaction(self, ctx: &MappingContext) -> Transaction {
        let natural_id = first_text(&[&self.transactions_id, &self.id]);

        let id = match natural_id.clone() {
            Some(id) => TransactionId(id),
            None => TransactionId::synthesize(),
        };

        let client_name = text(&self.client_nom);

        let client_id = match first_text(&[&self.client_id]).or_else(|| client_name.clone()) {
            Some(id) => ClientId(id),
            None => ClientId::unknown(),
        };

        let amount = match text(&self.montant) {
            Some(_) => money(&self.montant),
            None => money(&self.amount),
        };

        let payment_status = text(&self.status_paiement);
        let tx_status = text(&self.status_transaction).or_else(|| payment_status.clone());

        let not_available = || Transaction::NOT_AVAILABLE.to_string();

        let transaction = Transaction {
            id,
            tx_ref: natural_id.unwrap_or_else(not_available),
            date: text(&self.date).unwrap_or_else(|| ctx.default_date()),
            client_name: client_name.unwrap_or_else(|| Transaction::UNKNOWN_CLIENT.to_string()),
            client_id,
            operator: text(&self.operateur_nom).unwrap_or_else(not_available),
            product: text(&self.produit_libelle).unwrap_or_else(not_available),
            method: text(&self.methode_paiement_nom).unwrap_or_else(not_available),
            payer_phone: text(&self.numero_payeur).unwrap_or_else(not_available),
            receiver_phone: text(&self.numero_recepteur).unwrap_or_else(not_available),
            amount,
            payment_status: Status::normalize(payment_status.as_deref()),
            tx_status: Status::normalize(tx_status.as_deref()),
            error_message: text(&self.error_message),
        };

        log::debug!("Mapped transaction: {transaction:?}");

        return transaction;
    }
}
