use crate::ids::{ClientId, TransactionId};
use crate::{Money, Status};

/// Canonical mobile-money transaction, as produced by the input mapper.
/// Every field is populated; missing backend values have already been defaulted.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: TransactionId,
    pub tx_ref: String,
    pub date: String,
    pub client_name: String,
    pub client_id: ClientId,
    pub operator: String,
    pub product: String,
    pub method: String,
    pub payer_phone: String,
    pub receiver_phone: String,
    pub amount: Money,
    pub payment_status: Status,
    pub tx_status: Status,
    pub error_message: Option<String>,
}

impl Transaction {
    pub const NOT_AVAILABLE: &'static str = "N/A";
    pub const UNKNOWN_CLIENT: &'static str = "Unknown Client";

    pub fn is_success(&self) -> bool {
        return self.tx_status == Status::Success;
    }
}
