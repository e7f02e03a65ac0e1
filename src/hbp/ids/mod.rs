mod client_id;
mod transaction_id;

pub use client_id::ClientId;
pub use transaction_id::TransactionId;

/// Random token for records the backend sent without an identifier.
/// Only unique enough to key one fetched batch.
fn synthesize() -> String {
    return uuid::Uuid::new_v4().simple().to_string();
}
