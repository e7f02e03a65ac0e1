//! Boundary between the backend's loosely typed JSON and the canonical models.
//! Nothing past this module ever sees a raw record.

mod fields;
mod raw_client;
mod raw_transaction;

pub use raw_client::RawClient;
pub use raw_transaction::RawTransaction;

use crate::models::{Client, Transaction};
use crate::timestamp;

use std::cmp::Reverse;

use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use serde_json::Value;

/// Values shared by every record of one fetched batch
#[derive(Debug, Clone, Copy)]
pub struct MappingContext {
    pub fetched_at: DateTime<Utc>,
    /// Timestamps without an offset are read as wall-clock time here
    pub utc_offset: FixedOffset,
}

impl MappingContext {
    pub fn new(fetched_at: DateTime<Utc>) -> Self {
        return Self {
            fetched_at,
            utc_offset: timestamp::utc(),
        };
    }

    pub fn with_utc_offset(self, utc_offset: FixedOffset) -> Self {
        return Self { utc_offset, ..self };
    }

    pub fn now() -> Self {
        return Self::new(Utc::now());
    }

    /// Date given to records that arrive without one
    pub fn default_date(&self) -> String {
        return self.fetched_at.to_rfc3339_opts(SecondsFormat::Millis, true);
    }
}

/// Maps a transactions payload. Anything but a JSON array is an empty batch.
/// The result is ordered by date, most recent first; undated records go last.
pub fn map_transactions(payload: Value, ctx: &MappingContext) -> Vec<Transaction> {
    let items = match payload {
        Value::Array(items) => items,
        other => {
            log::warn!("Expected an array of transactions, got {}", fields::kind(&other));
            return vec![];
        }
    };

    log::debug!("Mapping {} raw transactions", items.len());

    let mut transactions: Vec<Transaction> = items
        .into_iter()
        .map(|item| RawTransaction::from_value(item).parse_transaction(ctx))
        .collect();

    transactions.sort_by_cached_key(|tx| Reverse(timestamp::parse_timestamp(&tx.date, ctx.utc_offset)));

    return transactions;
}

/// Maps a clients payload, keeping the backend's order
pub fn map_clients(payload: Value) -> Vec<Client> {
    let items = match payload {
        Value::Array(items) => items,
        other => {
            log::warn!("Expected an array of clients, got {}", fields::kind(&other));
            return vec![];
        }
    };

    log::debug!("Mapping {} raw clients", items.len());

    return items
        .into_iter()
        .map(|item| RawClient::from_value(item).parse_client())
        .collect();
}
