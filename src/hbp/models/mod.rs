mod client;
mod transaction;

pub use client::{Client, ClientStatus};
pub use transaction::Transaction;
