mod client_service;
mod source;
mod transaction_service;

pub use client_service::ClientService;
pub use source::{FetchError, HttpSource, JsonFileSource, RecordSource, Resource};
pub use transaction_service::TransactionService;

/// What a refresh did to the view's record set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Records were replaced by a fresh batch of this size
    Loaded(usize),
    /// The fetch failed; previous records were kept
    Failed,
}
