//! Data pipeline behind the HorebPay admin dashboard: raw backend records are
//! mapped to canonical transactions and clients, filtered, aggregated, exported
//! and masked for display.

pub mod export;
pub mod filter;
pub mod ids;
pub mod input;
pub mod models;
mod money;
pub mod privacy;
mod result;
pub mod services;
pub mod stats;
pub mod status;
pub mod text;
pub mod timestamp;

pub use money::Money;
pub use result::Result;
pub use status::Status;

pub use filter::FilterCriteria;
pub use models::{Client, Transaction};
pub use privacy::PrivacyMode;
pub use stats::Stats;
