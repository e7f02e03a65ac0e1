use crate::models::Transaction;
use crate::Money;

use std::collections::HashSet;

use rust_decimal::Decimal;

/// Summary cards of the transactions view, computed from the filtered records
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Stats {
    /// Sum of successful amounts only
    pub revenue: Money,
    pub count: usize,
    pub unique_clients: usize,
    pub success_count: usize,
    /// Sum of every amount shown, whatever its status
    pub page_total: Money,
}

impl Stats {
    /// Share of successful transactions, in percent
    pub fn success_rate(&self) -> Option<Decimal> {
        if self.count == 0 {
            return None;
        }

        let rate = Decimal::from(self.success_count) * Decimal::ONE_HUNDRED / Decimal::from(self.count);

        return Some(rate.round_dp(1));
    }
}

pub fn aggregate<'a, I>(records: I) -> Stats
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut successful: Vec<&Money> = vec![];
    let mut all: Vec<&Money> = vec![];
    let mut clients = HashSet::new();

    for tx in records {
        if tx.is_success() {
            successful.push(&tx.amount);
        }

        if !tx.client_id.is_empty() {
            clients.insert(tx.client_id.as_str());
        }

        all.push(&tx.amount);
    }

    let stats = Stats {
        revenue: successful.iter().copied().sum(),
        count: all.len(),
        unique_clients: clients.len(),
        success_count: successful.len(),
        page_total: all.iter().copied().sum(),
    };

    log::debug!("Aggregated stats: {stats:?}");

    return stats;
}
