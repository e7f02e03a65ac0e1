use crate::models::{Client, Transaction};
use crate::status::StatusFilter;
use crate::text::{contains_folded, fold};
use crate::{timestamp, Money};

use chrono::{FixedOffset, NaiveDate};

/// Filter state as entered by the user. Text fields are kept verbatim; an empty
/// field (or one that cannot be read, for dates and amounts) leaves its axis unconstrained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Matched against client name, reference, product and operator
    pub search_query: String,
    pub payer: String,
    pub receiver: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub min_amount: String,
    pub max_amount: String,
    pub status: StatusFilter,
    /// Offset in which a record's calendar day is evaluated
    pub utc_offset: FixedOffset,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        return Self {
            search_query: String::new(),
            payer: String::new(),
            receiver: String::new(),
            date: String::new(),
            min_amount: String::new(),
            max_amount: String::new(),
            status: StatusFilter::All,
            utc_offset: timestamp::utc(),
        };
    }
}

impl FilterCriteria {
    /// Clears every axis but keeps the timezone
    pub fn reset(&self) -> Self {
        return Self {
            utc_offset: self.utc_offset,
            ..Self::default()
        };
    }

    pub fn matches(&self, tx: &Transaction) -> bool {
        return Predicate::compile(self).matches(tx);
    }
}

/// Criteria with every bound parsed and every needle folded, once per filter pass
#[derive(Debug)]
struct Predicate {
    search: String,
    payer: String,
    receiver: String,
    day: Option<NaiveDate>,
    min_amount: Option<Money>,
    max_amount: Option<Money>,
    status: StatusFilter,
    utc_offset: FixedOffset,
}

impl Predicate {
    fn compile(criteria: &FilterCriteria) -> Self {
        let day = if criteria.date.trim().is_empty() {
            None
        } else {
            let day = timestamp::parse_day(&criteria.date);
            if day.is_none() {
                log::warn!("Ignoring unreadable date filter: {:?}", criteria.date);
            }
            day
        };

        let predicate = Self {
            search: fold(criteria.search_query.trim()),
            payer: fold(criteria.payer.trim()),
            receiver: fold(criteria.receiver.trim()),
            day,
            min_amount: Money::parse(&criteria.min_amount),
            max_amount: Money::parse(&criteria.max_amount),
            status: criteria.status,
            utc_offset: criteria.utc_offset,
        };

        log::debug!("Compiled filter: {predicate:?}");

        return predicate;
    }

    fn matches(&self, tx: &Transaction) -> bool {
        return self.matches_search(tx)
            && self.matches_phones(tx)
            && self.matches_day(tx)
            && self.matches_amount(tx)
            && self.status.accepts(tx.tx_status);
    }

    fn matches_search(&self, tx: &Transaction) -> bool {
        if self.search.is_empty() {
            return true;
        }

        return [&tx.client_name, &tx.tx_ref, &tx.product, &tx.operator]
            .iter()
            .any(|field| fold(field).contains(&self.search));
    }

    fn matches_phones(&self, tx: &Transaction) -> bool {
        let payer = self.payer.is_empty() || fold(&tx.payer_phone).contains(&self.payer);
        let receiver = self.receiver.is_empty() || fold(&tx.receiver_phone).contains(&self.receiver);

        return payer && receiver;
    }

    fn matches_day(&self, tx: &Transaction) -> bool {
        return match self.day {
            None => true,
            Some(day) => timestamp::local_day(&tx.date, self.utc_offset) == Some(day),
        };
    }

    fn matches_amount(&self, tx: &Transaction) -> bool {
        let above_min = self.min_amount.map_or(true, |min| tx.amount >= min);
        let below_max = self.max_amount.map_or(true, |max| tx.amount <= max);

        return above_min && below_max;
    }
}

/// Records matching every active axis, in their original order
pub fn filter_transactions<'a>(
    records: &'a [Transaction],
    criteria: &FilterCriteria,
) -> Vec<&'a Transaction> {
    let predicate = Predicate::compile(criteria);

    let filtered: Vec<&Transaction> = records.iter().filter(|tx| predicate.matches(tx)).collect();

    log::debug!("Filter kept {} of {} transactions", filtered.len(), records.len());

    return filtered;
}

/// Clients whose full name or phone number contains `query`, ignoring case and accents
pub fn filter_clients<'a>(clients: &'a [Client], query: &str) -> Vec<&'a Client> {
    return clients
        .iter()
        .filter(|client| contains_folded(&client.full_name, query) || contains_folded(&client.phone, query))
        .collect();
}
