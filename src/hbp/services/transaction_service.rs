use super::{RecordSource, RefreshOutcome, Resource};

use crate::export::{self, Delivery, REPORT_FILENAME};
use crate::filter::{filter_transactions, FilterCriteria};
use crate::ids::TransactionId;
use crate::input::{map_transactions, MappingContext};
use crate::models::Transaction;
use crate::stats::{aggregate, Stats};
use crate::timestamp;

use chrono::FixedOffset;

/// State of the transactions view: its source and the last batch it mapped.
/// Records are replaced wholesale on refresh and only ever lent out read-only.
pub struct TransactionService {
    source: Box<dyn RecordSource>,
    records: Vec<Transaction>,
    utc_offset: FixedOffset,
}

impl TransactionService {
    pub fn new(source: Box<dyn RecordSource>) -> Self {
        return Self {
            source,
            records: vec![],
            utc_offset: timestamp::utc(),
        };
    }

    /// Offset used to read timestamps that carry none when ordering a fresh batch
    pub fn with_utc_offset(mut self, utc_offset: FixedOffset) -> Self {
        self.utc_offset = utc_offset;
        return self;
    }

    /// One fetch-then-map cycle. A failed fetch is logged and leaves the current records in place.
    pub fn refresh(&mut self) -> RefreshOutcome {
        log::debug!("Refreshing transactions");

        let payload = match self.source.fetch(Resource::Transactions) {
            Ok(payload) => payload,
            Err(e) => {
                log::warn!("Fetching transactions failed: {e:#}");
                return RefreshOutcome::Failed;
            }
        };

        self.records = map_transactions(payload, &MappingContext::now().with_utc_offset(self.utc_offset));

        log::debug!("Loaded {} transactions", self.records.len());

        return RefreshOutcome::Loaded(self.records.len());
    }

    pub fn records(&self) -> &[Transaction] {
        return &self.records;
    }

    pub fn filtered(&self, criteria: &FilterCriteria) -> Vec<&Transaction> {
        return filter_transactions(&self.records, criteria);
    }

    pub fn stats(&self, criteria: &FilterCriteria) -> Stats {
        return aggregate(self.filtered(criteria));
    }

    pub fn find(&self, id: &TransactionId) -> Option<&Transaction> {
        return self.records.iter().find(|tx| &tx.id == id);
    }

    /// Hands the filtered records to the host as `report.csv`. Returns whether it went through.
    pub fn export_csv(&self, criteria: &FilterCriteria, delivery: &dyn Delivery) -> bool {
        let outcome = export::export_csv(self.filtered(criteria), criteria.utc_offset)
            .and_then(|csv| delivery.download(REPORT_FILENAME, &csv));

        return export::deliver("CSV export", outcome);
    }

    /// Sends the receipt of one transaction to the print surface. Returns whether it went through.
    pub fn print_receipt(&self, id: &TransactionId, criteria: &FilterCriteria, delivery: &dyn Delivery) -> bool {
        let tx = match self.find(id) {
            Some(tx) => tx,
            None => {
                log::warn!("No transaction {id} to print");
                return false;
            }
        };

        let document = export::render_receipt(tx, criteria.utc_offset);
        let outcome = delivery.print(&export::document_name("receipt", id.as_str()), &document);

        return export::deliver("Receipt", outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::export::DeliveryError;
    use crate::services::JsonFileSource;
    use crate::status::StatusFilter;
    use crate::{Money, Result, Status};

    use std::cell::{Cell, RefCell};
    use std::fs;

    use serde_json::{json, Value};

    /// Serves queued payloads in order; `None` simulates a network failure
    struct ScriptedSource {
        responses: RefCell<Vec<Option<Value>>>,
    }

    impl ScriptedSource {
        fn new(mut responses: Vec<Option<Value>>) -> Self {
            responses.reverse();
            Self {
                responses: RefCell::new(responses),
            }
        }
    }

    impl RecordSource for ScriptedSource {
        fn fetch(&self, resource: Resource) -> Result<Value> {
            assert_eq!(resource, Resource::Transactions);

            match self.responses.borrow_mut().pop().flatten() {
                Some(value) => Ok(value),
                None => Err(anyhow::anyhow!("connection refused")),
            }
        }
    }

    #[derive(Default)]
    struct RecordingDelivery {
        downloads: RefCell<Vec<(String, String)>>,
        prints: RefCell<Vec<(String, String)>>,
        broken: Cell<bool>,
    }

    impl Delivery for RecordingDelivery {
        fn download(&self, filename: &str, contents: &str) -> Result {
            if self.broken.get() {
                Err(DeliveryError::Download(filename.to_string(), "disk full".to_string()))?
            }
            self.downloads
                .borrow_mut()
                .push((filename.to_string(), contents.to_string()));
            Ok(())
        }

        fn print(&self, name: &str, document: &str) -> Result {
            if self.broken.get() {
                Err(DeliveryError::PrintSurface("popup blocked".to_string()))?
            }
            self.prints
                .borrow_mut()
                .push((name.to_string(), document.to_string()));
            Ok(())
        }
    }

    fn payload() -> Value {
        json!([
            { "transactionsId": "TX-1", "date": "2025-07-27T10:00:00Z", "clientId": "a", "montant": 100, "statusPaiement": "PAYE" },
            { "transactionsId": "TX-2", "date": "2025-07-28T10:00:00Z", "clientId": "b", "montant": "50", "statusPaiement": "" },
        ])
    }

    fn loaded_service() -> TransactionService {
        let mut service = TransactionService::new(Box::new(ScriptedSource::new(vec![Some(payload())])));
        assert_eq!(service.refresh(), RefreshOutcome::Loaded(2));
        service
    }

    #[test]
    fn refresh_maps_and_sorts() {
        let service = loaded_service();

        let ids: Vec<&str> = service.records().iter().map(|tx| tx.id.as_str()).collect();
        assert_eq!(ids, vec!["TX-2", "TX-1"]);
    }

    #[test]
    fn failed_refresh_keeps_previous_records() {
        let source = ScriptedSource::new(vec![Some(payload()), None]);
        let mut service = TransactionService::new(Box::new(source));

        assert_eq!(service.refresh(), RefreshOutcome::Loaded(2));
        assert_eq!(service.refresh(), RefreshOutcome::Failed);
        assert_eq!(service.records().len(), 2);
    }

    #[test]
    fn failed_first_refresh_leaves_view_empty() {
        let mut service = TransactionService::new(Box::new(ScriptedSource::new(vec![None])));

        assert_eq!(service.refresh(), RefreshOutcome::Failed);
        assert!(service.records().is_empty());
    }

    #[test]
    fn malformed_body_keeps_previous_records() {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), payload().to_string()).unwrap();

        let mut service = TransactionService::new(Box::new(JsonFileSource::new(file.path().to_path_buf())));
        assert_eq!(service.refresh(), RefreshOutcome::Loaded(2));
        let before = service.records().to_vec();

        fs::write(file.path(), "[{\"transactionsId\": \"TX-3\",").unwrap();

        assert_eq!(service.refresh(), RefreshOutcome::Failed);
        assert_eq!(service.records(), before.as_slice());
    }

    #[test]
    fn refresh_orders_naive_dates_in_the_view_offset() {
        let batch = json!([
            { "transactionsId": "naive", "date": "2025-07-28T00:30:00" },
            { "transactionsId": "utc", "date": "2025-07-27T23:45:00Z" },
        ]);
        let source = ScriptedSource::new(vec![Some(batch)]);
        let mut service = TransactionService::new(Box::new(source))
            .with_utc_offset(timestamp::offset_from_minutes(60).unwrap());

        service.refresh();

        let ids: Vec<&str> = service.records().iter().map(|tx| tx.id.as_str()).collect();
        assert_eq!(ids, vec!["utc", "naive"]);
    }

    #[test]
    fn non_array_payload_empties_the_view() {
        let source = ScriptedSource::new(vec![Some(payload()), Some(json!({ "message": "oops" }))]);
        let mut service = TransactionService::new(Box::new(source));

        service.refresh();
        assert_eq!(service.refresh(), RefreshOutcome::Loaded(0));
        assert!(service.records().is_empty());
    }

    #[test]
    fn stats_follow_filters() {
        let service = loaded_service();

        let all = service.stats(&FilterCriteria::default());
        assert_eq!(all.revenue, Money::from(100));
        assert_eq!(all.count, 2);
        assert_eq!(all.unique_clients, 2);

        let pending = FilterCriteria {
            status: StatusFilter::Only(Status::Pending),
            ..Default::default()
        };
        let stats = service.stats(&pending);
        assert_eq!(stats.revenue, Money::ZERO);
        assert_eq!(stats.count, 1);
    }

    #[test]
    fn export_csv_downloads_filtered_report() {
        let service = loaded_service();
        let delivery = RecordingDelivery::default();

        let criteria = FilterCriteria {
            search_query: "tx-1".to_string(),
            ..Default::default()
        };

        assert!(service.export_csv(&criteria, &delivery));

        let downloads = delivery.downloads.borrow();
        assert_eq!(downloads.len(), 1);
        assert_eq!(downloads[0].0, "report.csv");
        assert_eq!(downloads[0].1.lines().count(), 2);
    }

    #[test]
    fn broken_delivery_is_a_no_op() {
        let service = loaded_service();
        let delivery = RecordingDelivery::default();
        delivery.broken.set(true);

        let before = service.records().to_vec();

        assert!(!service.export_csv(&FilterCriteria::default(), &delivery));
        assert!(!service.print_receipt(&TransactionId("TX-1".to_string()), &FilterCriteria::default(), &delivery));
        assert_eq!(service.records(), before.as_slice());
    }

    #[test]
    fn print_receipt() {
        let service = loaded_service();
        let delivery = RecordingDelivery::default();

        assert!(service.print_receipt(&TransactionId("TX-2".to_string()), &FilterCriteria::default(), &delivery));
        assert!(!service.print_receipt(&TransactionId("missing".to_string()), &FilterCriteria::default(), &delivery));

        let prints = delivery.prints.borrow();
        assert_eq!(prints.len(), 1);
        assert_eq!(prints[0].0, "receipt-TX-2");
        assert!(prints[0].1.contains("TX-2"));
    }

    #[test]
    fn receipt_name_is_a_single_file_name() {
        let batch = json!([
            { "transactionsId": "TX/2025/1", "montant": 10 },
            { "transactionsId": "../escaped", "montant": 20 },
        ]);
        let mut service = TransactionService::new(Box::new(ScriptedSource::new(vec![Some(batch)])));
        service.refresh();
        let delivery = RecordingDelivery::default();

        assert!(service.print_receipt(&TransactionId("TX/2025/1".to_string()), &FilterCriteria::default(), &delivery));
        assert!(service.print_receipt(&TransactionId("../escaped".to_string()), &FilterCriteria::default(), &delivery));

        let names: Vec<String> = delivery.prints.borrow().iter().map(|(name, _)| name.clone()).collect();
        assert_eq!(names, vec!["receipt-TX_2025_1", "receipt-.._escaped"]);
        assert!(delivery.prints.borrow()[0].1.contains("TX/2025/1"));
    }
}
