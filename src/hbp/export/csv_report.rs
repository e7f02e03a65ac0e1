use crate::models::Transaction;
use crate::timestamp;
use crate::Result;

use chrono::FixedOffset;
use csv::{Terminator, WriterBuilder};

pub const REPORT_FILENAME: &str = "report.csv";

pub const CSV_HEADER: [&str; 10] = [
    "Date",
    "Ref",
    "Client",
    "Operateur",
    "Produit",
    "Payeur",
    "Recepteur",
    "Montant",
    "Statut Paiement",
    "Statut Transaction",
];

/// Writes the records, in the given order, as a CSV document. Fields containing
/// the delimiter, quotes or line breaks are quoted.
pub fn export_csv<'a, I>(records: I, utc_offset: FixedOffset) -> Result<String>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut wtr = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(vec![]);

    wtr.write_record(CSV_HEADER)?;

    let mut rows = 0;
    for tx in records {
        let date = timestamp::format_day(&tx.date, utc_offset);
        let amount = tx.amount.to_string();

        wtr.write_record([
            date.as_str(),
            tx.tx_ref.as_str(),
            tx.client_name.as_str(),
            tx.operator.as_str(),
            tx.product.as_str(),
            tx.payer_phone.as_str(),
            tx.receiver_phone.as_str(),
            amount.as_str(),
            tx.payment_status.as_str(),
            tx.tx_status.as_str(),
        ])?;

        rows += 1;
    }

    log::debug!("Serialized {rows} transactions to CSV");

    let utf8 = wtr.into_inner()?;
    let string = String::from_utf8(utf8)?;

    return Ok(string);
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::ids::{ClientId, TransactionId};
    use crate::{Money, Status};

    fn build_transaction(id: &str, client_name: &str) -> Transaction {
        Transaction {
            id: TransactionId(id.to_string()),
            tx_ref: id.to_string(),
            date: "2025-07-28T10:00:00Z".to_string(),
            client_name: client_name.to_string(),
            client_id: ClientId("c1".to_string()),
            operator: "CAMEROON_MTN".to_string(),
            product: "MOBILE_TOPUP".to_string(),
            method: "N/A".to_string(),
            payer_phone: "695851906".to_string(),
            receiver_phone: "670574663".to_string(),
            amount: Money::coerce("1200.50"),
            payment_status: Status::Success,
            tx_status: Status::Pending,
            error_message: None,
        }
    }

    #[test]
    fn header_only_for_empty_set() {
        let csv = export_csv(&Vec::<Transaction>::new(), timestamp::utc()).unwrap();

        assert_eq!(
            csv,
            "Date,Ref,Client,Operateur,Produit,Payeur,Recepteur,Montant,Statut Paiement,Statut Transaction\n"
        );
    }

    #[test]
    fn one_row_per_record() {
        let records = vec![build_transaction("TX-1", "Awa"), build_transaction("TX-2", "José")];

        let csv = export_csv(&records, timestamp::utc()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[1],
            "28/07/2025,TX-1,Awa,CAMEROON_MTN,MOBILE_TOPUP,695851906,670574663,1200.5,SUCCESS,PENDING"
        );
        assert!(lines[2].starts_with("28/07/2025,TX-2,José,"));
    }

    #[test]
    fn fields_with_commas_are_quoted() {
        let records = vec![build_transaction("TX-1", "Bello, Awa")];

        let csv = export_csv(&records, timestamp::utc()).unwrap();

        assert!(csv.contains(",\"Bello, Awa\","));
    }

    #[test]
    fn output_is_deterministic() {
        let records = vec![build_transaction("TX-1", "Awa")];

        assert_eq!(
            export_csv(&records, timestamp::utc()).unwrap(),
            export_csv(&records, timestamp::utc()).unwrap()
        );
    }
}
