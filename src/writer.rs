use hbp::export::{Delivery, DeliveryError};
use hbp::privacy::PrivacyMode;
use hbp::{timestamp, Client, Result, Stats, Transaction};

use std::fs;
use std::path::{Component, Path, PathBuf};

use chrono::FixedOffset;

/// Host side of exports on the command line: downloads and print documents land in a directory
pub struct FileDelivery {
    out_dir: PathBuf,
}

impl FileDelivery {
    pub fn new(out_dir: PathBuf) -> Self {
        return Self { out_dir };
    }

    fn write(&self, filename: &str, contents: &str) -> Result<PathBuf> {
        let mut components = Path::new(filename).components();
        if !matches!((components.next(), components.next()), (Some(Component::Normal(_)), None)) {
            Err(DeliveryError::InvalidFilename(filename.to_string()))?
        }

        fs::create_dir_all(&self.out_dir)?;

        let path = self.out_dir.join(filename);
        fs::write(&path, contents)?;

        return Ok(path);
    }
}

impl Delivery for FileDelivery {
    fn download(&self, filename: &str, contents: &str) -> Result {
        let path = self
            .write(filename, contents)
            .map_err(|e| DeliveryError::Download(filename.to_string(), format!("{e:#}")))?;

        println!("Saved {}", path.display());

        return Ok(());
    }

    fn print(&self, name: &str, document: &str) -> Result {
        let path = self
            .write(&format!("{name}.html"), document)
            .map_err(|e| DeliveryError::PrintSurface(format!("{e:#}")))?;

        println!("Printable document ready: {}", path.display());

        return Ok(());
    }
}

pub fn render_stats(stats: &Stats, privacy: PrivacyMode) -> String {
    let success_rate = match stats.success_rate() {
        Some(rate) => format!("{rate}%"),
        None => "-".to_string(),
    };

    return format!(
        "Revenue: {} | Transactions: {} | Clients: {} | Success rate: {}",
        privacy.show_amount(&stats.revenue),
        stats.count,
        stats.unique_clients,
        success_rate,
    );
}

pub fn render_transactions(records: &[&Transaction], privacy: PrivacyMode, utc_offset: FixedOffset) -> String {
    if records.is_empty() {
        return "No transactions found.".to_string();
    }

    let mut out = format!(
        "{:<19} {:<16} {:<22} {:<14} {:<16} {:<12} {:<12} {:>14} {:<8} {:<8}\n",
        "Date", "Ref", "Client", "Operator", "Product", "Payer", "Receiver", "Amount", "Payment", "Status"
    );

    for tx in records {
        let shown = privacy.transaction(tx);

        out.push_str(&format!(
            "{:<19} {:<16} {:<22} {:<14} {:<16} {:<12} {:<12} {:>14} {:<8} {:<8}\n",
            timestamp::format_date_time(&tx.date, utc_offset),
            truncate(&tx.tx_ref, 16),
            truncate(&shown.client_name, 22),
            truncate(&tx.operator, 14),
            truncate(&tx.product, 16),
            truncate(&shown.payer_phone, 12),
            truncate(&shown.receiver_phone, 12),
            shown.amount,
            tx.payment_status.as_str(),
            tx.tx_status.as_str(),
        ));
    }

    let page_total = hbp::stats::aggregate(records.iter().copied()).page_total;

    out.push_str(&format!(
        "Showing {} results. Page total: {}",
        records.len(),
        privacy.show_amount(&page_total)
    ));

    return out;
}

pub fn render_clients(clients: &[&Client], privacy: PrivacyMode) -> String {
    if clients.is_empty() {
        return "No clients found.".to_string();
    }

    let mut out = format!(
        "{:<20} {:<24} {:<14} {:<26} {:<7} {:>14}\n",
        "ID", "Client", "Phone", "Email", "Status", "Balance"
    );

    for client in clients {
        let shown = privacy.client(client);

        out.push_str(&format!(
            "{:<20} {:<24} {:<14} {:<26} {:<7} {:>14}\n",
            truncate(client.id.as_str(), 20),
            truncate(&shown.name, 24),
            truncate(&shown.phone, 14),
            truncate(&shown.email, 26),
            client.status.to_string(),
            shown.balance,
        ));
    }

    out.push_str(&format!("Showing {} clients", clients.len()));

    return out;
}

/// Cuts on characters, never inside one
fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }

    let kept: String = value.chars().take(width.saturating_sub(3)).collect();

    return format!("{kept}...");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_writes_an_html_file() {
        let out_dir = tempfile::tempdir().unwrap();
        let delivery = FileDelivery::new(out_dir.path().to_path_buf());

        delivery.print("receipt-TX_2025_1", "<html></html>").unwrap();

        let written = fs::read_to_string(out_dir.path().join("receipt-TX_2025_1.html")).unwrap();
        assert_eq!(written, "<html></html>");
    }

    #[test]
    fn names_leaving_the_output_directory_are_refused() {
        let out_dir = tempfile::tempdir().unwrap();
        let delivery = FileDelivery::new(out_dir.path().join("reports"));

        assert!(delivery.print("../escaped", "x").is_err());
        assert!(delivery.print("TX/2025/1", "x").is_err());
        assert!(delivery.download("/tmp/report.csv", "x").is_err());
        assert!(delivery.download("..", "x").is_err());

        assert!(!out_dir.path().join("escaped.html").exists());
        assert!(!out_dir.path().join("reports").exists());
    }

    #[test]
    fn truncate_on_characters() {
        assert_eq!(truncate("José Ngono", 20), "José Ngono");
        assert_eq!(truncate("Élodie Mbarga-Essomba", 10), "Élodie ...");
    }
}
