use crate::models::{Client, Transaction};
use crate::timestamp;

use chrono::FixedOffset;
use html_escape::encode_text;

const STYLE: &str = "body{font-family:monospace;max-width:380px;margin:24px auto;color:#0f172a}\
h1{font-size:18px;text-align:center;margin:0}\
p.sub{text-align:center;color:#64748b;margin:4px 0 16px}\
table{width:100%;border-collapse:collapse}\
td{padding:4px 0;border-bottom:1px dashed #cbd5e1;vertical-align:top}\
td.k{color:#64748b;padding-right:12px}\
td.v{text-align:right;font-weight:bold}\
p.total{font-size:20px;text-align:center;margin:16px 0}\
p.err{color:#b91c1c;text-align:center}\
@media print{button{display:none}}";

/// Wraps labelled rows into a standalone, printable HTML page
fn render_document(title: &str, subtitle: &str, rows: &[(&str, &str)], footer: &str) -> String {
    let mut body = String::new();

    for (label, value) in rows {
        body.push_str(&format!(
            "<tr><td class=\"k\">{}</td><td class=\"v\">{}</td></tr>\n",
            encode_text(label),
            encode_text(value),
        ));
    }

    return format!(
        "<!DOCTYPE html>\n<html lang=\"fr\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n\
<style>{STYLE}</style>\n</head>\n<body>\n<h1>HorebPay</h1>\n<p class=\"sub\">{subtitle}</p>\n\
<table>\n{body}</table>\n{footer}\n</body>\n</html>\n",
        title = encode_text(title),
        subtitle = encode_text(subtitle),
    );
}

/// Printable receipt for a single transaction
pub fn render_receipt(tx: &Transaction, utc_offset: FixedOffset) -> String {
    let date = timestamp::format_date_time(&tx.date, utc_offset);
    let amount = tx.amount.format_fcfa();

    let rows = [
        ("Référence", tx.tx_ref.as_str()),
        ("Date", date.as_str()),
        ("Client", tx.client_name.as_str()),
        ("Opérateur", tx.operator.as_str()),
        ("Produit", tx.product.as_str()),
        ("Méthode", tx.method.as_str()),
        ("Payeur", tx.payer_phone.as_str()),
        ("Récepteur", tx.receiver_phone.as_str()),
        ("Statut Paiement", tx.payment_status.as_str()),
        ("Statut Transaction", tx.tx_status.as_str()),
    ];

    let mut footer = format!("<p class=\"total\">{}</p>", encode_text(&amount));

    if let Some(error) = &tx.error_message {
        footer.push_str(&format!("\n<p class=\"err\">{}</p>", encode_text(error)));
    }

    return render_document(&format!("Reçu {}", tx.tx_ref), "Reçu de transaction", &rows, &footer);
}

/// Printable sheet for one client, always with raw (unmasked) values
pub fn render_client_card(client: &Client, utc_offset: FixedOffset) -> String {
    let registered = client
        .registered_at
        .as_deref()
        .map(|raw| timestamp::format_date_time(raw, utc_offset))
        .unwrap_or_else(|| "N/A".to_string());
    let status = client.status.to_string();

    let rows = [
        ("Identifiant", client.id.as_str()),
        ("Nom", client.full_name.as_str()),
        ("Téléphone", client.phone.as_str()),
        ("Email", client.email.as_str()),
        ("Statut", status.as_str()),
        ("Inscription", registered.as_str()),
    ];

    let footer = format!("<p class=\"total\">{}</p>", encode_text(&client.balance.format_fcfa()));

    return render_document(&format!("Client {}", client.id.as_str()), "Fiche client", &rows, &footer);
}
