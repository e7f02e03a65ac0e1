mod args;
mod config;
mod reader;
mod writer;

use args::{ClientsArgs, Command, TransactionsArgs};

use hbp::ids::{ClientId, TransactionId};
use hbp::services::{ClientService, RefreshOutcome, TransactionService};
use hbp::{PrivacyMode, Result};

use chrono::FixedOffset;

fn main() -> Result {
    config::configure_app()?;

    log::debug!("Application configured. Parsing arguments...");

    let cli = args::parse_input_args()?;
    let utc_offset = cli.utc_offset()?;
    let privacy = PrivacyMode::from_flag(cli.privacy);

    let delivery = writer::FileDelivery::new(cli.out_dir.clone());

    match &cli.command {
        Command::Transactions(tx_args) => {
            let service = TransactionService::new(reader::build_source(&cli)).with_utc_offset(utc_offset);
            show_transactions(service, tx_args, utc_offset, privacy, &delivery);
        }
        Command::Clients(client_args) => {
            let service = ClientService::new(reader::build_source(&cli));
            show_clients(service, client_args, utc_offset, privacy, &delivery);
        }
    }

    log::debug!("Application finished successfully!");

    Ok(())
}

/// Transactions view: fetch, filter, summarize, then run the requested exports
fn show_transactions(
    mut service: TransactionService,
    tx_args: &TransactionsArgs,
    utc_offset: FixedOffset,
    privacy: PrivacyMode,
    delivery: &writer::FileDelivery,
) {
    if service.refresh() == RefreshOutcome::Failed {
        eprintln!("Could not load transactions, showing an empty view.");
    }

    let criteria = tx_args.criteria(utc_offset);
    log::debug!("Filtering with {criteria:?}");

    let filtered = service.filtered(&criteria);
    let stats = hbp::stats::aggregate(filtered.iter().copied());

    println!("{}", writer::render_stats(&stats, privacy));
    println!("{}", writer::render_transactions(&filtered, privacy, utc_offset));

    if tx_args.export_csv && !service.export_csv(&criteria, delivery) {
        eprintln!("CSV export failed.");
    }

    if let Some(id) = &tx_args.receipt {
        if !service.print_receipt(&TransactionId(id.clone()), &criteria, delivery) {
            eprintln!("Could not print receipt for {id}.");
        }
    }
}

/// Clients view: fetch, search, optionally print one client's card
fn show_clients(
    mut service: ClientService,
    client_args: &ClientsArgs,
    utc_offset: FixedOffset,
    privacy: PrivacyMode,
    delivery: &writer::FileDelivery,
) {
    if service.refresh() == RefreshOutcome::Failed {
        eprintln!("Could not load clients, showing an empty view.");
    }

    let found = service.search(&client_args.search);

    println!("{}", writer::render_clients(&found, privacy));

    if let Some(id) = &client_args.card {
        if !service.print_card(&ClientId(id.clone()), utc_offset, delivery) {
            eprintln!("Could not print card for {id}.");
        }
    }
}
