use hbp::filter::FilterCriteria;
use hbp::services::HttpSource;
use hbp::{timestamp, Result};

use std::{fs, path::PathBuf};

use anyhow::Context;
use chrono::FixedOffset;
use clap::{Args, Parser, Subcommand};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputArgsError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("UTC offset out of range: {0} minutes")]
    InvalidOffset(i32),
}

/// HorebPay admin dashboard: clients, transactions and reports
#[derive(Parser, Debug)]
#[command(name = "horebpay-dashboard", version)]
pub struct Cli {
    /// Base URL of the HorebPay API
    #[arg(long, env = "HOREBPAY_API_URL", default_value = HttpSource::DEFAULT_BASE_URL, global = true)]
    pub api_url: String,

    /// Bearer token sent with API requests
    #[arg(long, env = "HOREBPAY_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    /// Read the JSON array from this file instead of calling the API
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Offset of the local timezone, used for day filters and printed dates
    #[arg(long, default_value_t = 0, allow_negative_numbers = true, global = true)]
    pub utc_offset_minutes: i32,

    /// Mask names, phone numbers and amounts in the output
    #[arg(long, global = true)]
    pub privacy: bool,

    /// Directory receiving downloads and printable documents
    #[arg(long, default_value = ".", global = true)]
    pub out_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List, filter and export transactions
    Transactions(TransactionsArgs),

    /// List and search clients
    Clients(ClientsArgs),
}

#[derive(Args, Debug)]
pub struct TransactionsArgs {
    /// Client name, reference, product or operator
    #[arg(long, default_value = "")]
    pub search: String,

    #[arg(long, default_value = "")]
    pub payer: String,

    #[arg(long, default_value = "")]
    pub receiver: String,

    /// Day to show, as YYYY-MM-DD
    #[arg(long, default_value = "")]
    pub date: String,

    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub min_amount: String,

    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub max_amount: String,

    /// ALL, SUCCESS, PENDING or FAILED
    #[arg(long, default_value = "ALL")]
    pub status: String,

    /// Write the filtered transactions to report.csv
    #[arg(long)]
    pub export_csv: bool,

    /// Write a printable receipt for this transaction ID
    #[arg(long)]
    pub receipt: Option<String>,
}

impl TransactionsArgs {
    pub fn criteria(&self, utc_offset: FixedOffset) -> FilterCriteria {
        return FilterCriteria {
            search_query: self.search.clone(),
            payer: self.payer.clone(),
            receiver: self.receiver.clone(),
            date: self.date.clone(),
            min_amount: self.min_amount.clone(),
            max_amount: self.max_amount.clone(),
            status: self.status.parse().unwrap_or_default(),
            utc_offset,
        };
    }
}

#[derive(Args, Debug)]
pub struct ClientsArgs {
    /// Part of the client's name
    #[arg(long, default_value = "")]
    pub search: String,

    /// Write a printable card for this client ID
    #[arg(long)]
    pub card: Option<String>,
}

/// Parses the command line, requiring any input file to exist
pub fn parse_input_args() -> Result<Cli> {
    let mut cli = Cli::parse();

    if let Some(filename) = cli.file.take() {
        let path = fs::canonicalize(&filename)
            .with_context(|| InputArgsError::FileNotFound(filename.display().to_string()))?;
        cli.file = Some(path);
    }

    return Ok(cli);
}

impl Cli {
    pub fn utc_offset(&self) -> Result<FixedOffset> {
        let offset = timestamp::offset_from_minutes(self.utc_offset_minutes)
            .ok_or(InputArgsError::InvalidOffset(self.utc_offset_minutes))?;

        return Ok(offset);
    }
}
