mod csv_report;
mod receipt;

pub use csv_report::{export_csv, CSV_HEADER, REPORT_FILENAME};
pub use receipt::{render_client_card, render_receipt};

use crate::Result;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("Could not open print surface: {0}")]
    PrintSurface(String),

    #[error("Could not deliver download {0}: {1}")]
    Download(String, String),

    #[error("Refusing to write outside the output directory: {0:?}")]
    InvalidFilename(String),
}

/// Name for a delivered document, safe to use as a single file name whatever the
/// backend put in `id`. Anything outside `[A-Za-z0-9._-]` becomes `_`.
pub fn document_name(prefix: &str, id: &str) -> String {
    let id: String = id
        .chars()
        .map(|c| match c {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '.' | '_' | '-' => c,
            _ => '_',
        })
        .collect();

    return format!("{prefix}-{id}");
}

/// Host capabilities the exporters hand their documents to
pub trait Delivery {
    /// Offers `contents` to the user as a file named `filename`
    fn download(&self, filename: &str, contents: &str) -> Result;

    /// Opens a print surface showing a complete HTML document
    fn print(&self, name: &str, document: &str) -> Result;
}

/// Runs an export and swallows its failure: the user sees a no-op, the
/// records and every other view are unaffected.
pub fn deliver(what: &str, outcome: Result) -> bool {
    return match outcome {
        Ok(()) => {
            log::debug!("{what} delivered");
            true
        }
        Err(e) => {
            log::warn!("{what} failed: {e:#}");
            false
        }
    };
}
