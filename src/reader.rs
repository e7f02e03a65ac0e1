use crate::args::Cli;

use hbp::services::{HttpSource, JsonFileSource, RecordSource};

/// A local file wins over the API when both are configured
pub fn build_source(cli: &Cli) -> Box<dyn RecordSource> {
    if let Some(path) = &cli.file {
        log::debug!("Using JSON file source: {path:?}");
        return Box::new(JsonFileSource::new(path.clone()));
    }

    log::debug!("Using HTTP source: {}", cli.api_url);

    return Box::new(HttpSource::new(cli.api_url.clone(), cli.token.clone()));
}
