use hbp::Result;

use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Installs the stderr logger. `RUST_LOG` overrides the default level;
/// the HTTP stack stays at warn so debug runs only show the pipeline.
pub fn configure_app() -> Result {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .with_module_level("hyper", LevelFilter::Warn)
        .with_module_level("reqwest", LevelFilter::Warn)
        .init()?;

    log::debug!("Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    return Ok(());
}
