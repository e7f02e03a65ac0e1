/// Fallible operations at the edges (sources, exports, CLI) share one error type
pub type Result<T = ()> = anyhow::Result<T>;
