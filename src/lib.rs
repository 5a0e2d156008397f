//! UK bin collection: fetch a council's collection page and extract the schedule.
//!
//! Each supported council has an adapter registered in [`council_registry`].
//! A run resolves the adapter by name, fetches the address page once, and
//! returns the bin type → collection date mapping the adapter extracted.

pub mod config;
pub mod council;
pub mod council_registry;
pub mod error;
pub mod fetch;
pub mod format;
pub mod model;

pub use config::FetchConfig;
pub use error::{Error, ErrorKind, Result};
pub use model::{CollectionReport, CollectionValue};

/// Names of all selectable councils
pub fn list_councils() -> Result<Vec<&'static str>> {
    Ok(council_registry::CouncilRegistry::builtin()?.list())
}

/// Fetch `url` and extract its collection schedule with the named council's adapter
///
/// The council name must exactly match one of [`list_councils`]; nothing is
/// fetched for an unknown name.
///
/// # Arguments
/// * `council` - Registered council name (e.g., "StockportBoroughCouncil")
/// * `url` - Address page to fetch
/// * `config` - Timeout and user agent for the request
///
/// # Returns
/// `CollectionReport` in page order
pub async fn collect(council: &str, url: &str, config: &FetchConfig) -> Result<CollectionReport> {
    let registry = council_registry::CouncilRegistry::builtin()?;
    let adapter = registry.resolve(council)?;
    let fetcher = fetch::HttpFetcher::new(config)?;

    fetch::run_pipeline(adapter.as_ref(), &fetcher, url).await
}
