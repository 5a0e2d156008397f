pub mod service_item;

use crate::error::Result;
use crate::model::{CollectionReport, RawPage};

/// A council site adapter: turns one fetched page into a collection report.
///
/// Parsing is pure. Implementations hold only immutable state (compiled
/// selectors), so one instance may parse any number of pages.
pub trait Council: Send + Sync {
    /// Registry name of this council, e.g. "StockportBoroughCouncil"
    fn name(&self) -> &str;

    /// Extract bin type → collection description pairs from `page`.
    ///
    /// A page with no recognizable entries yields an empty report rather than
    /// an error. A page with entries of an unexpected shape is a parse error.
    fn parse(&self, page: &RawPage) -> Result<CollectionReport>;
}
