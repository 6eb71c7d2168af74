//! Status reconciliation crawler
//!
//! This module walks the proposal index, visits every listed document
//! and checks its declared status against the statuses expected for its
//! category:
//! - [`walk_index`] builds the ordered work list from the index page
//! - [`extract_status`] reads the declared status from a detail page
//! - [`reconcile`] folds the observations into a report and a discrepancy log

mod category;
mod extract;
mod index;
mod reconcile;

pub use category::{CategoryCell, CategoryError, CategoryKey, DocumentType, ExpectedStatusTable};
pub use extract::extract_status;
pub use index::{walk_index, IndexEntry};
pub use reconcile::{
    reconcile, Discrepancy, ObservedStatus, Reconciler, Reconciliation, StatusCount, StatusReport,
};

use crate::crawler::{fetch_page, Fetcher};
use crate::CensusError;
use url::Url;

/// Runs a full census: index, detail pages, reconciliation
///
/// Returns `Ok(None)` when the index page itself could not be loaded.
///
/// # Errors
///
/// Structural errors on the index or on any detail page abort the census
/// before a report is produced.
pub async fn run_census<F: Fetcher>(
    fetcher: &mut F,
    index_url: &Url,
    table: &ExpectedStatusTable,
) -> Result<Option<Reconciliation>, CensusError> {
    let Some(index) = fetch_page(fetcher, index_url).await else {
        tracing::warn!("Index page {} could not be loaded, nothing to check", index_url);
        return Ok(None);
    };

    let entries = walk_index(&index)?;
    tracing::info!("Found {} documents in the index", entries.len());

    let reconciliation = reconcile(&entries, fetcher, table).await?;
    Ok(Some(reconciliation))
}
