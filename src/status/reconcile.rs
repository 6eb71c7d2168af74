//! Reconciliation of declared statuses against the expected-status table

use crate::crawler::{fetch_page, Fetcher};
use crate::output::Table;
use crate::status::category::{CategoryKey, ExpectedStatusTable};
use crate::status::extract::extract_status;
use crate::status::index::IndexEntry;
use crate::ParseResult;
use std::collections::BTreeMap;
use std::fmt;
use url::Url;

/// Status read from one successfully fetched detail page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservedStatus {
    pub category_key: CategoryKey,
    pub detail_url: Url,
    pub status_label: String,
}

/// A document whose declared status does not fit its category
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discrepancy {
    /// The index assigned a key the expected-status table does not know
    UnknownCategory { key: CategoryKey, url: Url },

    /// The declared status is not among the statuses expected for the key
    StatusMismatch {
        url: Url,
        observed: String,
        expected: Vec<String>,
    },
}

impl Discrepancy {
    pub fn url(&self) -> &Url {
        match self {
            Self::UnknownCategory { url, .. } | Self::StatusMismatch { url, .. } => url,
        }
    }
}

impl fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCategory { key, url } => {
                write!(f, "Unknown category key: {}\n{}", key, url)
            }
            Self::StatusMismatch {
                url,
                observed,
                expected,
            } => write!(
                f,
                "Mismatched statuses:\n{}\nStatus on page: {}\nExpected statuses: [{}]",
                url,
                observed,
                expected.join(", ")
            ),
        }
    }
}

/// Number of documents declaring one status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCount {
    pub status: String,
    pub amount: usize,
}

/// Frequency of every observed status, sorted by status label
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusReport {
    rows: Vec<StatusCount>,
    total: usize,
}

impl StatusReport {
    fn from_tally(tally: BTreeMap<String, usize>) -> Self {
        let rows: Vec<StatusCount> = tally
            .into_iter()
            .map(|(status, amount)| StatusCount { status, amount })
            .collect();
        let total = rows.iter().map(|row| row.amount).sum();
        Self { rows, total }
    }

    /// Body rows in ascending status order
    pub fn rows(&self) -> &[StatusCount] {
        &self.rows
    }

    /// Number of documents whose status was observed
    pub fn total(&self) -> usize {
        self.total
    }

    /// The report as `(Status, Amount)` rows closed by a `(Total, n)` row
    pub fn to_table(&self) -> Table {
        let mut table = Table::new(["Status", "Amount"]);
        for row in &self.rows {
            table.push_row([row.status.clone(), row.amount.to_string()]);
        }
        table.push_row(["Total".to_string(), self.total.to_string()]);
        table
    }
}

/// Result of one reconciliation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    pub report: StatusReport,
    /// Discrepancies in index order
    pub discrepancies: Vec<Discrepancy>,
}

/// Folds observed statuses into a tally and a discrepancy log
pub struct Reconciler<'t> {
    table: &'t ExpectedStatusTable,
    tally: BTreeMap<String, usize>,
    discrepancies: Vec<Discrepancy>,
}

impl<'t> Reconciler<'t> {
    pub fn new(table: &'t ExpectedStatusTable) -> Self {
        Self {
            table,
            tally: BTreeMap::new(),
            discrepancies: Vec::new(),
        }
    }

    /// Records one observed status, returning the discrepancy it raised
    ///
    /// The status is counted whether or not it is consistent.
    pub fn observe(&mut self, observed: ObservedStatus) -> Option<&Discrepancy> {
        let ObservedStatus {
            category_key,
            detail_url,
            status_label,
        } = observed;

        *self.tally.entry(status_label.clone()).or_insert(0) += 1;

        let discrepancy = match self.table.expected(&category_key) {
            None => Discrepancy::UnknownCategory {
                key: category_key,
                url: detail_url,
            },
            Some(expected) if !expected.contains(&status_label.as_str()) => {
                Discrepancy::StatusMismatch {
                    url: detail_url,
                    observed: status_label,
                    expected: expected.iter().map(|s| s.to_string()).collect(),
                }
            }
            Some(_) => return None,
        };

        tracing::warn!("{}", discrepancy);
        self.discrepancies.push(discrepancy);
        self.discrepancies.last()
    }

    pub fn finish(self) -> Reconciliation {
        Reconciliation {
            report: StatusReport::from_tally(self.tally),
            discrepancies: self.discrepancies,
        }
    }
}

/// Visits every entry in order and reconciles its declared status
///
/// Entries whose page fails to load, or whose page declares no status, are
/// left out of both the report and the discrepancy log.
///
/// # Errors
///
/// A detail page that loaded but lacks the expected structure aborts the
/// whole pass.
pub async fn reconcile<F: Fetcher>(
    entries: &[IndexEntry],
    fetcher: &mut F,
    table: &ExpectedStatusTable,
) -> ParseResult<Reconciliation> {
    let mut reconciler = Reconciler::new(table);
    let mut skipped = 0usize;

    for (position, entry) in entries.iter().enumerate() {
        if position > 0 && position % 50 == 0 {
            tracing::info!("Progress: {}/{} documents checked", position, entries.len());
        }

        let Some(page) = fetch_page(fetcher, &entry.detail_url).await else {
            skipped += 1;
            continue;
        };

        let Some(status_label) = extract_status(&page)? else {
            tracing::debug!("No status declared on {}", entry.detail_url);
            skipped += 1;
            continue;
        };

        reconciler.observe(ObservedStatus {
            category_key: entry.category_key,
            detail_url: entry.detail_url.clone(),
            status_label,
        });
    }

    let reconciliation = reconciler.finish();
    tracing::info!(
        "Checked {} documents: {} observed, {} skipped, {} discrepancies",
        entries.len(),
        reconciliation.report.total(),
        skipped,
        reconciliation.discrepancies.len()
    );

    Ok(reconciliation)
}
