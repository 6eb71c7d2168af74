//! Run modes selectable from the command line

use crate::config::Config;
use crate::crawler::Fetcher;
use crate::output::Table;
use crate::status::{run_census, Discrepancy, ExpectedStatusTable};
use crate::{docs, CensusError};
use std::fmt;
use std::path::Path;
use url::Url;

/// What a run should produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Mode {
    /// List the "What's New" articles of the documentation
    WhatsNew,
    /// List the documentation versions and their status
    LatestVersions,
    /// Download the A4 PDF documentation archive
    Download,
    /// Count document statuses and report inconsistent ones
    Pep,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WhatsNew => "whats-new",
            Self::LatestVersions => "latest-versions",
            Self::Download => "download",
            Self::Pep => "pep",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a mode hands back to the caller
#[derive(Debug, Default)]
pub struct ModeOutput {
    /// Rows to render, absent when the mode produced nothing to show
    pub table: Option<Table>,
    /// Status discrepancies found by [`Mode::Pep`], in index order
    pub discrepancies: Vec<Discrepancy>,
}

/// Runs `mode` against the sites named in `config`
pub async fn run_mode<F: Fetcher>(
    mode: Mode,
    fetcher: &mut F,
    config: &Config,
) -> Result<ModeOutput, CensusError> {
    let main_doc_url = Url::parse(&config.sites.main_doc_url)?;

    let output = match mode {
        Mode::WhatsNew => ModeOutput {
            table: docs::whats_new(fetcher, &main_doc_url).await?,
            ..ModeOutput::default()
        },
        Mode::LatestVersions => ModeOutput {
            table: docs::latest_versions(fetcher, &main_doc_url).await?,
            ..ModeOutput::default()
        },
        Mode::Download => {
            let downloads_dir = Path::new(&config.output.downloads_dir);
            docs::download(fetcher, &main_doc_url, downloads_dir).await?;
            ModeOutput::default()
        }
        Mode::Pep => {
            let index_url = Url::parse(&config.sites.pep_index_url)?;
            let table = ExpectedStatusTable::standard();
            match run_census(fetcher, &index_url, &table).await? {
                Some(reconciliation) => ModeOutput {
                    table: Some(reconciliation.report.to_table()),
                    discrepancies: reconciliation.discrepancies,
                },
                None => ModeOutput::default(),
            }
        }
    };

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn test_mode_names_match_cli_values() {
        for mode in Mode::value_variants() {
            let value = mode.to_possible_value().unwrap();
            assert_eq!(value.get_name(), mode.as_str());
        }
    }
}
