use crate::crawler::{element_text, fetch_page, Fetcher};
use crate::output::Table;
use crate::{CensusError, ParseError};
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

fn version_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"Python (?P<version>\d\.\d+) \((?P<status>.*)\)")
            .expect("version pattern is a valid regex")
    })
}

/// Splits a sidebar link text like `Python 3.12 (stable)` into version and
/// status; unmatched text is returned whole with an empty status.
pub fn parse_version_link(text: &str) -> (String, String) {
    match version_pattern().captures(text) {
        Some(caps) => (caps["version"].to_string(), caps["status"].to_string()),
        None => (text.to_string(), String::new()),
    }
}

/// Lists the documentation versions advertised in the sidebar
///
/// Returns `Ok(None)` when the main page cannot be loaded.
///
/// # Errors
///
/// [`ParseError::VersionListNotFound`] when no sidebar list mentions
/// "All versions".
pub async fn latest_versions<F: Fetcher>(
    fetcher: &mut F,
    main_doc_url: &Url,
) -> Result<Option<Table>, CensusError> {
    let Some(page) = fetch_page(fetcher, main_doc_url).await else {
        return Ok(None);
    };

    let sidebar = page.locate("div.sphinxsidebarwrapper")?;
    let version_list = page
        .select_in(sidebar, "ul")?
        .into_iter()
        .find(|ul| element_text(*ul).contains("All versions"))
        .ok_or_else(|| ParseError::VersionListNotFound {
            location: page.url().to_string(),
        })?;

    let mut table = Table::new(["Documentation link", "Version", "Status"]);
    for link in page.select_in(version_list, "a")? {
        let href = page.attribute(link, "href")?;
        let (version, status) = parse_version_link(&element_text(link));
        table.push_row([href.to_string(), version, status]);
    }

    Ok(Some(table))
}
