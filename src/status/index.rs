//! Index walker: the ordered work list of documents to check

use crate::crawler::{element_text, Direction, Page};
use crate::status::category::{CategoryCell, CategoryKey};
use crate::{ParseError, ParseResult};
use url::Url;

/// One document listed in the index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub category_key: CategoryKey,
    pub detail_url: Url,
}

/// Extracts every numbered document from the index page, in document order
///
/// A document-number cell is a table cell whose text is only decimal
/// digits. Its preceding sibling cell carries the category marker, and the
/// link inside it points at the document's detail page.
///
/// # Errors
///
/// Any missing container, sibling or link, and any category cell outside
/// the known marker alphabet, is a structural [`ParseError`].
pub fn walk_index(page: &Page) -> ParseResult<Vec<IndexEntry>> {
    let section = page.locate("section#numerical-index")?;
    let tbody = page.locate_in(section, "tbody")?;

    let mut entries = Vec::new();
    for cell in page.select_in(tbody, "td")? {
        if !is_document_number(&element_text(cell)) {
            continue;
        }

        let marker_cell = page.locate_sibling(cell, Direction::Previous)?;
        let marker_text = element_text(marker_cell);
        let category = CategoryCell::parse(&marker_text).map_err(|e| {
            ParseError::MalformedCategory {
                text: marker_text.clone(),
                location: page.url().to_string(),
                reason: e.to_string(),
            }
        })?;

        let link = page.locate_in(cell, "a")?;
        let href = page.attribute(link, "href")?;
        let detail_url = page.join(href)?;

        entries.push(IndexEntry {
            category_key: category.key,
            detail_url,
        });
    }

    tracing::debug!("Index {} lists {} documents", page.url(), entries.len());
    Ok(entries)
}

fn is_document_number(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}
