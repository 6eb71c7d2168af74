use crate::crawler::{element_text, Direction, Page};
use crate::ParseResult;

/// Returns the status declared in a detail page's metadata list
///
/// Each document declares its status once: the first term containing
/// `Status` wins and later terms are not read. `Ok(None)` means the page has
/// a metadata list but no status term in it.
///
/// # Errors
///
/// A page without the metadata list, or a status term without a value
/// element after it, is a structural [`crate::ParseError`].
pub fn extract_status(page: &Page) -> ParseResult<Option<String>> {
    let metadata = page.locate("dl.rfc2822.field-list.simple")?;

    for term in page.select_in(metadata, "dt")? {
        if element_text(term).contains("Status") {
            let value = page.locate_sibling(term, Direction::Next)?;
            return Ok(Some(element_text(value).trim().to_string()));
        }
    }

    Ok(None)
}
