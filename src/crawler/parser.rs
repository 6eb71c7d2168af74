//! Parsed pages and structural tag lookups
//!
//! Every lookup here either finds the element the parsers rely on or fails
//! with a [`ParseError`] naming the selector and the page. A missing element
//! means the site's markup changed, so callers propagate these errors
//! instead of skipping the page.

use crate::{ParseError, ParseResult};
use scraper::{ElementRef, Html, Selector};
use std::fmt;
use url::Url;

/// Document order direction for sibling lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Next => f.write_str("next"),
            Self::Previous => f.write_str("previous"),
        }
    }
}

/// A fetched HTML document together with the URL it was loaded from
pub struct Page {
    url: Url,
    document: Html,
}

impl Page {
    /// Parses `body` as an HTML document loaded from `url`
    ///
    /// # Example
    ///
    /// ```
    /// use doc_census::crawler::Page;
    /// use url::Url;
    ///
    /// let url = Url::parse("https://example.com/").unwrap();
    /// let page = Page::parse(url, "<html><body><h1>Title</h1></body></html>");
    /// let h1 = page.locate("h1").unwrap();
    /// assert_eq!(h1.text().collect::<String>(), "Title");
    /// ```
    pub fn parse(url: Url, body: &str) -> Self {
        Self {
            url,
            document: Html::parse_document(body),
        }
    }

    /// The URL the page was loaded from; relative links resolve against it
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Resolves `href` against the page URL
    pub fn join(&self, href: &str) -> ParseResult<Url> {
        self.url.join(href).map_err(|source| ParseError::InvalidLink {
            href: href.to_string(),
            location: self.url.to_string(),
            source,
        })
    }

    /// First element in the whole document matching `selector`
    pub fn locate(&self, selector: &str) -> ParseResult<ElementRef<'_>> {
        self.locate_in(self.document.root_element(), selector)
    }

    /// First element inside `scope` matching `selector`
    pub fn locate_in<'a>(
        &'a self,
        scope: ElementRef<'a>,
        selector: &str,
    ) -> ParseResult<ElementRef<'a>> {
        let compiled = compile(selector)?;
        let found = scope.select(&compiled).next();
        found.ok_or_else(|| ParseError::TagNotFound {
            selector: selector.to_string(),
            location: self.url.to_string(),
        })
    }

    /// Every element inside `scope` matching `selector`, in document order
    pub fn select_in<'a>(
        &'a self,
        scope: ElementRef<'a>,
        selector: &str,
    ) -> ParseResult<Vec<ElementRef<'a>>> {
        let compiled = compile(selector)?;
        let found = scope.select(&compiled).collect();
        Ok(found)
    }

    /// The element sibling adjacent to `element` in `direction`
    ///
    /// Text nodes between elements are skipped.
    pub fn locate_sibling<'a>(
        &'a self,
        element: ElementRef<'a>,
        direction: Direction,
    ) -> ParseResult<ElementRef<'a>> {
        let sibling = match direction {
            Direction::Next => element.next_siblings().find_map(ElementRef::wrap),
            Direction::Previous => element.prev_siblings().find_map(ElementRef::wrap),
        };

        sibling.ok_or_else(|| ParseError::SiblingNotFound {
            tag: element.value().name().to_string(),
            direction,
            location: self.url.to_string(),
        })
    }

    /// Value of a required attribute
    pub fn attribute<'a>(&self, element: ElementRef<'a>, name: &str) -> ParseResult<&'a str> {
        element
            .value()
            .attr(name)
            .ok_or_else(|| ParseError::MissingAttribute {
                tag: element.value().name().to_string(),
                attribute: name.to_string(),
                location: self.url.to_string(),
            })
    }
}

/// Concatenated text content of an element
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

fn compile(selector: &str) -> ParseResult<Selector> {
    Selector::parse(selector).map_err(|e| ParseError::InvalidSelector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}
