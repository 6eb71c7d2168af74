//! Document categories and the statuses expected for each of them

use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Classifier attached to an indexed document
///
/// Decides which status labels are valid for the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CategoryKey {
    /// No key letter after the marker: the default category
    Unspecified,
    /// A single ASCII uppercase key letter
    Letter(char),
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unspecified => f.write_str("<unspecified>"),
            Self::Letter(c) => write!(f, "{}", c),
        }
    }
}

/// Leading marker of a category cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentType {
    Informational,
    Process,
    StandardsTrack,
}

impl DocumentType {
    pub fn from_marker(marker: char) -> Option<Self> {
        match marker {
            'I' => Some(Self::Informational),
            'P' => Some(Self::Process),
            'S' => Some(Self::StandardsTrack),
            _ => None,
        }
    }

    pub fn marker(&self) -> char {
        match self {
            Self::Informational => 'I',
            Self::Process => 'P',
            Self::StandardsTrack => 'S',
        }
    }
}

/// Why a category cell could not be read
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CategoryError {
    #[error("cell is empty")]
    Empty,

    #[error("unknown type marker '{0}'")]
    UnknownMarker(char),

    #[error("key '{0}' is not an uppercase ASCII letter")]
    InvalidKey(char),

    #[error("unexpected trailing text '{0}'")]
    TrailingText(String),
}

/// Parsed content of an index category cell: a marker and an optional key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryCell {
    pub document_type: DocumentType,
    pub key: CategoryKey,
}

impl CategoryCell {
    /// Parses cell text such as `"SF"`, `"PA"` or `"I"`
    ///
    /// Surrounding whitespace is ignored. The key letter may be any
    /// uppercase ASCII letter; whether it is a known category is a question
    /// for [`ExpectedStatusTable`].
    pub fn parse(text: &str) -> Result<Self, CategoryError> {
        let mut chars = text.trim().chars();

        let marker = chars.next().ok_or(CategoryError::Empty)?;
        let document_type =
            DocumentType::from_marker(marker).ok_or(CategoryError::UnknownMarker(marker))?;

        let key = match chars.next() {
            None => CategoryKey::Unspecified,
            Some(c) if c.is_ascii_uppercase() => CategoryKey::Letter(c),
            Some(c) => return Err(CategoryError::InvalidKey(c)),
        };

        let rest: String = chars.collect();
        if !rest.is_empty() {
            return Err(CategoryError::TrailingText(rest));
        }

        Ok(Self { document_type, key })
    }
}

const STANDARD_EXPECTED_STATUS: &[(CategoryKey, &[&str])] = &[
    (CategoryKey::Letter('A'), &["Active", "Accepted"]),
    (CategoryKey::Letter('D'), &["Deferred"]),
    (CategoryKey::Letter('F'), &["Final"]),
    (CategoryKey::Letter('P'), &["Provisional"]),
    (CategoryKey::Letter('R'), &["Rejected"]),
    (CategoryKey::Letter('S'), &["Superseded"]),
    (CategoryKey::Letter('W'), &["Withdrawn"]),
    (CategoryKey::Unspecified, &["Draft", "Active"]),
];

/// Status labels accepted for each category key
///
/// Built in and immutable for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct ExpectedStatusTable {
    entries: BTreeMap<CategoryKey, &'static [&'static str]>,
}

impl ExpectedStatusTable {
    /// The table for the Python Enhancement Proposal index
    pub fn standard() -> Self {
        Self::from_entries(STANDARD_EXPECTED_STATUS.iter().copied())
    }

    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (CategoryKey, &'static [&'static str])>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Expected labels for `key`, or `None` for an unknown key
    pub fn expected(&self, key: &CategoryKey) -> Option<&'static [&'static str]> {
        self.entries.get(key).copied()
    }

    pub fn contains_key(&self, key: &CategoryKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ExpectedStatusTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_marker_and_key() {
        let cell = CategoryCell::parse("SF").unwrap();
        assert_eq!(cell.document_type, DocumentType::StandardsTrack);
        assert_eq!(cell.key, CategoryKey::Letter('F'));
    }

    #[test]
    fn test_parse_marker_only_is_unspecified() {
        let cell = CategoryCell::parse(" I ").unwrap();
        assert_eq!(cell.document_type, DocumentType::Informational);
        assert_eq!(cell.key, CategoryKey::Unspecified);
    }

    #[test]
    fn test_parse_unknown_key_letter_is_accepted() {
        let cell = CategoryCell::parse("PZ").unwrap();
        assert_eq!(cell.key, CategoryKey::Letter('Z'));
    }

    #[test]
    fn test_parse_rejects_malformed_cells() {
        assert_eq!(CategoryCell::parse(""), Err(CategoryError::Empty));
        assert_eq!(CategoryCell::parse("   "), Err(CategoryError::Empty));
        assert_eq!(
            CategoryCell::parse("XA"),
            Err(CategoryError::UnknownMarker('X'))
        );
        assert_eq!(CategoryCell::parse("Sa"), Err(CategoryError::InvalidKey('a')));
        assert_eq!(
            CategoryCell::parse("SFX"),
            Err(CategoryError::TrailingText("X".to_string()))
        );
    }

    #[test]
    fn test_marker_roundtrip() {
        for marker in ['I', 'P', 'S'] {
            let document_type = DocumentType::from_marker(marker).unwrap();
            assert_eq!(document_type.marker(), marker);
        }
        assert_eq!(DocumentType::from_marker('A'), None);
    }

    #[test]
    fn test_standard_table() {
        let table = ExpectedStatusTable::standard();
        assert_eq!(table.len(), 8);
        assert_eq!(
            table.expected(&CategoryKey::Letter('A')),
            Some(&["Active", "Accepted"][..])
        );
        assert_eq!(
            table.expected(&CategoryKey::Unspecified),
            Some(&["Draft", "Active"][..])
        );
        assert!(!table.contains_key(&CategoryKey::Letter('Z')));
    }

    #[test]
    fn test_category_key_display() {
        assert_eq!(CategoryKey::Letter('W').to_string(), "W");
        assert_eq!(CategoryKey::Unspecified.to_string(), "<unspecified>");
    }
}
