//! Documentation site modes
//!
//! Each mode reads a handful of pages under the main documentation URL:
//! - [`whats_new`] lists the "What's New" articles
//! - [`latest_versions`] lists the versions advertised in the sidebar
//! - [`download`] saves the A4 PDF archive

mod download;
mod latest_versions;
mod whats_new;

pub use download::download;
pub use latest_versions::{latest_versions, parse_version_link};
pub use whats_new::whats_new;
