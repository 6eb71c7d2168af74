use crate::crawler::{fetch_page, Fetcher};
use crate::CensusError;
use std::path::{Path, PathBuf};
use url::Url;

/// Downloads the A4 PDF documentation archive into `downloads_dir`
///
/// Returns the path of the saved archive, or `Ok(None)` when the download
/// page or the archive itself could not be fetched.
pub async fn download<F: Fetcher>(
    fetcher: &mut F,
    main_doc_url: &Url,
    downloads_dir: &Path,
) -> Result<Option<PathBuf>, CensusError> {
    let downloads_url = main_doc_url.join("download.html")?;
    let Some(page) = fetch_page(fetcher, &downloads_url).await else {
        return Ok(None);
    };

    let table = page.locate("table.docutils")?;
    let archive_link = page.locate_in(table, r#"a[href$="pdf-a4.zip"]"#)?;
    let archive_url = page.join(page.attribute(archive_link, "href")?)?;

    let Some(archive) = fetcher.fetch_bytes(&archive_url).await else {
        return Ok(None);
    };

    std::fs::create_dir_all(downloads_dir)?;
    let archive_path = downloads_dir.join(archive_file_name(&archive_url));
    std::fs::write(&archive_path, &archive)?;

    tracing::info!(
        "Archive downloaded and saved: {} ({} bytes)",
        archive_path.display(),
        archive.len()
    );
    Ok(Some(archive_path))
}

/// Last path segment of the archive URL
fn archive_file_name(url: &Url) -> String {
    url.path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .unwrap_or("archive.zip")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawler::testing::StubFetcher;
    use tempfile::TempDir;

    const ROOT: &str = "https://docs.example.org/3/";

    const DOWNLOAD_PAGE: &str = r#"<html><body>
        <table class="docutils align-default"><tbody>
          <tr><td>PDF (US-Letter)</td><td><a href="archives/python-3.12-docs-pdf-letter.zip">Download</a></td></tr>
          <tr><td>PDF (A4)</td><td><a href="archives/python-3.12-docs-pdf-a4.zip">Download</a></td></tr>
        </tbody></table></body></html>"#;

    #[tokio::test]
    async fn test_download_saves_archive() {
        let dir = TempDir::new().unwrap();
        let mut fetcher = StubFetcher::new()
            .with_page("https://docs.example.org/3/download.html", DOWNLOAD_PAGE)
            .with_bytes(
                "https://docs.example.org/3/archives/python-3.12-docs-pdf-a4.zip",
                &[0x50, 0x4b, 0x03, 0x04],
            );

        let saved = download(&mut fetcher, &Url::parse(ROOT).unwrap(), dir.path())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(saved, dir.path().join("python-3.12-docs-pdf-a4.zip"));
        assert_eq!(std::fs::read(&saved).unwrap(), vec![0x50, 0x4b, 0x03, 0x04]);
    }

    #[tokio::test]
    async fn test_failed_archive_fetch_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let mut fetcher = StubFetcher::new()
            .with_page("https://docs.example.org/3/download.html", DOWNLOAD_PAGE);

        let saved = download(&mut fetcher, &Url::parse(ROOT).unwrap(), dir.path())
            .await
            .unwrap();

        assert!(saved.is_none());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_archive_file_name() {
        let url = Url::parse("https://docs.example.org/3/archives/docs-pdf-a4.zip").unwrap();
        assert_eq!(archive_file_name(&url), "docs-pdf-a4.zip");
    }
}
