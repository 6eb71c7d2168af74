//! Integration tests for the census crawler
//!
//! These tests use wiremock to serve an index page and its detail pages and
//! run the `pep` mode end-to-end through the HTTP fetcher and its cache.

use doc_census::config::Config;
use doc_census::{run_mode, CensusError, HttpFetcher, Mode, ParseError};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const INDEX_HTML: &str = r#"<html><head><title>PEP 0</title></head><body>
<section id="numerical-index">
  <table class="pep-zero-table docutils align-default">
    <thead><tr><th>Type</th><th>PEP</th><th>Title</th></tr></thead>
    <tbody>
      <tr><td><abbr title="Process, Active">PA</abbr></td>
          <td><a class="pep reference internal" href="pep-0001/">1</a></td>
          <td>PEP Purpose and Guidelines</td></tr>
      <tr><td><abbr title="Standards Track">SZ</abbr></td>
          <td><a class="pep reference internal" href="pep-0002/">2</a></td>
          <td>Unknown category</td></tr>
      <tr><td><abbr title="Informational">I</abbr></td>
          <td><a class="pep reference internal" href="pep-0003/">3</a></td>
          <td>Broken page</td></tr>
    </tbody>
  </table>
</section>
</body></html>"#;

fn detail_html(status: &str) -> String {
    format!(
        r#"<html><body><section id="pep-content">
        <dl class="rfc2822 field-list simple">
          <dt class="field-odd">Author<span class="colon">:</span></dt>
          <dd class="field-odd">Someone</dd>
          <dt class="field-even">Status<span class="colon">:</span></dt>
          <dd class="field-even"><abbr>{}</abbr></dd>
        </dl></section></body></html>"#,
        status
    )
}

/// Creates a test configuration pointing at the mock server
fn create_test_config(base_url: &str, cache_dir: &TempDir) -> Config {
    let mut config = Config::default();
    config.sites.pep_index_url = format!("{}/peps/", base_url);
    config.sites.main_doc_url = format!("{}/docs/3/", base_url);
    config.cache.database_path = cache_dir
        .path()
        .join("cache.db")
        .to_string_lossy()
        .into_owned();
    config.output.results_dir = cache_dir.path().join("results").to_string_lossy().into_owned();
    config.output.downloads_dir = cache_dir
        .path()
        .join("downloads")
        .to_string_lossy()
        .into_owned();
    config
}

async fn mount_page(server: &MockServer, route: &str, body: String, hits: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .expect(hits)
        .mount(server)
        .await;
}

fn cells(rows: &[Vec<String>]) -> Vec<(String, String)> {
    rows.iter().map(|r| (r[0].clone(), r[1].clone())).collect()
}

#[tokio::test]
async fn test_pep_census_end_to_end() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let dir = TempDir::new().expect("Failed to create temp dir");

    mount_page(&mock_server, "/peps/", INDEX_HTML.to_string(), 1).await;
    mount_page(&mock_server, "/peps/pep-0001/", detail_html("Accepted"), 1).await;
    mount_page(&mock_server, "/peps/pep-0002/", detail_html("Draft"), 1).await;

    // Transport failure: skipped, not fatal
    Mock::given(method("GET"))
        .and(path("/peps/pep-0003/"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&base_url, &dir);
    let mut fetcher = HttpFetcher::from_config(&config, false).expect("Failed to build fetcher");

    let output = run_mode(Mode::Pep, &mut fetcher, &config)
        .await
        .expect("Census failed");

    let table = output.table.expect("Census produced no table");
    assert_eq!(table.header(), ["Status", "Amount"]);
    assert_eq!(
        cells(table.rows()),
        vec![
            ("Accepted".to_string(), "1".to_string()),
            ("Draft".to_string(), "1".to_string()),
            ("Total".to_string(), "2".to_string()),
        ]
    );

    assert_eq!(output.discrepancies.len(), 1);
    assert_eq!(
        output.discrepancies[0].url().as_str(),
        format!("{}/peps/pep-0002/", base_url)
    );

    // Failed responses are never cached
    let cache = fetcher.cache().expect("Cache should be enabled");
    assert_eq!(cache.len().unwrap(), 3);
}

#[tokio::test]
async fn test_missing_row_group_aborts_before_detail_pages() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let dir = TempDir::new().expect("Failed to create temp dir");

    mount_page(
        &mock_server,
        "/peps/",
        r#"<html><body><section id="numerical-index">
           <p><a href="pep-0001/">1</a></p></section></body></html>"#
            .to_string(),
        1,
    )
    .await;

    // Should never be called
    mount_page(&mock_server, "/peps/pep-0001/", detail_html("Final"), 0).await;

    let config = create_test_config(&base_url, &dir);
    let mut fetcher = HttpFetcher::from_config(&config, false).expect("Failed to build fetcher");

    let err = run_mode(Mode::Pep, &mut fetcher, &config)
        .await
        .expect_err("Census should abort");

    match err {
        CensusError::Parse(ParseError::TagNotFound { selector, location }) => {
            assert_eq!(selector, "tbody");
            assert_eq!(location, format!("{}/peps/", base_url));
        }
        other => panic!("Unexpected error: {}", other),
    }
}

#[tokio::test]
async fn test_second_run_is_served_from_cache() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let dir = TempDir::new().expect("Failed to create temp dir");

    let index = r#"<html><body><section id="numerical-index"><table><tbody>
        <tr><td>SF</td><td><a href="pep-0008/">8</a></td><td>Style Guide</td></tr>
        </tbody></table></section></body></html>"#;

    // Each page is requested once: the second run hits the cache.
    mount_page(&mock_server, "/peps/", index.to_string(), 1).await;
    mount_page(&mock_server, "/peps/pep-0008/", detail_html("Final"), 1).await;

    let config = create_test_config(&base_url, &dir);

    let first = {
        let mut fetcher = HttpFetcher::from_config(&config, false).expect("Failed to build fetcher");
        run_mode(Mode::Pep, &mut fetcher, &config)
            .await
            .expect("First run failed")
    };
    let second = {
        let mut fetcher = HttpFetcher::from_config(&config, false).expect("Failed to build fetcher");
        run_mode(Mode::Pep, &mut fetcher, &config)
            .await
            .expect("Second run failed")
    };

    assert_eq!(first.table, second.table);
    assert_eq!(first.discrepancies, second.discrepancies);
    assert!(second.discrepancies.is_empty());
}

#[tokio::test]
async fn test_clear_cache_refetches_pages() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let dir = TempDir::new().expect("Failed to create temp dir");

    let index = r#"<html><body><section id="numerical-index"><table><tbody>
        <tr><td>SW</td><td><a href="pep-0010/">10</a></td><td>Old</td></tr>
        </tbody></table></section></body></html>"#;

    mount_page(&mock_server, "/peps/", index.to_string(), 2).await;
    mount_page(&mock_server, "/peps/pep-0010/", detail_html("Final"), 2).await;

    let config = create_test_config(&base_url, &dir);

    for clear_cache in [false, true] {
        let mut fetcher =
            HttpFetcher::from_config(&config, clear_cache).expect("Failed to build fetcher");
        let output = run_mode(Mode::Pep, &mut fetcher, &config)
            .await
            .expect("Run failed");

        // W expects Withdrawn
        assert_eq!(output.discrepancies.len(), 1);
    }
}

#[tokio::test]
async fn test_unreachable_index_produces_no_table() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let dir = TempDir::new().expect("Failed to create temp dir");

    Mock::given(method("GET"))
        .and(path("/peps/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let mut config = create_test_config(&base_url, &dir);
    config.cache.enabled = false;
    let mut fetcher = HttpFetcher::from_config(&config, false).expect("Failed to build fetcher");

    let output = run_mode(Mode::Pep, &mut fetcher, &config)
        .await
        .expect("Run failed");

    assert!(output.table.is_none());
    assert!(output.discrepancies.is_empty());
}
