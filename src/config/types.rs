use serde::Deserialize;

/// Main configuration structure for doc-census
///
/// Every section is optional in the TOML file; missing sections and keys
/// fall back to the public Python documentation sites and local paths.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sites: SitesConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub http: HttpConfig,
    pub cache: CacheConfig,
    pub output: OutputConfig,
}

/// Entry points of the crawled sites
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SitesConfig {
    /// Index page listing every numbered enhancement proposal
    #[serde(rename = "pep-index-url")]
    pub pep_index_url: String,

    /// Root of the documentation site
    #[serde(rename = "main-doc-url")]
    pub main_doc_url: String,
}

impl Default for SitesConfig {
    fn default() -> Self {
        Self {
            pep_index_url: "https://peps.python.org/".to_string(),
            main_doc_url: "https://docs.python.org/3/".to_string(),
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: "doc-census".to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// HTTP transport configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Whole-request timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Connection establishment timeout (seconds)
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

/// Response cache configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Whether responses are cached across runs
    pub enabled: bool,

    /// Path to the SQLite cache file
    #[serde(rename = "database-path")]
    pub database_path: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            database_path: "./doc_census_cache.db".to_string(),
        }
    }
}

/// Output locations
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving CSV reports
    #[serde(rename = "results-dir")]
    pub results_dir: String,

    /// Directory receiving downloaded archives
    #[serde(rename = "downloads-dir")]
    pub downloads_dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            results_dir: "./results".to_string(),
            downloads_dir: "./downloads".to_string(),
        }
    }
}
