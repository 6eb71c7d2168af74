use crate::config::types::{CacheConfig, Config, HttpConfig, OutputConfig, SitesConfig, UserAgentConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_sites_config(&config.sites)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_http_config(&config.http)?;
    validate_cache_config(&config.cache)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates the crawled site URLs
fn validate_sites_config(config: &SitesConfig) -> Result<(), ConfigError> {
    validate_site_url("pep_index_url", &config.pep_index_url)?;
    validate_site_url("main_doc_url", &config.main_doc_url)?;
    Ok(())
}

fn validate_site_url(name: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {} '{}': {}", name, value, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "{} '{}' must use HTTP or HTTPS scheme",
            name, value
        )));
    }

    // Relative links are joined against this URL, so a missing trailing
    // slash would drop the last path segment.
    if !url.path().ends_with('/') {
        return Err(ConfigError::Validation(format!(
            "{} '{}' must end with '/'",
            name, value
        )));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    // Validate crawler name: non-empty, alphanumeric + hyphens only
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "crawler_name must contain only alphanumeric characters and hyphens, got '{}'",
            config.crawler_name
        )));
    }

    if config.crawler_version.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_version cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates HTTP timeouts
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    if config.connect_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "connect_timeout_secs must be >= 1, got {}",
            config.connect_timeout_secs
        )));
    }

    Ok(())
}

fn validate_cache_config(config: &CacheConfig) -> Result<(), ConfigError> {
    if config.enabled && config.database_path.is_empty() {
        return Err(ConfigError::Validation(
            "database_path cannot be empty when the cache is enabled".to_string(),
        ));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.results_dir.is_empty() {
        return Err(ConfigError::Validation(
            "results_dir cannot be empty".to_string(),
        ));
    }

    if config.downloads_dir.is_empty() {
        return Err(ConfigError::Validation(
            "downloads_dir cannot be empty".to_string(),
        ));
    }

    Ok(())
}
