//! Run configuration: listing location, page range, request headers and output paths.
//!
//! A [`ScrapeConfig`] is built once at startup, either from defaults or from a
//! YAML file, then overridden by any command-line flags, and passed explicitly
//! into the pipeline.
//!
//! # Example YAML
//!
//! ```yaml
//! base_url: "https://www.finsmes.com/category/uk/page/"
//! start_page: 1
//! end_page: 5
//! timeout_secs: 10
//! json_output: "extracted_data.json"
//! csv_output: "extracted_data.csv"
//! ```

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::time::Duration;
use tracing::{info, instrument};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://www.finsmes.com/category/uk/page/";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Settings for a single scraping run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScrapeConfig {
    /// Listing URL prefix; the page number is appended verbatim.
    pub base_url: String,
    /// First listing page to fetch (inclusive).
    pub start_page: u32,
    /// Last listing page to fetch (inclusive).
    pub end_page: u32,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Destination of the JSON array of records.
    pub json_output: String,
    /// Destination of the CSV table of records.
    pub csv_output: String,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            start_page: 1,
            end_page: 5,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            json_output: "extracted_data.json".to_string(),
            csv_output: "extracted_data.csv".to_string(),
        }
    }
}

/// Reasons a configuration is rejected before any request is made.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    InvalidBaseUrl(String),
    UnsupportedScheme(String),
    EmptyPageRange { start: u32, end: u32 },
    ZeroTimeout,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidBaseUrl(e) => write!(f, "base_url is not a valid URL: {e}"),
            ConfigError::UnsupportedScheme(s) => {
                write!(f, "base_url must use http or https, got {s}")
            }
            ConfigError::EmptyPageRange { start, end } => {
                write!(f, "start_page ({start}) is greater than end_page ({end})")
            }
            ConfigError::ZeroTimeout => write!(f, "timeout_secs must be greater than zero"),
        }
    }
}

impl Error for ConfigError {}

impl ScrapeConfig {
    /// Load a configuration from a YAML file; missing keys take their defaults.
    #[instrument(level = "info")]
    pub async fn load(path: &str) -> Result<Self, Box<dyn Error>> {
        let raw = tokio::fs::read_to_string(path).await?;
        let config: ScrapeConfig = serde_yaml::from_str(&raw)?;
        info!(path, "Loaded configuration file");
        Ok(config)
    }

    /// Check the invariants the pipeline relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| ConfigError::InvalidBaseUrl(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(url.scheme().to_string()));
        }
        if self.start_page > self.end_page {
            return Err(ConfigError::EmptyPageRange {
                start: self.start_page,
                end: self.end_page,
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    /// Listing page URLs for the configured range, in page order.
    pub fn listing_urls(&self) -> Vec<String> {
        (self.start_page..=self.end_page)
            .map(|page| format!("{}{}", self.base_url, page))
            .collect()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
