//! Command-line interface definitions.
//!
//! Every option is optional: running the binary with no arguments scrapes
//! listing pages 1 through 5 with the built-in defaults. Flags override values
//! loaded from `--config`.

use crate::config::ScrapeConfig;
use clap::Parser;
use std::error::Error;

/// Command-line arguments for the funding-news scraper.
///
/// # Examples
///
/// ```sh
/// # Default run: pages 1-5, writes extracted_data.json and extracted_data.csv
/// startup_funding_news
///
/// # Different page range and output location
/// startup_funding_news --start-page 2 --end-page 3 --json-output out/data.json
///
/// # Settings from a YAML file, with one override
/// startup_funding_news -c scrape.yaml --timeout-secs 20
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to a YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Listing URL prefix; the page number is appended to it
    #[arg(long)]
    pub base_url: Option<String>,

    /// First listing page to fetch
    #[arg(long)]
    pub start_page: Option<u32>,

    /// Last listing page to fetch (inclusive)
    #[arg(long)]
    pub end_page: Option<u32>,

    /// Output path for the JSON file
    #[arg(short, long)]
    pub json_output: Option<String>,

    /// Output path for the CSV file
    #[arg(long)]
    pub csv_output: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// User-Agent header sent with every request
    #[arg(long)]
    pub user_agent: Option<String>,
}

impl Cli {
    /// Resolve the effective configuration: file (or defaults), then flag overrides.
    pub async fn into_config(self) -> Result<ScrapeConfig, Box<dyn Error>> {
        let mut config = match self.config.as_deref() {
            Some(path) => ScrapeConfig::load(path).await?,
            None => ScrapeConfig::default(),
        };
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    fn apply_overrides(self, config: &mut ScrapeConfig) {
        if let Some(v) = self.base_url {
            config.base_url = v;
        }
        if let Some(v) = self.start_page {
            config.start_page = v;
        }
        if let Some(v) = self.end_page {
            config.end_page = v;
        }
        if let Some(v) = self.json_output {
            config.json_output = v;
        }
        if let Some(v) = self.csv_output {
            config.csv_output = v;
        }
        if let Some(v) = self.timeout_secs {
            config.timeout_secs = v;
        }
        if let Some(v) = self.user_agent {
            config.user_agent = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_no_args() {
        let cli = Cli::parse_from(["startup_funding_news"]);
        assert!(cli.config.is_none());
        assert!(cli.start_page.is_none());
        assert!(cli.json_output.is_none());
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from([
            "startup_funding_news",
            "--start-page",
            "2",
            "--end-page",
            "3",
            "-j",
            "/tmp/out.json",
        ]);

        assert_eq!(cli.start_page, Some(2));
        assert_eq!(cli.end_page, Some(3));
        assert_eq!(cli.json_output.as_deref(), Some("/tmp/out.json"));
    }

    #[tokio::test]
    async fn test_into_config_defaults() {
        let config = Cli::parse_from(["startup_funding_news"])
            .into_config()
            .await
            .unwrap();
        assert_eq!(config, ScrapeConfig::default());
    }

    #[tokio::test]
    async fn test_into_config_overrides() {
        let config = Cli::parse_from([
            "startup_funding_news",
            "--base-url",
            "https://example.com/list/",
            "--end-page",
            "1",
            "--timeout-secs",
            "3",
        ])
        .into_config()
        .await
        .unwrap();

        assert_eq!(config.listing_urls(), vec!["https://example.com/list/1"]);
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.csv_output, "extracted_data.csv");
    }

    #[tokio::test]
    async fn test_into_config_rejects_invalid_range() {
        let result = Cli::parse_from([
            "startup_funding_news",
            "--start-page",
            "9",
            "--end-page",
            "1",
        ])
        .into_config()
        .await;
        assert!(result.is_err());
    }
}
