//! Page fetching over HTTP.
//!
//! Every fetch is a single best-effort GET: network errors, timeouts and
//! non-success statuses are logged and reported as `None`, never as an error.
//! There are no retries.

use crate::config::ScrapeConfig;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use std::error::Error;
use tracing::{debug, instrument, warn};

/// Source of page bodies keyed by URL.
///
/// Implemented by [`HttpFetcher`] for real runs; tests substitute fixtures.
pub trait PageFetcher {
    /// Fetch `url` and return its body, or `None` if it could not be retrieved.
    async fn fetch(&self, url: &str) -> Option<String>;
}

/// Fetcher backed by a `reqwest` client with a fixed user agent and timeout.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a client carrying the configured `User-Agent` header and timeout.
    pub fn new(config: &ScrapeConfig) -> Result<Self, Box<dyn Error>> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_str(&config.user_agent)?);
        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .build()?;
        Ok(Self { client })
    }

    async fn get_text(&self, url: &str) -> Result<String, reqwest::Error> {
        self.client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await
    }
}

impl PageFetcher for HttpFetcher {
    #[instrument(level = "debug", skip(self))]
    async fn fetch(&self, url: &str) -> Option<String> {
        match self.get_text(url).await {
            Ok(body) => {
                debug!(bytes = body.len(), "Fetched page");
                Some(body)
            }
            Err(e) => {
                warn!(%url, error = %e, "Error fetching webpage");
                None
            }
        }
    }
}

/// In-memory fetcher serving fixed bodies; unknown URLs behave like failed fetches.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct FixtureFetcher {
    pages: std::collections::HashMap<String, String>,
    requests: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl FixtureFetcher {
    pub fn with_page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_string(), body.to_string());
        self
    }

    /// URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl PageFetcher for FixtureFetcher {
    async fn fetch(&self, url: &str) -> Option<String> {
        self.requests.lock().unwrap().push(url.to_string());
        self.pages.get(url).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_config() -> ScrapeConfig {
        ScrapeConfig {
            timeout_secs: 2,
            ..ScrapeConfig::default()
        }
    }

    #[test]
    fn test_rejects_invalid_user_agent() {
        let config = ScrapeConfig {
            user_agent: "bad\nagent".to_string(),
            ..ScrapeConfig::default()
        };
        assert!(HttpFetcher::new(&config).is_err());
    }

    /// Serve exactly one raw HTTP response on a local port and return its URL.
    async fn serve_once(response: &'static str) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 2048];
            let _ = socket.read(&mut request).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });
        format!("http://{addr}/page/1")
    }

    #[tokio::test]
    async fn test_error_status_yields_none() {
        let url = serve_once(
            "HTTP/1.1 404 Not Found\r\ncontent-length: 4\r\nconnection: close\r\n\r\nnope",
        )
        .await;
        let fetcher = HttpFetcher::new(&unreachable_config()).unwrap();
        assert_eq!(fetcher.fetch(&url).await, None);
    }

    #[tokio::test]
    async fn test_success_status_returns_body() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\ncontent-length: 9\r\nconnection: close\r\n\r\n<p>ok</p>",
        )
        .await;
        let fetcher = HttpFetcher::new(&unreachable_config()).unwrap();
        assert_eq!(fetcher.fetch(&url).await.as_deref(), Some("<p>ok</p>"));
    }

    #[tokio::test]
    async fn test_unreachable_host_yields_none() {
        let fetcher = HttpFetcher::new(&unreachable_config()).unwrap();
        assert_eq!(fetcher.fetch("http://127.0.0.1:1/page/1").await, None);
    }

    #[tokio::test]
    async fn test_malformed_url_yields_none() {
        let fetcher = HttpFetcher::new(&unreachable_config()).unwrap();
        assert_eq!(fetcher.fetch("").await, None);
        assert_eq!(fetcher.fetch("not a url").await, None);
    }

    #[tokio::test]
    async fn test_fixture_fetcher_records_requests() {
        let fetcher = FixtureFetcher::default().with_page("https://a.test/1", "<p>hi</p>");
        assert_eq!(fetcher.fetch("https://a.test/1").await.as_deref(), Some("<p>hi</p>"));
        assert_eq!(fetcher.fetch("https://a.test/2").await, None);
        assert_eq!(fetcher.requests(), vec!["https://a.test/1", "https://a.test/2"]);
    }
}
