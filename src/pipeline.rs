//! The scraping pipeline: listing pages in, article records out.
//!
//! Listing pages are processed one at a time, in page order. Each entry on a
//! page is split, enriched and tagged before the next entry is touched, so the
//! output order matches the order articles appear on the site.

use crate::config::ScrapeConfig;
use crate::enrich::Enricher;
use crate::entities::{EntityCategory, SharedRecognizer, extract_entities};
use crate::fetch::PageFetcher;
use crate::location::split_location;
use crate::models::{ArticleRecord, ListingEntry};
use crate::scrapers::listing::parse_listing;
use crate::utils::truncate_for_log;
use futures::stream::{self, StreamExt};
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Counters reported at the end of a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub pages_fetched: usize,
    pub pages_failed: usize,
    pub articles: usize,
}

/// Scrapes listing pages and builds one [`ArticleRecord`] per listed article.
pub struct Pipeline<'a, F> {
    config: &'a ScrapeConfig,
    fetcher: &'a F,
    recognizer: SharedRecognizer,
}

impl<'a, F: PageFetcher> Pipeline<'a, F> {
    pub fn new(config: &'a ScrapeConfig, fetcher: &'a F, recognizer: SharedRecognizer) -> Self {
        Self {
            config,
            fetcher,
            recognizer,
        }
    }

    /// Run every configured listing page through the pipeline.
    #[instrument(level = "info", skip_all, fields(base_url = %self.config.base_url))]
    pub async fn run(&self) -> (Vec<ArticleRecord>, RunSummary) {
        let mut records = Vec::new();
        let mut summary = RunSummary::default();

        for page_url in self.config.listing_urls() {
            let Some(body) = self.fetcher.fetch(&page_url).await else {
                summary.pages_failed += 1;
                continue;
            };
            summary.pages_fetched += 1;

            let page_records = self.process_listing(&page_url, &body).await;
            info!(page = %page_url, count = page_records.len(), "Processed listing page");
            records.extend(page_records);
        }

        summary.articles = records.len();
        if records.is_empty() {
            warn!("No articles found on any listing page");
        }
        (records, summary)
    }

    /// Build records for every entry on one listing page, strictly in order.
    pub async fn process_listing(&self, page_url: &str, body: &str) -> Vec<ArticleRecord> {
        let entries = parse_listing(body);
        stream::iter(entries)
            .then(|entry| self.build_record(page_url, entry))
            .collect()
            .await
    }

    async fn build_record(&self, page_url: &str, entry: ListingEntry) -> ArticleRecord {
        debug!(
            title = %truncate_for_log(&entry.title, 80),
            link = %entry.link,
            "Building record"
        );
        let location = split_location(&entry.excerpt);
        let enrichment = Enricher::new(self.fetcher, self.recognizer.clone())
            .enrich(&resolve_link(page_url, &entry.link))
            .await;
        let entity_name = extract_entities(
            self.recognizer.as_ref(),
            &entry.title,
            EntityCategory::Organization,
        );
        ArticleRecord::new(entry, location, enrichment, entity_name)
    }
}

/// Absolute URL to fetch for `link`, resolving relative hrefs against the listing page.
///
/// Empty links stay empty; links that cannot be resolved are returned unchanged.
fn resolve_link(page_url: &str, link: &str) -> String {
    if link.is_empty() {
        return String::new();
    }
    Url::parse(page_url)
        .and_then(|base| base.join(link))
        .map(|url| url.to_string())
        .unwrap_or_else(|_| link.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::PatternRecognizer;
    use crate::fetch::FixtureFetcher;
    use std::sync::Arc;

    const BASE: &str = "https://news.test/category/uk/page/";

    const LISTING: &str = r#"
        <html><body>
          <div class="td_module_10">
            <h3 class="entry-title td-module-title"><a href="https://news.test/acme">Acme Raises $5M in Seed Funding</a></h3>
            <div class="td-excerpt">Berlin, Germany</div>
          </div>
          <div class="td_module_10">
            <h3 class="entry-title td-module-title"><a href="/beta">Beta Secures £2M</a></h3>
          </div>
        </body></html>
    "#;

    const ACME: &str = r#"
        <html><body>
          <time class="entry-date updated td-module-date">March 3, 2024</time>
          <p>Acme has raised $5M in a round led by Northzone Ventures.</p>
          <p>CEO Jane Doe, said the money will fund hiring.</p>
        </body></html>
    "#;

    const BETA: &str = r#"
        <html><body>
          <time class="entry-date updated td-module-date">4 April 2024</time>
          <p>Beta secured £2M.</p>
          <p>CFO Mark Lee.</p>
        </body></html>
    "#;

    fn config(end_page: u32) -> ScrapeConfig {
        ScrapeConfig {
            base_url: BASE.to_string(),
            start_page: 1,
            end_page,
            ..ScrapeConfig::default()
        }
    }

    fn recognizer() -> SharedRecognizer {
        Arc::new(PatternRecognizer::new().unwrap())
    }

    #[tokio::test]
    async fn test_end_to_end_two_articles() {
        let config = config(1);
        let fetcher = FixtureFetcher::default()
            .with_page(&format!("{BASE}1"), LISTING)
            .with_page("https://news.test/acme", ACME)
            .with_page("https://news.test/beta", BETA);

        let (records, summary) = Pipeline::new(&config, &fetcher, recognizer()).run().await;

        assert_eq!(records.len(), 2);
        assert_eq!(
            summary,
            RunSummary {
                pages_fetched: 1,
                pages_failed: 0,
                articles: 2
            }
        );

        let acme = &records[0];
        assert_eq!(acme.title, "Acme Raises $5M in Seed Funding");
        assert_eq!(acme.link, "https://news.test/acme");
        assert_eq!(acme.country_address.city, "Berlin");
        assert_eq!(acme.country_address.state, "None");
        assert_eq!(acme.country_address.country, "Germany");
        assert_eq!(acme.funding_amount, vec!["$5M"]);
        assert_eq!(acme.ceo_cto_cfo_name, vec!["Jane Doe"]);
        assert_eq!(acme.article_date.as_deref(), Some("March 3, 2024"));
        assert_eq!(acme.entity_name, vec!["Acme"]);

        let beta = &records[1];
        assert_eq!(beta.link, "/beta");
        assert_eq!(beta.country_address.city, "");
        assert_eq!(beta.country_address.country, "");
        assert_eq!(beta.funding_amount, vec!["£2M"]);
        assert_eq!(beta.ceo_cto_cfo_name, vec!["Mark Lee"]);
        assert_eq!(beta.article_date.as_deref(), Some("4 April 2024"));
        assert_eq!(beta.entity_name, vec!["Beta"]);
    }

    #[tokio::test]
    async fn test_failed_pages_are_skipped() {
        let config = config(3);
        let fetcher = FixtureFetcher::default().with_page(&format!("{BASE}2"), LISTING);

        let (records, summary) = Pipeline::new(&config, &fetcher, recognizer()).run().await;

        assert_eq!(summary.pages_fetched, 1);
        assert_eq!(summary.pages_failed, 2);
        assert_eq!(records.len(), 2);
        // Article pages are missing, so every enrichment falls back to defaults.
        assert!(records.iter().all(|r| r.funding_amount.is_empty()));
        assert!(records.iter().all(|r| r.article_date.is_none()));
        assert_eq!(records[0].country_address.city, "Berlin");
    }

    #[tokio::test]
    async fn test_requests_follow_page_then_article_order() {
        let config = config(1);
        let fetcher = FixtureFetcher::default().with_page(&format!("{BASE}1"), LISTING);

        Pipeline::new(&config, &fetcher, recognizer()).run().await;

        let acme = "https://news.test/acme".to_string();
        let beta = "https://news.test/beta".to_string();
        assert_eq!(
            fetcher.requests(),
            vec![
                format!("{BASE}1"),
                acme.clone(),
                acme.clone(),
                acme,
                beta.clone(),
                beta.clone(),
                beta
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_listing_yields_no_records() {
        let config = config(1);
        let fetcher =
            FixtureFetcher::default().with_page(&format!("{BASE}1"), "<html><body></body></html>");

        let (records, summary) = Pipeline::new(&config, &fetcher, recognizer()).run().await;
        assert!(records.is_empty());
        assert_eq!(summary.articles, 0);
        assert_eq!(summary.pages_fetched, 1);
    }

    #[test]
    fn test_resolve_link() {
        let page = "https://news.test/category/uk/page/1";
        assert_eq!(resolve_link(page, "/beta"), "https://news.test/beta");
        assert_eq!(
            resolve_link(page, "https://other.test/x"),
            "https://other.test/x"
        );
        assert_eq!(resolve_link(page, ""), "");
        assert_eq!(resolve_link("not a url", "/beta"), "/beta");
    }
}
