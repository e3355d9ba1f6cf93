//! Per-article enrichment.
//!
//! For every article link the [`Enricher`] runs three independent extractions,
//! each with its own fetch of the page:
//!
//! | Field | Source text | Extractor |
//! |-------|-------------|-----------|
//! | `funding_amount` | all `<p>` text, space-joined | MONEY entities |
//! | `ceo_cto_cfo_name` | all `<p>` text, trimmed and space-joined | [`extract_executive_names`] |
//! | `article_date` | trimmed timestamp text | first DATE entity |
//!
//! A failed fetch only blanks the field it was fetched for.

use crate::entities::{EntityCategory, SharedRecognizer, extract_entities};
use crate::executives::extract_executive_names;
use crate::fetch::PageFetcher;
use crate::models::Enrichment;
use crate::scrapers::article::ArticlePage;
use tracing::{debug, info, instrument};

/// Runs the article extractors against pages served by `F`.
pub struct Enricher<'a, F> {
    fetcher: &'a F,
    recognizer: SharedRecognizer,
}

impl<'a, F: PageFetcher> Enricher<'a, F> {
    pub fn new(fetcher: &'a F, recognizer: SharedRecognizer) -> Self {
        Self {
            fetcher,
            recognizer,
        }
    }

    /// Funding amounts, executive names and publication date for `link`.
    #[instrument(level = "info", skip(self))]
    pub async fn enrich(&self, link: &str) -> Enrichment {
        if link.is_empty() {
            debug!("No article link; skipping enrichment");
            return Enrichment::default();
        }
        let enrichment = Enrichment {
            funding_amount: self.funding_amounts(link).await,
            ceo_cto_cfo_name: self.executive_names(link).await,
            article_date: self.article_date(link).await,
        };
        info!(
            amounts = enrichment.funding_amount.len(),
            names = enrichment.ceo_cto_cfo_name.len(),
            dated = enrichment.article_date.is_some(),
            "Enriched article"
        );
        enrichment
    }

    /// Monetary entities in the article paragraphs; empty if unfetchable.
    pub async fn funding_amounts(&self, link: &str) -> Vec<String> {
        let Some(body) = self.fetcher.fetch(link).await else {
            return Vec::new();
        };
        let text = ArticlePage::parse(&body).paragraph_text();
        extract_entities(self.recognizer.as_ref(), &text, EntityCategory::Money)
    }

    /// Names following CEO/CTO/CFO markers; empty if unfetchable.
    pub async fn executive_names(&self, link: &str) -> Vec<String> {
        let Some(body) = self.fetcher.fetch(link).await else {
            return Vec::new();
        };
        let text = ArticlePage::parse(&body).trimmed_paragraph_text();
        extract_executive_names(&text)
    }

    /// First date entity in the article timestamp, if any.
    pub async fn article_date(&self, link: &str) -> Option<String> {
        let body = self.fetcher.fetch(link).await?;
        let stamp = ArticlePage::parse(&body).timestamp_text()?;
        extract_entities(self.recognizer.as_ref(), &stamp, EntityCategory::Date)
            .into_iter()
            .next()
    }
}
