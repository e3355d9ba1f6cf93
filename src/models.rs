//! Data models for listing entries and extracted article records.
//!
//! This module defines the core data structures used throughout the application:
//! - [`ListingEntry`]: Raw summary block scraped from a listing page
//! - [`Location`]: City/country split of a listing excerpt
//! - [`Enrichment`]: Facts mined from a single article page
//! - [`ArticleRecord`]: The final record written to JSON and CSV
//!
//! Records serialize with camelCase field names so the JSON output keeps the
//! field names downstream consumers expect.

use serde::{Deserialize, Serialize};

/// Placeholder written into [`CountryAddress::state`]; listings never carry a state.
pub const STATE_PLACEHOLDER: &str = "None";

/// A single article summary as scraped from a listing page.
///
/// # Fields
///
/// * `title` - The headline text exactly as rendered
/// * `link` - The href of the first anchor in the heading, or `""`
/// * `excerpt` - Text of the excerpt block following the heading, or `""`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub title: String,
    pub link: String,
    pub excerpt: String,
}

/// City and country pulled from a `"City, Country"` excerpt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub city: String,
    pub country: String,
}

/// Facts extracted from one article page.
///
/// Every field falls back to its empty default when the page could not be
/// fetched or nothing matched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Enrichment {
    /// Monetary entities found in the article paragraphs.
    pub funding_amount: Vec<String>,
    /// Names captured after a CEO/CTO/CFO marker.
    pub ceo_cto_cfo_name: Vec<String>,
    /// First date entity in the article timestamp.
    pub article_date: Option<String>,
}

/// Postal-style address attached to each record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CountryAddress {
    pub city: String,
    pub state: String,
    pub country: String,
}

impl From<Location> for CountryAddress {
    fn from(location: Location) -> Self {
        Self {
            city: location.city,
            state: STATE_PLACEHOLDER.to_string(),
            country: location.country,
        }
    }
}

/// One extracted news item.
///
/// Built once per listing entry, appended to the run's result collection and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRecord {
    /// The article headline as rendered on the listing page.
    pub title: String,
    /// The article URL, or `""` when the heading had no anchor.
    pub link: String,
    /// City/country parsed from the listing excerpt.
    pub country_address: CountryAddress,
    /// Monetary amounts mentioned in the article body.
    pub funding_amount: Vec<String>,
    /// Executive names found after CEO/CTO/CFO markers.
    pub ceo_cto_cfo_name: Vec<String>,
    /// Publication date taken from the article timestamp.
    pub article_date: Option<String>,
    /// Organizations named in the title.
    pub entity_name: Vec<String>,
}

impl ArticleRecord {
    /// Column names used for the CSV header, in serialization order.
    pub const FIELD_NAMES: [&'static str; 7] = [
        "title",
        "link",
        "countryAddress",
        "fundingAmount",
        "ceoCtoCfoName",
        "articleDate",
        "entityName",
    ];

    /// Assemble a record from its independently extracted parts.
    pub fn new(
        entry: ListingEntry,
        location: Location,
        enrichment: Enrichment,
        entity_name: Vec<String>,
    ) -> Self {
        Self {
            title: entry.title,
            link: entry.link,
            country_address: location.into(),
            funding_amount: enrichment.funding_amount,
            ceo_cto_cfo_name: enrichment.ceo_cto_cfo_name,
            article_date: enrichment.article_date,
            entity_name,
        }
    }
}
