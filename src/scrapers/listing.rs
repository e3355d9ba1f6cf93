//! Listing page parser.
//!
//! Each article on a listing page is rendered as an `h3` heading whose class
//! attribute is exactly `entry-title td-module-title`, wrapping a link and
//! followed somewhere among its siblings by a `div` of class `td-excerpt`
//! holding the `"City, Country"` excerpt. Class attributes are compared as
//! whole strings, so elements carrying extra classes are not matched.

use crate::models::ListingEntry;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, instrument};

static HEADING: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"h3[class="entry-title td-module-title"]"#).expect("heading selector")
});
static ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a").expect("anchor selector"));
static EXCERPT: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"div[class="td-excerpt"]"#).expect("excerpt selector"));

/// Extract every article entry from a listing page body, in document order.
///
/// Returns an empty vector when no heading matches.
#[instrument(level = "debug", skip_all, fields(bytes = body.len()))]
pub fn parse_listing(body: &str) -> Vec<ListingEntry> {
    let document = Html::parse_document(body);
    let entries: Vec<ListingEntry> = document
        .select(&HEADING)
        .map(|heading| ListingEntry {
            title: heading.text().collect(),
            link: first_link(heading),
            excerpt: excerpt_after(heading),
        })
        .collect();
    debug!(count = entries.len(), "Parsed listing entries");
    entries
}

fn first_link(heading: ElementRef<'_>) -> String {
    heading
        .select(&ANCHOR)
        .next()
        .and_then(|a| a.value().attr("href"))
        .unwrap_or_default()
        .to_string()
}

/// Text of the first following sibling matching the excerpt selector, or `""`.
fn excerpt_after(heading: ElementRef<'_>) -> String {
    heading
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|sibling| EXCERPT.matches(sibling))
        .map(|excerpt| excerpt.text().collect())
        .unwrap_or_default()
}
