//! HTML scraping for the funding-news site.
//!
//! Scraping happens in two phases, both over documents parsed with `scraper`:
//!
//! 1. **Listing**: [`listing::parse_listing`] turns a listing page into
//!    [`ListingEntry`](crate::models::ListingEntry) values (title, link, excerpt)
//! 2. **Article**: [`article`] pulls paragraph text and the publication
//!    timestamp out of an individual article page
//!
//! # Site Markup
//!
//! | Element | Selector |
//! |---------|----------|
//! | Article heading | `h3[class="entry-title td-module-title"]` |
//! | Excerpt block (sibling of the heading) | `div[class="td-excerpt"]` |
//! | Article paragraphs | `p` |
//! | Publication timestamp | `time[class="entry-date updated td-module-date"]` |
//!
//! Class attributes are matched as exact strings.
//!
//! Missing elements are never errors: they resolve to empty strings or `None`.

pub mod article;
pub mod listing;
