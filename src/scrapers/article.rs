//! Article page text extraction.

use itertools::Itertools;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

static PARAGRAPH: Lazy<Selector> = Lazy::new(|| Selector::parse("p").expect("paragraph selector"));
static TIMESTAMP: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"time[class="entry-date updated td-module-date"]"#)
        .expect("timestamp selector")
});

/// A parsed article page.
pub struct ArticlePage {
    document: Html,
}

impl ArticlePage {
    pub fn parse(body: &str) -> Self {
        Self {
            document: Html::parse_document(body),
        }
    }

    /// Text of every `<p>` in document order, joined with single spaces.
    pub fn paragraph_text(&self) -> String {
        self.paragraphs().map(|p| p.text().collect::<String>()).join(" ")
    }

    /// Like [`paragraph_text`](Self::paragraph_text) but each paragraph is trimmed first.
    pub fn trimmed_paragraph_text(&self) -> String {
        self.paragraphs()
            .map(|p| p.text().collect::<String>().trim().to_string())
            .join(" ")
    }

    /// Trimmed text of the publication timestamp element, if the page has one.
    pub fn timestamp_text(&self) -> Option<String> {
        self.document
            .select(&TIMESTAMP)
            .next()
            .map(|time| time.text().collect::<String>().trim().to_string())
    }

    fn paragraphs(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.document.select(&PARAGRAPH)
    }
}
