//! Executive-name extraction from article text.
//!
//! Names are found with a single case-sensitive pattern: the token `CEO`,
//! `CTO` or `CFO`, an optional `:` or `-` separator, then a capture that starts
//! with an uppercase letter and continues through letters, whitespace and
//! hyphens.
//!
//! The capture only stops at a character outside letters, whitespace and
//! hyphens. It runs on through ordinary words and later role markers, so
//! `"CEO: Jane Smith and CTO-Bob Lee"` yields the single capture
//! `"Jane Smith and CTO-Bob Lee"`.

use once_cell::sync::Lazy;
use regex::Regex;

static EXECUTIVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:CEO|CTO|CFO)\s*[:\-]?\s*([A-Z][a-zA-Z\s-]*)").expect("executive pattern")
});

/// Every non-empty name capture in `text`, trimmed, in order of appearance.
///
/// Repeated mentions are kept.
pub fn extract_executive_names(text: &str) -> Vec<String> {
    EXECUTIVE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|name| name.as_str().trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_name_stops_at_punctuation() {
        assert_eq!(
            extract_executive_names("said CEO Jane Doe, adding that growth was strong."),
            vec!["Jane Doe"]
        );
    }

    #[test]
    fn test_capture_spans_following_marker() {
        assert_eq!(
            extract_executive_names("CEO: Jane Smith and CTO-Bob Lee"),
            vec!["Jane Smith and CTO-Bob Lee"]
        );
    }

    #[test]
    fn test_separate_sentences_yield_separate_names() {
        assert_eq!(
            extract_executive_names("CEO - Jane Smith. The CFO Mark Twain. CTO:Ada Lovelace."),
            vec!["Jane Smith", "Mark Twain", "Ada Lovelace"]
        );
    }

    #[test]
    fn test_repeated_mentions_kept() {
        assert_eq!(
            extract_executive_names("CEO Jane Doe. Later, CEO Jane Doe."),
            vec!["Jane Doe", "Jane Doe"]
        );
    }

    #[test]
    fn test_over_capture_across_words() {
        assert_eq!(
            extract_executive_names("CEO John Smith said funding will be used to hire"),
            vec!["John Smith said funding will be used to hire"]
        );
    }

    #[test]
    fn test_case_sensitive_and_word_bounded() {
        assert!(extract_executive_names("the ceo Jane Doe").is_empty());
        assert!(extract_executive_names("XCEO Jane Doe").is_empty());
        assert!(extract_executive_names("CEO jane doe").is_empty());
        assert!(extract_executive_names("").is_empty());
    }
}
