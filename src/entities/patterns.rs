//! Rule-based English entity recognizer for funding news.
//!
//! [`PatternRecognizer`] compiles its rules once and then recognizes:
//!
//! - **MONEY**: currency-symbol and currency-code amounts with an optional
//!   magnitude (`$5M`, `£1.2 million`, `EUR 3m`, `10 million euros`)
//! - **DATE**: month-name dates checked against the calendar (`March 3, 2024`,
//!   `3 March 2024`, `Mar 2024`), numeric dates (`2024-03-03`, `03/03/2024`),
//!   relative expressions (`yesterday`, `last week`) and bare years
//! - **ORG**: capitalized name runs ending in a corporate suffix
//!   (`Northzone Ventures`, `Acme Ltd`) or acting as the subject of a funding
//!   verb (`Acme Raises …`)
//!
//! Candidates from every rule are merged and overlaps are resolved by keeping
//! the earliest span, then the longest.
//!
//! Recognition is heuristic: names and amounts phrased outside these rules are
//! missed, so recall is well below that of a trained statistical model.

use super::{Entity, EntityCategory, EntityRecognizer};
use chrono::{Month, NaiveDate};
use regex::{Captures, Regex};
use std::error::Error;
use tracing::{debug, instrument};

const NUMBER: &str = r"\d+(?:[.,]\d+)*";
const MAGNITUDE: &str = r"(?:\s?(?i:trillion|billion|million|thousand|bn|mn|m|k|b)\b)?";
const CURRENCY_CODES: &str = "USD|EUR|GBP|CHF|CAD|AUD|SEK|NOK|DKK|INR|JPY";

/// Lowercase verbs that mark the preceding capitalized run as an organization.
const FUNDING_VERBS: &[&str] = &[
    "raises", "raised", "secures", "secured", "closes", "closed", "lands", "landed", "gets",
    "receives", "received", "announces", "announced", "completes", "completed", "bags", "nabs",
    "snags", "scores", "attracts", "obtains", "leads", "led", "acquires", "acquired", "launches",
    "expands", "unveils",
];

/// Capitalized words that never belong to an organization name.
const STOPWORDS: &[&str] = &[
    "a", "an", "the", "it", "this", "that", "we", "he", "she", "they", "and", "or", "of", "in",
    "on", "at", "to", "for", "from", "by", "with", "as", "its", "into", "over", "after", "new",
    "funding", "round", "seed", "pre-seed", "series", "million", "billion", "investment",
    "financing", "extension", "growth",
    "ceo", "cto", "cfo", "coo", "founder", "co-founder", "startup", "fintech", "uk", "us", "eu",
];

/// Final words that mark a capitalized run as a company name.
const CORPORATE_SUFFIXES: &[&str] = &[
    "inc", "ltd", "limited", "llc", "llp", "plc", "gmbh", "ag", "sa", "sas", "bv", "corp",
    "corporation", "co", "company", "group", "holdings", "capital", "ventures", "partners",
    "technologies", "labs", "bank", "fund", "investments", "foundation", "systems", "solutions",
    "software", "therapeutics", "health", "energy", "robotics", "ai",
];

/// Suffixes whose trailing period belongs to the name (`Acme Inc.`).
const ABBREVIATED_SUFFIXES: &[&str] = &["inc", "ltd", "co", "corp"];

#[derive(Debug, Clone, Copy)]
enum DateShape {
    /// Month, day and year live in named groups `month`/`mnum`, `day`, `year`.
    Calendar,
    /// `a/b/year` where either `a` or `b` may be the day.
    Slash,
    /// No calendar fields to check.
    Phrase,
}

/// Regex-driven recognizer for MONEY, DATE and ORG entities.
#[derive(Debug)]
pub struct PatternRecognizer {
    money: Vec<Regex>,
    dates: Vec<(Regex, DateShape)>,
    name_run: Regex,
    name_token: Regex,
    verb_after: Regex,
}

impl PatternRecognizer {
    /// Compile every rule. Called once per process.
    #[instrument(level = "info")]
    pub fn new() -> Result<Self, Box<dyn Error>> {
        let money = vec![
            Regex::new(&format!(
                r"(?:\b(?:US|NZ|HK|A|C|S))?[$€£¥₹]\s?{NUMBER}{MAGNITUDE}"
            ))?,
            Regex::new(&format!(r"\b(?:{CURRENCY_CODES})\s?{NUMBER}{MAGNITUDE}"))?,
            Regex::new(&format!(
                r"\b{NUMBER}(?:\s?(?i:trillion|billion|million|thousand|bn|mn|m|k))?\s?(?:{CURRENCY_CODES}|(?i:dollars|euros|pounds)(?:\s+sterling)?)\b"
            ))?,
        ];

        let month = r"(?P<month>[A-Z][a-z]{2,8})\.?";
        let ordinal = r"(?:st|nd|rd|th)?";
        let dates = vec![
            (
                Regex::new(&format!(
                    r"\b{month}\s+(?P<day>\d{{1,2}}){ordinal}(?:,?\s+(?P<year>\d{{4}}))?\b"
                ))?,
                DateShape::Calendar,
            ),
            (
                Regex::new(&format!(
                    r"\b(?P<day>\d{{1,2}}){ordinal}\s+{month}(?:,?\s+(?P<year>\d{{4}}))?\b"
                ))?,
                DateShape::Calendar,
            ),
            (
                Regex::new(&format!(r"\b{month},?\s+(?P<year>\d{{4}})\b"))?,
                DateShape::Calendar,
            ),
            (
                Regex::new(r"\b(?P<year>\d{4})-(?P<mnum>\d{1,2})-(?P<day>\d{1,2})\b")?,
                DateShape::Calendar,
            ),
            (
                Regex::new(r"\b(?P<a>\d{1,2})/(?P<b>\d{1,2})/(?P<year>\d{4})\b")?,
                DateShape::Slash,
            ),
            (
                Regex::new(
                    r"\b(?i:today|yesterday|tomorrow|(?:last|next|this)\s+(?:week|month|year|quarter))\b",
                )?,
                DateShape::Phrase,
            ),
            (Regex::new(r"\b(?:19|20)\d{2}\b")?, DateShape::Phrase),
        ];

        let token = r"[A-Z][\w&'’.\-]*";
        let name_run = Regex::new(&format!(r"{token}(?:\s+(?:&\s+)?{token})*"))?;
        let name_token = Regex::new(r"\S+")?;
        let verb_after = Regex::new(&format!(r"^\s+(?:{})\b", FUNDING_VERBS.join("|")))?;

        debug!(
            money_rules = money.len(),
            date_rules = dates.len(),
            "Compiled entity rules"
        );
        Ok(Self {
            money,
            dates,
            name_run,
            name_token,
            verb_after,
        })
    }

    fn push_money(&self, text: &str, out: &mut Vec<Entity>) {
        for rule in &self.money {
            for m in rule.find_iter(text) {
                out.push(span(text, m.start(), m.end(), EntityCategory::Money));
            }
        }
    }

    fn push_dates(&self, text: &str, out: &mut Vec<Entity>) {
        for (rule, shape) in &self.dates {
            for caps in rule.captures_iter(text) {
                if !is_calendar_valid(&caps, *shape) {
                    continue;
                }
                if let Some(m) = caps.get(0) {
                    out.push(span(text, m.start(), m.end(), EntityCategory::Date));
                }
            }
        }
    }

    fn push_organizations(&self, text: &str, out: &mut Vec<Entity>) {
        for run in self.name_run.find_iter(text) {
            let mut segment: Vec<(usize, usize)> = Vec::new();
            for token in self.name_token.find_iter(run.as_str()) {
                let start = run.start() + token.start();
                let end = run.start() + token.end();
                let word = bare_word(&text[start..end]).to_lowercase();
                if word == "&" {
                    if !segment.is_empty() {
                        segment.push((start, end));
                    }
                } else if STOPWORDS.contains(&word.as_str())
                    || FUNDING_VERBS.contains(&word.as_str())
                    || word.ends_with("-based")
                {
                    let followed_by_verb = FUNDING_VERBS.contains(&word.as_str());
                    close_segment(text, &mut segment, followed_by_verb, out);
                } else {
                    segment.push((start, end));
                }
            }
            let followed_by_verb = self.verb_after.is_match(&text[run.end()..]);
            close_segment(text, &mut segment, followed_by_verb, out);
        }
    }
}

impl EntityRecognizer for PatternRecognizer {
    fn recognize(&self, text: &str) -> Vec<Entity> {
        let mut found = Vec::new();
        self.push_money(text, &mut found);
        self.push_dates(text, &mut found);
        self.push_organizations(text, &mut found);
        resolve_overlaps(found)
    }
}

fn span(text: &str, start: usize, end: usize, category: EntityCategory) -> Entity {
    Entity {
        text: text[start..end].to_string(),
        category,
        start,
        end,
    }
}

/// Token text without trailing punctuation or possessive.
fn bare_word(token: &str) -> &str {
    let token = token.trim_end_matches(['.', ',', ';', ':']);
    token
        .strip_suffix("'s")
        .or_else(|| token.strip_suffix("’s"))
        .unwrap_or(token)
}

/// Emit the pending name segment as an organization if it qualifies, then clear it.
fn close_segment(
    text: &str,
    segment: &mut Vec<(usize, usize)>,
    followed_by_verb: bool,
    out: &mut Vec<Entity>,
) {
    while let Some(&(start, end)) = segment.last() {
        if &text[start..end] == "&" {
            segment.pop();
        } else {
            break;
        }
    }
    let (Some(&(start, _)), Some(&(last_start, last_end))) = (segment.first(), segment.last())
    else {
        return;
    };

    let last_token = &text[last_start..last_end];
    let last_word = bare_word(last_token);
    let lowered = last_word.to_lowercase();
    let has_suffix = segment.len() >= 2 && CORPORATE_SUFFIXES.contains(&lowered.as_str());

    if followed_by_verb || has_suffix {
        let keeps_period = ABBREVIATED_SUFFIXES.contains(&lowered.as_str())
            && last_token[last_word.len()..].starts_with('.');
        let end = last_start + last_word.len() + usize::from(keeps_period);
        out.push(span(text, start, end, EntityCategory::Organization));
    }
    segment.clear();
}

fn is_calendar_valid(caps: &Captures<'_>, shape: DateShape) -> bool {
    let year = caps
        .name("year")
        .and_then(|y| y.as_str().parse::<i32>().ok())
        .unwrap_or(2000);
    match shape {
        DateShape::Phrase => true,
        DateShape::Slash => {
            let a = caps.name("a").and_then(|m| m.as_str().parse::<u32>().ok());
            let b = caps.name("b").and_then(|m| m.as_str().parse::<u32>().ok());
            match (a, b) {
                (Some(a), Some(b)) => {
                    NaiveDate::from_ymd_opt(year, b, a).is_some()
                        || NaiveDate::from_ymd_opt(year, a, b).is_some()
                }
                _ => false,
            }
        }
        DateShape::Calendar => {
            let month = match (caps.name("month"), caps.name("mnum")) {
                (Some(name), _) => match month_name(name.as_str()).parse::<Month>() {
                    Ok(month) => month.number_from_month(),
                    Err(_) => return false,
                },
                (None, Some(num)) => num.as_str().parse().unwrap_or(0),
                (None, None) => return false,
            };
            match caps.name("day").and_then(|d| d.as_str().parse::<u32>().ok()) {
                Some(day) => NaiveDate::from_ymd_opt(year, month, day).is_some(),
                None => (1..=12).contains(&month),
            }
        }
    }
}

/// Month word in a form `chrono` parses; `Sept` is a common abbreviation it rejects.
fn month_name(word: &str) -> &str {
    if word == "Sept" { "Sep" } else { word }
}

/// Sort by position and drop spans that overlap an earlier (or longer) one.
fn resolve_overlaps(mut found: Vec<Entity>) -> Vec<Entity> {
    found.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));
    let mut kept: Vec<Entity> = Vec::with_capacity(found.len());
    let mut covered_to = 0;
    for entity in found {
        if entity.start >= covered_to {
            covered_to = entity.end;
            kept.push(entity);
        }
    }
    kept
}
