//! Named-entity extraction.
//!
//! Entity recognition sits behind the [`EntityRecognizer`] trait. A recognizer
//! is expensive to build, so one instance is constructed at startup and shared
//! read-only through a [`SharedRecognizer`] handle for the whole run.
//!
//! # Categories
//!
//! | Category | Label | Used for |
//! |----------|-------|----------|
//! | [`EntityCategory::Organization`] | `ORG` | Company names in article titles |
//! | [`EntityCategory::Money`] | `MONEY` | Funding amounts in article bodies |
//! | [`EntityCategory::Date`] | `DATE` | Publication dates in article timestamps |
//!
//! The bundled recognizer is [`patterns::PatternRecognizer`].

pub mod patterns;

use std::fmt;
use std::sync::Arc;

pub use patterns::PatternRecognizer;

/// Semantic category of a recognized span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityCategory {
    Organization,
    Money,
    Date,
}

impl EntityCategory {
    pub fn label(self) -> &'static str {
        match self {
            EntityCategory::Organization => "ORG",
            EntityCategory::Money => "MONEY",
            EntityCategory::Date => "DATE",
        }
    }
}

impl fmt::Display for EntityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A span of text recognized as belonging to a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    /// Surface text exactly as it appears in the input.
    pub text: String,
    pub category: EntityCategory,
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
}

/// A named-entity recognizer.
///
/// Implementations report non-overlapping entities in the order they occur
/// in the text. They must be safe to share across threads for reading.
pub trait EntityRecognizer: Send + Sync {
    fn recognize(&self, text: &str) -> Vec<Entity>;
}

/// Long-lived, shared read-only recognizer handle.
pub type SharedRecognizer = Arc<dyn EntityRecognizer>;

/// Surface text of every entity of `category` in `text`, in recognizer order.
///
/// No normalization, filtering or deduplication is applied on top of the
/// recognizer's output.
pub fn extract_entities(
    recognizer: &dyn EntityRecognizer,
    text: &str,
    category: EntityCategory,
) -> Vec<String> {
    recognizer
        .recognize(text)
        .into_iter()
        .filter(|entity| entity.category == category)
        .map(|entity| entity.text)
        .collect()
}
