//! Splitting listing excerpts into city and country.

use crate::models::Location;

/// Split a `"City, Country"` excerpt.
///
/// Parts are separated by literal commas and trimmed. The first part is the
/// city and the second the country; anything after the second comma is
/// ignored and missing parts become `""`.
pub fn split_location(excerpt: &str) -> Location {
    if excerpt.is_empty() {
        return Location::default();
    }
    let mut parts = excerpt.split(',').map(str::trim);
    let city = parts.next().unwrap_or_default().to_string();
    let country = parts.next().unwrap_or_default().to_string();
    Location { city, country }
}
