//! Output writers for extracted records.
//!
//! Both files are derived from the same in-memory record collection at the
//! end of a run:
//!
//! - [`json`]: pretty-printed JSON array of records, non-ASCII kept literal
//! - [`csv`]: one row per record with nested fields stringified as JSON
//!
//! Both writers accept an empty collection: the JSON file becomes `[]` and the
//! CSV file holds only its header row.
//!
//! # Output Structure
//!
//! ```text
//! extracted_data.json   # [ { "title": ..., "countryAddress": {...}, ... }, ... ]
//! extracted_data.csv    # title,link,countryAddress,fundingAmount,...
//! ```

pub mod csv;
pub mod json;
