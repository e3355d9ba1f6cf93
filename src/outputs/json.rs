//! JSON output.

use crate::models::ArticleRecord;
use crate::utils::ensure_parent_dir;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::error::Error;
use tokio::fs;
use tracing::{info, instrument};

/// Serialize records as a JSON array indented by four spaces.
///
/// Non-ASCII characters are written literally, not as `\u` escapes.
pub fn records_to_json(records: &[ArticleRecord]) -> Result<String, Box<dyn Error>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf)?)
}

/// Write records to `path`, creating its parent directory if needed.
#[instrument(level = "info", skip_all, fields(%path, count = records.len()))]
pub async fn write_records(records: &[ArticleRecord], path: &str) -> Result<(), Box<dyn Error>> {
    let json = records_to_json(records)?;
    ensure_parent_dir(path).await?;
    fs::write(path, json).await?;
    info!("Wrote JSON output");
    Ok(())
}
