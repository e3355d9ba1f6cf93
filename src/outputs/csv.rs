//! CSV output.
//!
//! The header is fixed to the record's field names, so an empty collection
//! still produces a valid file. Structured fields (`countryAddress` and the
//! sequences) are written as compact JSON in a single cell; an absent
//! `articleDate` is an empty cell.

use crate::models::ArticleRecord;
use crate::utils::ensure_parent_dir;
use ::csv::Writer;
use std::error::Error;
use tokio::fs;
use tracing::{info, instrument};

fn record_row(record: &ArticleRecord) -> Result<[String; 7], serde_json::Error> {
    Ok([
        record.title.clone(),
        record.link.clone(),
        serde_json::to_string(&record.country_address)?,
        serde_json::to_string(&record.funding_amount)?,
        serde_json::to_string(&record.ceo_cto_cfo_name)?,
        record.article_date.clone().unwrap_or_default(),
        serde_json::to_string(&record.entity_name)?,
    ])
}

/// Render records as CSV text, header first.
pub fn records_to_csv(records: &[ArticleRecord]) -> Result<String, Box<dyn Error>> {
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(ArticleRecord::FIELD_NAMES)?;
    for record in records {
        writer.write_record(record_row(record)?)?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

/// Write records to `path`, creating its parent directory if needed.
#[instrument(level = "info", skip_all, fields(%path, count = records.len()))]
pub async fn write_records(records: &[ArticleRecord], path: &str) -> Result<(), Box<dyn Error>> {
    let csv = records_to_csv(records)?;
    ensure_parent_dir(path).await?;
    fs::write(path, csv).await?;
    info!("Wrote CSV output");
    Ok(())
}
