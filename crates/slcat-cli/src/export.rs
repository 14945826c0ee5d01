//! File export of scraped records as JSON or CSV.

use std::fs;
use std::path::Path;

use anyhow::Context;
use clap::ValueEnum;
use serde::Serialize;
use slcat_core::CatalogRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Array of full records, `raw` payload included
    Json,
    /// `name,url,price,sale_price,image` columns only
    Csv,
}

const CSV_HEADER: [&str; 5] = ["name", "url", "price", "sale_price", "image"];

#[derive(Serialize)]
struct CsvRow<'a> {
    name: &'a str,
    url: &'a str,
    price: Option<f64>,
    sale_price: Option<f64>,
    image: Option<&'a str>,
}

impl<'a> From<&'a CatalogRecord> for CsvRow<'a> {
    fn from(record: &'a CatalogRecord) -> Self {
        Self {
            name: &record.name,
            url: &record.url,
            price: record.price,
            sale_price: record.sale_price,
            image: record.image.as_deref(),
        }
    }
}

/// Writes `records` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if a directory or the file cannot be created or written.
pub(crate) fn write_records(
    records: &[CatalogRecord],
    path: &Path,
    format: OutputFormat,
) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    let written = match format {
        OutputFormat::Json => export_json(records, path),
        OutputFormat::Csv => export_csv(records, path),
    };
    written.with_context(|| format!("failed to write {}", path.display()))
}

fn export_json(records: &[CatalogRecord], path: &Path) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)?;
    Ok(())
}

fn export_csv(records: &[CatalogRecord], path: &Path) -> anyhow::Result<()> {
    // Header is written by hand so an empty catalog still yields one.
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    wtr.write_record(CSV_HEADER)?;
    for record in records {
        wtr.serialize(CsvRow::from(record))?;
    }
    wtr.flush()?;
    Ok(())
}
