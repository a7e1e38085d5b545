use crate::record::{Category, EnrichmentRecord};
use anyhow::{Context, Result};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::info;

const COLUMNS: [&str; 14] = [
    "name",
    "url",
    "resolved_url",
    "source_pages",
    "status",
    "about_text_excerpt",
    "text_length",
    "education_excerpt",
    "mentions_design",
    "mentions_art",
    "self_keywords",
    "category",
    "category_reason",
    "confidence_score",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "json" => Some(ExportFormat::Json),
            _ => None,
        }
    }
}

/// Write the result set. CSV output is partitioned into one file per
/// category (`<stem>_<category>.csv`); JSON is a single array. Returns
/// the paths written.
pub fn export_records(
    records: &[EnrichmentRecord],
    path: &Path,
    format: &ExportFormat,
) -> Result<Vec<PathBuf>> {
    match format {
        ExportFormat::Csv => export_csv(records, path),
        ExportFormat::Json => export_json(records, path),
    }
}

fn export_csv(records: &[EnrichmentRecord], path: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for category in Category::ALL {
        let target = category_path(path, category);
        let mut writer = csv::Writer::from_path(&target)
            .with_context(|| format!("failed to create {}", target.display()))?;
        writer.write_record(COLUMNS)?;
        for record in records.iter().filter(|r| r.category == category) {
            write_row(&mut writer, record)?;
        }
        writer.flush()?;
        written.push(target);
    }
    info!("wrote {} category files", written.len());
    Ok(written)
}

fn export_json(records: &[EnrichmentRecord], path: &Path) -> Result<Vec<PathBuf>> {
    let file = File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    serde_json::to_writer_pretty(file, records)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(vec![path.to_path_buf()])
}

fn write_row(writer: &mut csv::Writer<File>, record: &EnrichmentRecord) -> Result<()> {
    let text_length = record.text_length.to_string();
    let confidence = record.confidence_score.to_string();
    writer.write_record([
        record.name.as_str(),
        record.url.as_str(),
        record.resolved_url.as_str(),
        record.source_pages.as_str(),
        record.status.as_str(),
        record.about_text_excerpt.as_str(),
        text_length.as_str(),
        record.education_excerpt.as_str(),
        if record.mentions_design { "true" } else { "false" },
        if record.mentions_art { "true" } else { "false" },
        record.self_keywords.as_str(),
        record.category.as_str(),
        record.category_reason.as_str(),
        confidence.as_str(),
    ])?;
    Ok(())
}

/// `out.csv` becomes `out_Interdisciplinary.csv` and friends; the
/// category name is the partition key.
fn category_path(path: &Path, category: Category) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("enrichment");
    let file_name = format!("{}_{}.csv", stem, category.as_str());
    path.with_file_name(file_name)
}
