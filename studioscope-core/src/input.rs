use crate::record::Entity;
use anyhow::{Context, Result, bail};
use std::path::Path;
use tracing::info;

/// Read entities from a CSV file with a header row. `name` and `url`
/// columns are required and looked up case-insensitively; `notes` is
/// optional. Missing required columns abort the run before any network
/// action.
pub fn read_entities(path: impl AsRef<Path>) -> Result<Vec<Entity>> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to read input CSV {}", path.display()))?;

    let headers = reader.headers()?.clone();
    let find = |wanted: &str| {
        headers
            .iter()
            .position(|header| header.trim().eq_ignore_ascii_case(wanted))
    };
    let Some(name_idx) = find("name") else {
        bail!("input CSV must contain columns: name, url");
    };
    let Some(url_idx) = find("url") else {
        bail!("input CSV must contain columns: name, url");
    };
    let notes_idx = find("notes");

    let mut entities = Vec::new();
    for record in reader.records() {
        let record = record?;
        let name = record.get(name_idx).unwrap_or_default().trim().to_string();
        let url = record
            .get(url_idx)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string);
        let notes = notes_idx
            .and_then(|idx| record.get(idx))
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string);
        entities.push(Entity { name, url, notes });
    }

    info!("read {} entities from {}", entities.len(), path.display());
    Ok(entities)
}
