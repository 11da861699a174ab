use super::types::Bike;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("No bike data loaded from {0}. Fix the catalog path and re-run.")]
    Empty(PathBuf),
}

/// Default catalog location, relative to the working directory
pub fn default_catalog_path() -> PathBuf {
    PathBuf::from("data").join("bikes_data.json")
}

/// Load the bike catalog from a JSON array file
///
/// Records that do not have the shape of a bike (not an object, or a text
/// field holding a number) are skipped with a warning. Incomplete records
/// are kept; the scoring engine excludes them per query.
pub fn load_catalog(path: &Path) -> Result<Vec<Bike>> {
    if !path.exists() {
        anyhow::bail!("Data file not found at: {}", path.display());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open catalog at {}", path.display()))?;

    let records: Vec<serde_json::Value> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse catalog: invalid JSON in {}", path.display()))?;

    let bikes: Vec<Bike> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(bike) => Some(bike),
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping malformed catalog record");
                None
            }
        })
        .collect();

    if bikes.is_empty() {
        return Err(CatalogError::Empty(path.to_path_buf()).into());
    }

    tracing::debug!(count = bikes.len(), path = %path.display(), "loaded catalog");
    Ok(bikes)
}
