use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// One catalog row. Identity is the row's position in load order, stable
/// for the process lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogRecord {
    pub title: String,
    pub director: Option<String>,
    pub genres: String,
}

/// Raw CSV shape. Extra columns in the source file are ignored; empty cells
/// deserialize to `None` and are normalized here, once, so downstream code
/// never sees a missing-value sentinel.
#[derive(Debug, Deserialize)]
struct RawRow {
    title: Option<String>,
    director: Option<String>,
    #[serde(rename = "listed_in")]
    genres: Option<String>,
}

const REQUIRED_COLUMNS: &[&str] = &["title", "director", "listed_in"];

/// Load the catalog from a CSV file with headers. Missing file, unparsable
/// rows, or absent required columns are errors; callers treat them as fatal
/// at startup.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<CatalogRecord>> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open catalog at {}", path.display()))?;

    let headers = reader.headers()?.clone();
    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == *required) {
            bail!("catalog {} is missing required column '{required}'", path.display());
        }
    }

    let mut records = Vec::new();
    for (line, row) in reader.deserialize().enumerate() {
        let raw: RawRow = row
            .with_context(|| format!("malformed record {} in {}", line + 1, path.display()))?;
        records.push(CatalogRecord {
            title: raw.title.unwrap_or_default(),
            director: raw.director,
            genres: raw.genres.unwrap_or_default(),
        });
    }
    Ok(records)
}

/// Case-insensitive title lookup: lowercased title -> first row holding it.
/// Duplicate titles resolve to the first match; accepted ambiguity.
#[derive(Debug, Default)]
pub struct TitleIndex {
    rows: HashMap<String, usize>,
}

impl TitleIndex {
    pub fn build(records: &[CatalogRecord]) -> Self {
        let mut rows = HashMap::new();
        for (row, record) in records.iter().enumerate() {
            rows.entry(record.title.to_lowercase()).or_insert(row);
        }
        Self { rows }
    }

    pub fn get(&self, title: &str) -> Option<usize> {
        self.rows.get(&title.to_lowercase()).copied()
    }
}
