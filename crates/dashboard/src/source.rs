// File: crates/dashboard/src/source.rs
// Summary: Dataset sources (HTTP URL or local file) and the single-shot async load into a shared Dataset.

use std::fmt;
use std::path::{Path, PathBuf};

use chart_core::{Dataset, DatasetError, FieldValue, Record};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid source URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("Failed to fetch data (HTTP {0})")]
    Status(reqwest::StatusCode),
    #[error("Failed to fetch data: {0}")]
    Request(#[from] reqwest::Error),
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error("invalid CSV dataset: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Encoding {
    Json,
    Csv,
}

impl Encoding {
    fn from_name(name: &str) -> Self {
        let name = name.to_ascii_lowercase();
        if name.ends_with(".csv") {
            Encoding::Csv
        } else {
            Encoding::Json
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource {
    Http(reqwest::Url),
    File(PathBuf),
}

impl DataSource {
    /// `http://` and `https://` locations are fetched; anything else is a path.
    pub fn parse(location: &str) -> Result<Self, LoadError> {
        let lower = location.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            let url = reqwest::Url::parse(location).map_err(|e| LoadError::InvalidUrl {
                url: location.to_string(),
                reason: e.to_string(),
            })?;
            Ok(DataSource::Http(url))
        } else {
            Ok(DataSource::File(PathBuf::from(location)))
        }
    }

    fn encoding(&self) -> Encoding {
        match self {
            DataSource::Http(url) => Encoding::from_name(url.path()),
            DataSource::File(path) => Encoding::from_name(&path.to_string_lossy()),
        }
    }

    /// Fetch or read the whole document once and decode it. No retry.
    pub async fn load(&self) -> Result<Dataset, LoadError> {
        let bytes = match self {
            DataSource::Http(url) => fetch(url).await?,
            DataSource::File(path) => read(path).await?,
        };
        let dataset = match self.encoding() {
            Encoding::Json => Dataset::from_json_slice(&bytes)?,
            Encoding::Csv => parse_csv(&bytes)?,
        };
        info!(source = %self, rows = dataset.len(), "dataset loaded");
        Ok(dataset)
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Http(url) => write!(f, "{url}"),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

async fn fetch(url: &reqwest::Url) -> Result<Vec<u8>, LoadError> {
    debug!(%url, "GET");
    let response = reqwest::get(url.clone()).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status(status));
    }
    Ok(response.bytes().await?.to_vec())
}

async fn read(path: &Path) -> Result<Vec<u8>, LoadError> {
    debug!(path = %path.display(), "reading");
    tokio::fs::read(path).await.map_err(|source| LoadError::Io { path: path.to_path_buf(), source })
}

/// Header row names the fields. Empty cells are absent, numeric cells are
/// numbers and everything else is kept as text.
pub fn parse_csv(bytes: &[u8]) -> Result<Dataset, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(bytes);
    let headers = rdr.headers()?.clone();
    debug!(columns = headers.len(), "csv headers");

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row?;
        let record: Record = headers
            .iter()
            .zip(row.iter())
            .filter(|(_, cell)| !cell.is_empty())
            .map(|(name, cell)| (name.to_string(), cell_value(cell)))
            .collect();
        records.push(record);
    }
    Ok(Dataset::new(records))
}

fn cell_value(cell: &str) -> FieldValue {
    match cell.parse::<f64>() {
        Ok(v) if v.is_finite() => FieldValue::Number(v),
        _ => FieldValue::Text(cell.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_picks_http_or_file() {
        assert!(matches!(
            DataSource::parse("https://example.com/battery_data.json").unwrap(),
            DataSource::Http(_)
        ));
        assert_eq!(
            DataSource::parse("public/battery_data.json").unwrap(),
            DataSource::File(PathBuf::from("public/battery_data.json"))
        );
        assert!(matches!(DataSource::parse("http://"), Err(LoadError::InvalidUrl { .. })));
    }

    #[test]
    fn encoding_follows_extension() {
        assert_eq!(DataSource::parse("x/data.CSV").unwrap().encoding(), Encoding::Csv);
        assert_eq!(DataSource::parse("http://h/data.csv?x=1").unwrap().encoding(), Encoding::Csv);
        assert_eq!(DataSource::parse("x/data.json").unwrap().encoding(), Encoding::Json);
    }

    #[test]
    fn csv_cells_become_fields() {
        let data = parse_csv(b"TimeStamp,Speed,Gear\n2024-01-01T10:00:00Z, 42.5 ,D\n2024-01-01T10:00:40Z,,N\n").unwrap();
        assert_eq!(data.len(), 2);
        let first = data.get(0).unwrap();
        assert_eq!(first.number("Speed"), Some(42.5));
        assert_eq!(first.get("Gear"), Some(&FieldValue::Text("D".into())));
        let second = data.get(1).unwrap();
        assert!(!second.contains("Speed"));
        assert_eq!(second.len(), 2);
    }

    #[test]
    fn status_error_message() {
        let err = LoadError::Status(reqwest::StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Failed to fetch data (HTTP 404 Not Found)");
    }
}
