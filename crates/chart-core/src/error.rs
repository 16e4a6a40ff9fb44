// File: crates/chart-core/src/error.rs
// Summary: Typed errors for descriptor and dataset construction.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid color '{0}': expected #RGB, #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),
    #[error("invalid UTC offset '{0}': expected Z, UTC, +HH:MM or -HHMM")]
    InvalidOffset(String),
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("dataset must be a JSON array of records, found {0}")]
    NotAnArray(&'static str),
    #[error("record {index} must be a JSON object, found {found}")]
    NotAnObject { index: usize, found: &'static str },
}
