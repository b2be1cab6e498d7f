/// Data layer: core types, loading, filtering and chart views.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → LaunchDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ LaunchDataset │  Vec<LaunchRecord>, payload min/max, sites
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  site / payload predicates → filtered indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   view    │  proportion + correlation chart descriptions
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod view;

use thiserror::Error;

/// Schema and validation failures while building a [`model::LaunchDataset`].
#[derive(Debug, Error)]
pub enum DataError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("column '{column}' has unsupported type {found}")]
    ColumnType { column: &'static str, found: String },
    #[error("row {row}: null value in column '{column}'")]
    NullValue { row: usize, column: &'static str },
    #[error("invalid outcome class {0}, expected 0 or 1")]
    InvalidOutcome(i64),
    #[error("row {row}: invalid payload mass {value}")]
    InvalidPayload { row: usize, value: f64 },
    #[error("dataset contains no launch records")]
    Empty,
}
