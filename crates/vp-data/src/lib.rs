//! vp-data: tabular datasets loaded from CSV.
//!
//! Contains:
//! - dataset (ordered named columns, row-aligned text cells)
//! - csv_io (reader with header normalization)
//! - missing (missing-value tokens and numeric coercion)

pub mod csv_io;
pub mod dataset;
pub mod missing;

pub use csv_io::{read_csv, read_csv_path};
pub use dataset::{Column, Dataset};
pub use missing::{is_missing, parse_number};

pub type DataResult<T> = Result<T, DataError>;

#[derive(thiserror::Error, Debug)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("No columns to parse from file")]
    Empty,

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Column '{column}' is not numeric (row {row}: {value:?})")]
    NotNumeric {
        column: String,
        row: usize,
        value: String,
    },
}
