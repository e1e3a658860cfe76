//! Error types for the session actions.

use vp_data::DataError;
use vp_figure::{ExportError, FigureError};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Load a CSV file first.")]
    NoDataset,

    #[error("Select columns for both the X axis and the Y axis.")]
    NoSelection,

    #[error("Failed to load the file:\n{0}")]
    Load(#[from] DataError),

    #[error("Failed to generate the plot:\n{0}")]
    Render(#[from] FigureError),

    #[error("Failed to save the file:\n{0}")]
    Save(#[from] ExportError),
}

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl AppError {
    /// Omissions the user can fix by filling in the form are warnings;
    /// I/O and drawing failures are errors.
    pub fn severity(&self) -> Severity {
        match self {
            AppError::NoDataset | AppError::NoSelection => Severity::Warning,
            AppError::Load(_) | AppError::Render(_) | AppError::Save(_) => Severity::Error,
        }
    }
}
