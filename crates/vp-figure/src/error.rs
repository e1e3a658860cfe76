use vp_data::DataError;
use vp_stats::StatsError;

pub type FigureResult<T> = Result<T, FigureError>;

#[derive(thiserror::Error, Debug)]
pub enum FigureError {
    #[error("{0}")]
    Data(#[from] DataError),

    #[error("Category '{category}': {source}")]
    Stats {
        category: String,
        #[source]
        source: StatsError,
    },
}

pub type ExportResult<T> = Result<T, ExportError>;

#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    #[error("Unsupported file format '{extension}' (supported: png, jpg, jpeg, svg, pdf)")]
    UnsupportedFormat { extension: String },

    #[error("Drawing failed: {0}")]
    Draw(String),

    #[error("PDF conversion failed: {0}")]
    Pdf(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
