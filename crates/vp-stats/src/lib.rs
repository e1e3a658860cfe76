//! vp-stats: the statistics behind a violin plot.
//!
//! Contains:
//! - kde (Gaussian kernel density with Scott's bandwidth, violin support grid)
//! - summary (percentiles and box-and-whisker statistics)
//! - jitter (uniform horizontal offsets for strip plots)

pub mod jitter;
pub mod kde;
pub mod summary;

pub use jitter::jitter;
pub use kde::{DEFAULT_CUT, DEFAULT_GRIDSIZE, Density, GaussianKde, linspace, violin_density};
pub use summary::{BoxStats, WHISKER_IQR, percentile};

pub type StatsResult<T> = Result<T, StatsError>;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum StatsError {
    #[error("Empty sample")]
    Empty,

    #[error("Too few observations: need {needed}, got {got}")]
    TooFewObservations { needed: usize, got: usize },

    #[error("Sample has zero variance")]
    ZeroVariance,

    #[error("Non-finite observation: {value}")]
    NonFinite { value: f64 },
}

pub(crate) fn ensure_finite(sample: &[f64]) -> StatsResult<()> {
    match sample.iter().find(|v| !v.is_finite()) {
        Some(&value) => Err(StatsError::NonFinite { value }),
        None => Ok(()),
    }
}
