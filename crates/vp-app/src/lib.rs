//! Session state and user actions for the violin plotter.
//!
//! This crate holds everything the window does that is not drawing widgets:
//! loading a dataset, generating the figure, saving it, and turning
//! failures into notices the UI can show.

pub mod error;
pub mod notice;
pub mod options;
pub mod session;

pub use error::{AppError, AppResult, Severity};
pub use notice::Notice;
pub use options::{
    DEFAULT_PALETTE, DEFAULT_SAVE_NAME, DEFAULT_SHOW_BOX, DEFAULT_SHOW_POINTS, DEFAULT_TITLE,
    PLACEHOLDER_TEXT, PlotOptions, Selection,
};
pub use session::{LoadSummary, Session, resolve_save_path};
