use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand::rngs::StdRng;
use vp_data::{Dataset, read_csv_path};
use vp_figure::{Axes, ExportSettings, boxplot, save_figure, stripplot, violinplot};

use crate::error::{AppError, AppResult};
use crate::notice::Notice;
use crate::options::{DEFAULT_SAVE_EXTENSION, PLACEHOLDER_TEXT, PlotOptions, Selection};

/// What a successful load reports back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    pub file_name: String,
    pub rows: usize,
    pub columns: usize,
}

impl LoadSummary {
    pub fn notice(&self) -> Notice {
        Notice::info(format!("Loaded '{}'.", self.file_name))
    }
}

/// The window's state: dataset, selector contents, options and the one
/// figure.
///
/// The figure is created once and only ever cleared and redrawn.
pub struct Session {
    dataset: Option<Dataset>,
    columns: Vec<String>,
    pub selection: Selection,
    pub options: PlotOptions,
    axes: Axes,
    has_plot: bool,
    rng: StdRng,
    export: ExportSettings,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// A session whose point jitter is reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            dataset: None,
            columns: Vec::new(),
            selection: Selection::default(),
            options: PlotOptions::default(),
            axes: Axes::with_placeholder(PLACEHOLDER_TEXT),
            has_plot: false,
            rng,
            export: ExportSettings::default(),
        }
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    /// Choices offered by both column selectors.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn axes(&self) -> &Axes {
        &self.axes
    }

    /// True once a generation has succeeded; never reset.
    pub fn can_save(&self) -> bool {
        self.has_plot
    }

    /// Replaces the dataset with the parsed file.
    ///
    /// On failure the dataset is dropped and the selectors keep their
    /// previous contents.
    pub fn load_csv(&mut self, path: &Path) -> AppResult<LoadSummary> {
        let dataset = match read_csv_path(path) {
            Ok(dataset) => dataset,
            Err(err) => {
                self.dataset = None;
                tracing::debug!(path = %path.display(), error = %err, "load failed");
                return Err(err.into());
            }
        };

        self.columns = dataset.column_names();
        if let [x, y, ..] = self.columns.as_slice() {
            self.selection = Selection::new(x.clone(), y.clone());
        } else {
            // Unlike a two-column load, the old selection survives here, minus
            // any name the new file does not have.
            let columns = &self.columns;
            for field in [&mut self.selection.x, &mut self.selection.y] {
                if !columns.contains(field) {
                    field.clear();
                }
            }
        }

        let summary = LoadSummary {
            file_name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            rows: dataset.n_rows(),
            columns: dataset.n_columns(),
        };
        self.dataset = Some(dataset);
        tracing::debug!(?summary, "dataset loaded");
        Ok(summary)
    }

    /// Clears the axes and draws violins, then points, then boxes.
    ///
    /// Missing inputs abort before the axes are touched. A drawing failure
    /// leaves the axes as far as they got.
    pub fn generate(&mut self) -> AppResult<()> {
        let Some(data) = self.dataset.as_ref() else {
            return Err(AppError::NoDataset);
        };
        if !self.selection.is_complete() {
            return Err(AppError::NoSelection);
        }
        let x = self.selection.x.as_str();
        let y = self.selection.y.as_str();

        self.axes.clear();
        violinplot(&mut self.axes, data, x, y, self.options.palette)?;
        if self.options.show_points {
            stripplot(&mut self.axes, data, x, y, &mut self.rng)?;
        }
        if self.options.show_box {
            boxplot(&mut self.axes, data, x, y)?;
        }
        self.axes.set_title(self.options.title.clone());
        self.axes.set_xlabel(x);
        self.axes.set_ylabel(y);

        self.has_plot = true;
        tracing::debug!(x, y, layers = self.axes.layers().len(), "plot generated");
        Ok(())
    }

    /// Renders the current figure; returns the path actually written.
    pub fn save(&self, path: &Path) -> AppResult<PathBuf> {
        let path = resolve_save_path(path);
        save_figure(&self.axes, &path, &self.export)?;
        Ok(path)
    }
}

/// Appends the default extension when the chosen name has none.
pub fn resolve_save_path(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(DEFAULT_SAVE_EXTENSION)
    }
}
