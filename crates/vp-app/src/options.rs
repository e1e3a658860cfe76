use vp_figure::Palette;

pub const DEFAULT_TITLE: &str = "violin plot";
pub const DEFAULT_PALETTE: Palette = Palette::Pastel;
pub const DEFAULT_SHOW_BOX: bool = true;
pub const DEFAULT_SHOW_POINTS: bool = true;

/// Shown on the canvas until the first generation.
pub const PLACEHOLDER_TEXT: &str = "Plot Area";

pub const DEFAULT_SAVE_EXTENSION: &str = "png";
pub const DEFAULT_SAVE_NAME: &str = "violin_plot.png";

/// Cosmetic choices read at generation time.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotOptions {
    pub title: String,
    pub palette: Palette,
    pub show_box: bool,
    pub show_points: bool,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            palette: DEFAULT_PALETTE,
            show_box: DEFAULT_SHOW_BOX,
            show_points: DEFAULT_SHOW_POINTS,
        }
    }
}

/// Chosen x (category) and y (value) column names; empty means unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub x: String,
    pub y: String,
}

impl Selection {
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.x.is_empty() && !self.y.is_empty()
    }
}
