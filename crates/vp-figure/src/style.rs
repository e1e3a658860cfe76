use std::sync::OnceLock;

use crate::color::Rgb;

/// Color of the strip points and box overlays, independent of palette and theme.
pub const OVERLAY_COLOR: Rgb = Rgb::BLACK;

pub const DEFAULT_FONT_FAMILY: &str = "sans-serif";

static FONT_FAMILY: OnceLock<String> = OnceLock::new();

/// Sets the process-wide font family used for exported plot text.
///
/// Only the first call takes effect; returns whether this call set it.
pub fn set_font_family(name: impl Into<String>) -> bool {
    FONT_FAMILY.set(name.into()).is_ok()
}

pub fn font_family() -> &'static str {
    FONT_FAMILY
        .get()
        .map_or(DEFAULT_FONT_FAMILY, String::as_str)
}

/// Plot colors and text metrics. Sizes are in points.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotStyle {
    pub figure_bg: Rgb,
    pub axes_bg: Rgb,
    pub text: Rgb,
    pub edge: Rgb,
    pub edge_width: f64,
    pub show_grid: bool,
    pub grid: Rgb,
    pub grid_width: f64,
    pub grid_alpha: f64,
    pub title_color: Rgb,
    pub title_size: f64,
    pub title_pad: f64,
    pub label_size: f64,
    pub tick_size: f64,
    pub violin_edge: Rgb,
}

impl PlotStyle {
    /// Dark figure with a black title. Gridlines are styled but off, as in a
    /// "ticks" theme.
    pub const fn dark() -> Self {
        Self {
            figure_bg: Rgb::from_hex(0x1E1E1E),
            axes_bg: Rgb::from_hex(0x3C3C3C),
            text: Rgb::from_hex(0xE0E0E0),
            edge: Rgb::from_hex(0x666666),
            edge_width: 1.0,
            show_grid: false,
            grid: Rgb::from_hex(0x666666),
            grid_width: 0.5,
            grid_alpha: 0.5,
            title_color: Rgb::BLACK,
            title_size: 16.0,
            title_pad: 15.0,
            label_size: 12.0,
            tick_size: 10.0,
            violin_edge: Rgb::from_hex(0x424242),
        }
    }
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self::dark()
    }
}
