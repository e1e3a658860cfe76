//! vp-figure: the figure model and the plotting functions that fill it.
//!
//! A single [`Axes`] is cleared and redrawn on every generation. The
//! plotting functions append [`Layer`]s in call order, and both the
//! on-screen canvas and [`export::save_figure`] render the layers in
//! that order.

pub mod axes;
pub mod color;
pub mod error;
pub mod export;
pub mod grouping;
pub mod palette;
pub mod plots;
pub mod style;

pub use axes::{Axes, BoxGlyph, Boxes, Bounds, Layer, LayerKind, Strip, StripPoint, ViolinBody, Violins};
pub use color::Rgb;
pub use error::{ExportError, ExportResult, FigureError, FigureResult};
pub use export::{ExportFormat, ExportSettings, save_figure};
pub use grouping::{Grouped, group_by};
pub use palette::Palette;
pub use plots::{boxplot, stripplot, violinplot};
pub use style::{OVERLAY_COLOR, PlotStyle, font_family, set_font_family};
