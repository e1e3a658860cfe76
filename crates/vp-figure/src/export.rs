//! Rendering the figure to a file with `plotters`.
//!
//! Raster and SVG files come straight from the plotters backends. PDF is the
//! SVG rendering converted with `svg2pdf`.

use std::fmt::Display;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use svg2pdf::usvg;

use crate::axes::{Axes, Bounds, Layer};
use crate::color::Rgb;
use crate::error::{ExportError, ExportResult};
use crate::style::{PlotStyle, font_family};

pub const FIGURE_SIZE_IN: (f64, f64) = (7.0, 6.0);
pub const EXPORT_DPI: f64 = 300.0;
/// Margin kept around the content, in inches.
pub const TIGHT_PAD_IN: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Jpeg,
    Svg,
    Pdf,
}

impl ExportFormat {
    pub const EXTENSIONS: [&'static str; 5] = ["png", "jpg", "jpeg", "svg", "pdf"];

    /// Picks the format from the file extension, case-insensitively.
    pub fn from_path(path: &Path) -> ExportResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "png" => Ok(ExportFormat::Png),
            "jpg" | "jpeg" => Ok(ExportFormat::Jpeg),
            "svg" => Ok(ExportFormat::Svg),
            "pdf" => Ok(ExportFormat::Pdf),
            _ => Err(ExportError::UnsupportedFormat { extension: ext }),
        }
    }

    pub fn is_vector(self) -> bool {
        matches!(self, ExportFormat::Svg | ExportFormat::Pdf)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportSettings {
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: f64,
    pub pad_in: f64,
    pub style: PlotStyle,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            width_in: FIGURE_SIZE_IN.0,
            height_in: FIGURE_SIZE_IN.1,
            dpi: EXPORT_DPI,
            pad_in: TIGHT_PAD_IN,
            style: PlotStyle::dark(),
        }
    }
}

impl ExportSettings {
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            (self.width_in * self.dpi).round() as u32,
            (self.height_in * self.dpi).round() as u32,
        )
    }

    pub fn points_to_px(&self, pt: f64) -> f64 {
        pt * self.dpi / 72.0
    }
}

/// Writes the figure to `path`; the extension selects the format.
pub fn save_figure(axes: &Axes, path: &Path, settings: &ExportSettings) -> ExportResult<()> {
    let format = ExportFormat::from_path(path)?;
    let size = settings.pixel_size();

    match format {
        ExportFormat::Png | ExportFormat::Jpeg => {
            let root = BitMapBackend::new(path, size).into_drawing_area();
            render(&root, axes, settings)?;
        }
        ExportFormat::Svg => {
            let root = SVGBackend::new(path, size).into_drawing_area();
            render(&root, axes, settings)?;
        }
        ExportFormat::Pdf => {
            let mut svg = String::new();
            {
                let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
                render(&root, axes, settings)?;
            }
            let pdf = svg_to_pdf(&svg, settings.dpi)?;
            std::fs::write(path, pdf)?;
        }
    }

    tracing::debug!(path = %path.display(), ?format, width = size.0, height = size.1, "figure saved");
    Ok(())
}

/// Converts an SVG document to a one-page PDF. Pixels map to `dpi` so the
/// page keeps the figure's physical size.
fn svg_to_pdf(svg: &str, dpi: f64) -> ExportResult<Vec<u8>> {
    let mut options = usvg::Options::default();
    options.font_family = font_family().to_string();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &options).map_err(|e| ExportError::Pdf(e.to_string()))?;
    let page = svg2pdf::PageOptions { dpi: dpi as f32 };
    svg2pdf::to_pdf(&tree, svg2pdf::ConversionOptions::default(), page)
        .map_err(|e| ExportError::Pdf(e.to_string()))
}

fn draw_err<E: Display>(err: E) -> ExportError {
    ExportError::Draw(err.to_string())
}

fn rgb(c: Rgb) -> RGBColor {
    RGBColor(c.r, c.g, c.b)
}

fn render<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    axes: &Axes,
    settings: &ExportSettings,
) -> ExportResult<()> {
    let style = &settings.style;
    let px = |pt: f64| settings.points_to_px(pt);
    let family = font_family();
    let text_color = rgb(style.text);

    root.fill(&rgb(style.figure_bg)).map_err(draw_err)?;
    let pad = (settings.pad_in * settings.dpi).round() as i32;
    let inner = root.margin(pad, pad, pad, pad);

    let plot_area = match axes.title() {
        Some(title) => {
            let (w, _) = inner.dim_in_pixel();
            let font = (family, px(style.title_size))
                .into_font()
                .color(&rgb(style.title_color))
                .pos(Pos::new(HPos::Center, VPos::Top));
            inner
                .draw(&Text::new(title.to_string(), ((w / 2) as i32, 0), font))
                .map_err(draw_err)?;
            let (_, rest) = inner.split_vertically(px(style.title_size + style.title_pad).round() as i32);
            rest
        }
        None => inner,
    };

    let slots = axes.categories().len().max(1) as f64;
    let bounds = axes.data_bounds().unwrap_or(Bounds {
        x_min: -0.5,
        x_max: slots - 0.5,
        y_min: 0.0,
        y_max: 1.0,
    });

    let tick_px = px(style.tick_size);
    let label_px = px(style.label_size);
    let mut chart = ChartBuilder::on(&plot_area)
        .x_label_area_size((1.8 * (tick_px + label_px)) as u32)
        .y_label_area_size((4.0 * tick_px + 1.8 * label_px) as u32)
        .build_cartesian_2d(bounds.x_min..bounds.x_max, bounds.y_min..bounds.y_max)
        .map_err(draw_err)?;

    chart
        .plotting_area()
        .fill(&rgb(style.axes_bg))
        .map_err(draw_err)?;

    let axis_line = rgb(style.edge).stroke_width(px(style.edge_width).round().max(1.0) as u32);
    let mut mesh = chart.configure_mesh();
    mesh.disable_x_mesh()
        .x_labels(0)
        .y_labels(8)
        .x_desc(axes.x_label())
        .y_desc(axes.y_label())
        .axis_style(axis_line)
        .label_style((family, tick_px).into_font().color(&text_color))
        .axis_desc_style((family, label_px).into_font().color(&text_color));
    if style.show_grid {
        let grid = rgb(style.grid)
            .mix(style.grid_alpha)
            .stroke_width(px(style.grid_width).round().max(1.0) as u32);
        mesh.bold_line_style(grid).light_line_style(TRANSPARENT);
    } else {
        mesh.disable_y_mesh();
    }
    mesh.draw().map_err(draw_err)?;

    // Category names under each slot, placed in backend pixels.
    let tick_len = px(3.5).round() as i32;
    let tick_font = (family, tick_px)
        .into_font()
        .color(&text_color)
        .pos(Pos::new(HPos::Center, VPos::Top));
    for (i, name) in axes.categories().iter().enumerate() {
        let (cx, cy) = chart.backend_coord(&(i as f64, bounds.y_min));
        root.draw(&PathElement::new(vec![(cx, cy), (cx, cy + tick_len)], axis_line))
            .map_err(draw_err)?;
        root.draw(&Text::new(name.clone(), (cx, cy + 2 * tick_len), tick_font.clone()))
            .map_err(draw_err)?;
    }

    for layer in axes.layers() {
        match layer {
            Layer::Violins(v) => {
                let outline = rgb(v.edge).stroke_width(px(v.line_width).round() as u32);
                for body in &v.bodies {
                    let pts: Vec<(f64, f64)> = body.outline().iter().map(|p| (p[0], p[1])).collect();
                    if body.is_degenerate() {
                        chart
                            .draw_series(std::iter::once(PathElement::new(pts, outline)))
                            .map_err(draw_err)?;
                        continue;
                    }
                    chart
                        .draw_series(std::iter::once(Polygon::new(pts.clone(), rgb(body.fill).filled())))
                        .map_err(draw_err)?;
                    let mut closed = pts;
                    closed.push(closed[0]);
                    chart
                        .draw_series(std::iter::once(PathElement::new(closed, outline)))
                        .map_err(draw_err)?;
                }
            }
            Layer::Strip(s) => {
                let radius = (px(s.size) / 2.0).round().max(1.0) as i32;
                let marker = rgb(s.color).mix(s.alpha as f64).filled();
                chart
                    .draw_series(s.points.iter().map(|p| Circle::new((p.x, p.y), radius, marker)))
                    .map_err(draw_err)?;
            }
            Layer::Boxes(b) => {
                let line = rgb(b.color).stroke_width(px(b.line_width).round() as u32);
                let median = rgb(b.color).stroke_width(px(b.median_width).round() as u32);
                let half = b.width / 2.0;
                let cap = b.width / 4.0;
                for glyph in &b.boxes {
                    let x = glyph.position;
                    let s = &glyph.stats;
                    chart
                        .draw_series([
                            PathElement::new(vec![(x, s.q3), (x, s.whisker_high)], line),
                            PathElement::new(vec![(x, s.q1), (x, s.whisker_low)], line),
                            PathElement::new(vec![(x - cap, s.whisker_high), (x + cap, s.whisker_high)], line),
                            PathElement::new(vec![(x - cap, s.whisker_low), (x + cap, s.whisker_low)], line),
                        ])
                        .map_err(draw_err)?;
                    chart
                        .draw_series(std::iter::once(Rectangle::new(
                            [(x - half, s.q1), (x + half, s.q3)],
                            line,
                        )))
                        .map_err(draw_err)?;
                    chart
                        .draw_series(std::iter::once(PathElement::new(
                            vec![(x - half, s.median), (x + half, s.median)],
                            median,
                        )))
                        .map_err(draw_err)?;
                }
            }
        }
    }

    if let Some(text) = axes.placeholder() {
        let center = (
            (bounds.x_min + bounds.x_max) / 2.0,
            (bounds.y_min + bounds.y_max) / 2.0,
        );
        let (cx, cy) = chart.backend_coord(&center);
        let font = (family, px(14.0))
            .into_font()
            .color(&text_color)
            .pos(Pos::new(HPos::Center, VPos::Center));
        root.draw(&Text::new(text.to_string(), (cx, cy), font))
            .map_err(draw_err)?;
    }

    root.present().map_err(draw_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension() {
        assert_eq!(ExportFormat::from_path(Path::new("a.png")).unwrap(), ExportFormat::Png);
        assert_eq!(ExportFormat::from_path(Path::new("a.JPG")).unwrap(), ExportFormat::Jpeg);
        assert_eq!(ExportFormat::from_path(Path::new("a.jpeg")).unwrap(), ExportFormat::Jpeg);
        assert!(ExportFormat::from_path(Path::new("a.svg")).unwrap().is_vector());
        assert_eq!(ExportFormat::from_path(Path::new("a.PDF")).unwrap(), ExportFormat::Pdf);
        assert!(ExportFormat::Pdf.is_vector());
        assert!(matches!(
            ExportFormat::from_path(Path::new("a.tiff")),
            Err(ExportError::UnsupportedFormat { extension }) if extension == "tiff"
        ));
        assert!(ExportFormat::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn default_size_is_high_resolution() {
        let s = ExportSettings::default();
        assert_eq!(s.pixel_size(), (2100, 1800));
        assert_eq!(s.points_to_px(72.0), 300.0);
    }
}
