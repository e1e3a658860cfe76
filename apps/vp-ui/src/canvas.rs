use egui::{Color32, RichText, Stroke};
use egui_plot::{GridMark, Line, Plot, PlotPoint, PlotPoints, PlotUi, Points, Polygon, Text};
use vp_figure::{Axes, Boxes, Layer, PlotStyle, Strip, ViolinBody, Violins};

use crate::theme::{self, color};

/// The on-screen figure: a toolbar over an interactive plot of the axes.
pub struct PlotSurface {
    style: PlotStyle,
    pan: bool,
    zoom: bool,
    seen_revision: Option<u64>,
    reset_requested: bool,
}

impl Default for PlotSurface {
    fn default() -> Self {
        Self {
            style: PlotStyle::dark(),
            pan: true,
            zoom: true,
            seen_revision: None,
            reset_requested: false,
        }
    }
}

impl PlotSurface {
    pub fn show(&mut self, ui: &mut egui::Ui, axes: &Axes) {
        self.toolbar(ui);

        let reset = self.take_reset(axes.revision());

        if let Some(title) = axes.title() {
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(title)
                        .size(self.style.title_size as f32)
                        .color(color(self.style.title_color)),
                );
            });
            ui.add_space(self.style.title_pad as f32);
        }

        let categories = axes.categories().to_vec();
        let mut plot = Plot::new("violin_canvas")
            .x_axis_label(axes.x_label())
            .y_axis_label(axes.y_label())
            .x_axis_formatter(move |mark: GridMark, _range| category_label(&categories, mark.value))
            .x_grid_spacer(egui_plot::uniform_grid_spacer(|_| [1.0, 1.0, 1.0]))
            .show_grid(self.style.show_grid)
            .show_background(false)
            .allow_drag(self.pan)
            .allow_zoom(self.zoom)
            .allow_scroll(self.zoom)
            .allow_boxed_zoom(self.zoom);

        if let Some(b) = axes.data_bounds() {
            plot = plot
                .include_x(b.x_min)
                .include_x(b.x_max)
                .include_y(b.y_min)
                .include_y(b.y_max);
        } else {
            plot = plot.include_x(-0.5).include_x(0.5).include_y(0.0).include_y(1.0);
        }
        if reset {
            plot = plot.reset();
        }

        egui::Frame::none()
            .fill(color(self.style.axes_bg))
            .stroke(Stroke::new(self.style.edge_width as f32, color(self.style.edge)))
            .show(ui, |ui| {
                plot.show(ui, |plot_ui| {
                    for layer in axes.layers() {
                        match layer {
                            Layer::Violins(v) => draw_violins(plot_ui, v),
                            Layer::Strip(s) => draw_strip(plot_ui, s),
                            Layer::Boxes(b) => draw_boxes(plot_ui, b),
                        }
                    }
                    if let Some(text) = axes.placeholder() {
                        plot_ui.text(Text::new(
                            PlotPoint::new(0.0, 0.5),
                            RichText::new(text).size(14.0).color(theme::TEXT),
                        ));
                    }
                });
            });
    }

    fn toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("⌂ Home").on_hover_text("Reset view").clicked() {
                self.reset_requested = true;
            }
            ui.separator();
            ui.toggle_value(&mut self.pan, "✋ Pan");
            ui.toggle_value(&mut self.zoom, "🔍 Zoom");
        });
    }

    /// True when the view should snap back to the data: on request, or
    /// when the figure was redrawn since the last frame.
    fn take_reset(&mut self, revision: u64) -> bool {
        let redrawn = self.seen_revision.is_some_and(|seen| seen != revision);
        self.seen_revision = Some(revision);
        std::mem::take(&mut self.reset_requested) || redrawn
    }
}

/// Tick text for an x grid mark: the category at that slot, else nothing.
pub fn category_label(categories: &[String], value: f64) -> String {
    let slot = value.round();
    if (value - slot).abs() > 1e-6 || slot < 0.0 {
        return String::new();
    }
    categories.get(slot as usize).cloned().unwrap_or_default()
}

/// Splits a violin into convex trapezoids between neighboring support points.
pub fn violin_strips(body: &ViolinBody) -> Vec<[[f64; 2]; 4]> {
    let x = body.position;
    body.support
        .windows(2)
        .zip(body.half_width.windows(2))
        .map(|(y, w)| {
            [
                [x - w[0], y[0]],
                [x + w[0], y[0]],
                [x + w[1], y[1]],
                [x - w[1], y[1]],
            ]
        })
        .collect()
}

fn draw_violins(plot_ui: &mut PlotUi, violins: &Violins) {
    let edge = Stroke::new(violins.line_width as f32, color(violins.edge));
    for body in &violins.bodies {
        if !body.is_degenerate() {
            let fill = color(body.fill);
            for quad in violin_strips(body) {
                plot_ui.polygon(
                    Polygon::new(PlotPoints::from(quad.to_vec()))
                        .fill_color(fill)
                        .stroke(Stroke::new(0.5, fill)),
                );
            }
        }
        let mut outline = body.outline();
        if let Some(first) = outline.first().copied() {
            outline.push(first);
        }
        plot_ui.line(
            Line::new(PlotPoints::from(outline))
                .color(edge.color)
                .width(edge.width)
                .name(&body.category),
        );
    }
}

fn draw_strip(plot_ui: &mut PlotUi, strip: &Strip) {
    let points: Vec<[f64; 2]> = strip.points.iter().map(|p| [p.x, p.y]).collect();
    plot_ui.points(
        Points::new(PlotPoints::from(points))
            .radius((strip.size / 2.0) as f32)
            .filled(true)
            .color(color(strip.color).gamma_multiply(strip.alpha)),
    );
}

fn draw_boxes(plot_ui: &mut PlotUi, boxes: &Boxes) {
    let line_color: Color32 = color(boxes.color);
    let half = boxes.width / 2.0;
    let cap = boxes.width / 4.0;
    let segment = |plot_ui: &mut PlotUi, pts: Vec<[f64; 2]>, width: f64| {
        plot_ui.line(
            Line::new(PlotPoints::from(pts))
                .color(line_color)
                .width(width as f32),
        );
    };

    for glyph in &boxes.boxes {
        let x = glyph.position;
        let s = &glyph.stats;
        let w = boxes.line_width;
        segment(
            plot_ui,
            vec![
                [x - half, s.q1],
                [x + half, s.q1],
                [x + half, s.q3],
                [x - half, s.q3],
                [x - half, s.q1],
            ],
            w,
        );
        segment(plot_ui, vec![[x, s.q3], [x, s.whisker_high]], w);
        segment(plot_ui, vec![[x, s.q1], [x, s.whisker_low]], w);
        segment(plot_ui, vec![[x - cap, s.whisker_high], [x + cap, s.whisker_high]], w);
        segment(plot_ui, vec![[x - cap, s.whisker_low], [x + cap, s.whisker_low]], w);
        segment(plot_ui, vec![[x - half, s.median], [x + half, s.median]], boxes.median_width);
    }
}
