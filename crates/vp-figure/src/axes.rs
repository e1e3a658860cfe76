use vp_stats::BoxStats;

use crate::color::Rgb;

/// One category's violin silhouette. `half_width[i]` is the horizontal
/// extent on each side of `position` at height `support[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ViolinBody {
    pub category: String,
    pub position: f64,
    pub support: Vec<f64>,
    pub half_width: Vec<f64>,
    pub fill: Rgb,
}

impl ViolinBody {
    /// A single support point, drawn as a horizontal bar.
    pub fn is_degenerate(&self) -> bool {
        self.support.len() == 1
    }

    /// Closed outline: up the right side, down the left side.
    pub fn outline(&self) -> Vec<[f64; 2]> {
        let right = self
            .support
            .iter()
            .zip(&self.half_width)
            .map(|(y, w)| [self.position + w, *y]);
        let left = self
            .support
            .iter()
            .zip(&self.half_width)
            .rev()
            .map(|(y, w)| [self.position - w, *y]);
        right.chain(left).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Violins {
    pub bodies: Vec<ViolinBody>,
    pub edge: Rgb,
    pub line_width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Strip {
    pub points: Vec<StripPoint>,
    pub color: Rgb,
    pub alpha: f32,
    /// Marker diameter in points.
    pub size: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoxGlyph {
    pub category: String,
    pub position: f64,
    pub stats: BoxStats,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Boxes {
    pub boxes: Vec<BoxGlyph>,
    pub width: f64,
    pub color: Rgb,
    pub line_width: f64,
    pub median_width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    Violins(Violins),
    Strip(Strip),
    Boxes(Boxes),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    Violins,
    Strip,
    Boxes,
}

impl Layer {
    pub fn kind(&self) -> LayerKind {
        match self {
            Layer::Violins(_) => LayerKind::Violins,
            Layer::Strip(_) => LayerKind::Strip,
            Layer::Boxes(_) => LayerKind::Boxes,
        }
    }

    fn extend_y(&self, lo: &mut f64, hi: &mut f64) {
        let mut take = |v: f64| {
            *lo = lo.min(v);
            *hi = hi.max(v);
        };
        match self {
            Layer::Violins(v) => v.bodies.iter().flat_map(|b| &b.support).for_each(|y| take(*y)),
            Layer::Strip(s) => s.points.iter().for_each(|p| take(p.y)),
            Layer::Boxes(b) => b.boxes.iter().for_each(|g| {
                take(g.stats.whisker_low);
                take(g.stats.whisker_high);
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

/// Vertical padding added to the data range, as a fraction of it.
const Y_MARGIN: f64 = 0.05;

/// The single plotting surface. Categories sit at x = 0, 1, 2, ...
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Axes {
    title: Option<String>,
    x_label: String,
    y_label: String,
    categories: Vec<String>,
    layers: Vec<Layer>,
    placeholder: Option<String>,
    revision: u64,
}

impl Axes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Axes showing a centered hint until the first `clear`.
    pub fn with_placeholder(text: impl Into<String>) -> Self {
        Self {
            placeholder: Some(text.into()),
            ..Self::default()
        }
    }

    /// Removes title, labels, categories, layers and placeholder.
    pub fn clear(&mut self) {
        self.title = None;
        self.x_label.clear();
        self.y_label.clear();
        self.categories.clear();
        self.layers.clear();
        self.placeholder = None;
        self.revision += 1;
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn set_xlabel(&mut self, label: impl Into<String>) {
        self.x_label = label.into();
    }

    pub fn set_ylabel(&mut self, label: impl Into<String>) {
        self.y_label = label.into();
    }

    /// The first categorical plot fixes the category axis.
    pub fn adopt_categories(&mut self, categories: &[String]) {
        if self.categories.is_empty() {
            self.categories = categories.to_vec();
        }
    }

    pub fn push_layer(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    pub fn y_label(&self) -> &str {
        &self.y_label
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer_kinds(&self) -> Vec<LayerKind> {
        self.layers.iter().map(Layer::kind).collect()
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    /// Bumped by every `clear`; the canvas resets its view when it changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// View limits: half a slot around the categories, data range plus margin.
    pub fn data_bounds(&self) -> Option<Bounds> {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for layer in &self.layers {
            layer.extend_y(&mut lo, &mut hi);
        }
        if !lo.is_finite() || !hi.is_finite() {
            return None;
        }

        let span = hi - lo;
        let pad = if span > 0.0 { span * Y_MARGIN } else { 0.5 };
        let slots = self.categories.len().max(1) as f64;
        Some(Bounds {
            x_min: -0.5,
            x_max: slots - 0.5,
            y_min: lo - pad,
            y_max: hi + pad,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(position: f64, support: Vec<f64>, half_width: Vec<f64>) -> ViolinBody {
        ViolinBody {
            category: "c".into(),
            position,
            support,
            half_width,
            fill: Rgb::WHITE,
        }
    }

    #[test]
    fn outline_is_mirrored() {
        let b = body(1.0, vec![0.0, 1.0, 2.0], vec![0.1, 0.4, 0.1]);
        let pts = b.outline();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0], [1.1, 0.0]);
        assert_eq!(pts[1], [1.4, 1.0]);
        assert_eq!(pts[3], [0.9, 2.0]);
        assert_eq!(pts[5], [0.9, 0.0]);
    }

    #[test]
    fn clear_resets_everything_and_bumps_revision() {
        let mut axes = Axes::with_placeholder("Plot Area");
        axes.set_title("t");
        axes.set_xlabel("x");
        axes.adopt_categories(&["a".to_string()]);
        axes.push_layer(Layer::Strip(Strip {
            points: vec![StripPoint { x: 0.0, y: 1.0 }],
            color: Rgb::BLACK,
            alpha: 0.6,
            size: 4.0,
        }));
        let rev = axes.revision();

        axes.clear();
        assert!(axes.is_empty());
        assert!(axes.title().is_none());
        assert!(axes.placeholder().is_none());
        assert!(axes.categories().is_empty());
        assert_eq!(axes.x_label(), "");
        assert_eq!(axes.revision(), rev + 1);
    }

    #[test]
    fn categories_are_adopted_once() {
        let mut axes = Axes::new();
        axes.adopt_categories(&["a".to_string(), "b".to_string()]);
        axes.adopt_categories(&["z".to_string()]);
        assert_eq!(axes.categories(), ["a", "b"]);
    }

    #[test]
    fn bounds_pad_the_data_range() {
        let mut axes = Axes::new();
        assert!(axes.data_bounds().is_none());

        axes.adopt_categories(&["a".to_string(), "b".to_string()]);
        axes.push_layer(Layer::Violins(Violins {
            bodies: vec![body(0.0, vec![0.0, 10.0], vec![0.1, 0.1])],
            edge: Rgb::BLACK,
            line_width: 1.5,
        }));
        let b = axes.data_bounds().unwrap();
        assert_eq!(b.x_min, -0.5);
        assert_eq!(b.x_max, 1.5);
        assert_eq!(b.y_min, -0.5);
        assert_eq!(b.y_max, 10.5);
    }
}
