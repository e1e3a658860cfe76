//! Violin, strip and box plotting onto an [`Axes`].
//!
//! Each function groups the data itself, adopts the category axis if it is
//! still empty, and appends exactly one layer.

use rand::Rng;
use vp_data::Dataset;
use vp_stats::{BoxStats, DEFAULT_CUT, DEFAULT_GRIDSIZE, jitter, violin_density};

use crate::axes::{Axes, BoxGlyph, Boxes, Layer, Strip, StripPoint, ViolinBody, Violins};
use crate::error::{FigureError, FigureResult};
use crate::grouping::group_by;
use crate::palette::Palette;
use crate::style::{OVERLAY_COLOR, PlotStyle};

/// Width of a category slot occupied by a violin or box.
pub const VIOLIN_WIDTH: f64 = 0.8;
pub const VIOLIN_SATURATION: f64 = 0.75;
pub const VIOLIN_LINE_WIDTH: f64 = 1.5;

pub const JITTER_HALF_WIDTH: f64 = 0.1 * VIOLIN_WIDTH;
pub const STRIP_ALPHA: f32 = 0.6;
pub const STRIP_SIZE: f64 = 4.0;

pub const BOX_WIDTH: f64 = 0.8;
pub const BOX_LINE_WIDTH: f64 = 1.5;
pub const MEDIAN_LINE_WIDTH: f64 = 2.0;

/// Draws one violin per category with no inner marks.
///
/// Densities share one scale across categories, so the widest point of
/// the tallest peak spans the full slot width.
pub fn violinplot(
    axes: &mut Axes,
    data: &Dataset,
    x: &str,
    y: &str,
    palette: Palette,
) -> FigureResult<()> {
    let grouped = group_by(data, x, y)?;
    let colors = palette.colors(grouped.categories.len());

    let mut densities = Vec::new();
    for (i, category, sample) in grouped.iter() {
        if sample.is_empty() {
            continue;
        }
        let density = violin_density(sample, DEFAULT_GRIDSIZE, DEFAULT_CUT).map_err(|source| {
            FigureError::Stats {
                category: category.to_string(),
                source,
            }
        })?;
        densities.push((i, category, density));
    }

    let peak = densities
        .iter()
        .filter(|(_, _, d)| !d.is_degenerate())
        .map(|(_, _, d)| d.max())
        .fold(0.0, f64::max);

    let half = VIOLIN_WIDTH / 2.0;
    let bodies = densities
        .into_iter()
        .map(|(i, category, d)| {
            let half_width = if d.is_degenerate() || peak <= 0.0 {
                vec![half; d.support.len()]
            } else {
                d.density.iter().map(|v| v / peak * half).collect()
            };
            ViolinBody {
                category: category.to_string(),
                position: i as f64,
                support: d.support,
                half_width,
                fill: colors[i].desaturate(VIOLIN_SATURATION),
            }
        })
        .collect();

    tracing::debug!(x, y, palette = %palette, "violinplot");
    axes.adopt_categories(&grouped.categories);
    axes.push_layer(Layer::Violins(Violins {
        bodies,
        edge: PlotStyle::dark().violin_edge,
        line_width: VIOLIN_LINE_WIDTH,
    }));
    Ok(())
}

/// Draws every observation as a point jittered horizontally within its slot.
pub fn stripplot<R: Rng + ?Sized>(
    axes: &mut Axes,
    data: &Dataset,
    x: &str,
    y: &str,
    rng: &mut R,
) -> FigureResult<()> {
    let grouped = group_by(data, x, y)?;

    let mut points = Vec::new();
    for (i, _, sample) in grouped.iter() {
        let offsets = jitter(sample.len(), JITTER_HALF_WIDTH, rng);
        points.extend(sample.iter().zip(offsets).map(|(y, dx)| StripPoint {
            x: i as f64 + dx,
            y: *y,
        }));
    }

    tracing::debug!(x, y, points = points.len(), "stripplot");
    axes.adopt_categories(&grouped.categories);
    axes.push_layer(Layer::Strip(Strip {
        points,
        color: OVERLAY_COLOR,
        alpha: STRIP_ALPHA,
        size: STRIP_SIZE,
    }));
    Ok(())
}

/// Draws an unfilled box with median and whiskers per category, without
/// outlier markers.
pub fn boxplot(axes: &mut Axes, data: &Dataset, x: &str, y: &str) -> FigureResult<()> {
    let grouped = group_by(data, x, y)?;

    let mut boxes = Vec::new();
    for (i, category, sample) in grouped.iter() {
        if sample.is_empty() {
            continue;
        }
        let stats = BoxStats::from_sample(sample).map_err(|source| FigureError::Stats {
            category: category.to_string(),
            source,
        })?;
        boxes.push(BoxGlyph {
            category: category.to_string(),
            position: i as f64,
            stats,
        });
    }

    tracing::debug!(x, y, boxes = boxes.len(), "boxplot");
    axes.adopt_categories(&grouped.categories);
    axes.push_layer(Layer::Boxes(Boxes {
        boxes,
        width: BOX_WIDTH,
        color: OVERLAY_COLOR,
        line_width: BOX_LINE_WIDTH,
        median_width: MEDIAN_LINE_WIDTH,
    }));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axes::LayerKind;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use vp_data::read_csv;

    fn sample() -> Dataset {
        read_csv("cat,val\nx,1\nx,3\ny,5\n".as_bytes()).unwrap()
    }

    #[test]
    fn violins_share_one_density_scale() {
        let ds = read_csv("g,v\na,1\na,2\na,3\nb,1\nb,5\nb,9\n".as_bytes()).unwrap();
        let mut axes = Axes::new();
        violinplot(&mut axes, &ds, "g", "v", Palette::Deep).unwrap();

        let Layer::Violins(v) = &axes.layers()[0] else {
            panic!("expected violins");
        };
        let widest = |b: &ViolinBody| b.half_width.iter().copied().fold(0.0, f64::max);
        let a = widest(&v.bodies[0]);
        let b = widest(&v.bodies[1]);
        assert!((a.max(b) - VIOLIN_WIDTH / 2.0).abs() < 1e-12);
        // the tighter group peaks higher
        assert!(a > b);
    }

    #[test]
    fn violin_fill_follows_palette() {
        let mut axes = Axes::new();
        violinplot(&mut axes, &sample(), "cat", "val", Palette::Deep).unwrap();
        let Layer::Violins(v) = &axes.layers()[0] else {
            panic!("expected violins");
        };
        let expected = Palette::Deep.colors(2);
        assert_eq!(v.bodies[0].fill, expected[0].desaturate(VIOLIN_SATURATION));
        assert_eq!(v.bodies[1].fill, expected[1].desaturate(VIOLIN_SATURATION));
        assert!(v.bodies[1].is_degenerate());
        assert_eq!(v.bodies[1].support, vec![5.0]);
    }

    #[test]
    fn strip_points_stay_in_their_slot() {
        let mut axes = Axes::new();
        let mut rng = StdRng::seed_from_u64(1);
        stripplot(&mut axes, &sample(), "cat", "val", &mut rng).unwrap();
        let Layer::Strip(s) = &axes.layers()[0] else {
            panic!("expected strip");
        };
        assert_eq!(s.points.len(), 3);
        assert_eq!(s.color, OVERLAY_COLOR);
        let in_x = s.points.iter().filter(|p| p.x.abs() <= JITTER_HALF_WIDTH).count();
        let in_y = s
            .points
            .iter()
            .filter(|p| (p.x - 1.0).abs() <= JITTER_HALF_WIDTH)
            .count();
        assert_eq!((in_x, in_y), (2, 1));
    }

    #[test]
    fn box_per_nonempty_category() {
        let mut axes = Axes::new();
        boxplot(&mut axes, &sample(), "cat", "val").unwrap();
        let Layer::Boxes(b) = &axes.layers()[0] else {
            panic!("expected boxes");
        };
        assert_eq!(b.boxes.len(), 2);
        assert_eq!(b.boxes[0].stats.median, 2.0);
        assert_eq!(b.boxes[1].stats.median, 5.0);
        assert_eq!(b.color, OVERLAY_COLOR);
    }

    #[test]
    fn layers_stack_in_call_order() {
        let mut axes = Axes::new();
        let ds = sample();
        let mut rng = StdRng::seed_from_u64(1);
        violinplot(&mut axes, &ds, "cat", "val", Palette::Pastel).unwrap();
        stripplot(&mut axes, &ds, "cat", "val", &mut rng).unwrap();
        boxplot(&mut axes, &ds, "cat", "val").unwrap();
        assert_eq!(
            axes.layer_kinds(),
            vec![LayerKind::Violins, LayerKind::Strip, LayerKind::Boxes]
        );
        assert_eq!(axes.categories(), ["x", "y"]);
    }

    #[test]
    fn text_values_fail_before_drawing() {
        let mut axes = Axes::new();
        let err = violinplot(&mut axes, &sample(), "val", "cat", Palette::Pastel).unwrap_err();
        assert!(matches!(err, FigureError::Data(_)));
        assert!(axes.is_empty());
    }
}
