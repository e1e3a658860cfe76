use vp_data::{Dataset, parse_number};

use crate::error::FigureResult;

/// Observations of one numeric column split by the categories of another.
#[derive(Debug, Clone, PartialEq)]
pub struct Grouped {
    pub categories: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl Grouped {
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str, &[f64])> {
        self.categories
            .iter()
            .zip(&self.values)
            .enumerate()
            .map(|(i, (c, v))| (i, c.as_str(), v.as_slice()))
    }
}

/// Groups `y` by `x`.
///
/// When every present `x` cell is numeric, categories are keyed on the
/// parsed value (so `1` and `1.0` are one category, labelled by its first
/// spelling) and sorted ascending. Otherwise they follow first appearance
/// of the text. Rows with a missing `x`, or a missing or non-finite `y`,
/// are dropped; a present `y` that is not a number fails the whole grouping.
pub fn group_by(data: &Dataset, x: &str, y: &str) -> FigureResult<Grouped> {
    let x_col = data.require_column(x)?;
    let y_vals = data.require_column(y)?.numeric()?;
    let numeric_x = x_col.is_numeric();

    let mut keys: Vec<Option<f64>> = Vec::new();
    let mut categories: Vec<String> = Vec::new();
    let mut values: Vec<Vec<f64>> = Vec::new();

    for (cell, y) in x_col.iter().zip(y_vals) {
        let Some(cell) = cell else { continue };
        let key = if numeric_x { parse_number(cell) } else { None };
        let found = match key {
            Some(k) => keys.iter().position(|c| c.is_some_and(|c| c.total_cmp(&k).is_eq())),
            None => categories.iter().position(|c| c == cell),
        };
        let idx = match found {
            Some(idx) => idx,
            None => {
                keys.push(key);
                categories.push(cell.to_string());
                values.push(Vec::new());
                categories.len() - 1
            }
        };
        if let Some(v) = y.filter(|v| v.is_finite()) {
            values[idx].push(v);
        }
    }

    if numeric_x {
        let mut order: Vec<usize> = (0..categories.len()).collect();
        order.sort_by(|a, b| {
            let (ka, kb) = (keys[*a].unwrap_or(f64::NAN), keys[*b].unwrap_or(f64::NAN));
            ka.total_cmp(&kb)
        });
        categories = order.iter().map(|i| categories[*i].clone()).collect();
        values = order.iter().map(|i| std::mem::take(&mut values[*i])).collect();
    }

    Ok(Grouped { categories, values })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use vp_data::{Column, Dataset};

    fn dataset(rows: &[(u8, Option<f64>)]) -> Dataset {
        let g = rows.iter().map(|(c, _)| Some(format!("c{c}"))).collect();
        let v = rows.iter().map(|(_, v)| v.map(|v| v.to_string())).collect();
        Dataset::from_columns(vec![Column::new("g", g), Column::new("v", v)])
    }

    proptest! {
        #[test]
        fn every_present_value_lands_once(
            rows in prop::collection::vec((0u8..5, prop::option::of(-1e6_f64..1e6)), 0..60)
        ) {
            let g = group_by(&dataset(&rows), "g", "v").unwrap();

            let mut expected: Vec<f64> = rows.iter().filter_map(|(_, v)| *v).collect();
            let mut got: Vec<f64> = g.values.iter().flatten().copied().collect();
            expected.sort_by(f64::total_cmp);
            got.sort_by(f64::total_cmp);
            prop_assert_eq!(got, expected);

            for (i, category, sample) in g.iter() {
                let n = rows
                    .iter()
                    .filter(|(c, v)| format!("c{c}") == category && v.is_some())
                    .count();
                prop_assert_eq!(sample.len(), n, "category {} at {}", category, i);
            }
        }

        #[test]
        fn numeric_categories_are_unique_and_sorted(
            keys in prop::collection::vec(-20i32..20, 1..40)
        ) {
            let g_cells = keys.iter().map(|k| Some(format!("{k}.0"))).collect();
            let v_cells = keys.iter().map(|_| Some("1".to_string())).collect();
            let ds = Dataset::from_columns(vec![Column::new("g", g_cells), Column::new("v", v_cells)]);
            let g = group_by(&ds, "g", "v").unwrap();

            let parsed: Vec<f64> = g.categories.iter().map(|c| c.parse().unwrap()).collect();
            prop_assert!(parsed.windows(2).all(|w| w[0] < w[1]));
            prop_assert_eq!(g.values.iter().map(Vec::len).sum::<usize>(), keys.len());
        }
    }
}
