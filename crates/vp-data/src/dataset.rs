use crate::missing::parse_number;
use crate::{DataError, DataResult};

/// One named column. Missing cells are `None`; present cells keep their text.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    cells: Vec<Option<String>>,
}

impl Column {
    pub fn new(name: impl Into<String>, cells: Vec<Option<String>>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, row: usize) -> Option<&str> {
        self.cells.get(row).and_then(|c| c.as_deref())
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<&str>> + '_ {
        self.cells.iter().map(|c| c.as_deref())
    }

    /// Coerces every present cell to a number.
    ///
    /// Fails on the first present cell that does not parse. An all-missing
    /// column is numeric.
    pub fn numeric(&self) -> DataResult<Vec<Option<f64>>> {
        self.cells
            .iter()
            .enumerate()
            .map(|(row, cell)| match cell {
                None => Ok(None),
                Some(text) => parse_number(text)
                    .map(Some)
                    .ok_or_else(|| DataError::NotNumeric {
                        column: self.name.clone(),
                        row,
                        value: text.clone(),
                    }),
            })
            .collect()
    }

    pub fn is_numeric(&self) -> bool {
        self.cells
            .iter()
            .flatten()
            .all(|text| parse_number(text).is_some())
    }
}

/// An in-memory table: ordered columns, rows aligned by index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    columns: Vec<Column>,
}

impl Dataset {
    /// Builds a dataset from columns of equal length.
    pub fn from_columns(columns: Vec<Column>) -> Self {
        debug_assert!(
            columns.windows(2).all(|w| w[0].len() == w[1].len()),
            "columns must be row-aligned"
        );
        Self { columns }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn require_column(&self, name: &str) -> DataResult<&Column> {
        self.column(name)
            .ok_or_else(|| DataError::ColumnNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn col(name: &str, cells: &[Option<&str>]) -> Column {
        Column::new(name, cells.iter().map(|c| c.map(str::to_string)).collect())
    }

    #[test]
    fn numeric_coercion_keeps_missing() {
        let c = col("v", &[Some("1"), None, Some(" 2.5")]);
        assert_eq!(c.numeric().unwrap(), vec![Some(1.0), None, Some(2.5)]);
        assert!(c.is_numeric());
    }

    #[test]
    fn numeric_coercion_reports_first_bad_cell() {
        let c = col("v", &[Some("1"), Some("abc"), Some("zzz")]);
        match c.numeric() {
            Err(DataError::NotNumeric { column, row, value }) => {
                assert_eq!(column, "v");
                assert_eq!(row, 1);
                assert_eq!(value, "abc");
            }
            other => panic!("expected NotNumeric, got {other:?}"),
        }
        assert!(!c.is_numeric());
    }

    #[test]
    fn lookup_by_name() {
        let ds = Dataset::from_columns(vec![col("a", &[Some("1")]), col("b", &[Some("x")])]);
        assert_eq!(ds.column_names(), vec!["a", "b"]);
        assert!(ds.contains("b"));
        assert!(ds.require_column("c").is_err());
        assert_eq!(ds.n_rows(), 1);
        assert_eq!(ds.n_columns(), 2);
    }
}
