use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::ReaderBuilder;

use crate::missing::is_missing;
use crate::{Column, DataError, DataResult, Dataset};

pub fn read_csv_path(path: &Path) -> DataResult<Dataset> {
    let file = File::open(path)?;
    let dataset = read_csv(BufReader::new(file))?;
    tracing::debug!(
        path = %path.display(),
        rows = dataset.n_rows(),
        columns = dataset.n_columns(),
        "loaded csv"
    );
    Ok(dataset)
}

/// Reads comma-separated text with a header row.
///
/// Rows with a field count different from the header are an error.
pub fn read_csv<R: Read>(reader: R) -> DataResult<Dataset> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        return Err(DataError::Empty);
    }
    let names = normalize_headers(headers.iter());

    let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); names.len()];
    for record in rdr.records() {
        let record = record?;
        for (column, field) in cells.iter_mut().zip(record.iter()) {
            column.push((!is_missing(field)).then(|| field.to_string()));
        }
    }

    let columns = names
        .into_iter()
        .zip(cells)
        .map(|(name, cells)| Column::new(name, cells))
        .collect();
    Ok(Dataset::from_columns(columns))
}

/// Blank headers become `Unnamed: {i}`; repeats get `.1`, `.2`, ... suffixes.
fn normalize_headers<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for (i, header) in raw.enumerate() {
        let header = header.trim_start_matches('\u{feff}');
        let base = if header.trim().is_empty() {
            format!("Unnamed: {i}")
        } else {
            header.to_string()
        };

        let mut name = base.clone();
        let mut k = 1;
        while !seen.insert(name.clone()) {
            name = format!("{base}.{k}");
            k += 1;
        }
        names.push(name);
    }

    names
}
