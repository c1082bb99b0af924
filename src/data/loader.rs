use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::model::{
    CellValue, HousingDataset, HousingRecord, LATITUDE, LONGITUDE, MEDIAN_HOUSE_VALUE,
    MEDIAN_INCOME, OCEAN_PROXIMITY, REQUIRED_COLUMNS,
};

/// Why the dataset could not be loaded. Both variants are fatal for the app.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("data file not found: '{}'", path.display())]
    DataUnavailable { path: PathBuf },

    #[error("failed to load data: {message}")]
    DataLoadError { message: String },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the housing dataset from a CSV file.
///
/// A missing file is reported as [`LoadError::DataUnavailable`]; any other
/// failure (I/O, malformed rows, missing columns, no rows at all) as
/// [`LoadError::DataLoadError`] with the full context chain.
pub fn load(path: &Path) -> Result<HousingDataset, LoadError> {
    match path.try_exists() {
        Ok(true) => {}
        Ok(false) => {
            return Err(LoadError::DataUnavailable {
                path: path.to_path_buf(),
            })
        }
        Err(e) => {
            return Err(LoadError::DataLoadError {
                message: format!("checking '{}': {e}", path.display()),
            })
        }
    }

    let dataset = load_csv(path).map_err(|e| {
        let not_found = e
            .chain()
            .filter_map(|cause| cause.downcast_ref::<std::io::Error>())
            .any(|io| io.kind() == std::io::ErrorKind::NotFound);
        if not_found {
            LoadError::DataUnavailable {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::DataLoadError {
                message: format!("{e:#}"),
            }
        }
    })?;

    log::info!(
        "Loaded {} housing records from '{}' with columns {:?}",
        dataset.len(),
        path.display(),
        dataset.column_names
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Column positions of the core fields within a header row.
struct CoreColumns {
    latitude: usize,
    longitude: usize,
    median_house_value: usize,
    median_income: usize,
    ocean_proximity: usize,
}

impl CoreColumns {
    fn locate(headers: &[String]) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .with_context(|| format!("CSV missing '{name}' column"))
        };
        Ok(CoreColumns {
            latitude: find(LATITUDE)?,
            longitude: find(LONGITUDE)?,
            median_house_value: find(MEDIAN_HOUSE_VALUE)?,
            median_income: find(MEDIAN_INCOME)?,
            ocean_proximity: find(OCEAN_PROXIMITY)?,
        })
    }
}

/// CSV layout: header row with column names, one housing block per row.
/// The five core columns are parsed into typed fields; every other column
/// is carried through as a [`CellValue`].
fn load_csv(path: &Path) -> Result<HousingDataset> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let core = CoreColumns::locate(&headers)?;

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let row = result.with_context(|| format!("CSV row {row_no}"))?;
        let field = |idx: usize| row.get(idx).unwrap_or("").trim();

        let latitude = parse_float(field(core.latitude), row_no, LATITUDE)?;
        let longitude = parse_float(field(core.longitude), row_no, LONGITUDE)?;
        let median_house_value =
            parse_float(field(core.median_house_value), row_no, MEDIAN_HOUSE_VALUE)?;
        let median_income = parse_float(field(core.median_income), row_no, MEDIAN_INCOME)?;
        let ocean_proximity = field(core.ocean_proximity).to_string();

        let mut extra = BTreeMap::new();
        for (col_idx, value) in row.iter().enumerate() {
            if REQUIRED_COLUMNS.contains(&headers[col_idx].as_str()) {
                continue;
            }
            extra.insert(headers[col_idx].clone(), CellValue::infer(value.trim()));
        }

        records.push(HousingRecord {
            latitude,
            longitude,
            median_house_value,
            median_income,
            ocean_proximity,
            extra,
        });
    }

    let dataset = HousingDataset::from_records(records, headers);
    if dataset.is_empty() {
        bail!("CSV '{}' contains no data rows", path.display());
    }
    Ok(dataset)
}

fn parse_float(s: &str, row: usize, col: &str) -> Result<f64> {
    if s.is_empty() {
        bail!("Row {row}, {col}: value is empty");
    }
    let v = s
        .parse::<f64>()
        .with_context(|| format!("Row {row}, {col}: '{s}' is not a number"))?;
    if !v.is_finite() {
        bail!("Row {row}, {col}: '{s}' is not a finite number");
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const HEADER: &str = "longitude,latitude,housing_median_age,total_rooms,total_bedrooms,\
population,households,median_income,median_house_value,ocean_proximity";

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn missing_file_is_data_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("housing.csv");
        match load(&path) {
            Err(LoadError::DataUnavailable { path: reported }) => assert_eq!(reported, path),
            other => panic!("expected DataUnavailable, got {other:?}"),
        }
    }

    #[test]
    fn loads_rows_and_keeps_extra_columns() {
        let file = write_csv(&format!(
            "{HEADER}\n\
-122.23,37.88,41,880,129,322,126,8.3252,452600,NEAR BAY\n\
-121.97,37.64,32,1283,,1011,272,2.5,140000,INLAND\n"
        ));
        let ds = load(file.path()).unwrap();

        assert_eq!(ds.len(), 2);
        assert_eq!(ds.column_names.len(), 10);
        assert_eq!(ds.column_names[0], "longitude");
        assert_eq!(ds.proximity_values, vec!["NEAR BAY", "INLAND"]);
        assert_eq!(ds.price_bounds, (140_000.0, 452_600.0));

        let first = &ds.records[0];
        assert_eq!(first.latitude, 37.88);
        assert_eq!(first.longitude, -122.23);
        assert_eq!(first.median_income, 8.3252);
        assert_eq!(
            first.extra.get("housing_median_age"),
            Some(&CellValue::Integer(41))
        );
        assert!(!first.extra.contains_key(MEDIAN_HOUSE_VALUE));

        assert_eq!(ds.records[1].extra.get("total_bedrooms"), Some(&CellValue::Null));
    }

    #[test]
    fn missing_required_column_is_load_error() {
        let file = write_csv("longitude,latitude,median_income,ocean_proximity\n-122.2,37.8,8.3,NEAR BAY\n");
        match load(file.path()) {
            Err(LoadError::DataLoadError { message }) => {
                assert!(message.contains("median_house_value"), "{message}")
            }
            other => panic!("expected DataLoadError, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_value_is_load_error() {
        let file = write_csv(&format!(
            "{HEADER}\n-122.23,37.88,41,880,129,322,126,lots,452600,NEAR BAY\n"
        ));
        match load(file.path()) {
            Err(LoadError::DataLoadError { message }) => {
                assert!(message.contains("median_income"), "{message}");
                assert!(message.contains("'lots'"), "{message}");
            }
            other => panic!("expected DataLoadError, got {other:?}"),
        }
    }

    #[test]
    fn nan_and_infinite_values_are_load_errors() {
        for (cell, column) in [("NaN", "median_house_value"), ("inf", "median_house_value"), ("nan", "latitude")] {
            let row = if column == "latitude" {
                format!("-122.23,{cell},41,880,129,322,126,8.3,452600,NEAR BAY")
            } else {
                format!("-122.23,37.88,41,880,129,322,126,8.3,{cell},NEAR BAY")
            };
            let file = write_csv(&format!("{HEADER}\n{row}\n-121.97,37.64,32,1283,,1011,272,2.5,140000,INLAND\n"));
            match load(file.path()) {
                Err(LoadError::DataLoadError { message }) => {
                    assert!(message.contains(column), "{message}");
                    assert!(message.contains("not a finite number"), "{message}");
                }
                other => panic!("expected DataLoadError for {cell}, got {other:?}"),
            }
        }
    }

    #[test]
    fn unreachable_path_is_load_error_not_missing() {
        let file = write_csv(&format!("{HEADER}\n"));
        let path = file.path().join("housing.csv");
        assert!(matches!(
            load(&path),
            Err(LoadError::DataLoadError { .. })
        ));
    }

    #[test]
    fn ragged_row_is_load_error() {
        let file = write_csv(&format!("{HEADER}\n-122.23,37.88,41\n"));
        assert!(matches!(
            load(file.path()),
            Err(LoadError::DataLoadError { .. })
        ));
    }

    #[test]
    fn header_only_file_is_load_error() {
        let file = write_csv(&format!("{HEADER}\n"));
        match load(file.path()) {
            Err(LoadError::DataLoadError { message }) => {
                assert!(message.contains("no data rows"), "{message}")
            }
            other => panic!("expected DataLoadError, got {other:?}"),
        }
    }
}
