use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a pass-through cell from a non-core column
// ---------------------------------------------------------------------------

/// A dynamically-typed cell for columns the dashboard does not interpret
/// (`housing_median_age`, `total_rooms`, ...). Type is inferred per cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl CellValue {
    /// Infer the narrowest type for a raw CSV field.
    pub fn infer(s: &str) -> Self {
        if s.is_empty() {
            return CellValue::Null;
        }
        if let Ok(i) = s.parse::<i64>() {
            return CellValue::Integer(i);
        }
        if let Ok(f) = s.parse::<f64>() {
            return CellValue::Float(f);
        }
        if s == "true" || s == "false" {
            return CellValue::Bool(s == "true");
        }
        CellValue::String(s.to_string())
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

// ---------------------------------------------------------------------------
// HousingRecord – one row of the CSV
// ---------------------------------------------------------------------------

pub const LATITUDE: &str = "latitude";
pub const LONGITUDE: &str = "longitude";
pub const MEDIAN_HOUSE_VALUE: &str = "median_house_value";
pub const MEDIAN_INCOME: &str = "median_income";
pub const OCEAN_PROXIMITY: &str = "ocean_proximity";

/// Columns every dataset must carry.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    LATITUDE,
    LONGITUDE,
    MEDIAN_HOUSE_VALUE,
    MEDIAN_INCOME,
    OCEAN_PROXIMITY,
];

/// A single housing block.
#[derive(Debug, Clone, PartialEq)]
pub struct HousingRecord {
    pub latitude: f64,
    pub longitude: f64,
    /// Median house value in dollars.
    pub median_house_value: f64,
    /// Median income in tens of thousands of dollars.
    pub median_income: f64,
    pub ocean_proximity: String,
    /// Every other column of the source row: column_name → value.
    pub extra: BTreeMap<String, CellValue>,
}

impl HousingRecord {
    /// Render the value of `column` for tabular display.
    pub fn display_value(&self, column: &str) -> String {
        match column {
            LATITUDE => self.latitude.to_string(),
            LONGITUDE => self.longitude.to_string(),
            MEDIAN_HOUSE_VALUE => self.median_house_value.to_string(),
            MEDIAN_INCOME => self.median_income.to_string(),
            OCEAN_PROXIMITY => self.ocean_proximity.clone(),
            other => self
                .extra
                .get(other)
                .map(|v| v.to_string())
                .unwrap_or_default(),
        }
    }
}

// ---------------------------------------------------------------------------
// HousingDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed column information.
#[derive(Debug, Clone, PartialEq)]
pub struct HousingDataset {
    /// All records, in file order.
    pub records: Vec<HousingRecord>,
    /// Column names in header order (core and extra columns alike).
    pub column_names: Vec<String>,
    /// Distinct `ocean_proximity` values in order of first appearance.
    pub proximity_values: Vec<String>,
    /// `(min, max)` of `median_house_value`; `(0, 0)` for an empty dataset.
    pub price_bounds: (f64, f64),
}

impl HousingDataset {
    /// Build column information from the loaded records.
    pub fn from_records(records: Vec<HousingRecord>, column_names: Vec<String>) -> Self {
        let mut proximity_values: Vec<String> = Vec::new();
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for rec in &records {
            if !proximity_values.contains(&rec.ocean_proximity) {
                proximity_values.push(rec.ocean_proximity.clone());
            }
            min = min.min(rec.median_house_value);
            max = max.max(rec.median_house_value);
        }

        let price_bounds = if records.is_empty() { (0.0, 0.0) } else { (min, max) };

        HousingDataset {
            records,
            column_names,
            proximity_values,
            price_bounds,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Record with only the core columns populated.
    pub(crate) fn record(value: f64, income: f64, proximity: &str) -> HousingRecord {
        HousingRecord {
            latitude: 37.88,
            longitude: -122.23,
            median_house_value: value,
            median_income: income,
            ocean_proximity: proximity.to_string(),
            extra: BTreeMap::new(),
        }
    }

    pub(crate) fn dataset(records: Vec<HousingRecord>) -> HousingDataset {
        let columns = REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect();
        HousingDataset::from_records(records, columns)
    }

    #[test]
    fn proximity_values_keep_first_appearance_order() {
        let ds = dataset(vec![
            record(1.0, 1.0, "NEAR BAY"),
            record(2.0, 1.0, "INLAND"),
            record(3.0, 1.0, "NEAR BAY"),
            record(4.0, 1.0, "<1H OCEAN"),
        ]);
        assert_eq!(ds.proximity_values, vec!["NEAR BAY", "INLAND", "<1H OCEAN"]);
    }

    #[test]
    fn price_bounds_cover_all_records() {
        let ds = dataset(vec![
            record(250_000.0, 1.0, "INLAND"),
            record(14_999.0, 1.0, "INLAND"),
            record(500_001.0, 1.0, "INLAND"),
        ]);
        assert_eq!(ds.price_bounds, (14_999.0, 500_001.0));
        assert_eq!(ds.len(), 3);
    }

    #[test]
    fn empty_dataset_has_zero_bounds() {
        let ds = dataset(Vec::new());
        assert!(ds.is_empty());
        assert_eq!(ds.price_bounds, (0.0, 0.0));
    }

    #[test]
    fn cell_type_inference() {
        assert_eq!(CellValue::infer(""), CellValue::Null);
        assert_eq!(CellValue::infer("41"), CellValue::Integer(41));
        assert_eq!(CellValue::infer("880.5"), CellValue::Float(880.5));
        assert_eq!(CellValue::infer("true"), CellValue::Bool(true));
        assert_eq!(CellValue::infer("ISLAND"), CellValue::String("ISLAND".into()));
    }

    #[test]
    fn display_value_reads_core_and_extra_columns() {
        let mut rec = record(452_600.0, 8.3252, "NEAR BAY");
        rec.extra
            .insert("housing_median_age".into(), CellValue::Integer(41));
        assert_eq!(rec.display_value(MEDIAN_HOUSE_VALUE), "452600");
        assert_eq!(rec.display_value(OCEAN_PROXIMITY), "NEAR BAY");
        assert_eq!(rec.display_value("housing_median_age"), "41");
        assert_eq!(rec.display_value("missing"), "");
    }
}
