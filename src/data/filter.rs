use std::collections::BTreeSet;

use super::model::{HousingDataset, HousingRecord};
use super::summary::Summary;

// ---------------------------------------------------------------------------
// Income brackets
// ---------------------------------------------------------------------------

pub const LOW_INCOME_MAX: f64 = 2.5;
pub const HIGH_INCOME_MIN: f64 = 4.5;

/// Median-income bracket selected in the sidebar.
///
/// Low is closed at 2.5 and High is closed at 4.5 while Mid is open on both
/// ends, so neither boundary value ever lands in Mid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IncomeBracket {
    #[default]
    All,
    Low,
    Mid,
    High,
}

impl IncomeBracket {
    pub const ALL: [IncomeBracket; 4] = [
        IncomeBracket::All,
        IncomeBracket::Low,
        IncomeBracket::Mid,
        IncomeBracket::High,
    ];

    pub fn label(self) -> &'static str {
        match self {
            IncomeBracket::All => "All",
            IncomeBracket::Low => "Low (≤2.5)",
            IncomeBracket::Mid => "Mid (>2.5 & <4.5)",
            IncomeBracket::High => "High (≥4.5)",
        }
    }

    /// Whether a median income falls inside this bracket.
    pub fn contains(self, income: f64) -> bool {
        match self {
            IncomeBracket::All => true,
            IncomeBracket::Low => income <= LOW_INCOME_MAX,
            IncomeBracket::Mid => income > LOW_INCOME_MAX && income < HIGH_INCOME_MIN,
            IncomeBracket::High => income >= HIGH_INCOME_MIN,
        }
    }
}

// ---------------------------------------------------------------------------
// Filter criteria
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FilterError {
    #[error("invalid price range: {min} .. {max}")]
    InvalidPriceRange { min: f64, max: f64 },
}

/// One snapshot of the sidebar selections.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub price_min: f64,
    pub price_max: f64,
    /// Allowed `ocean_proximity` values. Empty means nothing passes.
    pub categories: BTreeSet<String>,
    pub income_bracket: IncomeBracket,
}

impl FilterCriteria {
    /// Criteria that let every record of `dataset` through.
    ///
    /// The price range is widened to whole dollars so the slider bounds
    /// never cut off the extreme records.
    pub fn for_dataset(dataset: &HousingDataset) -> Self {
        let (min, max) = dataset.price_bounds;
        FilterCriteria {
            price_min: min.floor(),
            price_max: max.ceil(),
            categories: dataset.proximity_values.iter().cloned().collect(),
            income_bracket: IncomeBracket::All,
        }
    }

    pub fn validate(&self) -> Result<(), FilterError> {
        if self.price_min.is_nan() || self.price_max.is_nan() || self.price_min > self.price_max {
            return Err(FilterError::InvalidPriceRange {
                min: self.price_min,
                max: self.price_max,
            });
        }
        Ok(())
    }

    /// Whether `record` passes the price, category and income predicates.
    pub fn matches(&self, record: &HousingRecord) -> bool {
        let value = record.median_house_value;
        value >= self.price_min
            && value <= self.price_max
            && self.categories.contains(&record.ocean_proximity)
            && self.income_bracket.contains(record.median_income)
    }
}

// ---------------------------------------------------------------------------
// Filtered view
// ---------------------------------------------------------------------------

/// The records of a dataset that passed a [`FilterCriteria`], in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView<'a> {
    dataset: &'a HousingDataset,
    indices: Vec<usize>,
}

impl<'a> FilteredView<'a> {
    pub fn new(dataset: &'a HousingDataset, indices: Vec<usize>) -> Self {
        FilteredView { dataset, indices }
    }

    pub fn dataset(&self) -> &'a HousingDataset {
        self.dataset
    }

    /// Indices into `dataset.records`, ascending.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &'a HousingRecord> + '_ {
        let dataset = self.dataset;
        self.indices.iter().map(move |&i| &dataset.records[i])
    }

    /// `[longitude, latitude]` pairs for the map, grouped by location
    /// category in the dataset's category order. Empty groups are skipped.
    pub fn points_by_category(&self) -> Vec<(&'a str, Vec<[f64; 2]>)> {
        let mut groups: Vec<(&'a str, Vec<[f64; 2]>)> = self
            .dataset
            .proximity_values
            .iter()
            .map(|c| (c.as_str(), Vec::new()))
            .collect();
        for rec in self.records() {
            if let Some((_, points)) = groups
                .iter_mut()
                .find(|(c, _)| *c == rec.ocean_proximity)
            {
                points.push([rec.longitude, rec.latitude]);
            }
        }
        groups.retain(|(_, points)| !points.is_empty());
        groups
    }

    /// The first `limit` records, for the table preview.
    pub fn preview(&self, limit: usize) -> Vec<&'a HousingRecord> {
        self.records().take(limit).collect()
    }
}

/// Return indices of records that pass `criteria`.
pub fn filtered_indices(dataset: &HousingDataset, criteria: &FilterCriteria) -> Vec<usize> {
    if criteria.categories.is_empty() {
        return Vec::new();
    }
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| criteria.matches(rec))
        .map(|(i, _)| i)
        .collect()
}

/// Filter `dataset` with `criteria` and summarise the result.
///
/// `histogram_buckets` caps the number of price buckets in the summary.
pub fn apply<'a>(
    dataset: &'a HousingDataset,
    criteria: &FilterCriteria,
    histogram_buckets: usize,
) -> Result<(FilteredView<'a>, Summary), FilterError> {
    criteria.validate()?;
    let view = FilteredView::new(dataset, filtered_indices(dataset, criteria));
    let summary = Summary::from_view(&view, histogram_buckets);
    Ok((view, summary))
}
