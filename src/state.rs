use crate::color::ColorMap;
use crate::config::DashboardConfig;
use crate::data::filter::{apply, FilterCriteria, FilteredView, IncomeBracket};
use crate::data::model::HousingDataset;
use crate::data::summary::Summary;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full dashboard state, independent of rendering.
pub struct AppState {
    /// Loaded once at startup, never modified afterwards.
    dataset: HousingDataset,

    /// Current sidebar / slider selections.
    pub criteria: FilterCriteria,

    /// Indices of records passing `criteria` (cached).
    visible_indices: Vec<usize>,

    /// Aggregates over the visible records (cached).
    summary: Summary,

    /// Colour per location category.
    pub color_map: ColorMap,

    pub config: DashboardConfig,
}

impl AppState {
    /// Ingest the loaded dataset with every filter wide open.
    pub fn new(dataset: HousingDataset, config: DashboardConfig) -> Self {
        let criteria = FilterCriteria::for_dataset(&dataset);
        let color_map = ColorMap::new(&dataset.proximity_values);
        let mut state = Self {
            visible_indices: Vec::new(),
            summary: Summary::default(),
            dataset,
            criteria,
            color_map,
            config,
        };
        state.refilter();
        state
    }

    pub fn dataset(&self) -> &HousingDataset {
        &self.dataset
    }

    pub fn view(&self) -> FilteredView<'_> {
        FilteredView::new(&self.dataset, self.visible_indices.clone())
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    /// Slider bounds: the dataset's price range widened to whole dollars.
    pub fn price_bounds(&self) -> (f64, f64) {
        let (min, max) = self.dataset.price_bounds;
        (min.floor(), max.ceil())
    }

    /// Recompute the visible records and summary after a criteria change.
    ///
    /// Invalid criteria leave the previous result in place.
    pub fn refilter(&mut self) {
        match apply(&self.dataset, &self.criteria, self.config.histogram_buckets) {
            Ok((view, summary)) => {
                log::debug!(
                    "Filter {:?} matched {} of {} records",
                    self.criteria,
                    view.len(),
                    self.dataset.len()
                );
                self.visible_indices = view.indices().to_vec();
                self.summary = summary;
            }
            Err(e) => log::warn!("Ignoring filter change: {e}"),
        }
    }

    /// Set the price range, swapping reversed bounds and clamping to the data.
    pub fn set_price_range(&mut self, min: f64, max: f64) {
        let (lo, hi) = self.price_bounds();
        let (min, max) = if min > max { (max, min) } else { (min, max) };
        self.criteria.price_min = min.clamp(lo, hi);
        self.criteria.price_max = max.clamp(lo, hi);
        self.refilter();
    }

    /// Toggle a single location category.
    pub fn toggle_category(&mut self, category: &str) {
        if !self.criteria.categories.remove(category) {
            self.criteria.categories.insert(category.to_string());
        }
        self.refilter();
    }

    pub fn select_all_categories(&mut self) {
        self.criteria.categories = self.dataset.proximity_values.iter().cloned().collect();
        self.refilter();
    }

    pub fn select_no_categories(&mut self) {
        self.criteria.categories.clear();
        self.refilter();
    }

    pub fn set_income_bracket(&mut self, bracket: IncomeBracket) {
        self.criteria.income_bracket = bracket;
        self.refilter();
    }

    pub fn reset_filters(&mut self) {
        self.criteria = FilterCriteria::for_dataset(&self.dataset);
        self.refilter();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::{dataset, record};

    fn state() -> AppState {
        let ds = dataset(vec![
            record(100_000.0, 2.0, "NEAR BAY"),
            record(500_000.0, 5.0, "INLAND"),
            record(250_000.0, 3.5, "<1H OCEAN"),
        ]);
        AppState::new(ds, DashboardConfig::default())
    }

    #[test]
    fn starts_with_everything_visible() {
        let s = state();
        assert_eq!(s.view().len(), 3);
        assert_eq!(s.summary().record_count, 3);
        assert_eq!(s.criteria.income_bracket, IncomeBracket::All);
        assert_eq!(s.criteria.categories.len(), 3);
    }

    #[test]
    fn toggling_category_refilters() {
        let mut s = state();
        s.toggle_category("INLAND");
        assert_eq!(s.view().indices(), &[0, 2]);
        s.toggle_category("INLAND");
        assert_eq!(s.view().len(), 3);
    }

    #[test]
    fn select_none_then_all() {
        let mut s = state();
        s.select_no_categories();
        assert!(s.view().is_empty());
        assert_eq!(s.summary().mean_price, None);
        s.select_all_categories();
        assert_eq!(s.view().len(), 3);
    }

    #[test]
    fn income_bracket_refilters() {
        let mut s = state();
        s.set_income_bracket(IncomeBracket::Mid);
        assert_eq!(s.view().indices(), &[2]);
        assert_eq!(s.summary().mean_income, Some(3.5));
    }

    #[test]
    fn price_range_is_ordered_and_clamped() {
        let mut s = state();
        s.set_price_range(300_000.0, 0.0);
        assert_eq!(s.criteria.price_min, 100_000.0);
        assert_eq!(s.criteria.price_max, 300_000.0);
        assert_eq!(s.view().indices(), &[0, 2]);
    }

    #[test]
    fn invalid_criteria_keep_previous_result() {
        let mut s = state();
        s.set_income_bracket(IncomeBracket::High);
        s.criteria.price_min = f64::NAN;
        s.refilter();
        assert_eq!(s.view().indices(), &[1]);
    }

    #[test]
    fn reset_restores_initial_criteria() {
        let mut s = state();
        s.select_no_categories();
        s.set_income_bracket(IncomeBracket::Low);
        s.reset_filters();
        assert_eq!(s.criteria, FilterCriteria::for_dataset(s.dataset()));
        assert_eq!(s.view().len(), 3);
    }
}
