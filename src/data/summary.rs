use super::filter::FilteredView;

/// Min / median / max of `median_house_value` over a non-empty view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceStats {
    pub min: f64,
    pub median: f64,
    pub max: f64,
}

/// Aggregates derived from a [`FilteredView`].
///
/// Means and price statistics are `None` for an empty view; callers render
/// that as "no data" rather than a number.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Summary {
    pub record_count: usize,
    pub mean_price: Option<f64>,
    pub mean_income: Option<f64>,
    /// `(price, count)` per distinct price, ascending by price, truncated.
    pub value_histogram: Vec<(f64, usize)>,
    pub price_stats: Option<PriceStats>,
}

impl Summary {
    pub fn from_view(view: &FilteredView<'_>, histogram_buckets: usize) -> Self {
        let mut prices: Vec<f64> = view.records().map(|r| r.median_house_value).collect();
        let incomes: Vec<f64> = view.records().map(|r| r.median_income).collect();
        prices.sort_by(f64::total_cmp);

        Summary {
            record_count: view.len(),
            mean_price: mean(&prices),
            mean_income: mean(&incomes),
            value_histogram: value_counts(&prices, histogram_buckets),
            price_stats: price_stats(&prices),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Count runs of equal values in an ascending slice, keeping at most `limit` buckets.
fn value_counts(sorted: &[f64], limit: usize) -> Vec<(f64, usize)> {
    let mut buckets: Vec<(f64, usize)> = Vec::new();
    for &v in sorted {
        if let Some((last, count)) = buckets.last_mut() {
            if *last == v {
                *count += 1;
                continue;
            }
        }
        if buckets.len() == limit {
            break;
        }
        buckets.push((v, 1));
    }
    buckets
}

fn price_stats(sorted: &[f64]) -> Option<PriceStats> {
    let (&min, &max) = (sorted.first()?, sorted.last()?);
    let mid = sorted.len() / 2;
    let median = if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    };
    Some(PriceStats { min, median, max })
}

// ---------------------------------------------------------------------------
// Display helpers
// ---------------------------------------------------------------------------

/// Placeholder shown wherever a figure cannot be computed.
pub const NO_DATA: &str = "no data";

/// `$1,234,568` – rounded to whole dollars with thousands separators.
pub fn format_currency(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Median income with two decimals.
pub fn format_income(value: f64) -> String {
    format!("{value:.2}")
}
