/// Data layer: core types, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///     housing.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → HousingDataset (once per process)
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ HousingDataset │  Vec<HousingRecord>, proximity values, price bounds
///   └────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply FilterCriteria → FilteredView
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ summary   │  count, means, histogram, price stats
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod filter;
pub mod summary;
