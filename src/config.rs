use std::path::PathBuf;

/// Environment variable that overrides the dataset location.
pub const DATA_PATH_ENV: &str = "HOUSING_DATA_PATH";

pub const DEFAULT_DATA_PATH: &str = "housing.csv";
pub const DEFAULT_HISTOGRAM_BUCKETS: usize = 30;
pub const DEFAULT_PREVIEW_ROWS: usize = 100;

/// Startup settings for the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// CSV file to load, relative to the working directory unless absolute.
    pub data_path: PathBuf,
    /// Number of price buckets shown in the distribution chart.
    pub histogram_buckets: usize,
    /// Number of rows shown in the filtered-data table.
    pub preview_rows: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            histogram_buckets: DEFAULT_HISTOGRAM_BUCKETS,
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

impl DashboardConfig {
    /// Defaults, with the data path taken from `HOUSING_DATA_PATH` when set.
    pub fn from_env() -> Self {
        Self::with_data_path(std::env::var_os(DATA_PATH_ENV).map(PathBuf::from))
    }

    fn with_data_path(path: Option<PathBuf>) -> Self {
        let mut config = Self::default();
        if let Some(path) = path.filter(|p| !p.as_os_str().is_empty()) {
            log::debug!("Using data path from {DATA_PATH_ENV}: {}", path.display());
            config.data_path = path;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.data_path, PathBuf::from("housing.csv"));
        assert_eq!(config.histogram_buckets, 30);
        assert_eq!(config.preview_rows, 100);
    }

    #[test]
    fn override_replaces_data_path_only() {
        let config = DashboardConfig::with_data_path(Some(PathBuf::from("/data/ca.csv")));
        assert_eq!(config.data_path, PathBuf::from("/data/ca.csv"));
        assert_eq!(config.histogram_buckets, DEFAULT_HISTOGRAM_BUCKETS);
    }

    #[test]
    fn empty_override_is_ignored() {
        let config = DashboardConfig::with_data_path(Some(PathBuf::new()));
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(DashboardConfig::with_data_path(None), DashboardConfig::default());
    }
}
