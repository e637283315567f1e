use std::path::Path;
use std::sync::Arc;

use crate::color::ColorMap;
use crate::config::DashboardConfig;
use crate::data::dashboard::DashboardViews;
use crate::data::export;
use crate::data::filter::{FilterCriteria, ValueRange};
use crate::data::model::Dataset;
use crate::data::DataError;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full session state, independent of rendering.
pub struct AppState {
    /// Loaded once at startup and shared read-only.
    pub dataset: Arc<Dataset>,

    /// Current sidebar selection.
    pub criteria: FilterCriteria,

    /// Country search box contents.
    pub search: String,

    /// Views derived from `criteria` and `search` (recomputed on change).
    pub views: DashboardViews,

    /// Region colours, fixed for the dataset.
    pub color_map: ColorMap,

    /// Suggested name for exported files.
    pub export_file_name: String,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    default_top_n: usize,
}

impl AppState {
    pub fn new(dataset: Arc<Dataset>, config: &DashboardConfig) -> Self {
        let criteria = FilterCriteria::full(&dataset).with_top_n(config.default_top_n);
        let views = DashboardViews::compute(&dataset, &criteria, "");
        let color_map = ColorMap::new(dataset.regions());
        Self {
            dataset,
            criteria,
            search: String::new(),
            views,
            color_map,
            export_file_name: config.export_file_name.clone(),
            status_message: None,
            default_top_n: config.default_top_n,
        }
    }

    /// Recompute every derived view after a criteria or search change.
    pub fn refresh(&mut self) {
        self.views = DashboardViews::compute(&self.dataset, &self.criteria, &self.search);
    }

    /// Toggle a single region in the region filter.
    pub fn toggle_region(&mut self, region: &str) {
        if !self.criteria.regions.remove(region) {
            self.criteria.regions.insert(region.to_string());
        }
        self.refresh();
    }

    pub fn select_all_regions(&mut self) {
        self.criteria.regions = self.dataset.regions().iter().cloned().collect();
        self.refresh();
    }

    pub fn select_no_regions(&mut self) {
        self.criteria.regions.clear();
        self.refresh();
    }

    pub fn set_gdp_range(&mut self, min: f64, max: f64) {
        self.criteria.gdp = ValueRange::new(min, max);
        self.refresh();
    }

    pub fn set_score_range(&mut self, min: f64, max: f64) {
        self.criteria.score = ValueRange::new(min, max);
        self.refresh();
    }

    pub fn set_top_n(&mut self, top_n: usize) {
        self.criteria.set_top_n(top_n);
        self.refresh();
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.refresh();
    }

    /// Back to every region, the full value ranges and an empty search.
    pub fn reset_filters(&mut self) {
        self.criteria = FilterCriteria::full(&self.dataset).with_top_n(self.default_top_n);
        self.search.clear();
        self.refresh();
    }

    /// Write the filtered rows (ignoring the search box) to `path`.
    pub fn export_filtered(&mut self, path: &Path) {
        let view = self.views.filtered_view(&self.dataset);
        let rows = view.len();
        let result = export::save_csv(path, view.iter());
        self.report_export(path, rows, result);
    }

    /// Write the whole dataset to `path`.
    pub fn export_dataset(&mut self, path: &Path) {
        let result = export::save_csv(path, self.dataset.records());
        let rows = self.dataset.len();
        self.report_export(path, rows, result);
    }

    fn report_export(&mut self, path: &Path, rows: usize, result: Result<(), DataError>) {
        match result {
            Ok(()) => {
                log::info!("Exported {rows} countries to {}", path.display());
                self.status_message = Some(format!("Saved {rows} rows to {}", path.display()));
            }
            Err(e) => {
                log::error!("Failed to export: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::record;

    fn state() -> AppState {
        let ds = Dataset::from_records(vec![
            record("Finland", "Western Europe", 7.8, 10.8),
            record("Afghanistan", "South Asia", 2.5, 7.7),
            record("Iceland", "Western Europe", 7.5, 10.9),
        ])
        .unwrap();
        AppState::new(Arc::new(ds), &DashboardConfig::default())
    }

    #[test]
    fn starts_with_everything_visible() {
        let state = state();
        assert_eq!(state.views.filtered, [0, 1, 2]);
        assert_eq!(state.criteria.top_n(), 10);
    }

    #[test]
    fn region_toggles_refresh_views() {
        let mut state = state();
        state.toggle_region("South Asia");
        assert_eq!(state.views.filtered, [0, 2]);
        state.toggle_region("South Asia");
        assert_eq!(state.views.filtered, [0, 1, 2]);
        state.select_no_regions();
        assert!(state.views.filtered.is_empty());
        assert_eq!(state.views.metrics.happiness.mean, None);
        state.select_all_regions();
        assert_eq!(state.views.filtered.len(), 3);
    }

    #[test]
    fn search_and_reset() {
        let mut state = state();
        state.set_score_range(5.0, 10.0);
        state.set_search("fin");
        assert_eq!(state.views.filtered, [0, 2]);
        assert_eq!(state.views.displayed, [0]);
        state.reset_filters();
        assert_eq!(state.views.displayed, [0, 1, 2]);
        assert!(state.search.is_empty());
    }

    #[test]
    fn export_writes_filtered_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("filtered.csv");
        let mut state = state();
        state.set_gdp_range(10.0, 11.0);
        state.export_filtered(&path);

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written.lines().count(), 3);
        assert!(state.status_message.as_deref().unwrap().starts_with("Saved 2 rows"));
    }

    #[test]
    fn failed_export_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state();
        state.export_dataset(&dir.path().join("missing").join("out.csv"));
        assert!(state.status_message.as_deref().unwrap().starts_with("Error"));
    }
}
