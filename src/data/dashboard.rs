use super::aggregate::{
    self, CorrelationMatrix, FactorCorrelation, FactorSeries, KeyMetrics, RankedCountry,
    RegionDistribution, RegionSeries, RegionStats,
};
use super::filter::{self, FilterCriteria, FilteredView};
use super::model::{Attribute, Dataset};

/// Everything the dashboard shows, derived in one pass from the dataset,
/// the criteria and the search box.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardViews {
    /// Rows passing the sidebar filters.
    pub filtered: Vec<usize>,
    /// `filtered` narrowed by the country search.
    pub displayed: Vec<usize>,
    pub metrics: KeyMetrics,
    pub scatter: Vec<RegionSeries>,
    pub distributions: Vec<RegionDistribution>,
    pub correlation: CorrelationMatrix,
    pub factor_series: Vec<FactorSeries>,
    pub top: Vec<RankedCountry>,
    pub bottom: Vec<RankedCountry>,
    pub regional: Vec<RegionStats>,
    pub gdp_correlation: Option<f64>,
    pub factor_correlations: Vec<FactorCorrelation>,
}

impl DashboardViews {
    pub fn compute(dataset: &Dataset, criteria: &FilterCriteria, search: &str) -> Self {
        let view = filter::apply(dataset, criteria);
        let displayed = aggregate::search(&view, search).into_indices();

        log::debug!(
            "Recomputed views: {} of {} countries pass filters, {} match search",
            view.len(),
            dataset.len(),
            displayed.len()
        );

        DashboardViews {
            metrics: aggregate::key_metrics(&view, dataset),
            scatter: aggregate::scatter_by_region(&view),
            distributions: aggregate::regional_distributions(&view),
            correlation: aggregate::correlation_matrix(&view, &Attribute::ALL),
            factor_series: aggregate::factor_series(&view, &Attribute::FACTORS),
            top: aggregate::top_n(&view, criteria.top_n()),
            bottom: aggregate::bottom_n(&view, criteria.top_n()),
            regional: aggregate::regional_stats(&view),
            gdp_correlation: aggregate::gdp_happiness_correlation(&view),
            factor_correlations: aggregate::factor_correlations(&view, &Attribute::FACTORS),
            displayed,
            filtered: view.into_indices(),
        }
    }

    /// The filtered rows as a view over `dataset`.
    pub fn filtered_view<'a>(&self, dataset: &'a Dataset) -> FilteredView<'a> {
        FilteredView::from_indices(dataset, self.filtered.clone())
    }

    /// The rows shown in the country table.
    pub fn displayed_view<'a>(&self, dataset: &'a Dataset) -> FilteredView<'a> {
        FilteredView::from_indices(dataset, self.displayed.clone())
    }
}
