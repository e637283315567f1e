use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use super::model::{Attribute, Dataset, Record};

/// Bounds of the Top-N slider.
pub const TOP_N_RANGE: RangeInclusive<usize> = 5..=20;

/// Initial Top-N when nothing else is configured.
pub const DEFAULT_TOP_N: usize = 10;

// ---------------------------------------------------------------------------
// Filter criteria
// ---------------------------------------------------------------------------

/// Inclusive numeric interval. `min > max` is allowed and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn new(min: f64, max: f64) -> Self {
        ValueRange { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// The user's current sidebar selection.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    /// Allowed regions. Empty means nothing passes.
    pub regions: BTreeSet<String>,
    pub gdp: ValueRange,
    pub score: ValueRange,
    /// Only used by the ranking views.
    top_n: usize,
}

impl FilterCriteria {
    pub fn new(regions: BTreeSet<String>, gdp: ValueRange, score: ValueRange) -> Self {
        FilterCriteria {
            regions,
            gdp,
            score,
            top_n: DEFAULT_TOP_N,
        }
    }

    /// Criteria that let every record of `dataset` through.
    pub fn full(dataset: &Dataset) -> Self {
        let regions = dataset.regions().iter().cloned().collect();
        let gdp = dataset
            .range(Attribute::LogGdpPerCapita)
            .map_or(ValueRange::new(0.0, 0.0), |(lo, hi)| ValueRange::new(lo, hi));
        let score = dataset
            .range(Attribute::LadderScore)
            .map_or(ValueRange::new(0.0, 0.0), |(lo, hi)| ValueRange::new(lo, hi));
        FilterCriteria::new(regions, gdp, score)
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.set_top_n(top_n);
        self
    }

    /// Set Top-N, clamped to [`TOP_N_RANGE`].
    pub fn set_top_n(&mut self, top_n: usize) {
        self.top_n = top_n.clamp(*TOP_N_RANGE.start(), *TOP_N_RANGE.end());
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Membership predicate: region selected and both values in range.
    pub fn matches(&self, record: &Record) -> bool {
        self.regions.contains(&record.region)
            && self.gdp.contains(record.log_gdp_per_capita)
            && self.score.contains(record.ladder_score)
    }
}

// ---------------------------------------------------------------------------
// Filtered view
// ---------------------------------------------------------------------------

/// An order-preserving subsequence of a [`Dataset`].
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    dataset: &'a Dataset,
    /// Strictly increasing row indices into `dataset`.
    indices: Vec<usize>,
}

impl<'a> FilteredView<'a> {
    /// The identity view.
    pub fn all(dataset: &'a Dataset) -> Self {
        FilteredView {
            dataset,
            indices: (0..dataset.len()).collect(),
        }
    }

    /// Rebuild a view from indices previously taken from another view.
    /// Out-of-range indices are dropped and the rest sorted.
    pub fn from_indices(dataset: &'a Dataset, mut indices: Vec<usize>) -> Self {
        indices.retain(|&i| i < dataset.len());
        indices.sort_unstable();
        indices.dedup();
        FilteredView { dataset, indices }
    }

    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn into_indices(self) -> Vec<usize> {
        self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Record> + '_ {
        let records = self.dataset.records();
        self.indices.iter().map(move |&i| &records[i])
    }

    /// One column of the view as a vector.
    pub fn values(&self, attribute: Attribute) -> Vec<f64> {
        self.iter().map(|r| attribute.value(r)).collect()
    }

    pub fn to_records(&self) -> Vec<Record> {
        self.iter().cloned().collect()
    }

    /// Keep only the records for which `keep` holds.
    pub fn retain(&self, mut keep: impl FnMut(&Record) -> bool) -> FilteredView<'a> {
        let records = self.dataset.records();
        FilteredView {
            dataset: self.dataset,
            indices: self
                .indices
                .iter()
                .copied()
                .filter(|&i| keep(&records[i]))
                .collect(),
        }
    }
}

/// Return the records that satisfy every criterion, in dataset order.
pub fn apply<'a>(dataset: &'a Dataset, criteria: &FilterCriteria) -> FilteredView<'a> {
    FilteredView::all(dataset).retain(|r| criteria.matches(r))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::record;

    fn sample() -> Dataset {
        Dataset::from_records(vec![
            record("Finland", "Western Europe", 7.8, 10.8),
            record("Afghanistan", "South Asia", 2.5, 7.7),
            record("Iceland", "Western Europe", 7.5, 10.9),
            record("India", "South Asia", 3.8, 8.8),
        ])
        .unwrap()
    }

    fn names(view: &FilteredView<'_>) -> Vec<String> {
        view.iter().map(|r| r.country_name.clone()).collect()
    }

    #[test]
    fn full_criteria_keep_everything() {
        let ds = sample();
        let view = apply(&ds, &FilterCriteria::full(&ds));
        assert_eq!(view.indices(), [0, 1, 2, 3]);
    }

    #[test]
    fn score_range_excludes_unhappy_countries() {
        let ds = sample();
        let mut criteria = FilterCriteria::full(&ds);
        criteria.score = ValueRange::new(5.0, 10.0);
        let view = apply(&ds, &criteria);
        assert_eq!(names(&view), ["Finland", "Iceland"]);
    }

    #[test]
    fn bounds_are_inclusive() {
        let ds = sample();
        let mut criteria = FilterCriteria::full(&ds);
        criteria.gdp = ValueRange::new(8.8, 10.8);
        assert_eq!(names(&apply(&ds, &criteria)), ["Finland", "India"]);
    }

    #[test]
    fn empty_region_set_matches_nothing() {
        let ds = sample();
        let mut criteria = FilterCriteria::full(&ds);
        criteria.regions.clear();
        assert!(apply(&ds, &criteria).is_empty());
    }

    #[test]
    fn inverted_range_matches_nothing() {
        let ds = sample();
        let mut criteria = FilterCriteria::full(&ds);
        criteria.score = ValueRange::new(8.0, 2.0);
        assert!(apply(&ds, &criteria).is_empty());
    }

    #[test]
    fn region_filter_preserves_order() {
        let ds = sample();
        let mut criteria = FilterCriteria::full(&ds);
        criteria.regions = ["South Asia".to_string()].into_iter().collect();
        assert_eq!(names(&apply(&ds, &criteria)), ["Afghanistan", "India"]);
    }

    #[test]
    fn top_n_is_clamped() {
        let ds = sample();
        assert_eq!(FilterCriteria::full(&ds).top_n(), DEFAULT_TOP_N);
        assert_eq!(FilterCriteria::full(&ds).with_top_n(1).top_n(), 5);
        assert_eq!(FilterCriteria::full(&ds).with_top_n(50).top_n(), 20);
    }

    #[test]
    fn from_indices_normalises() {
        let ds = sample();
        let view = FilteredView::from_indices(&ds, vec![3, 1, 1, 9]);
        assert_eq!(view.indices(), [1, 3]);
    }
}
