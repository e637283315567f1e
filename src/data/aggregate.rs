use std::collections::BTreeMap;

use super::filter::FilteredView;
use super::model::{Attribute, Dataset, Record};
use super::stats;

// ---------------------------------------------------------------------------
// Summary metrics
// ---------------------------------------------------------------------------

/// Mean of one column over the view, and its difference from the whole
/// dataset's mean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryMetric {
    pub attribute: Attribute,
    pub mean: Option<f64>,
    pub delta: Option<f64>,
}

pub fn summary_metric(
    view: &FilteredView<'_>,
    dataset: &Dataset,
    attribute: Attribute,
) -> SummaryMetric {
    let mean = stats::mean(&view.values(attribute));
    let baseline = stats::mean(&FilteredView::all(dataset).values(attribute));
    let delta = match (mean, baseline) {
        (Some(m), Some(b)) => Some(m - b),
        _ => None,
    };
    SummaryMetric {
        attribute,
        mean,
        delta,
    }
}

/// The country holding the extreme ladder score.
#[derive(Debug, Clone, PartialEq)]
pub struct Extremum {
    pub country: String,
    pub region: String,
    pub score: f64,
}

impl Extremum {
    fn of(record: &Record) -> Self {
        Extremum {
            country: record.country_name.clone(),
            region: record.region.clone(),
            score: record.ladder_score,
        }
    }
}

/// Highest ladder score; the first such record wins ties.
pub fn highest_score(view: &FilteredView<'_>) -> Option<Extremum> {
    view.iter()
        .fold(None::<&Record>, |best, r| match best {
            Some(b) if b.ladder_score >= r.ladder_score => Some(b),
            _ => Some(r),
        })
        .map(Extremum::of)
}

/// Lowest ladder score; the first such record wins ties.
pub fn lowest_score(view: &FilteredView<'_>) -> Option<Extremum> {
    view.iter()
        .fold(None::<&Record>, |best, r| match best {
            Some(b) if b.ladder_score <= r.ladder_score => Some(b),
            _ => Some(r),
        })
        .map(Extremum::of)
}

/// The headline metric row.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyMetrics {
    pub happiness: SummaryMetric,
    pub highest: Option<Extremum>,
    pub gdp: SummaryMetric,
    pub social_support: SummaryMetric,
    pub life_expectancy: SummaryMetric,
}

pub fn key_metrics(view: &FilteredView<'_>, dataset: &Dataset) -> KeyMetrics {
    KeyMetrics {
        happiness: summary_metric(view, dataset, Attribute::LadderScore),
        highest: highest_score(view),
        gdp: summary_metric(view, dataset, Attribute::LogGdpPerCapita),
        social_support: summary_metric(view, dataset, Attribute::SocialSupport),
        life_expectancy: summary_metric(view, dataset, Attribute::HealthyLifeExpectancy),
    }
}

// ---------------------------------------------------------------------------
// Correlations
// ---------------------------------------------------------------------------

/// Square Pearson matrix over a list of columns.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    pub attributes: Vec<Attribute>,
    /// Row-major, `attributes.len()` squared cells.
    cells: Vec<Option<f64>>,
}

impl CorrelationMatrix {
    pub fn size(&self) -> usize {
        self.attributes.len()
    }

    /// Cell `(row, col)`; `None` when undefined or out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        let k = self.size();
        if row >= k || col >= k {
            return None;
        }
        self.cells[row * k + col]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<f64>]> + '_ {
        self.cells.chunks(self.size().max(1))
    }
}

pub fn correlation_matrix(view: &FilteredView<'_>, attributes: &[Attribute]) -> CorrelationMatrix {
    let k = attributes.len();
    let columns: Vec<Vec<f64>> = attributes.iter().map(|&a| view.values(a)).collect();
    let mut cells = vec![None; k * k];

    for i in 0..k {
        let varies = view.len() >= 2 && !stats::is_constant(&columns[i]);
        cells[i * k + i] = varies.then_some(1.0);
        for j in (i + 1)..k {
            let r = stats::pearson(&columns[i], &columns[j]);
            cells[i * k + j] = r;
            cells[j * k + i] = r;
        }
    }

    CorrelationMatrix {
        attributes: attributes.to_vec(),
        cells,
    }
}

/// Correlation of one factor with the ladder score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorCorrelation {
    pub factor: Attribute,
    pub correlation: Option<f64>,
}

pub fn factor_correlations(
    view: &FilteredView<'_>,
    factors: &[Attribute],
) -> Vec<FactorCorrelation> {
    let scores = view.values(Attribute::LadderScore);
    factors
        .iter()
        .map(|&factor| FactorCorrelation {
            factor,
            correlation: stats::pearson(&scores, &view.values(factor)),
        })
        .collect()
}

pub fn gdp_happiness_correlation(view: &FilteredView<'_>) -> Option<f64> {
    stats::pearson(
        &view.values(Attribute::LogGdpPerCapita),
        &view.values(Attribute::LadderScore),
    )
}

// ---------------------------------------------------------------------------
// Rankings and search
// ---------------------------------------------------------------------------

/// One row of a ranking table.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCountry {
    pub country: String,
    pub region: String,
    pub score: f64,
}

fn ranked(view: &FilteredView<'_>, n: usize, descending: bool) -> Vec<RankedCountry> {
    let mut records: Vec<&Record> = view.iter().collect();
    // Stable sort keeps view order among equal scores.
    if descending {
        records.sort_by(|a, b| b.ladder_score.total_cmp(&a.ladder_score));
    } else {
        records.sort_by(|a, b| a.ladder_score.total_cmp(&b.ladder_score));
    }
    records
        .into_iter()
        .take(n)
        .map(|r| RankedCountry {
            country: r.country_name.clone(),
            region: r.region.clone(),
            score: r.ladder_score,
        })
        .collect()
}

/// The `n` happiest countries, happiest first.
pub fn top_n(view: &FilteredView<'_>, n: usize) -> Vec<RankedCountry> {
    ranked(view, n, true)
}

/// The `n` least happy countries, least happy first.
pub fn bottom_n(view: &FilteredView<'_>, n: usize) -> Vec<RankedCountry> {
    ranked(view, n, false)
}

/// Case-insensitive substring match on the country name.
pub fn search<'a>(view: &FilteredView<'a>, needle: &str) -> FilteredView<'a> {
    if needle.is_empty() {
        return view.clone();
    }
    let needle = needle.to_lowercase();
    view.retain(|r| r.country_name.to_lowercase().contains(&needle))
}

// ---------------------------------------------------------------------------
// Per-region views
// ---------------------------------------------------------------------------

/// Ladder score values grouped by region name.
fn scores_by_region(view: &FilteredView<'_>) -> BTreeMap<String, Vec<f64>> {
    let mut groups: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for r in view.iter() {
        groups.entry(r.region.clone()).or_default().push(r.ladder_score);
    }
    groups
}

/// Ladder score statistics of one region.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionStats {
    pub region: String,
    pub mean: Option<f64>,
    /// Sample standard deviation; undefined for a single member.
    pub std_dev: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub count: usize,
}

/// Per-region statistics, ordered by region name.
pub fn regional_stats(view: &FilteredView<'_>) -> Vec<RegionStats> {
    scores_by_region(view)
        .into_iter()
        .map(|(region, scores)| {
            let bounds = stats::min_max(&scores);
            RegionStats {
                mean: stats::mean(&scores),
                std_dev: stats::sample_std_dev(&scores),
                min: bounds.map(|(lo, _)| lo),
                max: bounds.map(|(_, hi)| hi),
                count: scores.len(),
                region,
            }
        })
        .collect()
}

/// Five-number summary of a region's ladder scores for a box plot.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionDistribution {
    pub region: String,
    pub lower_whisker: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub upper_whisker: f64,
}

/// Quartiles plus whiskers at the most extreme values within 1.5 IQR.
pub fn regional_distributions(view: &FilteredView<'_>) -> Vec<RegionDistribution> {
    scores_by_region(view)
        .into_iter()
        .filter_map(|(region, mut scores)| {
            scores.sort_by(f64::total_cmp);
            let q1 = stats::quantile_sorted(&scores, 0.25)?;
            let median = stats::quantile_sorted(&scores, 0.5)?;
            let q3 = stats::quantile_sorted(&scores, 0.75)?;
            let fence = 1.5 * (q3 - q1);
            let lower_whisker = scores.iter().copied().find(|&v| v >= q1 - fence)?;
            let upper_whisker = scores.iter().rev().copied().find(|&v| v <= q3 + fence)?;
            Some(RegionDistribution {
                region,
                lower_whisker,
                q1,
                median,
                q3,
                upper_whisker,
            })
        })
        .collect()
}

/// A point of the GDP / happiness scatter.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub country: String,
    pub gdp: f64,
    pub score: f64,
    pub social_support: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegionSeries {
    pub region: String,
    pub points: Vec<ScatterPoint>,
}

/// GDP / happiness points grouped by region, ordered by region name.
pub fn scatter_by_region(view: &FilteredView<'_>) -> Vec<RegionSeries> {
    let mut groups: BTreeMap<&str, Vec<ScatterPoint>> = BTreeMap::new();
    for r in view.iter() {
        groups.entry(r.region.as_str()).or_default().push(ScatterPoint {
            country: r.country_name.clone(),
            gdp: r.log_gdp_per_capita,
            score: r.ladder_score,
            social_support: r.social_support,
        });
    }
    groups
        .into_iter()
        .map(|(region, points)| RegionSeries {
            region: region.to_string(),
            points,
        })
        .collect()
}

/// `[ladder score, factor value]` pairs of one factor.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorSeries {
    pub factor: Attribute,
    pub points: Vec<[f64; 2]>,
}

pub fn factor_series(view: &FilteredView<'_>, factors: &[Attribute]) -> Vec<FactorSeries> {
    factors
        .iter()
        .map(|&factor| FactorSeries {
            factor,
            points: view
                .iter()
                .map(|r| [r.ladder_score, factor.value(r)])
                .collect(),
        })
        .collect()
}
