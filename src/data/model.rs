use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DataError;

/// Canonical column order of the input schema, also used for export.
pub const COLUMNS: [&str; 9] = [
    "Country name",
    "Regional indicator",
    "Ladder score",
    "Logged GDP per capita",
    "Social support",
    "Healthy life expectancy",
    "Freedom to make life choices",
    "Generosity",
    "Perceptions of corruption",
];

// ---------------------------------------------------------------------------
// Record – one row of the report
// ---------------------------------------------------------------------------

/// One country's 2021 happiness survey result.
///
/// Field declaration order matches [`COLUMNS`]; serde relies on it when
/// writing CSV rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Country name")]
    pub country_name: String,
    #[serde(rename = "Regional indicator")]
    pub region: String,
    /// Happiness score, roughly 0..=10.
    #[serde(rename = "Ladder score")]
    pub ladder_score: f64,
    #[serde(rename = "Logged GDP per capita")]
    pub log_gdp_per_capita: f64,
    #[serde(rename = "Social support")]
    pub social_support: f64,
    /// Years.
    #[serde(rename = "Healthy life expectancy")]
    pub healthy_life_expectancy: f64,
    #[serde(rename = "Freedom to make life choices")]
    pub freedom_to_make_life_choices: f64,
    /// May be negative.
    #[serde(rename = "Generosity")]
    pub generosity: f64,
    #[serde(rename = "Perceptions of corruption")]
    pub perceptions_of_corruption: f64,
}

// ---------------------------------------------------------------------------
// Attribute – typed handle on a numeric column
// ---------------------------------------------------------------------------

/// The numeric columns of a [`Record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Attribute {
    LadderScore,
    LogGdpPerCapita,
    SocialSupport,
    HealthyLifeExpectancy,
    Freedom,
    Generosity,
    PerceptionsOfCorruption,
}

impl Attribute {
    /// Every numeric column in schema order.
    pub const ALL: [Attribute; 7] = [
        Attribute::LadderScore,
        Attribute::LogGdpPerCapita,
        Attribute::SocialSupport,
        Attribute::HealthyLifeExpectancy,
        Attribute::Freedom,
        Attribute::Generosity,
        Attribute::PerceptionsOfCorruption,
    ];

    /// Factors compared against the ladder score.
    pub const FACTORS: [Attribute; 5] = [
        Attribute::SocialSupport,
        Attribute::HealthyLifeExpectancy,
        Attribute::Freedom,
        Attribute::Generosity,
        Attribute::PerceptionsOfCorruption,
    ];

    /// Header of this column in the source file.
    pub fn column(self) -> &'static str {
        match self {
            Attribute::LadderScore => COLUMNS[2],
            Attribute::LogGdpPerCapita => COLUMNS[3],
            Attribute::SocialSupport => COLUMNS[4],
            Attribute::HealthyLifeExpectancy => COLUMNS[5],
            Attribute::Freedom => COLUMNS[6],
            Attribute::Generosity => COLUMNS[7],
            Attribute::PerceptionsOfCorruption => COLUMNS[8],
        }
    }

    /// Short name for axis labels and table headers.
    pub fn label(self) -> &'static str {
        match self {
            Attribute::LadderScore => "Happiness",
            Attribute::LogGdpPerCapita => "GDP",
            Attribute::SocialSupport => "Social support",
            Attribute::HealthyLifeExpectancy => "Life expectancy",
            Attribute::Freedom => "Freedom",
            Attribute::Generosity => "Generosity",
            Attribute::PerceptionsOfCorruption => "Corruption",
        }
    }

    pub fn value(self, record: &Record) -> f64 {
        match self {
            Attribute::LadderScore => record.ladder_score,
            Attribute::LogGdpPerCapita => record.log_gdp_per_capita,
            Attribute::SocialSupport => record.social_support,
            Attribute::HealthyLifeExpectancy => record.healthy_life_expectancy,
            Attribute::Freedom => record.freedom_to_make_life_choices,
            Attribute::Generosity => record.generosity,
            Attribute::PerceptionsOfCorruption => record.perceptions_of_corruption,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full report, loaded once and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
    /// Distinct regions in order of first appearance.
    regions: Vec<String>,
}

impl Dataset {
    /// Build a dataset, rejecting duplicate country names and NaN or
    /// infinite values.
    pub fn from_records(records: Vec<Record>) -> Result<Self, DataError> {
        let mut countries = HashSet::with_capacity(records.len());
        let mut regions: Vec<String> = Vec::new();

        for record in &records {
            if let Some(attribute) = Attribute::ALL
                .into_iter()
                .find(|a| !a.value(record).is_finite())
            {
                return Err(DataError::NonFinite {
                    country: record.country_name.clone(),
                    column: attribute.column(),
                });
            }
            if !countries.insert(record.country_name.as_str()) {
                return Err(DataError::DuplicateCountry(record.country_name.clone()));
            }
            if !regions.contains(&record.region) {
                regions.push(record.region.clone());
            }
        }

        Ok(Dataset { records, regions })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    /// Number of countries.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Observed `(min, max)` of a column, `None` for an empty dataset.
    pub fn range(&self, attribute: Attribute) -> Option<(f64, f64)> {
        self.records
            .iter()
            .map(|r| attribute.value(r))
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn record(country: &str, region: &str, score: f64, gdp: f64) -> Record {
        Record {
            country_name: country.to_string(),
            region: region.to_string(),
            ladder_score: score,
            log_gdp_per_capita: gdp,
            social_support: 0.8,
            healthy_life_expectancy: 65.0,
            freedom_to_make_life_choices: 0.8,
            generosity: 0.0,
            perceptions_of_corruption: 0.7,
        }
    }

    #[test]
    fn regions_keep_first_appearance_order() {
        let ds = Dataset::from_records(vec![
            record("Finland", "Western Europe", 7.8, 10.8),
            record("Afghanistan", "South Asia", 2.5, 7.7),
            record("Denmark", "Western Europe", 7.6, 10.9),
        ])
        .unwrap();
        assert_eq!(ds.regions(), ["Western Europe", "South Asia"]);
        assert_eq!(ds.len(), 3);
    }

    #[test]
    fn duplicate_country_is_rejected() {
        let err = Dataset::from_records(vec![
            record("Finland", "Western Europe", 7.8, 10.8),
            record("Finland", "Western Europe", 7.0, 10.0),
        ])
        .unwrap_err();
        assert!(matches!(err, DataError::DuplicateCountry(name) if name == "Finland"));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let mut finland = record("Finland", "Western Europe", f64::NAN, 10.8);
        let err = Dataset::from_records(vec![finland.clone()]).unwrap_err();
        assert!(matches!(
            err,
            DataError::NonFinite { ref country, column: "Ladder score" } if country == "Finland"
        ));

        finland.ladder_score = 7.8;
        finland.generosity = f64::NEG_INFINITY;
        let err = Dataset::from_records(vec![finland]).unwrap_err();
        assert!(matches!(err, DataError::NonFinite { column: "Generosity", .. }));
    }

    #[test]
    fn range_of_column() {
        let ds = Dataset::from_records(vec![
            record("Finland", "Western Europe", 7.8, 10.8),
            record("Afghanistan", "South Asia", 2.5, 7.7),
        ])
        .unwrap();
        assert_eq!(ds.range(Attribute::LadderScore), Some((2.5, 7.8)));
        assert_eq!(ds.range(Attribute::LogGdpPerCapita), Some((7.7, 10.8)));

        let empty = Dataset::from_records(Vec::new()).unwrap();
        assert_eq!(empty.range(Attribute::LadderScore), None);
    }

    #[test]
    fn attribute_columns_follow_schema() {
        let columns: Vec<&str> = Attribute::ALL.iter().map(|a| a.column()).collect();
        assert_eq!(columns, COLUMNS[2..]);
    }
}
