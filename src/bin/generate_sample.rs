//! Writes a synthetic happiness report with the dashboard's input schema.
//!
//! Usage: `generate_sample [OUTPUT] [COUNTRIES]`
//! (defaults: `sample_happiness.csv`, 150 countries)

use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use happiness_dashboard::data::export::save_csv;
use happiness_dashboard::data::model::{Dataset, Record};

/// Region name with its typical ladder score and logged GDP.
const REGIONS: [(&str, f64, f64); 10] = [
    ("Western Europe", 6.9, 10.8),
    ("North America and ANZ", 7.1, 10.8),
    ("Middle East and North Africa", 5.2, 9.4),
    ("Latin America and Caribbean", 5.9, 9.4),
    ("Central and Eastern Europe", 6.0, 10.1),
    ("East Asia", 5.8, 10.4),
    ("Southeast Asia", 5.4, 9.4),
    ("Commonwealth of Independent States", 5.5, 9.4),
    ("Sub-Saharan Africa", 4.5, 8.1),
    ("South Asia", 4.4, 8.7),
];

fn generate(rng: &mut StdRng, n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| {
            let (region, score_mu, gdp_mu) = REGIONS[rng.gen_range(0..REGIONS.len())];
            let ladder_score = (score_mu + rng.gen_range(-0.9..0.9)).clamp(0.0, 10.0);
            let log_gdp_per_capita = gdp_mu + rng.gen_range(-0.6..0.6);
            // Factors loosely track the score so correlations look plausible.
            let t = ladder_score / 10.0;
            Record {
                country_name: format!("Country {:03}", i + 1),
                region: region.to_string(),
                ladder_score,
                log_gdp_per_capita,
                social_support: (0.35 + 0.6 * t + rng.gen_range(-0.08..0.08)).clamp(0.0, 1.0),
                healthy_life_expectancy: 45.0 + 30.0 * t + rng.gen_range(-3.0..3.0),
                freedom_to_make_life_choices: (0.4 + 0.5 * t + rng.gen_range(-0.1..0.1))
                    .clamp(0.0, 1.0),
                generosity: rng.gen_range(-0.3..0.5),
                perceptions_of_corruption: (1.0 - 0.5 * t + rng.gen_range(-0.2..0.2))
                    .clamp(0.0, 1.0),
            }
        })
        .collect()
}

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let output = PathBuf::from(args.next().unwrap_or_else(|| "sample_happiness.csv".into()));
    let count: usize = match args.next() {
        Some(n) => n.parse().with_context(|| format!("invalid country count '{n}'"))?,
        None => 150,
    };

    let mut rng = StdRng::seed_from_u64(2021);
    let dataset = Dataset::from_records(generate(&mut rng, count))?;

    save_csv(&output, dataset.records())
        .with_context(|| format!("writing {}", output.display()))?;

    log::info!("Wrote {} countries to {}", dataset.len(), output.display());
    println!("Wrote {} countries to {}", dataset.len(), output.display());
    Ok(())
}
