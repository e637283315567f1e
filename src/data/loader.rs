use std::io::Read;
use std::path::Path;

use super::error::DataError;
use super::model::{Dataset, Record, COLUMNS};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the happiness report from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – the report as published, one country per row
/// * `.json` – `[{ "Country name": ..., "Ladder score": ..., ... }, ...]`
pub fn load_file(path: &Path) -> Result<Dataset, DataError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let file = || std::fs::File::open(path).map_err(|e| DataError::io(path, e));
    let dataset = match ext.as_str() {
        "csv" => load_csv_reader(file()?)?,
        "json" => load_json_reader(file()?)?,
        other => return Err(DataError::UnsupportedExtension(other.to_string())),
    };

    log::info!(
        "Loaded {} countries in {} regions from {}",
        dataset.len(),
        dataset.regions().len(),
        path.display()
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Parse the report from CSV.
///
/// Every column of [`COLUMNS`] must be present; any other column (the
/// report also ships whiskers and "Explained by: …" breakdowns) is ignored.
/// The first malformed row aborts the load.
pub fn load_csv_reader<R: Read>(reader: R) -> Result<Dataset, DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    if let Some(missing) = COLUMNS
        .iter()
        .copied()
        .find(|col| !headers.iter().any(|h| h == *col))
    {
        return Err(DataError::MissingColumn(missing.to_string()));
    }

    let records = reader
        .deserialize::<Record>()
        .collect::<Result<Vec<_>, _>>()?;

    Dataset::from_records(records)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "Country name": "Finland",
///     "Regional indicator": "Western Europe",
///     "Ladder score": 7.842,
///     ...
///   },
///   ...
/// ]
/// ```
pub fn load_json_reader<R: Read>(reader: R) -> Result<Dataset, DataError> {
    let records: Vec<Record> = serde_json::from_reader(std::io::BufReader::new(reader))?;
    Dataset::from_records(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Country name,Regional indicator,Ladder score,Logged GDP per capita,\
        Social support,Healthy life expectancy,Freedom to make life choices,Generosity,\
        Perceptions of corruption";

    #[test]
    fn parses_rows_in_file_order() {
        let text = format!(
            "{HEADER}\nFinland,Western Europe,7.842,10.775,0.954,72,0.949,-0.098,0.186\n\
             Afghanistan,South Asia,2.523,7.695,0.463,52.493,0.382,-0.102,0.924\n"
        );
        let ds = load_csv_reader(text.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records()[0].country_name, "Finland");
        assert_eq!(ds.records()[0].healthy_life_expectancy, 72.0);
        assert_eq!(ds.records()[1].generosity, -0.102);
    }

    #[test]
    fn extra_columns_are_ignored() {
        let text = "Country name,Regional indicator,Ladder score,Standard error of ladder score,\
            Logged GDP per capita,Social support,Healthy life expectancy,\
            Freedom to make life choices,Generosity,Perceptions of corruption\n\
            Finland,Western Europe,7.842,0.032,10.775,0.954,72,0.949,-0.098,0.186\n";
        let ds = load_csv_reader(text.as_bytes()).unwrap();
        assert_eq!(ds.records()[0].log_gdp_per_capita, 10.775);
    }

    #[test]
    fn missing_column_is_fatal() {
        let text = "Country name,Regional indicator,Ladder score\nFinland,Western Europe,7.8\n";
        let err = load_csv_reader(text.as_bytes()).unwrap_err();
        assert!(matches!(err, DataError::MissingColumn(col) if col == "Logged GDP per capita"));
    }

    #[test]
    fn malformed_row_is_fatal() {
        let text =
            format!("{HEADER}\nFinland,Western Europe,high,10.775,0.954,72,0.949,-0.098,0.186\n");
        assert!(matches!(load_csv_reader(text.as_bytes()), Err(DataError::Csv(_))));
    }

    #[test]
    fn nan_and_infinite_cells_are_fatal() {
        let nan =
            format!("{HEADER}\nFinland,Western Europe,NaN,10.775,0.954,72,0.949,-0.098,0.186\n");
        assert!(matches!(
            load_csv_reader(nan.as_bytes()),
            Err(DataError::NonFinite { column: "Ladder score", .. })
        ));

        let inf =
            format!("{HEADER}\nDenmark,Western Europe,7.6,inf,0.954,72,0.949,0.03,0.179\n");
        assert!(matches!(
            load_csv_reader(inf.as_bytes()),
            Err(DataError::NonFinite { column: "Logged GDP per capita", .. })
        ));
    }

    #[test]
    fn json_records_load() {
        let text = r#"[{"Country name": "Finland", "Regional indicator": "Western Europe",
            "Ladder score": 7.842, "Logged GDP per capita": 10.775, "Social support": 0.954,
            "Healthy life expectancy": 72.0, "Freedom to make life choices": 0.949,
            "Generosity": -0.098, "Perceptions of corruption": 0.186}]"#;
        let ds = load_json_reader(text.as_bytes()).unwrap();
        assert_eq!(ds.regions(), ["Western Europe"]);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = load_file(Path::new("report.xlsx")).unwrap_err();
        assert!(matches!(err, DataError::UnsupportedExtension(ext) if ext == "xlsx"));
    }
}
