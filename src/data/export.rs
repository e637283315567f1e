use std::io::Write;
use std::path::Path;

use super::error::DataError;
use super::model::{Record, COLUMNS};

/// Suggested file name for downloads.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "world_happiness_2021.csv";

/// Write records as CSV in schema column order.
///
/// The header is always written, so an empty selection still produces a
/// valid file.
pub fn write_csv<'r, W: Write>(
    records: impl IntoIterator<Item = &'r Record>,
    writer: W,
) -> Result<(), DataError> {
    let mut out = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    out.write_record(COLUMNS)?;
    for record in records {
        out.serialize(record)?;
    }
    out.flush().map_err(|e| DataError::Csv(csv::Error::from(e)))?;
    Ok(())
}

pub fn to_csv_string<'r>(
    records: impl IntoIterator<Item = &'r Record>,
) -> Result<String, DataError> {
    let mut buf = Vec::new();
    write_csv(records, &mut buf)?;
    // csv output of UTF-8 fields is UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write records to a file, replacing it if present.
pub fn save_csv<'r>(
    path: &Path,
    records: impl IntoIterator<Item = &'r Record>,
) -> Result<(), DataError> {
    let file = std::fs::File::create(path).map_err(|e| DataError::io(path, e))?;
    write_csv(records, std::io::BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::record;

    #[test]
    fn empty_export_still_has_header() {
        let text = to_csv_string(std::iter::empty()).unwrap();
        assert_eq!(text.trim_end(), COLUMNS.join(","));
    }

    #[test]
    fn rows_follow_schema_order() {
        let mut finland = record("Finland", "Western Europe", 7.842, 10.775);
        finland.generosity = -0.098;
        let text = to_csv_string([&finland]).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(COLUMNS.join(",").as_str()));
        assert_eq!(
            lines.next(),
            Some("Finland,Western Europe,7.842,10.775,0.8,65.0,0.8,-0.098,0.7")
        );
        assert_eq!(lines.next(), None);
    }
}
