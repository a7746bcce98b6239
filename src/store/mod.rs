// src/store/mod.rs

use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};
use tracing::info;

use crate::model::DividendRecord;

/// Write the full record sequence as a pretty-printed JSON array (2-space
/// indent), replacing any previous file at `path`.
pub fn write_records(path: impl AsRef<Path>, records: &[DividendRecord]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("creating output file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)
        .with_context(|| format!("serializing records to {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("flushing {}", path.display()))?;

    info!(count = records.len(), path = %path.display(), "wrote dividend records");
    Ok(())
}

/// Read a previously written record file back into memory.
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<DividendRecord>> {
    let path = path.as_ref();
    let file =
        File::open(path).with_context(|| format!("opening record file {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing records from {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample(n: usize) -> Vec<DividendRecord> {
        (0..n)
            .map(|i| DividendRecord {
                ticker: "CONY".to_string(),
                dividend_amount: 0.01 * (i + 1) as f64,
                declared_date: format!("2024-{:02}-01", i + 1),
                ex_date: format!("2024-{:02}-05", i + 1),
                record_date: format!("2024-{:02}-08", i + 1),
                payable_date: format!("2024-{:02}-15", i + 1),
            })
            .collect()
    }

    #[test]
    fn round_trip_preserves_order_and_values() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("dividends.json");

        let records = sample(7);
        write_records(&path, &records)?;
        let loaded = read_records(&path)?;

        assert_eq!(loaded, records);
        Ok(())
    }

    #[test]
    fn output_is_an_indented_array_with_named_fields() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("dividends.json");

        write_records(&path, &sample(1))?;
        let text = std::fs::read_to_string(&path)?;

        assert!(text.starts_with("[\n  {"));
        for key in [
            "\"ticker\"",
            "\"dividend_amount\"",
            "\"declared_date\"",
            "\"ex_date\"",
            "\"record_date\"",
            "\"payable_date\"",
        ] {
            assert!(text.contains(key), "missing {} in {}", key, text);
        }
        Ok(())
    }

    #[test]
    fn overwrites_previous_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("dividends.json");

        write_records(&path, &sample(5))?;
        write_records(&path, &sample(2))?;

        let loaded = read_records(&path)?;
        assert_eq!(loaded.len(), 2);
        Ok(())
    }
}
