use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThroughputCsvError {
    #[error("failed to read throughput file {path}: {source}")]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("failed to parse throughput file {path}: {source}")]
    Parse { path: PathBuf, source: csv::Error },
    #[error("invalid throughput value in {path}: {value}")]
    InvalidValue { path: PathBuf, value: String },
    #[error("no throughput values found in {path}")]
    NoValues { path: PathBuf },
}

/// Reads throughput observations from a delimited text file. Every non-empty
/// field counts as one observation, so a single row, a single column, or any
/// grid of numbers works.
pub fn read_throughput_csv<P: AsRef<Path>>(path: P) -> Result<Vec<f32>, ThroughputCsvError> {
    let path = path.as_ref();
    let contents =
        std::fs::read_to_string(path).map_err(|source| ThroughputCsvError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
    parse_throughput_values(&contents, path)
}

fn parse_throughput_values(
    input: &str,
    origin_path: &Path,
) -> Result<Vec<f32>, ThroughputCsvError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input.as_bytes());

    let mut values = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| ThroughputCsvError::Parse {
            path: origin_path.to_path_buf(),
            source,
        })?;
        for field in record.iter() {
            if field.is_empty() {
                continue;
            }
            let value: f32 = field
                .parse()
                .map_err(|_| ThroughputCsvError::InvalidValue {
                    path: origin_path.to_path_buf(),
                    value: field.to_string(),
                })?;
            values.push(value);
        }
    }

    if values.is_empty() {
        return Err(ThroughputCsvError::NoValues {
            path: origin_path.to_path_buf(),
        });
    }
    Ok(values)
}
