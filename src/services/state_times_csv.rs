use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::state_times::WorkflowTimes;

#[derive(Error, Debug)]
pub enum StateTimesCsvError {
    #[error("failed to read state times file {path}: {source}")]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("failed to parse state times file {path}: {source}")]
    Parse { path: PathBuf, source: csv::Error },
    #[error("negative time_spent for state {state} in {path}: {value}")]
    NegativeTime {
        path: PathBuf,
        state: String,
        value: f32,
    },
    #[error("no state records found in {path}")]
    NoRecords { path: PathBuf },
}

#[derive(Debug, Deserialize)]
struct StateTimeRecord {
    state: String,
    time_spent: f32,
}

/// Reads per-state time records from a delimited text file with a
/// `state,time_spent` header row. Additional columns are ignored; rows group
/// by state in first-seen order.
pub fn read_state_times_csv<P: AsRef<Path>>(path: P) -> Result<WorkflowTimes, StateTimesCsvError> {
    let path = path.as_ref();
    let contents =
        std::fs::read_to_string(path).map_err(|source| StateTimesCsvError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
    parse_state_times(&contents, path)
}

fn parse_state_times(
    input: &str,
    origin_path: &Path,
) -> Result<WorkflowTimes, StateTimesCsvError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input.as_bytes());

    let mut times = WorkflowTimes::new();
    for result in reader.deserialize::<StateTimeRecord>() {
        let record = result.map_err(|source| StateTimesCsvError::Parse {
            path: origin_path.to_path_buf(),
            source,
        })?;
        if record.time_spent < 0.0 {
            return Err(StateTimesCsvError::NegativeTime {
                path: origin_path.to_path_buf(),
                state: record.state,
                value: record.time_spent,
            });
        }
        times.push(&record.state, record.time_spent);
    }

    if times.is_empty() {
        return Err(StateTimesCsvError::NoRecords {
            path: origin_path.to_path_buf(),
        });
    }
    Ok(times)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<WorkflowTimes, StateTimesCsvError> {
        parse_state_times(input, Path::new("historical_data.csv"))
    }

    #[test]
    fn parses_and_groups_records_by_state() {
        let input = "state,time_spent\nTo Do,5\nIn Progress,17\nReview,4\nTo Do,8\n";
        let times = parse(input).unwrap();

        let states: Vec<&str> = times
            .states()
            .iter()
            .map(|entry| entry.state.as_str())
            .collect();
        assert_eq!(states, vec!["To Do", "In Progress", "Review"]);
        assert_eq!(times.states()[0].times, vec![5.0, 8.0]);
        assert_eq!(times.states()[1].times, vec![17.0]);
    }

    #[test]
    fn ignores_additional_columns() {
        let input = "state,time_spent,assignee\nTo Do,5,alice\n";
        let times = parse(input).unwrap();
        assert_eq!(times.states()[0].times, vec![5.0]);
    }

    #[test]
    fn rejects_negative_times() {
        let input = "state,time_spent\nTo Do,-2\n";
        assert!(matches!(
            parse(input),
            Err(StateTimesCsvError::NegativeTime { state, .. }) if state == "To Do"
        ));
    }

    #[test]
    fn rejects_files_without_records() {
        let input = "state,time_spent\n";
        assert!(matches!(
            parse(input),
            Err(StateTimesCsvError::NoRecords { .. })
        ));
    }

    #[test]
    fn rejects_non_numeric_times() {
        let input = "state,time_spent\nTo Do,abc\n";
        assert!(matches!(parse(input), Err(StateTimesCsvError::Parse { .. })));
    }

    #[test]
    fn read_state_times_csv_reports_missing_files() {
        let result = read_state_times_csv("does/not/exist.csv");
        assert!(matches!(result, Err(StateTimesCsvError::ReadFile { .. })));
    }
}
