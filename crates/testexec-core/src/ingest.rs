//! CSV ingest: header validation, then row-by-row reduction.

use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{ReduceError, ReduceResult};
use crate::reduce::{ExecutionRow, ReducedResult, Reducer};

/// Column holding the test case name (may embed a ticket key).
pub const TEST_CASE_COLUMN: &str = "TestCase";
/// Column holding the execution status.
pub const STATUS_COLUMN: &str = "TestCase Status";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Read and reduce one CSV file. The file is fully read and closed before parsing.
pub fn reduce_csv_file(path: &Path) -> ReduceResult<ReducedResult> {
    let bytes = std::fs::read(path).map_err(|e| ReduceError::io(path, e))?;
    debug!(path = %path.display(), bytes = bytes.len(), "read csv");
    reduce_csv_bytes(&bytes)
}

/// Reduce CSV content from any reader.
pub fn reduce_csv_reader<R: Read>(mut reader: R) -> ReduceResult<ReducedResult> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| ReduceError::io("<reader>", e))?;
    reduce_csv_bytes(&bytes)
}

fn reduce_csv_bytes(bytes: &[u8]) -> ReduceResult<ReducedResult> {
    let content = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content);

    let found: Vec<String> = reader.headers()?.iter().map(String::from).collect();
    // Repeated header names resolve to the last column with that name.
    let column = |name: &str| found.iter().rposition(|h| h == name);

    let (test_case_idx, status_idx) = match (column(TEST_CASE_COLUMN), column(STATUS_COLUMN)) {
        (Some(t), Some(s)) => (t, s),
        _ => {
            return Err(ReduceError::MissingColumns {
                expected: vec![TEST_CASE_COLUMN.to_string(), STATUS_COLUMN.to_string()],
                found,
            })
        }
    };

    let mut reducer = Reducer::new();
    let mut rows = 0usize;
    for record in reader.records() {
        let record = record?;
        rows += 1;
        // Short rows read as empty fields.
        reducer.push(ExecutionRow::new(
            record.get(test_case_idx).unwrap_or(""),
            record.get(status_idx).unwrap_or(""),
        ));
    }

    let skipped = reducer.skipped();
    let result = reducer.finish();
    info!(rows, skipped, tickets = result.len(), "reduced csv");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn reduce(content: &str) -> ReduceResult<Vec<(String, String)>> {
        reduce_csv_reader(content.as_bytes()).map(|r| {
            r.into_pairs()
                .into_iter()
                .map(|(t, s)| (t.into_inner(), s.as_str().to_string()))
                .collect()
        })
    }

    fn pair(t: &str, s: &str) -> (String, String) {
        (t.to_string(), s.to_string())
    }

    #[test]
    fn reduces_export_with_extra_columns() {
        let csv = "Run,TestCase,TestCase Status,Duration\n\
                   1,Bug: PROJ-1 step,Passed,3s\n\
                   2,PROJ-1 retry,Failed,2s\n\
                   3,PROJ-2,,1s\n";
        assert_eq!(
            reduce(csv).unwrap(),
            vec![pair("PROJ-1", "failed"), pair("PROJ-2", "")]
        );
    }

    #[test]
    fn missing_status_column_reports_found_headers() {
        let csv = "TestCase,Result\nPROJ-1,Passed\n";
        match reduce(csv) {
            Err(ReduceError::MissingColumns { expected, found }) => {
                assert_eq!(expected, vec!["TestCase", "TestCase Status"]);
                assert_eq!(found, vec!["TestCase", "Result"]);
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn invalid_utf8_row_is_csv_error() {
        let mut bytes = b"TestCase,TestCase Status\n".to_vec();
        bytes.extend_from_slice(b"\xff\xfe,passed\n");
        assert!(matches!(
            reduce_csv_reader(bytes.as_slice()),
            Err(ReduceError::Csv(_))
        ));
    }

    #[test]
    fn header_check_runs_before_rows() {
        // Same unreadable row as above; the header error must surface instead.
        let mut bytes = b"testcase,TestCase Status\n".to_vec();
        bytes.extend_from_slice(b"\xff\xfe,passed\n");
        assert!(matches!(
            reduce_csv_reader(bytes.as_slice()),
            Err(ReduceError::MissingColumns { .. })
        ));
    }

    #[test]
    fn duplicate_header_uses_last_column() {
        let csv = "TestCase,TestCase Status,TestCase Status\nPROJ-1,passed,failed\n";
        assert_eq!(reduce(csv).unwrap(), vec![pair("PROJ-1", "failed")]);
    }

    #[test]
    fn header_match_is_case_sensitive() {
        let csv = "testcase,testcase status\nPROJ-1,passed\n";
        assert!(matches!(
            reduce(csv),
            Err(ReduceError::MissingColumns { .. })
        ));
    }

    #[test]
    fn empty_input_is_missing_columns() {
        match reduce("") {
            Err(ReduceError::MissingColumns { found, .. }) => assert!(found.is_empty()),
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn tolerates_byte_order_mark() {
        let csv = "\u{feff}TestCase,TestCase Status\nQA-7,Passed\n";
        assert_eq!(reduce(csv).unwrap(), vec![pair("QA-7", "passed")]);
    }

    #[test]
    fn short_rows_read_as_empty() {
        let csv = "TestCase,TestCase Status\nQA-1\nQA-2,failed\n";
        assert_eq!(
            reduce(csv).unwrap(),
            vec![pair("QA-1", ""), pair("QA-2", "failed")]
        );
    }

    #[test]
    fn quoted_fields_with_commas() {
        let csv = "TestCase,TestCase Status\n\"Login, QA-5 happy path\",\"Failed\"\n";
        assert_eq!(reduce(csv).unwrap(), vec![pair("QA-5", "failed")]);
    }

    #[test]
    fn reads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "TestCase,TestCase Status").unwrap();
        writeln!(file, "PROJ-9,Failed").unwrap();
        writeln!(file, "PROJ-9,Passed").unwrap();
        let result = reduce_csv_file(file.path()).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.get("PROJ-9").map(|s| s.as_str()), Some("failed"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = reduce_csv_file(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, ReduceError::Io { .. }));
    }
}
