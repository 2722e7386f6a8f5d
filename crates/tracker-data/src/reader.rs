//! CSV loading for the goal tracker.
//!
//! Reads the survey export produced by the form backend: one header row,
//! then one row per submission. The export is human-edited, so loading is
//! tolerant: malformed records are skipped with a warning and blank rows
//! are dropped.

use std::path::Path;

use tracing::{debug, warn};

use tracker_core::error::{Result, TrackerError};

// ── SurveyRow ─────────────────────────────────────────────────────────────────

/// One submission row: (header, value) pairs in column order.
///
/// Column order is preserved because goal lists accumulate in the order the
/// classifier encounters the cells.
#[derive(Debug, Clone)]
pub struct SurveyRow {
    fields: Vec<(String, String)>,
}

impl SurveyRow {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    /// The value of the first column whose header equals `header`.
    pub fn get(&self, header: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(h, _)| h == header)
            .map(|(_, v)| v.as_str())
    }

    /// All (header, value) pairs in column order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(h, v)| (h.as_str(), v.as_str()))
    }

    /// Whether every cell in the row is blank.
    pub fn is_blank(&self) -> bool {
        self.fields.iter().all(|(_, v)| v.trim().is_empty())
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

/// Load the survey export at `path`.
///
/// Returns the ordered column headers and the data rows in file order.
/// Records with the wrong field count are zipped against the headers as far
/// as they go; unreadable records and fully blank rows are skipped.
pub fn load_survey(path: &Path) -> Result<(Vec<String>, Vec<SurveyRow>)> {
    let file = std::fs::File::open(path).map_err(|source| TrackerError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(file);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows: Vec<SurveyRow> = Vec::new();
    let mut records_skipped = 0u64;

    for record in reader.records() {
        let record = match record {
            Ok(r) => r,
            Err(e) => {
                warn!("Skipping unreadable CSV record in {}: {}", path.display(), e);
                records_skipped += 1;
                continue;
            }
        };

        let fields: Vec<(String, String)> = headers
            .iter()
            .zip(record.iter())
            .map(|(h, v)| (h.clone(), v.to_string()))
            .collect();

        let row = SurveyRow::new(fields);
        if row.is_blank() {
            continue;
        }
        rows.push(row);
    }

    debug!(
        "Loaded {} rows from {} ({} records skipped)",
        rows.len(),
        path.display(),
        records_skipped
    );

    Ok((headers, rows))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_csv(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "{}", content).unwrap();
        path
    }

    #[test]
    fn test_load_survey_headers_and_rows() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            "export.csv",
            "Timestamp,Name,March Goal\n03/05/2026,jane doe,Write report\n",
        );

        let (headers, rows) = load_survey(&path).unwrap();
        assert_eq!(headers, vec!["Timestamp", "Name", "March Goal"]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("Name"), Some("jane doe"));
        assert_eq!(rows[0].get("March Goal"), Some("Write report"));
    }

    #[test]
    fn test_load_survey_preserves_row_and_column_order() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            "export.csv",
            "B,A\nfirst-b,first-a\nsecond-b,second-a\n",
        );

        let (headers, rows) = load_survey(&path).unwrap();
        assert_eq!(headers, vec!["B", "A"]);
        let first: Vec<(&str, &str)> = rows[0].fields().collect();
        assert_eq!(first, vec![("B", "first-b"), ("A", "first-a")]);
        assert_eq!(rows[1].get("A"), Some("second-a"));
    }

    #[test]
    fn test_load_survey_skips_blank_rows() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            "export.csv",
            "Timestamp,Name\n,,\n03/05/2026,jane doe\n , \n",
        );

        let (_, rows) = load_survey(&path).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("Name"), Some("jane doe"));
    }

    #[test]
    fn test_load_survey_short_record_zips_as_far_as_it_goes() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            "export.csv",
            "Timestamp,Name,March Goal\n03/05/2026,jane doe\n",
        );

        let (_, rows) = load_survey(&path).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("Name"), Some("jane doe"));
        assert_eq!(rows[0].get("March Goal"), None);
    }

    #[test]
    fn test_load_survey_missing_file() {
        let err = load_survey(Path::new("/tmp/does-not-exist-tracker-test.csv")).unwrap_err();
        assert!(matches!(err, TrackerError::FileRead { .. }));
    }

    #[test]
    fn test_survey_row_get_first_matching_header() {
        let row = SurveyRow::new(vec![
            ("Goal".to_string(), "first".to_string()),
            ("Goal".to_string(), "second".to_string()),
        ]);
        assert_eq!(row.get("Goal"), Some("first"));
        assert_eq!(row.get("Other"), None);
    }

    #[test]
    fn test_survey_row_is_blank() {
        let blank = SurveyRow::new(vec![("A".to_string(), "  ".to_string())]);
        assert!(blank.is_blank());
        let filled = SurveyRow::new(vec![("A".to_string(), "x".to_string())]);
        assert!(!filled.is_blank());
    }
}
