//! Roster file formats: JSON (camelCase objects) and CSV.

use std::io::{Read, Write};
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use super::error::{StoreError, StoreResult};
use crate::models::PersonRecord;

/// Separator for the group labels packed into one CSV cell.
pub const GROUP_SEPARATOR: char = ';';

pub const CSV_HEADERS: [&str; 8] = [
    "first_name",
    "last_name",
    "birth_month",
    "birth_day",
    "birth_year",
    "passed_away",
    "comment",
    "groups",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Csv,
}

impl Format {
    pub fn from_path(path: &Path) -> StoreResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());
        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("csv") => Ok(Self::Csv),
            _ => Err(StoreError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// A row of a roster CSV file.
///
/// Headers must match field names exactly. Empty cells are absent values.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CsvRow {
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    birth_month: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    birth_day: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    birth_year: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    passed_away: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    comment: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    groups: Option<String>,
}

impl CsvRow {
    fn into_record(self, line: usize) -> PersonRecord {
        PersonRecord {
            birth_day: number_cell(self.birth_day.as_deref(), "birth_day", line),
            birth_year: number_cell(self.birth_year.as_deref(), "birth_year", line),
            groups: self
                .groups
                .as_deref()
                .map(split_groups)
                .unwrap_or_default(),
            first_name: self.first_name,
            last_name: self.last_name,
            birth_month: self.birth_month,
            passed_away: self.passed_away,
            comment: self.comment,
        }
    }

    fn from_record(p: &PersonRecord) -> Self {
        let groups = p.groups.join(&GROUP_SEPARATOR.to_string());
        Self {
            first_name: p.first_name.clone(),
            last_name: p.last_name.clone(),
            birth_month: p.birth_month.clone(),
            birth_day: p.birth_day.map(|d| d.to_string()),
            birth_year: p.birth_year.map(|y| y.to_string()),
            passed_away: p.passed_away.clone(),
            comment: p.comment.clone(),
            groups: Some(groups).filter(|g| !g.is_empty()),
        }
    }
}

/// Deserialize empty strings as None.
fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}

fn number_cell<T: TryFrom<i64>>(cell: Option<&str>, column: &str, line: usize) -> Option<T> {
    let cell = cell?;
    let parsed = crate::models::parse_whole_number(cell).and_then(|n| T::try_from(n).ok());
    if parsed.is_none() {
        warn!("line {}: ignoring {} value {:?}", line, column, cell);
    }
    parsed
}

fn split_groups(cell: &str) -> Vec<String> {
    cell.split(GROUP_SEPARATOR)
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a JSON array of person objects.
pub fn read_json<R: Read>(reader: R) -> StoreResult<Vec<PersonRecord>> {
    let records: Vec<PersonRecord> = serde_json::from_reader(reader)?;
    Ok(records)
}

/// Parse a CSV roster. Rows that fail to parse are skipped with a warning.
pub fn read_csv<R: Read>(reader: R) -> StoreResult<Vec<PersonRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();

    for (idx, result) in csv_reader.deserialize::<CsvRow>().enumerate() {
        let line = idx + 2; // 1-indexed, skip header
        match result {
            Ok(row) => records.push(row.into_record(line)),
            Err(e) => warn!("line {}: skipping unparsable row: {}", line, e),
        }
    }

    Ok(records)
}

pub fn write_json<W: Write>(writer: W, records: &[&PersonRecord]) -> StoreResult<()> {
    serde_json::to_writer_pretty(writer, records)?;
    Ok(())
}

pub fn write_csv<W: Write>(writer: W, records: &[&PersonRecord]) -> StoreResult<()> {
    // Header written by hand so an empty result still gets one
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(CSV_HEADERS)?;
    for record in records {
        csv_writer.serialize(CsvRow::from_record(record))?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(Format::from_path(Path::new("people.json")).unwrap(), Format::Json);
        assert_eq!(Format::from_path(Path::new("People.CSV")).unwrap(), Format::Csv);
        assert!(matches!(
            Format::from_path(Path::new("people.txt")),
            Err(StoreError::UnsupportedFormat(_))
        ));
        assert!(Format::from_path(Path::new("people")).is_err());
    }

    #[test]
    fn test_read_json_array() {
        let json = r#"[
            {"firstName": "Amy", "lastName": "Zo", "birthMonth": "March"},
            {"firstName": "Bo", "lastName": "Amy", "groups": ["family"]}
        ]"#;
        let records = read_json(json.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].birth_month.as_deref(), Some("March"));
        assert_eq!(records[1].groups, vec!["family"]);
    }

    #[test]
    fn test_read_json_rejects_non_array() {
        let result = read_json(r#"{"firstName": "Amy"}"#.as_bytes());
        assert!(matches!(result, Err(StoreError::Json(_))));
    }

    #[test]
    fn test_read_csv() {
        let csv = "first_name,last_name,birth_month,birth_day,birth_year,passed_away,comment,groups\n\
                   Amy,Zo,March,14,1990,,,family; work\n\
                   Bo,Amy,,,,2001-05-02,Met at school,\n";
        let records = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);

        let amy = &records[0];
        assert_eq!(amy.birth_day, Some(14));
        assert_eq!(amy.birth_year, Some(1990));
        assert_eq!(amy.groups, vec!["family", "work"]);
        assert!(amy.passed_away.is_none());

        let bo = &records[1];
        assert!(bo.birth_month.is_none());
        assert_eq!(bo.passed_away.as_deref(), Some("2001-05-02"));
        assert_eq!(bo.comment.as_deref(), Some("Met at school"));
        assert!(bo.groups.is_empty());
    }

    #[test]
    fn test_read_csv_ignores_bad_numbers() {
        let csv = "first_name,last_name,birth_day,birth_year\nAmy,Zo,soon,19x0\n";
        let records = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].birth_day, None);
        assert_eq!(records[0].birth_year, None);
    }

    #[test]
    fn test_read_csv_missing_optional_columns() {
        let csv = "first_name,last_name\nAmy,Zo\n";
        let records = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(records, vec![PersonRecord::new("Amy", "Zo")]);
    }

    #[test]
    fn test_write_csv_packs_groups() {
        let p = PersonRecord::new("Amy", "Zo")
            .with_birthday("March", Some(14), None)
            .with_groups(&["family", "work"]);
        let mut out = Vec::new();
        write_csv(&mut out, &[&p]).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("first_name,last_name,birth_month,birth_day,birth_year,passed_away,comment,groups")
        );
        assert_eq!(lines.next(), Some("Amy,Zo,March,14,,,,family;work"));
    }

    #[test]
    fn test_write_csv_empty_has_header() {
        let mut out = Vec::new();
        write_csv(&mut out, &[]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().trim_end(), CSV_HEADERS.join(","));
    }

    #[test]
    fn test_write_json_matches_input_shape() {
        let p = PersonRecord::new("Amy", "Zo").with_groups(&["family"]);
        let mut out = Vec::new();
        write_json(&mut out, &[&p]).unwrap();
        let back = read_json(out.as_slice()).unwrap();
        assert_eq!(back, vec![p]);
    }
}
