use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use log::debug;

mod collate;
mod error;
pub mod format;
mod persons;
mod stats;

pub use collate::{locale_cmp, NameCollator};
pub use error::{StoreError, StoreResult};
pub use format::Format;
pub use stats::MonthCounts;

use crate::models::PersonRecord;

/// Read-only, ordered collection of person records.
///
/// Loaded once from a JSON or CSV file (or built in memory) and never
/// modified afterwards.
pub struct Roster {
    records: Vec<PersonRecord>,
    source: Option<PathBuf>,
}

impl Roster {
    /// Load a roster file, picking the format from its extension.
    pub fn open_at(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let format = Format::from_path(path)?;
        if !path.exists() {
            return Err(StoreError::NotFound(path.to_path_buf()));
        }

        let reader = BufReader::new(File::open(path)?);
        let records = match format {
            Format::Json => format::read_json(reader)?,
            Format::Csv => format::read_csv(reader)?,
        };
        debug!("loaded {} records from {}", records.len(), path.display());

        Ok(Self {
            records,
            source: Some(path.to_path_buf()),
        })
    }

    /// Build an in-memory roster (tests, embedding).
    pub fn from_records(records: Vec<PersonRecord>) -> Self {
        Self {
            records,
            source: None,
        }
    }

    pub fn records(&self) -> &[PersonRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Where the records came from, for messages.
    pub fn source_label(&self) -> String {
        match self.source() {
            Some(path) => path.display().to_string(),
            None => "in-memory roster".to_string(),
        }
    }
}
