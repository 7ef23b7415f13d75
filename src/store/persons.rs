use std::cmp::Ordering;

use log::debug;

use super::collate::NameCollator;
use super::Roster;
use crate::models::{FilterState, PersonRecord};

/// Last name, then first name, both locale-aware.
pub fn compare_by_name(collator: &NameCollator, a: &PersonRecord, b: &PersonRecord) -> Ordering {
    collator
        .compare(&a.last_name, &b.last_name)
        .then_with(|| collator.compare(&a.first_name, &b.first_name))
}

impl Roster {
    /// Records matching every active filter, sorted by last then first name.
    ///
    /// The sort is stable, so records with identical names keep file order.
    pub fn filter_persons(&self, filters: &FilterState) -> Vec<&PersonRecord> {
        let mut results: Vec<&PersonRecord> =
            self.records.iter().filter(|p| filters.matches(p)).collect();
        let collator = NameCollator::new();
        results.sort_by(|a, b| compare_by_name(&collator, a, b));
        debug!("filter matched {} of {} records", results.len(), self.records.len());
        results
    }

    /// Every record, sorted by name.
    pub fn sorted_persons(&self) -> Vec<&PersonRecord> {
        self.filter_persons(&FilterState::default())
    }
}
