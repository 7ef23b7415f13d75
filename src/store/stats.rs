//! Counts over the full, unfiltered roster, used to annotate filter options.

use std::collections::{BTreeMap, BTreeSet};

use chrono::Month;

use super::Roster;
use crate::models::MONTHS;

/// Birthday counts per canonical month.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MonthCounts {
    /// Indexed by month number minus one.
    counts: [usize; 12],
    /// Records whose month spells a canonical name.
    pub total_with_birthdays: usize,
}

impl MonthCounts {
    pub fn get(&self, month: Month) -> usize {
        self.counts[month.number_from_month() as usize - 1]
    }

    /// `(month, count)` pairs in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = (Month, usize)> + '_ {
        MONTHS.iter().map(move |m| (*m, self.get(*m)))
    }

    pub fn sum(&self) -> usize {
        self.counts.iter().sum()
    }
}

impl Roster {
    pub fn month_counts(&self) -> MonthCounts {
        let mut result = MonthCounts::default();
        for month in self.records.iter().filter_map(|p| p.recognized_month()) {
            result.counts[month.number_from_month() as usize - 1] += 1;
            result.total_with_birthdays += 1;
        }
        result
    }

    /// Distinct group labels across all records, sorted.
    pub fn available_groups(&self) -> Vec<String> {
        let groups: BTreeSet<&str> = self
            .records
            .iter()
            .flat_map(|p| p.groups.iter())
            .map(String::as_str)
            .filter(|g| !g.is_empty())
            .collect();
        groups.into_iter().map(str::to_string).collect()
    }

    /// Number of records carrying each available group label (exact match).
    pub fn group_counts(&self) -> BTreeMap<String, usize> {
        self.available_groups()
            .into_iter()
            .map(|group| {
                let count = self
                    .records
                    .iter()
                    .filter(|p| p.groups.iter().any(|g| *g == group))
                    .count();
                (group, count)
            })
            .collect()
    }
}
