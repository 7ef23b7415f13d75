//! Owner of the current filter state for one interactive session.

use crate::models::{FilterField, FilterState, FilterValue, PersonRecord};
use crate::store::Roster;

/// Holds the current `FilterState` and recomputes results on demand.
///
/// Every update replaces the state wholesale, so callers can detect a
/// change by comparing the returned flag or two `state()` snapshots.
pub struct FilterController<'a> {
    roster: &'a Roster,
    state: FilterState,
}

impl<'a> FilterController<'a> {
    pub fn new(roster: &'a Roster) -> Self {
        Self::with_state(roster, FilterState::default())
    }

    pub fn with_state(roster: &'a Roster, state: FilterState) -> Self {
        Self { roster, state }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn roster(&self) -> &'a Roster {
        self.roster
    }

    /// Set one field. Returns true if the state changed.
    pub fn update_filter(&mut self, field: FilterField, value: impl Into<FilterValue>) -> bool {
        let next = self.state.with_field(field, value);
        let changed = next != self.state;
        self.state = next;
        changed
    }

    pub fn clear_filters(&mut self) {
        self.state = FilterState::default();
    }

    pub fn any_filter_active(&self) -> bool {
        self.state.any_active()
    }

    pub fn results(&self) -> Vec<&'a PersonRecord> {
        self.roster.filter_persons(&self.state)
    }
}
