//! Filter state and the per-record match predicate.
//!
//! `FilterState` is an immutable value: every update goes through
//! [`FilterState::with_field`], which returns a fresh copy. Comparing two
//! states with `==` is therefore enough to detect a change.

use super::month::ALL_MONTHS;
use super::person::{parse_whole_number, PersonRecord};

/// A filter field the user can set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    FirstName,
    LastName,
    BirthMonth,
    BirthDay,
    BirthYear,
    Group,
    PassedAway,
}

impl FilterField {
    pub const ALL: &'static [FilterField] = &[
        FilterField::FirstName,
        FilterField::LastName,
        FilterField::BirthMonth,
        FilterField::BirthDay,
        FilterField::BirthYear,
        FilterField::Group,
        FilterField::PassedAway,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::BirthMonth => "birthMonth",
            Self::BirthDay => "birthDay",
            Self::BirthYear => "birthYear",
            Self::Group => "group",
            Self::PassedAway => "passedAway",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::BirthMonth => "Month",
            Self::BirthDay => "Day",
            Self::BirthYear => "Year",
            Self::Group => "Group",
            Self::PassedAway => "Passed Away",
        }
    }

    /// Accepts the camelCase key, the snake_case key, or a short alias.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('_', "").as_str() {
            "firstname" | "first" => Some(Self::FirstName),
            "lastname" | "last" => Some(Self::LastName),
            "birthmonth" | "month" => Some(Self::BirthMonth),
            "birthday" | "day" => Some(Self::BirthDay),
            "birthyear" | "year" => Some(Self::BirthYear),
            "group" | "groups" => Some(Self::Group),
            "passedaway" | "deceased" => Some(Self::PassedAway),
            _ => None,
        }
    }

    pub fn is_flag(&self) -> bool {
        matches!(self, Self::PassedAway)
    }
}

/// A value assigned to a filter field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Text(String),
    Flag(bool),
}

impl FilterValue {
    fn into_text(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Flag(true) => "true".to_string(),
            Self::Flag(false) => String::new(),
        }
    }

    fn into_flag(self) -> bool {
        match self {
            Self::Flag(b) => b,
            Self::Text(s) => !(s.is_empty() || s == "false" || s == "0"),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for FilterValue {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}

/// The current set of user-entered search constraints.
///
/// Empty text (or a false flag) means the field places no constraint.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub first_name: String,
    pub last_name: String,
    pub birth_month: String,
    pub birth_day: String,
    pub birth_year: String,
    pub passed_away: bool,
    pub group: String,
}

impl FilterState {
    /// Return a copy with `field` replaced by `value`. No validation.
    pub fn with_field(&self, field: FilterField, value: impl Into<FilterValue>) -> Self {
        let value = value.into();
        let mut next = self.clone();
        match field {
            FilterField::FirstName => next.first_name = value.into_text(),
            FilterField::LastName => next.last_name = value.into_text(),
            FilterField::BirthMonth => next.birth_month = value.into_text(),
            FilterField::BirthDay => next.birth_day = value.into_text(),
            FilterField::BirthYear => next.birth_year = value.into_text(),
            FilterField::Group => next.group = value.into_text(),
            FilterField::PassedAway => next.passed_away = value.into_flag(),
        }
        next
    }

    /// Current value of `field` rendered as text, for prompts and summaries.
    pub fn get(&self, field: FilterField) -> String {
        match field {
            FilterField::FirstName => self.first_name.clone(),
            FilterField::LastName => self.last_name.clone(),
            FilterField::BirthMonth => self.birth_month.clone(),
            FilterField::BirthDay => self.birth_day.clone(),
            FilterField::BirthYear => self.birth_year.clone(),
            FilterField::Group => self.group.clone(),
            FilterField::PassedAway => {
                if self.passed_away {
                    "yes".to_string()
                } else {
                    String::new()
                }
            }
        }
    }

    pub fn is_field_active(&self, field: FilterField) -> bool {
        match field {
            FilterField::PassedAway => self.passed_away,
            other => !self.get(other).is_empty(),
        }
    }

    /// True if any field differs from its default.
    pub fn any_active(&self) -> bool {
        FilterField::ALL.iter().any(|f| self.is_field_active(*f))
    }

    /// True iff every active predicate holds on `person`.
    pub fn matches(&self, person: &PersonRecord) -> bool {
        prefix_matches(&self.first_name, &person.first_name)
            && prefix_matches(&self.last_name, &person.last_name)
            && self.month_matches(person)
            && loose_eq(&self.birth_day, person.birth_day.map(i64::from))
            && loose_eq(&self.birth_year, person.birth_year.map(i64::from))
            && self.group_matches(person)
            && (!self.passed_away || person.has_passed_away())
    }

    fn month_matches(&self, person: &PersonRecord) -> bool {
        if self.birth_month.is_empty() {
            return true;
        }
        let wanted = self.birth_month.to_lowercase();
        if wanted == ALL_MONTHS {
            return person.recognized_month().is_some();
        }
        person
            .birth_month
            .as_deref()
            .is_some_and(|m| m.to_lowercase() == wanted)
    }

    fn group_matches(&self, person: &PersonRecord) -> bool {
        if self.group.is_empty() {
            return true;
        }
        let wanted = self.group.to_lowercase();
        person.groups.iter().any(|g| g.to_lowercase() == wanted)
    }
}

/// Case-insensitive "starts with"; an empty filter always matches.
fn prefix_matches(filter: &str, value: &str) -> bool {
    filter.is_empty() || value.to_lowercase().starts_with(&filter.to_lowercase())
}

/// Numeric-as-text equality. Text that is not a whole number matches nothing.
fn loose_eq(filter: &str, value: Option<i64>) -> bool {
    if filter.is_empty() {
        return true;
    }
    match (parse_whole_number(filter), value) {
        (Some(wanted), Some(actual)) => wanted == actual,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amy_zo() -> PersonRecord {
        PersonRecord::new("Amy", "Zo").with_birthday("March", Some(14), Some(1990))
    }

    fn bo_amy() -> PersonRecord {
        PersonRecord::new("Bo", "Amy").with_birthday("March", Some(2), Some(1985))
    }

    #[test]
    fn test_default_state_matches_everything() {
        let f = FilterState::default();
        assert!(f.matches(&amy_zo()));
        assert!(f.matches(&PersonRecord::default()));
        assert!(!f.any_active());
    }

    #[test]
    fn test_last_name_prefix_case_insensitive() {
        let f = FilterState::default().with_field(FilterField::LastName, "a");
        assert!(!f.matches(&amy_zo()));
        assert!(f.matches(&bo_amy()));

        let f = FilterState::default().with_field(FilterField::LastName, "AM");
        assert!(f.matches(&bo_amy()));
    }

    #[test]
    fn test_first_name_prefix_not_substring() {
        let f = FilterState::default().with_field(FilterField::FirstName, "my");
        assert!(!f.matches(&amy_zo()));
        let f = FilterState::default().with_field(FilterField::FirstName, "am");
        assert!(f.matches(&amy_zo()));
    }

    #[test]
    fn test_month_exact_match() {
        let f = FilterState::default().with_field(FilterField::BirthMonth, "march");
        assert!(f.matches(&amy_zo()));
        let f = FilterState::default().with_field(FilterField::BirthMonth, "Mar");
        assert!(!f.matches(&amy_zo()));
        let f = FilterState::default().with_field(FilterField::BirthMonth, "april");
        assert!(!f.matches(&amy_zo()));
        assert!(!f.matches(&PersonRecord::new("No", "Month")));
    }

    #[test]
    fn test_all_months_excludes_unrecognized_month() {
        let f = FilterState::default().with_field(FilterField::BirthMonth, "All Months");
        let marzo = PersonRecord::new("Ana", "Ruiz").with_birthday("Marzo", Some(2), None);
        assert!(f.matches(&amy_zo()));
        assert!(!f.matches(&marzo));
        assert!(!f.matches(&PersonRecord::new("No", "Month")));
    }

    #[test]
    fn test_unrecognized_month_still_matches_exactly() {
        let marzo = PersonRecord::new("Ana", "Ruiz").with_birthday("Marzo", None, None);
        let f = FilterState::default().with_field(FilterField::BirthMonth, "marzo");
        assert!(f.matches(&marzo));
    }

    #[test]
    fn test_day_and_year_loose_equality() {
        let p = amy_zo();
        for day in ["14", " 14", "014", "14.0"] {
            let f = FilterState::default().with_field(FilterField::BirthDay, day);
            assert!(f.matches(&p), "day {:?} should match", day);
        }
        for day in ["15", "abc", "14.5", "   "] {
            let f = FilterState::default().with_field(FilterField::BirthDay, day);
            assert!(!f.matches(&p), "day {:?} should not match", day);
        }
        let f = FilterState::default().with_field(FilterField::BirthYear, "1990");
        assert!(f.matches(&p));
        assert!(!f.matches(&bo_amy()));
    }

    #[test]
    fn test_day_filter_excludes_records_without_day() {
        let f = FilterState::default().with_field(FilterField::BirthDay, "1");
        assert!(!f.matches(&PersonRecord::new("No", "Day")));
    }

    #[test]
    fn test_group_case_insensitive_exact() {
        let p = amy_zo().with_groups(&["family", "work"]);
        let f = FilterState::default().with_field(FilterField::Group, "Family");
        assert!(f.matches(&p));
        let f = FilterState::default().with_field(FilterField::Group, "fam");
        assert!(!f.matches(&p));
        let f = FilterState::default().with_field(FilterField::Group, "family");
        assert!(!f.matches(&amy_zo()));
    }

    #[test]
    fn test_passed_away_flag_restricts_to_marked_records() {
        let mut gone = bo_amy();
        gone.passed_away = Some("2020".to_string());
        let f = FilterState::default().with_field(FilterField::PassedAway, true);
        assert!(f.matches(&gone));
        assert!(!f.matches(&amy_zo()));
        assert!(f.any_active());
    }

    #[test]
    fn test_all_predicates_combine() {
        let p = amy_zo().with_groups(&["friends"]);
        let f = FilterState::default()
            .with_field(FilterField::FirstName, "a")
            .with_field(FilterField::LastName, "z")
            .with_field(FilterField::BirthMonth, "MARCH")
            .with_field(FilterField::BirthDay, "14")
            .with_field(FilterField::BirthYear, "1990")
            .with_field(FilterField::Group, "Friends");
        assert!(f.matches(&p));
        assert!(!f.with_field(FilterField::BirthYear, "1991").matches(&p));
    }

    #[test]
    fn test_with_field_leaves_original_untouched() {
        let before = FilterState::default();
        let after = before.with_field(FilterField::FirstName, "A");
        assert_eq!(before, FilterState::default());
        assert_ne!(before, after);
        assert_eq!(after.first_name, "A");
    }

    #[test]
    fn test_any_active_per_field() {
        for field in FilterField::ALL {
            let value: FilterValue = if field.is_flag() { true.into() } else { "x".into() };
            let f = FilterState::default().with_field(*field, value);
            assert!(f.any_active(), "{:?} should count as active", field);
        }
        let f = FilterState::default().with_field(FilterField::PassedAway, false);
        assert!(!f.any_active());
    }

    #[test]
    fn test_flag_and_text_coercion() {
        let f = FilterState::default().with_field(FilterField::PassedAway, "true");
        assert!(f.passed_away);
        let f = f.with_field(FilterField::PassedAway, "false");
        assert!(!f.passed_away);
        let f = FilterState::default().with_field(FilterField::FirstName, true);
        assert_eq!(f.first_name, "true");
    }

    #[test]
    fn test_field_parse_aliases() {
        assert_eq!(FilterField::parse("firstName"), Some(FilterField::FirstName));
        assert_eq!(FilterField::parse("first_name"), Some(FilterField::FirstName));
        assert_eq!(FilterField::parse("last"), Some(FilterField::LastName));
        assert_eq!(FilterField::parse("birthDay"), Some(FilterField::BirthDay));
        assert_eq!(FilterField::parse("passed_away"), Some(FilterField::PassedAway));
        assert_eq!(FilterField::parse("nickname"), None);
        for field in FilterField::ALL {
            assert_eq!(FilterField::parse(field.as_str()), Some(*field));
        }
    }
}
