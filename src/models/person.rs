use chrono::Month;
use serde::{Deserialize, Deserializer, Serialize};

use super::month::canonical_month;

/// One person's birthday entry.
///
/// The JSON shape uses camelCase keys (`firstName`, `birthMonth`, ...).
/// Loading is lenient: numbers may arrive as strings, `passedAway` may be a
/// date string or `true`, and `null` is accepted everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "blank_as_none")]
    pub birth_month: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "loose_number")]
    pub birth_day: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "loose_number")]
    pub birth_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "marker")]
    pub passed_away: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "blank_as_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty", deserialize_with = "label_list")]
    pub groups: Vec<String>,
}

impl PersonRecord {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Self::default()
        }
    }

    pub fn with_birthday(mut self, month: &str, day: Option<u32>, year: Option<i32>) -> Self {
        self.birth_month = Some(month.to_string()).filter(|m| !m.is_empty());
        self.birth_day = day;
        self.birth_year = year;
        self
    }

    pub fn with_groups(mut self, groups: &[&str]) -> Self {
        self.groups = groups.iter().map(|g| g.to_string()).collect();
        self
    }

    /// The birth month if it spells one of the twelve canonical names.
    pub fn recognized_month(&self) -> Option<Month> {
        self.birth_month.as_deref().and_then(canonical_month)
    }

    pub fn has_passed_away(&self) -> bool {
        self.passed_away.is_some()
    }

    /// "First Last", skipping whichever part is empty.
    pub fn display_name(&self) -> String {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (false, false) => format!("{} {}", self.first_name, self.last_name),
            (false, true) => self.first_name.clone(),
            (true, false) => self.last_name.clone(),
            (true, true) => "(unnamed)".to_string(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.unwrap_or_default())
}

/// Deserialize empty strings as None.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseNumber {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Accept `5`, `5.0`, `"5"`, `""` and `null`. Anything that is not a whole
/// number in range loads as None.
fn loose_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    let raw: Option<LooseNumber> = Option::deserialize(deserializer)?;
    let value = match raw {
        None => None,
        Some(LooseNumber::Int(n)) => Some(n),
        Some(LooseNumber::Float(f)) => whole_number(f),
        Some(LooseNumber::Text(s)) => parse_whole_number(&s),
    };
    Ok(value.and_then(|n| T::try_from(n).ok()))
}

/// Parse trimmed text as a whole number, tolerating "05" and "5.0".
pub(crate) fn parse_whole_number(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(n) = trimmed.parse::<i64>() {
        return Some(n);
    }
    trimmed.parse::<f64>().ok().and_then(whole_number)
}

fn whole_number(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Marker {
    Flag(bool),
    Text(String),
}

/// `passedAway` is either a date string or a bare `true`.
fn marker<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Marker> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(Marker::Flag(true)) => Some("yes".to_string()),
        Some(Marker::Text(s)) if !s.trim().is_empty() => Some(s),
        _ => None,
    })
}

/// Flatten a group list, dropping nulls and empty labels.
fn label_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<Option<String>>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .flatten()
        .filter(|g| !g.is_empty())
        .collect())
}
