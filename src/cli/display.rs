use chrono::Month;

use super::ui::emphasis;
use crate::models::{FilterField, FilterState, PersonRecord};

/// "Born: March 14, 1990", with "-" for an unknown month or year.
pub fn born_line(person: &PersonRecord) -> String {
    let month = person.birth_month.as_deref().unwrap_or("-");
    let date = match person.birth_day {
        Some(day) => format!("{} {}", month, day),
        None => month.to_string(),
    };
    let year = person
        .birth_year
        .map(|y| y.to_string())
        .unwrap_or_else(|| "-".to_string());
    format!("Born: {}, {}", date, year)
}

/// Lines of a person card; the name line is emphasized when `color` is on.
pub fn person_card_lines(person: &PersonRecord, color: bool) -> Vec<String> {
    let mut lines = vec![emphasis(&person.display_name(), color)];
    lines.push(format!("  {}", born_line(person)));

    if let Some(ref when) = person.passed_away {
        let rip = if person.first_name.is_empty() {
            String::new()
        } else {
            format!(" (RIP {})", person.first_name)
        };
        lines.push(format!("  Passed away: {}{}", when, rip));
    }

    if !person.groups.is_empty() {
        lines.push(format!("  Groups: {}", person.groups.join(", ")));
    }

    if let Some(ref comment) = person.comment {
        lines.push(format!("  \"{}\"", comment));
    }

    lines
}

pub fn print_person_card(person: &PersonRecord, color: bool) {
    for line in person_card_lines(person, color) {
        println!("{}", line);
    }
}

pub fn result_count_line(count: usize) -> String {
    format!("Found {} result{}", count, if count == 1 { "" } else { "s" })
}

/// Count header, then each card separated by a blank line.
pub fn print_results(results: &[&PersonRecord], color: bool) {
    println!("{}\n", result_count_line(results.len()));
    if results.is_empty() {
        println!("No results found.");
        return;
    }
    for person in results {
        print_person_card(person, color);
        println!();
    }
}

pub fn month_option_label(month: Month, count: usize) -> String {
    format!("{} ({})", month.name(), count)
}

pub fn all_months_label(total_with_birthdays: usize) -> String {
    format!("All Months ({})", total_with_birthdays)
}

pub fn group_option_label(group: &str, count: usize) -> String {
    format!("{} ({})", group, count)
}

/// Active filters as "last: a, month: all months"; empty when none.
pub fn filter_summary(state: &FilterState) -> String {
    FilterField::ALL
        .iter()
        .filter(|f| state.is_field_active(**f))
        .map(|f| format!("{}: {}", f.label().to_lowercase(), state.get(*f)))
        .collect::<Vec<_>>()
        .join(", ")
}
