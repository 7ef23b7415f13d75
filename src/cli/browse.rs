//! Interactive filter screen
//!
//! Shows the menu of filter fields with their current values. Picking a
//! field prompts for a new value, after which the result list is redrawn.
//! Results are only listed while at least one filter is active.

use anyhow::{anyhow, Result};
use std::io::{self, IsTerminal};

use super::display::{
    all_months_label, filter_summary, group_option_label, month_option_label, print_results,
};
use super::ui::{clear_screen, select_index, text_input, PromptResult};
use crate::config::Config;
use crate::controller::FilterController;
use crate::models::{FilterField, FilterState, FilterValue, ALL_MONTHS};
use crate::store::Roster;

/// Menu options with type-safe variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    Field(FilterField),
    Clear,
    Quit,
}

impl MenuOption {
    fn all() -> Vec<MenuOption> {
        let mut options: Vec<MenuOption> =
            FilterField::ALL.iter().map(|f| MenuOption::Field(*f)).collect();
        options.push(MenuOption::Clear);
        options.push(MenuOption::Quit);
        options
    }

    fn label(self, state: &FilterState) -> String {
        match self {
            MenuOption::Field(FilterField::PassedAway) => {
                let mark = if state.passed_away { "x" } else { " " };
                format!("Passed Away [{}]", mark)
            }
            MenuOption::Field(field) => {
                let value = state.get(field);
                if value.is_empty() {
                    field.label().to_string()
                } else {
                    format!("{}: {}", field.label(), value)
                }
            }
            MenuOption::Clear => "Clear".to_string(),
            MenuOption::Quit => "Quit".to_string(),
        }
    }
}

/// A selectable option: display label and the filter value it sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub value: String,
}

impl Choice {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Month options annotated with counts from the full roster.
pub fn month_choices(roster: &Roster) -> Vec<Choice> {
    let counts = roster.month_counts();
    let mut choices = vec![
        Choice::new("-- Month --", ""),
        Choice::new(all_months_label(counts.total_with_birthdays), ALL_MONTHS),
    ];
    choices.extend(
        counts
            .iter()
            .map(|(m, n)| Choice::new(month_option_label(m, n), m.name().to_lowercase())),
    );
    choices
}

/// Group options annotated with counts from the full roster.
pub fn group_choices(roster: &Roster) -> Vec<Choice> {
    let mut choices = vec![Choice::new("-- Group --", "")];
    choices.extend(
        roster
            .group_counts()
            .into_iter()
            .map(|(g, n)| Choice::new(group_option_label(&g, n), g)),
    );
    choices
}

/// Run the interactive filter screen
pub fn run_browse(roster: &Roster, config: &Config) -> Result<()> {
    if !io::stdin().is_terminal() {
        return Err(anyhow!(
            "Interactive mode requires a terminal. Use subcommands for non-interactive use:\n  \
            birthdaycmd list --month march\n  \
            birthdaycmd stats\n  \
            Run 'birthdaycmd --help' for all options."
        ));
    }

    let mut controller = FilterController::new(roster);
    let options = MenuOption::all();
    let mut cursor = 0;

    loop {
        // If this fails, continue anyway (degraded but functional)
        let _ = clear_screen();
        render(&controller, config.color);

        let labels = options.iter().map(|o| o.label(controller.state())).collect();
        let index = match select_index("filter", labels, cursor)? {
            PromptResult::Value(i) => i,
            PromptResult::Skipped | PromptResult::Quit => return Ok(()),
        };
        cursor = index;

        match options[index] {
            MenuOption::Quit => return Ok(()),
            MenuOption::Clear => controller.clear_filters(),
            MenuOption::Field(field) => match prompt_for_field(&controller, field)? {
                PromptResult::Value(value) => {
                    controller.update_filter(field, value);
                }
                PromptResult::Skipped => {}
                PromptResult::Quit => return Ok(()),
            },
        }
    }
}

fn render(controller: &FilterController, color: bool) {
    println!("birthdaycmd  {} people\n", controller.roster().len());
    if controller.any_filter_active() {
        println!("{}\n", filter_summary(controller.state()));
        print_results(&controller.results(), color);
    } else {
        println!("Set a filter to see results.\n");
    }
}

fn prompt_for_field(
    controller: &FilterController,
    field: FilterField,
) -> Result<PromptResult<FilterValue>> {
    let state = controller.state();
    match field {
        FilterField::PassedAway => Ok(PromptResult::Value(FilterValue::Flag(!state.passed_away))),
        FilterField::BirthMonth => {
            let choices = month_choices(controller.roster());
            pick_choice("month", choices, &state.birth_month.to_lowercase())
        }
        FilterField::Group => {
            let choices = group_choices(controller.roster());
            pick_choice("group", choices, &state.group)
        }
        other => {
            let prompt = format!("{}: ", other.label().to_lowercase());
            Ok(text_input(&prompt, &state.get(other))?.map(FilterValue::Text))
        }
    }
}

fn pick_choice(prompt: &str, choices: Vec<Choice>, current: &str) -> Result<PromptResult<FilterValue>> {
    let start = choices.iter().position(|c| c.value == current).unwrap_or(0);
    let labels = choices.iter().map(|c| c.label.clone()).collect();
    let picked = select_index(prompt, labels, start)?;
    Ok(picked.map(|i| FilterValue::Text(choices[i].value.clone())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PersonRecord;

    fn setup_roster() -> Roster {
        Roster::from_records(vec![
            PersonRecord::new("Amy", "Zo")
                .with_birthday("March", Some(14), None)
                .with_groups(&["family"]),
            PersonRecord::new("Bo", "Amy").with_birthday("Marzo", None, None),
        ])
    }

    #[test]
    fn test_month_choices() {
        let choices = month_choices(&setup_roster());
        assert_eq!(choices.len(), 14);
        assert_eq!(choices[0], Choice::new("-- Month --", ""));
        assert_eq!(choices[1], Choice::new("All Months (1)", "all months"));
        assert_eq!(choices[4], Choice::new("March (1)", "march"));
    }

    #[test]
    fn test_month_choice_values_filter_correctly() {
        let roster = setup_roster();
        for choice in month_choices(&roster) {
            let state = FilterState::default().with_field(FilterField::BirthMonth, choice.value.as_str());
            let found = roster.filter_persons(&state).len();
            match choice.value.as_str() {
                "" => assert_eq!(found, 2),
                "march" | ALL_MONTHS => assert_eq!(found, 1),
                _ => assert_eq!(found, 0),
            }
        }
    }

    #[test]
    fn test_group_choices() {
        let choices = group_choices(&setup_roster());
        assert_eq!(
            choices,
            vec![Choice::new("-- Group --", ""), Choice::new("family (1)", "family")]
        );
    }

    #[test]
    fn test_menu_labels_show_current_values() {
        let state = FilterState::default()
            .with_field(FilterField::FirstName, "A")
            .with_field(FilterField::PassedAway, true);
        assert_eq!(MenuOption::Field(FilterField::FirstName).label(&state), "First Name: A");
        assert_eq!(MenuOption::Field(FilterField::LastName).label(&state), "Last Name");
        assert_eq!(MenuOption::Field(FilterField::PassedAway).label(&state), "Passed Away [x]");
        assert_eq!(MenuOption::Clear.label(&state), "Clear");
    }

    #[test]
    fn test_menu_covers_every_field() {
        let options = MenuOption::all();
        for field in FilterField::ALL {
            assert!(options.contains(&MenuOption::Field(*field)));
        }
        assert_eq!(options.last(), Some(&MenuOption::Quit));
    }

    #[test]
    fn test_passed_away_toggles() {
        let roster = setup_roster();
        let controller = FilterController::new(&roster);
        let value = prompt_for_field(&controller, FilterField::PassedAway).unwrap();
        assert_eq!(value, PromptResult::Value(FilterValue::Flag(true)));
    }
}
