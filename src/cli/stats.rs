use anyhow::Result;

use super::display::{all_months_label, group_option_label, month_option_label};
use crate::store::Roster;

/// Month lines: the "All Months" total followed by one line per month.
pub fn month_lines(roster: &Roster) -> Vec<String> {
    let counts = roster.month_counts();
    let mut lines = vec![all_months_label(counts.total_with_birthdays)];
    lines.extend(counts.iter().map(|(m, n)| month_option_label(m, n)));
    lines
}

pub fn group_lines(roster: &Roster) -> Vec<String> {
    roster
        .group_counts()
        .iter()
        .map(|(g, n)| group_option_label(g, *n))
        .collect()
}

/// Execute the stats command
pub fn run_stats(roster: &Roster) -> Result<()> {
    println!("{} people\n", roster.len());

    println!("Birthdays");
    for line in month_lines(roster) {
        println!("  {}", line);
    }

    let groups = group_lines(roster);
    if !groups.is_empty() {
        println!("\nGroups");
        for line in groups {
            println!("  {}", line);
        }
    }

    Ok(())
}

/// Execute the groups command
pub fn run_groups(roster: &Roster) -> Result<()> {
    let groups = group_lines(roster);
    if groups.is_empty() {
        println!("No groups.");
        return Ok(());
    }
    for line in groups {
        println!("{}", line);
    }
    Ok(())
}
