use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::models::{FilterField, FilterState};

pub mod browse;
pub mod display;
pub mod list;
pub mod stats;
pub mod ui;

pub use browse::run_browse;
pub use list::run_list;
pub use stats::{run_groups, run_stats};

#[derive(Parser)]
#[command(name = "birthdaycmd")]
#[command(about = "Birthday list filter for the command line")]
#[command(version)]
pub struct Cli {
    /// Roster file (.json or .csv)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List people matching the given filters
    List(ListArgs),
    /// Birthday counts per month and per group
    Stats,
    /// List available groups with member counts
    Groups,
    /// Interactive filter screen
    Browse,
}

#[derive(Args, Default)]
pub struct ListArgs {
    /// First name prefix
    #[arg(long)]
    pub first: Option<String>,
    /// Last name prefix
    #[arg(long)]
    pub last: Option<String>,
    /// Month name, or "all months"
    #[arg(short, long)]
    pub month: Option<String>,
    #[arg(short, long)]
    pub day: Option<String>,
    #[arg(short, long)]
    pub year: Option<String>,
    #[arg(short, long)]
    pub group: Option<String>,
    /// Only people marked as passed away
    #[arg(long)]
    pub passed_away: bool,
    /// Print results as JSON
    #[arg(long, conflicts_with = "csv")]
    pub json: bool,
    /// Print results as CSV
    #[arg(long)]
    pub csv: bool,
}

impl ListArgs {
    pub fn to_filter_state(&self) -> FilterState {
        let text_fields = [
            (FilterField::FirstName, &self.first),
            (FilterField::LastName, &self.last),
            (FilterField::BirthMonth, &self.month),
            (FilterField::BirthDay, &self.day),
            (FilterField::BirthYear, &self.year),
            (FilterField::Group, &self.group),
        ];

        let state = text_fields
            .into_iter()
            .fold(FilterState::default(), |state, (field, value)| match value {
                Some(v) => state.with_field(field, v.as_str()),
                None => state,
            });
        state.with_field(FilterField::PassedAway, self.passed_away)
    }
}
