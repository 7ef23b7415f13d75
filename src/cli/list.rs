use anyhow::{Context, Result};
use std::io::{self, Write};

use super::display::print_results;
use super::ListArgs;
use crate::config::Config;
use crate::store::{format, Roster};

/// Output mode for the list command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Cards,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn from_args(args: &ListArgs) -> Self {
        if args.json {
            Self::Json
        } else if args.csv {
            Self::Csv
        } else {
            Self::Cards
        }
    }
}

/// Execute the list command
pub fn run_list(roster: &Roster, args: &ListArgs, config: &Config) -> Result<()> {
    let filters = args.to_filter_state();
    let results = roster.filter_persons(&filters);

    match OutputFormat::from_args(args) {
        OutputFormat::Cards => {
            if roster.is_empty() {
                println!("No people.");
                return Ok(());
            }
            print_results(&results, config.color);
        }
        OutputFormat::Json => {
            let mut stdout = io::stdout().lock();
            format::write_json(&mut stdout, &results).context("Failed to write JSON")?;
            writeln!(stdout)?;
        }
        OutputFormat::Csv => {
            let stdout = io::stdout().lock();
            format::write_csv(stdout, &results).context("Failed to write CSV")?;
        }
    }

    Ok(())
}
