use anyhow::Context;
use clap::Parser;
use log::debug;

use birthdaycmd::cli::{run_browse, run_groups, run_list, run_stats, ui, Cli, Commands};
use birthdaycmd::config::Config;
use birthdaycmd::store::Roster;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        ui::error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::resolve(cli.file)?;
    debug!("using roster file {}", config.data_file.display());

    let roster = Roster::open_at(&config.data_file)
        .with_context(|| format!("Could not load {}", config.data_file.display()))?;
    if roster.is_empty() {
        ui::warning(&format!("{} contains no people", roster.source_label()));
    }

    match cli.command {
        None | Some(Commands::Browse) => {
            run_browse(&roster, &config)?;
        }
        Some(Commands::List(args)) => {
            run_list(&roster, &args, &config)?;
        }
        Some(Commands::Stats) => {
            run_stats(&roster)?;
        }
        Some(Commands::Groups) => {
            run_groups(&roster)?;
        }
    }

    Ok(())
}
