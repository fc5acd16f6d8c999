mod app;
mod cli;
mod config;
mod consts;
mod controller;
mod core;
mod error;
mod history;
mod output;

use clap::Parser;

use app::CommandContext;
use cli::Cli;
use config::Config;
use crate::core::{Category, RateTable, UnitCatalog};
use history::HistoryLog;

fn init_logging(level: log::LevelFilter) {
    // RUST_LOG, when set, overrides the --debug level
    env_logger::Builder::new()
        .filter(None, log::LevelFilter::Warn)
        .filter(Some("unitconv"), level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    let config = if cli.json {
        Config::load_quiet()
    } else {
        Config::load()
    };
    let cli = cli.with_config(&config);

    init_logging(cli.log_level());

    let catalog = UnitCatalog::standard();
    let rates = match RateTable::standard() {
        Ok(rates) => rates,
        Err(e) => {
            eprintln!("Internal error: {e}");
            std::process::exit(1);
        }
    };
    let missing = rates.missing(catalog.units(Category::Currency));
    if !missing.is_empty() {
        log::warn!("No exchange rate for {}", missing.join(", "));
    }

    let history = HistoryLog::new(cli.history_path());
    log::debug!("Using history file {}", history.path().display());

    let ctx = CommandContext {
        cli: &cli,
        catalog: &catalog,
        rates: &rates,
        history: &history,
    };

    if let Err(e) = app::run(&ctx) {
        if e.is_consistency_fault() {
            eprintln!("Internal error: {e}");
        } else {
            eprintln!("Error: {e}");
        }
        std::process::exit(1);
    }
}
