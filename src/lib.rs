//! workhours library root.
//! Exposes the CLI parser, the high-level run() function, and the core modules
//! (record store, storage adapter, taxonomy, CSV interchange).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod import;
pub mod models;
pub mod storage;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Taxonomy => cli::commands::taxonomy::handle(cfg),
        Commands::Add { .. } => cli::commands::add::handle(cli, cfg),
        Commands::Edit { .. } => cli::commands::edit::handle(cli, cfg),
        Commands::Del { .. } => cli::commands::del::handle(cli, cfg),
        Commands::Clear { .. } => cli::commands::clear::handle(cli, cfg),
        Commands::List { .. } => cli::commands::list::handle(cli, cfg),
        Commands::Stats => cli::commands::stats::handle(cli, cfg),
        Commands::Export { .. } => cli::commands::export::handle(cli, cfg),
        Commands::Import { .. } => cli::commands::import::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load();

    // 3️⃣ command-line path overrides
    if let Some(store) = &cli.store {
        cfg.store = store.clone();
    }
    if let Some(taxonomy) = &cli.taxonomy {
        cfg.taxonomy = taxonomy.clone();
    }

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
