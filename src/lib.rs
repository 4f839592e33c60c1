//! streakcal library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Show => cli::commands::show::handle(cli, cfg),
        Commands::Check { day } => cli::commands::check::handle(cli, cfg, *day, true),
        Commands::Uncheck { day } => cli::commands::check::handle(cli, cfg, *day, false),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command),
        Commands::Log { print } => cli::commands::log::handle(cfg, *print),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load the config once
    let mut cfg = Config::load();

    // Apply a database override from the command line, if any
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
