//! sleeplogger library root.
//! Exposes the CLI parser, the high-level run() function, and the store,
//! export and share modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod share;
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
        Commands::Sleep { .. } | Commands::Wake { .. } => {
            cli::commands::record::handle(&cli.command, cfg)
        }
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Reset { .. } => cli::commands::reset::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Chart => cli::commands::chart::handle(),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // `init` rewrites the config file, so a broken one must not stop it.
    let mut cfg = match cli.command {
        Commands::Init => Config::default(),
        _ => Config::load()?,
    };
    if let Some(custom_db) = &cli.db {
        cfg.database = Config::resolve_db(custom_db).to_string_lossy().to_string();
    }

    dispatch(&cli, &cfg)
}
