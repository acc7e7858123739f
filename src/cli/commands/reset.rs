use crate::cli::commands::list::print_records;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reset::ResetLogic;
use crate::db::store::with_store;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { yes } = cmd {
        if !*yes && !ask_confirmation("Are you sure you want to erase the database?") {
            info("Operation cancelled.");
            return Ok(());
        }

        with_store(cfg.database_path(), |store| {
            let removed = ResetLogic::apply(store)?;
            success(format!("Database erased ({} record(s) deleted).", removed));
            print_records(&store.fetch_all()?);
            Ok(())
        })?;
    }

    Ok(())
}
