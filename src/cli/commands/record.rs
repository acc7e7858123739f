use crate::cli::commands::list::print_records;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::record::RecordLogic;
use crate::db::store::with_store;
use crate::errors::AppResult;
use crate::models::action::Action;
use crate::ui::messages::success;
use crate::utils::time;

/// Handle `sleep` and `wake`: append one record, then show the log again.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (action, at) = match cmd {
        Commands::Sleep { at } => (Action::Sleep, at),
        Commands::Wake { at } => (Action::Wake, at),
        _ => return Ok(()),
    };

    let moment = match at {
        Some(s) => time::parse_timestamp(s)?,
        None => time::now(),
    };

    with_store(cfg.database_path(), |store| {
        let id = RecordLogic::log_action(store, action, moment)?;
        success(format!("Logged {} (#{})", action, id));
        print_records(&store.fetch_all()?);
        Ok(())
    })
}
