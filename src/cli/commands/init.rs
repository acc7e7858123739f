use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::db::store::with_store;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database and its schema
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;
    let db_path = cfg.database_path();

    println!("⚙️  Initializing sleeplogger…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", db_path.display());

    with_store(&db_path, |store| {
        ttlog_quiet(
            store.conn()?,
            "init",
            "Database initialized",
            &format!("Database initialized at {}", db_path.display()),
        );
        Ok(())
    })?;

    success(format!("Database initialized at {}", db_path.display()));
    Ok(())
}
