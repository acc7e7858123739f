use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::db::store::with_store;
use crate::errors::AppResult;
use crate::export::ExportTarget;
use crate::share::sharer_for;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { file, share } = cmd {
        let target = match file {
            Some(f) => ExportTarget::from_file(&expand_tilde(f))?,
            None => ExportTarget::new(cfg.export_medium(), cfg.export_file.clone()),
        };

        with_store(cfg.database_path(), |store| {
            let path = ExportLogic::export(store, &target)?;
            success(format!("CSV export completed: {}", path.display()));

            if *share {
                let sharer = sharer_for(cfg.share_command.as_deref());
                ExportLogic::share(store, &path, sharer.as_ref())?;
                success("Export handed to the email program.");
            }
            Ok(())
        })?;
    }
    Ok(())
}
