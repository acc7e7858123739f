use crate::db::log::ttlog_quiet;
use crate::db::store::EventStore;
use crate::errors::AppResult;
use crate::export::{ExportTarget, write_csv};
use crate::share::{ShareRequest, Sharer};
use std::path::{Path, PathBuf};

pub struct ExportLogic;

impl ExportLogic {
    /// Export the whole log, most recent first, to `target`.
    ///
    /// - medium missing → `MediumUnavailable`, nothing written
    /// - I/O error while writing → `WriteFailed`, partial file kept
    ///
    /// Returns the path of the written file.
    pub fn export(store: &EventStore, target: &ExportTarget) -> AppResult<PathBuf> {
        target.ensure_medium()?;

        let records = store.fetch_all()?;
        let path = target.path();
        write_csv(&path, &records)?;

        ttlog_quiet(
            store.conn()?,
            "export",
            &path.to_string_lossy(),
            &format!("{} record(s) exported", records.len()),
        );

        Ok(path)
    }

    pub fn share(store: &EventStore, path: &Path, sharer: &dyn Sharer) -> AppResult<()> {
        sharer.share(&ShareRequest::csv(path))?;
        ttlog_quiet(store.conn()?, "share", &path.to_string_lossy(), "Export shared");
        Ok(())
    }
}
