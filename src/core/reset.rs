use crate::db::log::ttlog_quiet;
use crate::db::store::EventStore;
use crate::errors::AppResult;

pub struct ResetLogic;

impl ResetLogic {
    /// Wipe the sleep log. The internal log table is kept.
    pub fn apply(store: &EventStore) -> AppResult<usize> {
        let removed = store.reset()?;
        ttlog_quiet(
            store.conn()?,
            "reset",
            "sleeplog",
            &format!("{removed} record(s) deleted"),
        );
        Ok(removed)
    }
}
