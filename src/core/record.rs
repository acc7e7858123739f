use crate::db::log::ttlog_quiet;
use crate::db::store::EventStore;
use crate::errors::AppResult;
use crate::models::action::Action;
use crate::utils::time::stamp;
use chrono::NaiveDateTime;

/// Business logic for the `sleep` / `wake` commands.
pub struct RecordLogic;

impl RecordLogic {
    /// Stamp `at` and append it as one record. Returns the new id.
    pub fn log_action(store: &EventStore, action: Action, at: NaiveDateTime) -> AppResult<i64> {
        let (date, time) = stamp(at);
        let id = store.create_record(&date, &time, action.as_str())?;

        ttlog_quiet(
            store.conn()?,
            action.as_str(),
            &format!("#{id}"),
            &format!("{date} {time}"),
        );

        Ok(id)
    }
}
