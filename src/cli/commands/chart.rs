use crate::errors::AppResult;
use crate::ui::messages::warning;

/// The chart view is not implemented; the command only says so.
pub fn handle() -> AppResult<()> {
    warning("Chart view is not available.");
    Ok(())
}
