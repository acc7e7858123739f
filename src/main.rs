//! sleeplogger main entrypoint.

use sleeplogger::errors::AppError;
use sleeplogger::run;
use sleeplogger::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(&e);
        if matches!(e, AppError::StoreUnavailable { .. }) {
            error("Couldn't open database. Quitting.");
        }
        std::process::exit(1);
    }
}
