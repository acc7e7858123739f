//! ANSI color helper utilities for terminal output.
use crate::models::action::Action;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const BLUE: &str = "\x1b[34m";
pub const YELLOW: &str = "\x1b[33m";

/// Sleep rows blue, wake rows yellow, unknown labels grey.
pub fn color_for_action(action: Option<Action>) -> &'static str {
    match action {
        Some(Action::Sleep) => BLUE,
        Some(Action::Wake) => YELLOW,
        None => GREY,
    }
}

pub fn colorize(line: &str, color: &str) -> String {
    format!("{color}{line}{RESET}")
}
