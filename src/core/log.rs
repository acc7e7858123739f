use crate::db::log::{LogEntry, load_log};
use crate::db::store::EventStore;
use crate::errors::AppResult;
use crate::ui::messages::info;
use ansi_term::Colour;

const MAX_OP_WIDTH: usize = 60;

/// ANSI color by operation name
fn color_for_operation(op: &str) -> Colour {
    match op {
        "sleep" => Colour::Blue,
        "wake" => Colour::Yellow,
        "reset" => Colour::Red,
        "export" | "share" => Colour::Green,
        "schema_upgrade" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

fn op_target(e: &LogEntry) -> String {
    if e.target.is_empty() {
        e.operation.clone()
    } else {
        format!("{} ({})", e.operation, e.target)
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let mut t: String = s.chars().take(max - 3).collect();
        t.push_str("...");
        t
    } else {
        s.to_string()
    }
}

/// Render one line. Padding is computed on the plain text, then only the
/// operation word is painted.
fn render_line(e: &LogEntry, id_w: usize, date_w: usize, op_w: usize) -> String {
    let plain = truncate(&op_target(e), MAX_OP_WIDTH);
    let padding = " ".repeat(op_w.saturating_sub(plain.chars().count()));

    let color = color_for_operation(&e.operation);
    let painted = match plain.split_once(' ') {
        Some((op, rest)) => format!("{} {}", color.paint(op), rest),
        None => color.paint(plain.as_str()).to_string(),
    };

    format!(
        "{:>id_w$}: {:<date_w$} | {}{} => {}",
        e.id,
        e.date,
        painted,
        padding,
        e.message,
        id_w = id_w,
        date_w = date_w
    )
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(store: &EventStore) -> AppResult<()> {
        let entries = load_log(store.conn()?)?;

        if entries.is_empty() {
            info("Internal log is empty.");
            return Ok(());
        }

        let op_w = entries
            .iter()
            .map(|e| op_target(e).chars().count())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");
        for e in &entries {
            println!("{}", render_line(e, id_w, date_w, op_w));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(op: &str, target: &str) -> LogEntry {
        LogEntry {
            id: 7,
            date: "2024-01-01T23:05:00+00:00".into(),
            operation: op.into(),
            target: target.into(),
            message: "msg".into(),
        }
    }

    #[test]
    fn long_targets_are_truncated() {
        let long = "x".repeat(100);
        let t = truncate(&op_target(&entry("export", &long)), MAX_OP_WIDTH);
        assert_eq!(t.chars().count(), MAX_OP_WIDTH);
        assert!(t.ends_with("..."));
    }

    #[test]
    fn line_keeps_id_and_message() {
        let line = render_line(&entry("reset", "sleeplog"), 2, 25, 20);
        assert!(line.starts_with(" 7: 2024-01-01T23:05:00+00:00"));
        assert!(line.ends_with("=> msg"));
        assert!(line.contains("(sleeplog)"));
    }
}
