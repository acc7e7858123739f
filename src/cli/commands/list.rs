use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::store::with_store;
use crate::errors::AppResult;
use crate::models::action::Action;
use crate::models::record::EventRecord;
use crate::utils::colors::{color_for_action, colorize};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { json } = cmd {
        let records = with_store(cfg.database_path(), |store| store.fetch_all())?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&records)?);
        } else {
            print_records(&records);
        }
    }
    Ok(())
}

fn build_table(records: &[EventRecord]) -> Table {
    let action_w = records.iter().map(|r| r.action.len()).max().unwrap_or(0);

    let mut table = Table::new(vec![
        Column::new("Date", 10),
        Column::new("Time", 5),
        Column::new("Action", action_w),
    ]);
    for r in records {
        table.add_row(vec![r.date.clone(), r.time.clone(), r.action.clone()]);
    }
    table
}

/// Print the log as a table, one colored line per record.
pub fn print_records(records: &[EventRecord]) {
    if records.is_empty() {
        println!("No records.");
        return;
    }

    let table = build_table(records);
    println!("{}", table.render_header());
    for (row, r) in table.rows.iter().zip(records) {
        let color = color_for_action(Action::from_db_str(&r.action));
        println!("{}", colorize(&table.render_row(row), color));
    }
}
