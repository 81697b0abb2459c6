//! Users table walk-through.

use std::io::Write;
use std::sync::{Arc, Mutex};

use lintel::prelude::*;
use lintel::widgets::table::{row_checkbox_id, select_all_id};

use crate::error::DemoError;
use crate::sample::{self, selection_summary};
use crate::terminal::Printer;

const TABLE_ID: &str = "users";

/// Selection summaries, one per emission.
type Summaries = Arc<Mutex<Vec<String>>>;

fn users_table(rows: Vec<Record>, summaries: &Summaries) -> DataTable<Record> {
    let sink = Arc::clone(summaries);
    DataTable::new(sample::user_columns())
        .with_id(TABLE_ID)
        .with_rows(rows)
        .selectable(true)
        .on_row_select(move |rows: &[Record]| {
            let summary = selection_summary(rows);
            log::info!("{}", summary);
            if let Ok(mut summaries) = sink.lock() {
                summaries.push(summary);
            }
        })
}

/// Names and emails, only sortable by name.
fn contacts_table(rows: Vec<Record>) -> DataTable<Record> {
    DataTable::new(vec![
        Column::new("name", "Name").sortable(),
        Column::new("email", "Email"),
    ])
    .with_id("contacts")
    .with_rows(rows)
}

fn latest(summaries: &Summaries) -> Option<String> {
    summaries.lock().ok().and_then(|s| s.last().cloned())
}

fn print_table<W: Write>(
    out: &mut Printer<W>,
    table: &DataTable<Record>,
    summaries: &Summaries,
) -> Result<(), DemoError> {
    out.node(&table.render())?;
    if let Some(summary) = latest(summaries) {
        out.note(&summary)?;
    }
    Ok(())
}

pub fn run<W: Write>(out: &mut Printer<W>) -> Result<(), DemoError> {
    let users = sample::users()?;
    let summaries = Summaries::default();
    let table = users_table(users.clone(), &summaries);

    out.heading("Users")?;
    print_table(out, &table, &summaries)?;

    for label in ["ascending", "descending", "back to input order"] {
        out.step(&format!("Click the Name header ({label})"))?;
        table.click_header("name");
        print_table(out, &table, &summaries)?;
    }

    out.step("Sort by status")?;
    table.click_header("status");
    print_table(out, &table, &summaries)?;

    out.step("Click the Email header of a contacts table (not sortable)")?;
    let contacts = contacts_table(users.clone());
    contacts.click_header("email");
    out.note(&format!("sort: {:?}", contacts.sort()))?;
    out.node(&contacts.render())?;

    out.step("Sort by role, then tick Jane and Alice")?;
    table.click_header("role");
    table.on_activate(&row_checkbox_id(TABLE_ID, &RecordId::Int(2)));
    table.on_activate(&row_checkbox_id(TABLE_ID, &RecordId::Int(4)));
    print_table(out, &table, &summaries)?;

    out.step("Select all")?;
    table.on_activate(&select_all_id(TABLE_ID));
    print_table(out, &table, &summaries)?;

    out.step("Select all again (clears)")?;
    table.toggle_select_all();
    print_table(out, &table, &summaries)?;

    out.step("Tick John, then reload without him")?;
    table.toggle_row(1);
    table.set_loading(true);
    out.node(&table.render())?;
    let remaining: Vec<Record> = users
        .into_iter()
        .filter(|user| *user.id() != RecordId::Int(1))
        .collect();
    table.set_rows(remaining);
    table.set_loading(false);
    print_table(out, &table, &summaries)?;
    out.note(&format!(
        "selected ids: {:?}, visible selected rows: {}",
        table.selected_ids(),
        table.selected_rows().len()
    ))?;

    out.step("An empty table")?;
    let empty = users_table(Vec::new(), &summaries);
    out.node(&empty.render())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkbox_clicks_report_sorted_names() {
        let summaries = Summaries::default();
        let table = users_table(sample::users().unwrap(), &summaries);
        table.click_header("name");

        table.on_activate(&row_checkbox_id(TABLE_ID, &RecordId::Int(2)));
        table.on_activate(&row_checkbox_id(TABLE_ID, &RecordId::Int(4)));

        assert_eq!(
            latest(&summaries).as_deref(),
            Some("2 user(s) selected: Alice Brown, Jane Smith")
        );
    }

    #[test]
    fn test_plain_header_click_keeps_order() {
        let table = contacts_table(sample::users().unwrap());

        assert_eq!(table.click_header("email"), EventResult::Ignored);
        assert_eq!(table.sort(), None);
        assert_eq!(table.sorted_rows()[0].field_text("name"), "John Doe");
    }

    #[test]
    fn test_run_prints_summaries() {
        let mut printer = Printer::new(Vec::new());
        run(&mut printer).unwrap();

        let output = String::from_utf8(printer.into_inner()).unwrap();
        assert!(output.contains("5 user(s) selected"));
        assert!(output.contains("0 user(s) selected"));
        assert!(output.contains("Loading data..."));
        assert!(output.contains("No data available"));
    }
}
