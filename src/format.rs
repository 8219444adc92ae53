//! Output formatting for the archive document and CLI lists.

use crate::store::schema::col;
use crate::types::{Priority, Recurrence, Status, TaskRecord};
use chrono::NaiveDate;

/// Human-readable day names indexed by weekday number (0 = Monday).
const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// A dated archive section for a batch of done rows. The section starts
/// with a blank line so it can be appended to a growing document.
pub fn archive_section(date: NaiveDate, rows: &[Vec<String>]) -> String {
    let mut doc = format!("\n## {}\n\n", date.format("%Y-%m-%d"));
    for row in rows {
        doc.push_str(&archive_entry(row));
        doc.push('\n');
    }
    doc
}

/// One archive bullet, with the note appended after an em-dash when
/// present. Works on raw rows so even rows that never decoded cleanly are
/// preserved in the archive.
fn archive_entry(row: &[String]) -> String {
    let field = |idx: usize| row.get(idx).map(String::as_str).unwrap_or("");
    let mut line = format!(
        "- [x] **{}** (Priority: {}, Created: {})",
        field(col::TASK),
        field(col::PRIORITY),
        field(col::CREATED),
    );
    let notes = field(col::NOTES);
    if !notes.is_empty() {
        line.push_str(&format!(" — {}", notes));
    }
    line
}

/// Format todos as a markdown list with a pending-count footer.
pub fn format_todos_markdown(records: &[TaskRecord]) -> String {
    let mut md = String::new();

    md.push_str(&format!("# Todos ({})\n\n", records.len()));

    for record in records {
        md.push_str(&format_todo_short(record));
    }

    let pending = records
        .iter()
        .filter(|record| record.status == Status::Pending)
        .count();
    md.push_str(&format!("\n{} pending\n", pending));

    md
}

/// Format a single todo as a one-line list item.
fn format_todo_short(record: &TaskRecord) -> String {
    let checkbox = match record.status {
        Status::Pending => "[ ]",
        Status::Done => "[x]",
    };

    let priority_marker = match record.priority {
        Priority::High => "!!! ",
        Priority::Medium => "",
        Priority::Low => "",
    };

    let recurrence = match record.recurrence {
        Recurrence::None => String::new(),
        Recurrence::Daily => " (daily)".to_string(),
        Recurrence::SpecificDays => format!(" (on {})", day_names(&record.days)),
    };

    let due = record
        .due
        .map(|due| format!(" (due {})", due.to_field()))
        .unwrap_or_default();

    let committed = if record.is_committed() {
        " [committed]"
    } else {
        ""
    };

    format!(
        "- {} {}{} `#{}`{}{}{}\n",
        checkbox, priority_marker, record.description, record.id, recurrence, due, committed,
    )
}

/// Day names for a stored day list, e.g. "Monday, Wednesday". Numbers
/// outside 0-6 are skipped.
fn day_names(days: &[u8]) -> String {
    let names: Vec<&str> = days
        .iter()
        .filter_map(|day| WEEKDAY_NAMES.get(*day as usize).copied())
        .collect();
    names.join(", ")
}
