//! Column layout of the todo file.
//!
//! The column order is append-only: every schema revision added columns at
//! the end, so a file written by an older revision is a prefix of the
//! current layout. Migration appends the missing columns and never removes
//! or reorders anything.

/// Column names in on-disk order.
///
/// `ID..Notes` is the original layout; `Repeat`/`Days` added recurrence,
/// `CommittedAt`/`LastCompleted` added commitments, `Due` added due dates.
pub const COLUMNS: [&str; 11] = [
    "ID",
    "Task",
    "Priority",
    "Status",
    "Created",
    "Notes",
    "Repeat",
    "Days",
    "CommittedAt",
    "LastCompleted",
    "Due",
];

/// Named column indices. All row access goes through these.
pub mod col {
    pub const ID: usize = 0;
    pub const TASK: usize = 1;
    pub const PRIORITY: usize = 2;
    pub const STATUS: usize = 3;
    pub const CREATED: usize = 4;
    pub const NOTES: usize = 5;
    pub const REPEAT: usize = 6;
    pub const DAYS: usize = 7;
    pub const COMMITTED_AT: usize = 8;
    pub const LAST_COMPLETED: usize = 9;
    pub const DUE: usize = 10;
}

/// The current header row.
pub fn header() -> Vec<String> {
    COLUMNS.iter().map(|name| name.to_string()).collect()
}

/// Extend a short row with empty fields up to the current column count.
/// Rows from older files are shorter; longer rows are left alone.
pub fn pad_row(row: &mut Vec<String>) {
    if row.len() < COLUMNS.len() {
        row.resize(COLUMNS.len(), String::new());
    }
}
