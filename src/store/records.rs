//! CRUD over todo rows.

use super::schema::{self, col};
use super::TaskStore;
use crate::error::{Error, Result};
use crate::recurrence;
use crate::types::{
    days_to_field, parse_days, DueAt, NewTask, Priority, Recurrence, Status, TaskRecord,
};
use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

/// Decode one data row. Returns None when the id field is not numeric;
/// such rows stay on disk but are invisible to typed queries.
fn record_from_row(row: &[String]) -> Option<TaskRecord> {
    let field = |idx: usize| row.get(idx).map(String::as_str).unwrap_or("");
    let id = field(col::ID).parse().ok()?;
    Some(TaskRecord {
        id,
        description: field(col::TASK).to_string(),
        priority: Priority::from_field(field(col::PRIORITY)),
        status: Status::from_field(field(col::STATUS)),
        created_at: field(col::CREATED).to_string(),
        notes: field(col::NOTES).to_string(),
        recurrence: Recurrence::from_field(field(col::REPEAT)),
        days: parse_days(field(col::DAYS)),
        committed_at: non_empty(field(col::COMMITTED_AT)),
        last_completed_on: NaiveDate::parse_from_str(field(col::LAST_COMPLETED), "%Y-%m-%d").ok(),
        due: DueAt::from_field(field(col::DUE)),
    })
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

/// Next id: one greater than the largest numeric id on file, or 1 for an
/// empty table. Non-numeric ids are skipped rather than failing the add.
fn next_id(rows: &[Vec<String>]) -> u64 {
    rows.iter()
        .skip(1)
        .filter_map(|row| row.first())
        .filter_map(|id| id.parse::<u64>().ok())
        .max()
        .map_or(1, |max| max + 1)
}

impl TaskStore {
    /// Add a task and return its assigned id. Appends one row; the rest of
    /// the file is untouched.
    ///
    /// Not idempotent: retrying a failed add can append a duplicate row.
    pub fn add(&self, new: NewTask) -> Result<u64> {
        if new.description.trim().is_empty() {
            return Err(Error::validation("task description must not be empty"));
        }
        if new.recurrence == Recurrence::SpecificDays && new.days.is_empty() {
            return Err(Error::validation(
                "specific_days recurrence needs at least one weekday",
            ));
        }
        if let Some(day) = new.days.iter().find(|day| **day > 6) {
            return Err(Error::validation(format!(
                "weekday {day} is out of range (0 = Monday .. 6 = Sunday)"
            )));
        }

        if !self.path.exists() {
            self.initialize()?;
        }
        let rows = self.read_rows()?;
        let id = next_id(&rows);
        let row = vec![
            id.to_string(),
            new.description,
            new.priority.as_str().to_string(),
            Status::Pending.as_str().to_string(),
            Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            new.notes,
            new.recurrence.as_str().to_string(),
            days_to_field(&new.days),
            String::new(),
            String::new(),
            new.due.map(|due| due.to_field()).unwrap_or_default(),
        ];
        self.append_row(&row)?;
        debug!(id, "added todo");
        Ok(id)
    }

    /// Every record in file order. Short rows read as if padded with empty
    /// fields.
    pub fn get_all(&self) -> Result<Vec<TaskRecord>> {
        let rows = self.read_rows()?;
        let mut records = Vec::new();
        for (index, row) in rows.iter().enumerate().skip(1) {
            match record_from_row(row) {
                Some(record) => records.push(record),
                None => warn!(line = index + 1, "skipping todo row with non-numeric id"),
            }
        }
        Ok(records)
    }

    /// Records visible today: everything except repeating tasks that were
    /// already completed today.
    pub fn get_active(&self) -> Result<Vec<TaskRecord>> {
        let today = Local::now().date_naive();
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|record| recurrence::is_visible_today(record, today))
            .collect())
    }

    /// Records whose recurrence schedule includes today, any status.
    pub fn get_due_today(&self) -> Result<Vec<TaskRecord>> {
        let today = Local::now().date_naive();
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|record| recurrence::is_due_today(record, today))
            .collect())
    }

    /// Records with a commitment, in store order.
    pub fn get_committed(&self) -> Result<Vec<TaskRecord>> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(TaskRecord::is_committed)
            .collect())
    }

    /// Set a task's status. `Ok(false)` when no row has the id; the file is
    /// not rewritten in that case.
    pub fn update_status(&self, id: u64, status: Status) -> Result<bool> {
        let updated = self.patch_field(id, col::STATUS, status.as_str().to_string())?;
        if updated {
            debug!(id, status = status.as_str(), "updated todo status");
        }
        Ok(updated)
    }

    /// Mark a task as committed to, stamping the commitment time.
    /// `Ok(false)` when no row has the id.
    pub fn set_committed(&self, id: u64) -> Result<bool> {
        let stamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let updated = self.patch_field(id, col::COMMITTED_AT, stamp)?;
        if updated {
            debug!(id, "committed to todo");
        }
        Ok(updated)
    }

    /// Clear a task's commitment. `Ok(false)` when no row has the id.
    pub fn clear_committed(&self, id: u64) -> Result<bool> {
        let updated = self.patch_field(id, col::COMMITTED_AT, String::new())?;
        if updated {
            debug!(id, "cleared todo commitment");
        }
        Ok(updated)
    }

    /// Remove a task. Returns `Ok(true)` whether or not the id existed:
    /// unlike [`update_status`](Self::update_status), delete reports the
    /// end state rather than whether a row matched.
    pub fn delete(&self, id: u64) -> Result<bool> {
        let rows = self.read_rows()?;
        let id_field = id.to_string();
        let mut kept = Vec::with_capacity(rows.len());
        let mut iter = rows.into_iter();
        kept.push(iter.next().unwrap_or_else(schema::header));
        kept.extend(iter.filter(|row| row.first().is_some_and(|field| *field != id_field)));
        self.write_rows(&kept)?;
        debug!(id, "deleted todo");
        Ok(true)
    }

    /// Locate a row by id and overwrite one column, padding a short row to
    /// the current width first. One whole-table rewrite on a match.
    fn patch_field(&self, id: u64, column: usize, value: String) -> Result<bool> {
        let mut rows = self.read_rows()?;
        let id_field = id.to_string();
        let Some(row) = rows
            .iter_mut()
            .skip(1)
            .find(|row| row.first().is_some_and(|field| *field == id_field))
        else {
            return Ok(false);
        };
        schema::pad_row(row);
        row[column] = value;
        self.write_rows(&rows)?;
        Ok(true)
    }
}
