//! Recurrence rules: which todos are due or visible on a given day.

use crate::types::{Recurrence, TaskRecord};
use chrono::{Datelike, NaiveDate};

/// Weekday number of a date, 0 = Monday through 6 = Sunday, matching the
/// stored day-list encoding.
fn weekday_number(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_monday() as u8
}

/// Whether a todo's recurrence schedule includes `today`.
///
/// Daily todos are due every day; SpecificDays todos are due when today's
/// weekday number is listed. Non-repeating todos are never "due today";
/// they are tracked by status alone.
pub fn is_due_today(record: &TaskRecord, today: NaiveDate) -> bool {
    match record.recurrence {
        Recurrence::None => false,
        Recurrence::Daily => true,
        Recurrence::SpecificDays => record.days.contains(&weekday_number(today)),
    }
}

/// Whether a todo shows up in the active list on `today`.
///
/// Repeating todos disappear for the rest of the day once completed, then
/// reappear on their next occurrence. Everything else is always visible.
/// Visibility is keyed on the completion date alone, so a SpecificDays todo
/// completed off-schedule is hidden that day too.
pub fn is_visible_today(record: &TaskRecord, today: NaiveDate) -> bool {
    if !record.recurrence.is_repeating() {
        return true;
    }
    record.last_completed_on != Some(today)
}
