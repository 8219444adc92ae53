//! Archival transform: move done todos into the archive document.

use super::schema::{self, col};
use super::TaskStore;
use crate::error::Result;
use crate::format;
use crate::types::{Recurrence, Status};
use chrono::Local;
use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::info;

impl TaskStore {
    /// Move every Done row into a dated section of the archive document.
    ///
    /// Non-repeating rows are removed from the table and live on only in
    /// the archive. Repeating rows are kept, reset to Pending, and stamped
    /// with today as their last completed date. Returns the number of rows
    /// archived; when nothing is Done, nothing is written, not even an
    /// empty archive section.
    pub fn archive_done(&self, archive_path: &Path) -> Result<usize> {
        let rows = self.read_rows()?;
        let done: Vec<Vec<String>> = rows
            .iter()
            .skip(1)
            .filter(|row| row.get(col::STATUS).map(String::as_str) == Some(Status::Done.as_str()))
            .cloned()
            .collect();
        if done.is_empty() {
            return Ok(0);
        }

        let today = Local::now().date_naive();
        if let Some(parent) = archive_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut doc = OpenOptions::new()
            .create(true)
            .append(true)
            .open(archive_path)?;
        doc.write_all(format::archive_section(today, &done).as_bytes())?;

        let done_ids: HashSet<String> = done
            .iter()
            .filter_map(|row| row.first().cloned())
            .collect();
        let today_field = today.format("%Y-%m-%d").to_string();
        let mut kept = Vec::with_capacity(rows.len());
        let mut iter = rows.into_iter();
        kept.push(iter.next().unwrap_or_else(schema::header));
        for mut row in iter {
            if !row.first().is_some_and(|id| done_ids.contains(id)) {
                kept.push(row);
                continue;
            }
            schema::pad_row(&mut row);
            if Recurrence::from_field(&row[col::REPEAT]).is_repeating() {
                row[col::STATUS] = Status::Pending.as_str().to_string();
                row[col::LAST_COMPLETED] = today_field.clone();
                kept.push(row);
            }
            // Done and non-repeating: dropped from the active table.
        }
        self.write_rows(&kept)?;
        info!(
            count = done.len(),
            archive = %archive_path.display(),
            "archived done todos"
        );
        Ok(done.len())
    }
}
