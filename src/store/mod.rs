//! Flat-file store for todo records.
//!
//! The todo file is a header-first CSV table. Reads parse the whole file;
//! every mutation except `add` rewrites the whole table. That is O(n) per
//! operation and intentional at personal-tracker scale.

pub mod archive;
pub mod records;
pub mod schema;

use crate::error::Result;
use csv::{ReaderBuilder, WriterBuilder};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use tracing::info;

/// Handle on the todo file. Cheap to clone; all state lives on disk.
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    /// Create a handle. Does not touch the filesystem; call
    /// [`initialize`](Self::initialize) before the first operation.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the todo file with the current header if absent, or migrate
    /// an existing file to the current schema. Idempotent.
    pub fn initialize(&self) -> Result<()> {
        if !self.path.exists() {
            self.write_rows(&[schema::header()])?;
            info!(path = %self.path.display(), "created todo file");
            return Ok(());
        }
        self.migrate_if_needed()
    }

    /// Append missing column names to the header and an empty field to
    /// every data row. Existing values and row order are untouched.
    fn migrate_if_needed(&self) -> Result<()> {
        let mut rows = self.read_rows()?;
        let Some(header) = rows.first_mut() else {
            // Zero-byte file: treat like a fresh one.
            return self.write_rows(&[schema::header()]);
        };
        let missing: Vec<String> = schema::COLUMNS
            .iter()
            .copied()
            .filter(|name| !header.iter().any(|have| have.as_str() == *name))
            .map(str::to_string)
            .collect();
        if missing.is_empty() {
            return Ok(());
        }
        info!(columns = ?missing, "migrating todo file to current schema");
        let added = missing.len();
        header.extend(missing);
        for row in rows.iter_mut().skip(1) {
            for _ in 0..added {
                row.push(String::new());
            }
        }
        self.write_rows(&rows)
    }

    /// Read every row including the header. A missing file reads as a
    /// header-only table.
    fn read_rows(&self) -> Result<Vec<Vec<String>>> {
        if !self.path.exists() {
            return Ok(vec![schema::header()]);
        }
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)?;
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        Ok(rows)
    }

    /// Rewrite the whole table.
    fn write_rows(&self, rows: &[Vec<String>]) -> Result<()> {
        let mut writer = WriterBuilder::new()
            .flexible(true)
            .from_path(&self.path)?;
        for row in rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Append one row, leaving the rest of the file alone.
    fn append_row(&self, row: &[String]) -> Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = WriterBuilder::new().flexible(true).from_writer(file);
        writer.write_record(row)?;
        writer.flush()?;
        Ok(())
    }
}
