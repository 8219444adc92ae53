//! Core types for the todo ledger.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Task priority. Stored as `High` / `Medium` / `Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }

    /// Read a stored field. Unrecognized values fall back to Medium so a
    /// hand-edited file still loads.
    pub fn from_field(s: &str) -> Self {
        Self::from_str(s).unwrap_or(Priority::Medium)
    }
}

/// Task completion state. Stored as `Pending` / `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Pending,
    Done,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::Done => "Done",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Pending" => Some(Status::Pending),
            "Done" => Some(Status::Done),
            _ => None,
        }
    }

    /// Read a stored field. Anything other than `Done` counts as Pending.
    pub fn from_field(s: &str) -> Self {
        Self::from_str(s).unwrap_or(Status::Pending)
    }
}

/// How a task repeats. Stored as `none` / `daily` / `specific_days`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recurrence {
    #[default]
    None,
    Daily,
    SpecificDays,
}

impl Recurrence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recurrence::None => "none",
            Recurrence::Daily => "daily",
            Recurrence::SpecificDays => "specific_days",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "none" => Some(Recurrence::None),
            "daily" => Some(Recurrence::Daily),
            "specific_days" => Some(Recurrence::SpecificDays),
            _ => None,
        }
    }

    /// Read a stored field. Unrecognized values read as non-repeating.
    pub fn from_field(s: &str) -> Self {
        Self::from_str(s).unwrap_or(Recurrence::None)
    }

    pub fn is_repeating(&self) -> bool {
        matches!(self, Recurrence::Daily | Recurrence::SpecificDays)
    }
}

/// Parse a stored weekday list ("0,2,4") into weekday numbers, 0 = Monday.
/// Non-numeric fragments are skipped.
pub fn parse_days(field: &str) -> Vec<u8> {
    field
        .split(',')
        .filter_map(|part| part.trim().parse::<u8>().ok())
        .collect()
}

/// Encode weekday numbers as a stored field ("0,2,4").
pub fn days_to_field(days: &[u8]) -> String {
    days.iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// When a task is due: either a full timestamp or a bare date.
/// Stored as `YYYY-MM-DD HH:MM` or `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DueAt {
    At(NaiveDateTime),
    Date(NaiveDate),
}

impl DueAt {
    pub fn to_field(&self) -> String {
        match self {
            DueAt::At(at) => at.format("%Y-%m-%d %H:%M").to_string(),
            DueAt::Date(date) => date.format("%Y-%m-%d").to_string(),
        }
    }

    /// Read a stored field. Empty or unparseable values read as no due.
    pub fn from_field(field: &str) -> Option<Self> {
        if field.is_empty() {
            return None;
        }
        if let Ok(at) = NaiveDateTime::parse_from_str(field, "%Y-%m-%d %H:%M") {
            return Some(DueAt::At(at));
        }
        NaiveDate::parse_from_str(field, "%Y-%m-%d")
            .ok()
            .map(DueAt::Date)
    }

    /// The instant this due value means for sorting and "due soon" checks.
    /// A bare date counts as 23:59 of that date.
    pub fn effective_instant(&self) -> NaiveDateTime {
        match self {
            DueAt::At(at) => *at,
            DueAt::Date(date) => date.and_hms_opt(23, 59, 0).expect("valid wall-clock time"),
        }
    }
}

/// One row of the todo file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Store-assigned, monotonically increasing.
    pub id: u64,
    pub description: String,
    pub priority: Priority,
    pub status: Status,
    /// Set once at creation, "YYYY-MM-DD HH:MM:SS".
    pub created_at: String,
    pub notes: String,
    pub recurrence: Recurrence,
    /// Weekday numbers 0-6, 0 = Monday. Only meaningful for SpecificDays.
    pub days: Vec<u8>,
    /// Present iff the task is committed to, "YYYY-MM-DD HH:MM:SS".
    pub committed_at: Option<String>,
    /// Date a repeating task was last completed on.
    pub last_completed_on: Option<NaiveDate>,
    pub due: Option<DueAt>,
}

impl TaskRecord {
    pub fn is_done(&self) -> bool {
        self.status == Status::Done
    }

    pub fn is_committed(&self) -> bool {
        self.committed_at.is_some()
    }
}

/// Input for creating a task. The store assigns id, status, and timestamps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewTask {
    pub description: String,
    pub priority: Priority,
    pub notes: String,
    pub recurrence: Recurrence,
    pub days: Vec<u8>,
    pub due: Option<DueAt>,
}
