//! CLI command definitions for todo-ledger
//!
//! This module defines the CLI structure using clap's derive macros.
//! The main entry point is the `Cli` struct which contains subcommands.

use crate::types::{Priority, Recurrence};
use clap::{Parser, Subcommand, ValueEnum};

/// Priority choices for `add`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PriorityArg {
    High,
    #[default]
    Medium,
    Low,
}

impl From<PriorityArg> for Priority {
    fn from(arg: PriorityArg) -> Self {
        match arg {
            PriorityArg::High => Priority::High,
            PriorityArg::Medium => Priority::Medium,
            PriorityArg::Low => Priority::Low,
        }
    }
}

/// Recurrence choices for `add`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RepeatArg {
    /// One-off task (default)
    #[default]
    None,
    /// Repeats every day
    Daily,
    /// Repeats on the weekdays given with --days
    SpecificDays,
}

impl From<RepeatArg> for Recurrence {
    fn from(arg: RepeatArg) -> Self {
        match arg {
            RepeatArg::None => Recurrence::None,
            RepeatArg::Daily => Recurrence::Daily,
            RepeatArg::SpecificDays => Recurrence::SpecificDays,
        }
    }
}

/// Personal todo tracker with recurring tasks and a done-item archive
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Path to the todo CSV file (overrides config)
    #[arg(short, long, global = true)]
    pub file: Option<String>,

    /// Path to the markdown archive document (overrides config)
    #[arg(short, long, global = true)]
    pub archive: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Logging output: 0/off, 1/stdout, 2/stderr (default), or filename
    #[arg(short, long, default_value = "2", global = true)]
    pub log: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a todo; a due time like "tomorrow 9am" in the description is
    /// picked up automatically
    Add {
        /// What to do
        description: String,

        /// Priority level
        #[arg(short, long, value_enum, default_value_t = PriorityArg::Medium)]
        priority: PriorityArg,

        /// Extra notes
        #[arg(short, long, default_value = "")]
        notes: String,

        /// How the task repeats
        #[arg(short, long, value_enum, default_value_t = RepeatArg::None)]
        repeat: RepeatArg,

        /// Weekdays for --repeat specific-days as comma-separated numbers,
        /// 0 = Monday (e.g. "0,2,4")
        #[arg(short, long)]
        days: Option<String>,
    },

    /// List todos visible today (default if no subcommand given)
    List {
        /// Include todos hidden for today
        #[arg(long)]
        all: bool,
    },

    /// List todos whose recurrence schedule includes today
    Due,

    /// Mark a todo done
    Done { id: u64 },

    /// Mark a todo pending again
    Pending { id: u64 },

    /// Delete a todo
    Delete { id: u64 },

    /// Commit to finishing a todo by the next check-in
    Commit { id: u64 },

    /// Withdraw a commitment
    Uncommit { id: u64 },

    /// List committed todos
    Committed,

    /// Move done todos into the archive document; recurring ones reset to
    /// pending
    Archive,
}
