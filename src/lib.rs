//! todo-ledger Library
//!
//! This module exports the core components for testing and integration.

pub mod cli;
pub mod config;
pub mod duedate;
pub mod error;
pub mod format;
pub mod recurrence;
pub mod store;
pub mod types;
