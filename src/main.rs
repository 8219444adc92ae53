//! todo-ledger
//!
//! A personal todo tracker: CSV-backed task list with recurring tasks,
//! natural-language due dates, commitments, and an archive of done work.

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use std::fs::OpenOptions;
use todo_ledger::cli::{Cli, Command};
use todo_ledger::config::Config;
use todo_ledger::duedate;
use todo_ledger::format;
use todo_ledger::store::TaskStore;
use todo_ledger::types::{parse_days, NewTask, Status};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on --log option
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    match cli.log.as_str() {
        "0" | "off" => {
            // No logging
        }
        "1" | "stdout" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stdout)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        "2" | "stderr" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        filename => {
            // Log to file (append mode)
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(filename)?;
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(file)
                .with_ansi(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    // Load configuration, then apply CLI overrides
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(),
    };
    if let Some(file) = &cli.file {
        config.storage.todo_path = file.into();
    }
    if let Some(archive) = &cli.archive {
        config.storage.archive_path = archive.into();
    }
    config.ensure_storage_dirs()?;

    let store = TaskStore::new(&config.storage.todo_path);
    store.initialize()?;

    match cli.command.unwrap_or(Command::List { all: false }) {
        Command::Add {
            description,
            priority,
            notes,
            repeat,
            days,
        } => {
            let due = duedate::extract_due(&description, Local::now().date_naive());
            let id = store.add(NewTask {
                description: description.trim().to_string(),
                priority: priority.into(),
                notes,
                recurrence: repeat.into(),
                days: days.as_deref().map(parse_days).unwrap_or_default(),
                due,
            })?;
            println!("Added todo #{id}");
        }
        Command::List { all } => {
            let todos = if all {
                store.get_all()?
            } else {
                store.get_active()?
            };
            print!("{}", format::format_todos_markdown(&todos));
        }
        Command::Due => {
            print!("{}", format::format_todos_markdown(&store.get_due_today()?));
        }
        Command::Done { id } => {
            report(store.update_status(id, Status::Done)?, id, "marked done");
        }
        Command::Pending { id } => {
            report(store.update_status(id, Status::Pending)?, id, "marked pending");
        }
        Command::Delete { id } => {
            store.delete(id)?;
            println!("Deleted todo #{id}");
        }
        Command::Commit { id } => {
            report(store.set_committed(id)?, id, "committed");
        }
        Command::Uncommit { id } => {
            report(store.clear_committed(id)?, id, "commitment cleared");
        }
        Command::Committed => {
            print!("{}", format::format_todos_markdown(&store.get_committed()?));
        }
        Command::Archive => {
            let count = store.archive_done(&config.storage.archive_path)?;
            if count == 0 {
                println!("Nothing to archive");
            } else {
                println!(
                    "Archived {count} todo(s) to {}",
                    config.storage.archive_path.display()
                );
            }
        }
    }

    Ok(())
}

fn report(updated: bool, id: u64, action: &str) {
    if updated {
        println!("Todo #{id} {action}");
    } else {
        println!("No todo with id {id}");
    }
}
