use crate::export::ExportFormat;
use crate::models::TimeField;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rDeskTime
#[derive(Parser)]
#[command(
    name = "rdesktime",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record office hours, lunch and breaks; compute daily desk time and print a work report",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Enable debug logging
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database and stored entries integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Show a day's entry and its summary
    Show {
        /// Date (YYYY-MM-DD), default today
        date: Option<String>,
    },

    /// Set office and lunch times for a day
    Set {
        /// Date (YYYY-MM-DD), default today
        date: Option<String>,

        #[arg(long = "in", help = "Office in (HH:MM or h:mm AM/PM, empty clears)")]
        office_in: Option<String>,

        #[arg(long = "out", help = "Office out")]
        office_out: Option<String>,

        #[arg(long = "lunch-start", help = "Lunch start")]
        lunch_start: Option<String>,

        #[arg(long = "lunch-end", help = "Lunch end")]
        lunch_end: Option<String>,

        #[arg(long = "now", value_enum, help = "Stamp a field with the current time")]
        now: Option<TimeField>,
    },

    /// Add, edit or remove ad-hoc breaks
    Break {
        #[command(subcommand)]
        action: BreakAction,
    },

    /// Write the free-text daily report
    Report {
        /// Date (YYYY-MM-DD), default today
        date: Option<String>,

        #[arg(long, conflicts_with = "file", help = "Report text")]
        text: Option<String>,

        #[arg(long, value_name = "FILE", help = "Read the report from a file")]
        file: Option<String>,

        #[arg(long, help = "Append instead of replacing")]
        append: bool,
    },

    /// Browse saved entries, newest first
    List {
        #[arg(long, short, help = "Only dates containing this text (e.g. 2025-09)")]
        filter: Option<String>,

        #[arg(long, short, default_value_t = 1, help = "Page number")]
        page: usize,
    },

    /// Delete the entry for a date
    Del {
        date: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Delete every stored entry
    Clear {
        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Export a day's report (pdf, html) or the history (json, csv, xlsx)
    Export {
        #[arg(long, value_enum, default_value = "pdf")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Day to export for pdf/html (default today)")]
        date: Option<String>,

        #[arg(
            long,
            value_name = "RANGE",
            help = "History range for json/csv/xlsx: YYYY, YYYY-MM, YYYY-MM-DD, A:B or all"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum BreakAction {
    /// Append a break
    Add {
        date: Option<String>,

        #[arg(long)]
        start: Option<String>,

        #[arg(long)]
        end: Option<String>,
    },

    /// Change a break's start or end
    Edit {
        date: Option<String>,

        #[arg(long, help = "Break number as shown by `show` (1-based)")]
        index: usize,

        #[arg(long)]
        start: Option<String>,

        #[arg(long)]
        end: Option<String>,
    },

    /// Remove a break
    Del {
        date: Option<String>,

        #[arg(long, help = "Break number as shown by `show` (1-based)")]
        index: usize,
    },
}
