//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Outlay - Track and understand everyday spending
#[derive(Parser)]
#[command(name = "outlay")]
#[command(about = "Local-first expense tracker", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (defaults to the platform app-data location)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the data directory
    Init,

    /// Record a new expense
    Add {
        /// What the money went on
        description: String,

        /// Amount spent
        amount: f64,

        /// Category: food, transport, entertainment, utilities, shopping,
        /// health, travel, other
        category: String,

        /// Date as YYYY-MM-DD (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List expenses, optionally filtered
    List {
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Named period: this-month, last-month, this-year, last-30-days,
        /// last-90-days, all (no date limit)
        #[arg(short, long)]
        period: Option<String>,

        /// Restrict to a category (repeatable)
        #[arg(short, long)]
        category: Vec<String>,

        /// Minimum amount
        #[arg(long)]
        min: Option<f64>,

        /// Maximum amount
        #[arg(long)]
        max: Option<f64>,

        /// Match against description or category name
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Update fields of an existing expense
    Update {
        /// Expense id (a unique prefix is enough)
        id: String,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// New amount
        #[arg(long)]
        amount: Option<f64>,

        /// New category
        #[arg(long)]
        category: Option<String>,

        /// New date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },

    /// Delete an expense
    Delete {
        /// Expense id (a unique prefix is enough)
        id: String,
    },

    /// Delete every expense
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Show spending statistics
    Stats {
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Named period: this-month, last-month, this-year, last-30-days,
        /// last-90-days, all (no date limit)
        #[arg(short, long)]
        period: Option<String>,

        /// Restrict to a category (repeatable)
        #[arg(short, long)]
        category: Vec<String>,

        /// Minimum amount
        #[arg(long)]
        min: Option<f64>,

        /// Maximum amount
        #[arg(long)]
        max: Option<f64>,

        /// Match against description or category name
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Export expenses
    Export {
        #[command(subcommand)]
        format: ExportFormat,
    },

    /// Import expenses from a JSON archive
    Import {
        /// Archive file written by 'outlay export json'
        file: PathBuf,
    },

    /// Load built-in sample expenses
    Seed,

    /// Show or set the color theme
    Theme {
        /// light or dark (omit to show the current theme)
        value: Option<String>,
    },

    /// Show data directory status
    Status,
}

#[derive(Subcommand)]
pub enum ExportFormat {
    /// Expense rows as CSV
    Csv {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Named period (see 'outlay list --help')
        #[arg(short, long)]
        period: Option<String>,

        /// Restrict to a category (repeatable)
        #[arg(short, long)]
        category: Vec<String>,
    },

    /// Summary report with category breakdown as CSV
    Summary {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Named period (see 'outlay list --help')
        #[arg(short, long)]
        period: Option<String>,

        /// Restrict to a category (repeatable)
        #[arg(short, long)]
        category: Vec<String>,
    },

    /// Full JSON archive for backup or transfer
    Json {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// PDF report with summary, breakdown, and detail table
    Pdf {
        /// Output file
        #[arg(short, long, default_value = "report.pdf")]
        output: PathBuf,

        /// Report title
        #[arg(long)]
        title: Option<String>,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Named period (see 'outlay list --help')
        #[arg(short, long)]
        period: Option<String>,

        /// Restrict to a category (repeatable)
        #[arg(short, long)]
        category: Vec<String>,
    },
}
