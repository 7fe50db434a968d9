//! Outlay Core Library
//!
//! Shared functionality for the Outlay expense tracker:
//! - Domain models for expenses, categories, and preferences
//! - Field-level validation with stable error messages
//! - Composable filtering (dates, categories, amounts, text search)
//! - Statistics engine (totals, category breakdown, monthly trends)
//! - Key-value storage with pluggable backends (file, in-memory)
//! - CSV export and JSON archives for backup and transfer
//! - Raw PDF report generation

pub mod dates;
pub mod error;
pub mod export;
pub mod filter;
pub mod models;
pub mod report;
pub mod samples;
pub mod sanitize;
pub mod stats;
pub mod storage;
pub mod tracker;
pub mod validate;

pub use error::{Error, Result};
pub use export::{expenses_to_csv, summary_csv, ArchiveMetadata, ExpenseArchive};
pub use filter::{filter_expenses, ExpenseFilter};
pub use models::{
    CategoryBreakdown, Expense, ExpenseCategory, ExpenseInput, ExpenseStats, ExpenseUpdate,
    ImportOutcome, MonthlyTrend, Theme,
};
pub use report::render_pdf;
pub use samples::sample_expenses;
pub use sanitize::sanitize_text;
pub use stats::build_stats;
pub use storage::{
    default_data_dir, FileBackend, MemoryBackend, StorageBackend, Store, KEY_EXPENSES, KEY_THEME,
};
pub use tracker::ExpenseTracker;
pub use validate::{validate, FieldError, ValidationReport};
