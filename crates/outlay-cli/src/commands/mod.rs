//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Core commands (init, seed, status, theme) and shared utilities (open_tracker)
//! - `expenses` - Expense commands (add, list, update, delete, clear)
//! - `reports` - Stats output and filter/period resolution
//! - `transfer` - Export and import commands (CSV, summary, JSON archive, PDF)

pub mod core;
pub mod expenses;
pub mod reports;
pub mod transfer;

// Re-export command functions for main.rs
pub use core::*;
pub use expenses::*;
pub use reports::*;
pub use transfer::*;

/// Truncate a string to a maximum number of characters, adding "..." if
/// truncated. Counts chars, not bytes, so multibyte descriptions never split.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
