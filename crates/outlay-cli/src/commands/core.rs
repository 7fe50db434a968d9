//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `open_tracker` - Shared utility to open the tracker over file storage
//! - `cmd_init` - Initialize the data directory
//! - `cmd_seed` - Load built-in sample expenses
//! - `cmd_status` - Show data directory status
//! - `cmd_theme` - Show or set the color theme

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use outlay_core::storage::KEY_EXPENSES;
use outlay_core::{
    default_data_dir, sample_expenses, ExpenseTracker, FileBackend, Store, Theme,
};

/// Resolve the data directory, falling back to the platform default
pub fn resolve_data_dir(data_dir: Option<&Path>) -> PathBuf {
    data_dir.map(Path::to_path_buf).unwrap_or_else(default_data_dir)
}

/// Open the tracker over file-backed storage in the data directory
pub fn open_tracker(data_dir: Option<&Path>) -> Result<ExpenseTracker> {
    let dir = resolve_data_dir(data_dir);
    let backend = FileBackend::new(&dir)
        .with_context(|| format!("Failed to open data directory: {}", dir.display()))?;
    Ok(ExpenseTracker::open(Store::new(backend)))
}

pub fn cmd_init(data_dir: Option<&Path>) -> Result<()> {
    let dir = resolve_data_dir(data_dir);
    println!("🔧 Initializing data directory at {}...", dir.display());

    let tracker = open_tracker(data_dir)?;
    println!("   Storage backend: {}", tracker.store().backend_name());
    println!("   Expenses on record: {}", tracker.expenses().len());

    println!("✅ Outlay initialized successfully!");
    println!();
    println!("Next steps:");
    println!("  1. Record an expense: outlay add \"Lunch\" 12.50 food");
    println!("  2. Or load sample data: outlay seed");

    Ok(())
}

pub fn cmd_seed(data_dir: Option<&Path>) -> Result<()> {
    let mut tracker = open_tracker(data_dir)?;

    println!("🌱 Loading sample expenses...");

    let mut added = 0;
    for input in sample_expenses() {
        tracker
            .add(&input)
            .with_context(|| format!("Failed to add sample expense '{}'", input.description))?;
        added += 1;
    }

    println!("✅ Added {} sample expenses.", added);
    println!("   See them with: outlay list");

    Ok(())
}

pub fn cmd_status(data_dir: Option<&Path>) -> Result<()> {
    use std::fs;

    let dir = resolve_data_dir(data_dir);

    println!();
    println!("📊 Outlay Status");
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Data directory: {}", dir.display());

    if !dir.exists() {
        println!("   (not initialized - run 'outlay init')");
        println!();
        return Ok(());
    }

    // Size of the collection file, if any
    let collection = dir.join(format!("{}.json", KEY_EXPENSES));
    if collection.exists() {
        if let Ok(metadata) = fs::metadata(&collection) {
            let size_kb = metadata.len() as f64 / 1024.0;
            if size_kb < 1024.0 {
                println!("   Collection size: {:.1} KB", size_kb);
            } else {
                println!("   Collection size: {:.1} MB", size_kb / 1024.0);
            }
        }
    } else {
        println!("   Collection size: (no expenses recorded)");
    }

    let tracker = open_tracker(data_dir)?;
    let stats = tracker.stats();
    let theme = tracker.store().theme().load_or(Theme::default);

    println!();
    println!("   Expenses: {}", stats.total_expenses);
    println!("   Total recorded: ${:.2}", stats.total_amount);
    println!("   Theme: {}", theme);
    println!();

    Ok(())
}

pub fn cmd_theme(data_dir: Option<&Path>, value: Option<&str>) -> Result<()> {
    let tracker = open_tracker(data_dir)?;
    let handle = tracker.store().theme();

    match value {
        Some(value) => {
            let theme: Theme = value.parse().map_err(|e: String| anyhow::anyhow!(e))?;
            handle.save(&theme).context("Failed to save theme")?;
            println!("✅ Theme set to {}.", theme);
        }
        None => {
            let theme = handle.load_or(Theme::default);
            println!("Current theme: {}", theme);
        }
    }

    Ok(())
}
