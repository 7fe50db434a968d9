//! Export and import command implementations

use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use outlay_core::{expenses_to_csv, render_pdf, summary_csv, ExpenseArchive, ExpenseFilter};

use super::open_tracker;

fn write_text(path: &Path, contents: &str) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    file.write_all(contents.as_bytes())?;
    Ok(())
}

/// Export the filtered view as CSV rows
pub fn cmd_export_csv(
    data_dir: Option<&Path>,
    filter: ExpenseFilter,
    output: Option<PathBuf>,
) -> Result<()> {
    let mut tracker = open_tracker(data_dir)?;
    tracker.set_filter(filter);
    let csv = expenses_to_csv(&tracker.filtered());

    match output {
        Some(path) => {
            write_text(&path, &csv)?;
            let rows = csv.lines().count() - 1; // Subtract header
            println!("✅ Exported {} expenses to {}", rows, path.display());
        }
        None => print!("{}", csv),
    }

    Ok(())
}

/// Export the summary report (totals plus category breakdown) as CSV
pub fn cmd_export_summary(
    data_dir: Option<&Path>,
    filter: ExpenseFilter,
    output: Option<PathBuf>,
) -> Result<()> {
    let mut tracker = open_tracker(data_dir)?;
    tracker.set_filter(filter);
    let csv = summary_csv(&tracker.filtered(), &tracker.stats());

    match output {
        Some(path) => {
            write_text(&path, &csv)?;
            println!("✅ Summary report written to {}", path.display());
        }
        None => print!("{}", csv),
    }

    Ok(())
}

/// Export the whole collection as a JSON archive. Archives always carry the
/// full collection, never the filtered view.
pub fn cmd_export_json(data_dir: Option<&Path>, output: Option<PathBuf>) -> Result<()> {
    let tracker = open_tracker(data_dir)?;
    let archive = ExpenseArchive::new(tracker.expenses().to_vec());
    let json = archive.to_json().context("Failed to serialize archive")?;

    match output {
        Some(path) => {
            write_text(&path, &json)?;
            println!(
                "✅ Archived {} expenses to {}",
                archive.metadata.expense_count,
                path.display()
            );
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Render the filtered view as a PDF report
pub fn cmd_export_pdf(
    data_dir: Option<&Path>,
    filter: ExpenseFilter,
    output: &Path,
    title: Option<&str>,
) -> Result<()> {
    let mut tracker = open_tracker(data_dir)?;
    tracker.set_filter(filter);
    let expenses = tracker.filtered();
    let bytes = render_pdf(&expenses, &tracker.stats(), title);

    std::fs::write(output, &bytes)
        .with_context(|| format!("Failed to write PDF: {}", output.display()))?;
    println!(
        "✅ Report with {} expenses written to {}",
        expenses.len(),
        output.display()
    );

    Ok(())
}

/// Import expenses from a JSON archive
pub fn cmd_import(data_dir: Option<&Path>, file: &Path) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("Archive file not found: {}", file.display());
    }

    let mut json = String::new();
    File::open(file)
        .with_context(|| format!("Failed to open archive: {}", file.display()))?
        .read_to_string(&mut json)
        .context("Failed to read archive")?;

    let archive =
        ExpenseArchive::from_json(&json).context("Failed to parse archive file as JSON")?;

    println!("📦 Importing archive from: {}", file.display());
    println!("   Version: {}", archive.metadata.version);
    println!("   Exported: {}", archive.metadata.exported_at);
    println!("   Expenses: {}", archive.metadata.expense_count);

    let mut tracker = open_tracker(data_dir)?;
    let outcome = tracker.import(archive.expenses)?;

    println!();
    println!("✅ Import complete!");
    println!("   Imported: {}", outcome.imported);
    println!("   Skipped (duplicates): {}", outcome.skipped);

    Ok(())
}
