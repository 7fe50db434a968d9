//! Expense command implementations

use std::path::Path;

use anyhow::Result;
use outlay_core::validate::{validate, validate_amount, validate_category, validate_date};
use outlay_core::{dates, ExpenseFilter, ExpenseInput, ExpenseTracker, ExpenseUpdate};

use super::{open_tracker, truncate};

/// First characters of an id, enough to identify it in output
fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

/// Resolve a full expense id from a unique prefix
fn resolve_id(tracker: &ExpenseTracker, prefix: &str) -> Result<String> {
    let matches: Vec<&str> = tracker
        .expenses()
        .iter()
        .filter(|e| e.id.starts_with(prefix))
        .map(|e| e.id.as_str())
        .collect();

    match matches.len() {
        0 => anyhow::bail!("No expense found with id {}", prefix),
        1 => Ok(matches[0].to_string()),
        n => anyhow::bail!("Id prefix {} is ambiguous ({} matches)", prefix, n),
    }
}

pub fn cmd_add(
    data_dir: Option<&Path>,
    description: &str,
    amount: f64,
    category: &str,
    date: Option<&str>,
) -> Result<()> {
    let date = date
        .map(str::to_string)
        .unwrap_or_else(dates::today_string);
    let input = ExpenseInput::new(description, amount, category, date);

    // Check up front so every field error prints, not just the first
    let report = validate(&input);
    if !report.is_valid() {
        println!("❌ Could not add expense:");
        for error in &report.errors {
            println!("   {}: {}", error.field, error.message);
        }
        anyhow::bail!("{} validation error(s)", report.errors.len());
    }

    let mut tracker = open_tracker(data_dir)?;
    let expense = tracker.add(&input)?;

    println!("✅ Added expense {}:", short_id(&expense.id));
    println!(
        "   {} │ {:>10} │ {:13} │ {}",
        expense.date,
        format!("${:.2}", expense.amount),
        expense.category.label(),
        truncate(&expense.description, 40)
    );

    Ok(())
}

pub fn cmd_list(data_dir: Option<&Path>, filter: ExpenseFilter) -> Result<()> {
    let mut tracker = open_tracker(data_dir)?;
    tracker.set_filter(filter);
    let expenses = tracker.filtered();

    if expenses.is_empty() {
        if tracker.expenses().is_empty() {
            println!("No expenses recorded. Add one with:");
            println!("  outlay add \"Lunch\" 12.50 food");
        } else {
            println!("No expenses match the filter.");
        }
        return Ok(());
    }

    println!();
    println!(
        "📝 Expenses ({} of {})",
        expenses.len(),
        tracker.expenses().len()
    );
    println!("   ─────────────────────────────────────────────────────────────");

    for expense in &expenses {
        let amount_str = format!("\x1b[31m${:.2}\x1b[0m", expense.amount);
        println!(
            "   {} │ {} │ {:>10} │ {:13} │ {}",
            short_id(&expense.id),
            expense.date,
            amount_str,
            expense.category.label(),
            truncate(&expense.description, 40)
        );
    }

    let total: f64 = expenses.iter().map(|e| e.amount).sum();
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Total: ${:.2}", total);

    Ok(())
}

pub fn cmd_update(
    data_dir: Option<&Path>,
    id_prefix: &str,
    description: Option<&str>,
    amount: Option<f64>,
    category: Option<&str>,
    date: Option<&str>,
) -> Result<()> {
    if description.is_none() && amount.is_none() && category.is_none() && date.is_none() {
        anyhow::bail!("Nothing to update. Pass --description, --amount, --category, or --date.");
    }

    let mut tracker = open_tracker(data_dir)?;
    let id = resolve_id(&tracker, id_prefix)?;

    let mut update = ExpenseUpdate::new();
    if let Some(description) = description {
        update = update.description(description);
    }
    if let Some(amount) = amount {
        if let Some(message) = validate_amount(amount) {
            anyhow::bail!(message);
        }
        update = update.amount(amount);
    }
    if let Some(category) = category {
        if let Some(message) = validate_category(category) {
            anyhow::bail!(message);
        }
        update = update.category(category.parse().map_err(|e: String| anyhow::anyhow!(e))?);
    }
    if let Some(date) = date {
        if let Some(message) = validate_date(date) {
            anyhow::bail!(message);
        }
        update = update.date(date);
    }

    tracker.update(&id, &update)?;

    let updated = tracker
        .find(&id)
        .ok_or_else(|| anyhow::anyhow!("Expense {} disappeared during update", short_id(&id)))?;
    println!("✅ Updated expense {}:", short_id(&id));
    println!(
        "   {} │ {:>10} │ {:13} │ {}",
        updated.date,
        format!("${:.2}", updated.amount),
        updated.category.label(),
        truncate(&updated.description, 40)
    );

    Ok(())
}

pub fn cmd_delete(data_dir: Option<&Path>, id_prefix: &str) -> Result<()> {
    let mut tracker = open_tracker(data_dir)?;
    let id = resolve_id(&tracker, id_prefix)?;
    let expense = tracker
        .find(&id)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("No expense found with id {}", id_prefix))?;

    tracker.delete(&id)?;

    println!("✅ Deleted expense {}:", short_id(&id));
    println!(
        "   {} │ ${:.2} │ {}",
        expense.date,
        expense.amount,
        truncate(&expense.description, 40)
    );

    Ok(())
}

pub fn cmd_clear(data_dir: Option<&Path>, yes: bool) -> Result<()> {
    use std::io::{self, Write};

    let mut tracker = open_tracker(data_dir)?;
    let count = tracker.expenses().len();

    if count == 0 {
        println!("Nothing to clear.");
        return Ok(());
    }

    if !yes {
        print!(
            "⚠️  This will delete all {} expenses. Are you sure? [y/N] ",
            count
        );
        io::stdout().flush()?;

        let mut answer = String::new();
        io::stdin().read_line(&mut answer)?;
        if !answer.trim().eq_ignore_ascii_case("y") {
            println!("Cancelled.");
            return Ok(());
        }
    }

    tracker.clear_all()?;
    println!("✅ Deleted {} expenses.", count);

    Ok(())
}
