//! Export functionality for expenses
//!
//! Supports:
//! - CSV export of the expense listing (RFC 4180 escaping)
//! - A summary CSV report with totals and the category breakdown
//! - A JSON archive of the whole collection for backup and restore

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Expense, ExpenseStats};

/// Escape a CSV field per RFC 4180. Fields containing commas, quotes, or
/// newlines are wrapped in quotes with embedded quotes doubled; anything
/// else passes through untouched.
fn escape_csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Render expenses as CSV, one row per expense in collection order.
///
/// Date and description are free text and get escaped; category labels and
/// formatted amounts never need it.
pub fn expenses_to_csv(expenses: &[Expense]) -> String {
    let mut csv = String::from("Date,Description,Category,Amount\n");
    for expense in expenses {
        let date = escape_csv_field(&expense.date);
        let description = escape_csv_field(&expense.description);
        csv.push_str(&format!(
            "{},{},{},{:.2}\n",
            date,
            description,
            expense.category.label(),
            expense.amount
        ));
    }
    csv
}

/// Render a summary report as CSV: overall totals, the category breakdown,
/// then the full listing, with blank lines between sections.
pub fn summary_csv(expenses: &[Expense], stats: &ExpenseStats) -> String {
    let mut csv = String::from("Expense Summary Report\n\n");
    csv.push_str(&format!("Total Expenses,{}\n", stats.total_expenses));
    csv.push_str(&format!("Total Amount,${:.2}\n", stats.total_amount));
    csv.push_str(&format!("Average Amount,${:.2}\n", stats.average_amount));
    csv.push_str("\nCategory Breakdown\n");
    csv.push_str("Category,Total\n");
    for entry in &stats.category_breakdown {
        csv.push_str(&format!("{},${:.2}\n", entry.category.label(), entry.total));
    }
    csv.push_str("\nAll Expenses\n");
    csv.push_str(&expenses_to_csv(expenses));
    csv
}

/// Metadata stamped on every archive
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveMetadata {
    /// Version of outlay that wrote the archive
    pub version: String,
    /// When the archive was written (RFC 3339)
    pub exported_at: String,
    pub expense_count: usize,
}

/// Portable snapshot of the whole collection. The import side feeds
/// [`crate::tracker::ExpenseTracker::import`], so re-importing an archive
/// into the same collection is a no-op.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseArchive {
    pub metadata: ArchiveMetadata,
    pub expenses: Vec<Expense>,
}

impl ExpenseArchive {
    /// Wrap a collection in an archive envelope.
    pub fn new(expenses: Vec<Expense>) -> Self {
        Self {
            metadata: ArchiveMetadata {
                version: env!("CARGO_PKG_VERSION").to_string(),
                exported_at: Utc::now().to_rfc3339(),
                expense_count: expenses.len(),
            },
            expenses,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseCategory;
    use crate::stats::build_stats;

    fn expense(description: &str, amount: f64, category: ExpenseCategory, date: &str) -> Expense {
        Expense {
            id: format!("id-{}", description.len()),
            description: description.to_string(),
            amount,
            category,
            date: date.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_escape_csv_field() {
        assert_eq!(escape_csv_field("simple"), "simple");
        assert_eq!(escape_csv_field("with,comma"), "\"with,comma\"");
        assert_eq!(escape_csv_field("with\"quote"), "\"with\"\"quote\"");
        assert_eq!(escape_csv_field("with\nnewline"), "\"with\nnewline\"");
        assert_eq!(
            escape_csv_field("say \"hi\", ok"),
            "\"say \"\"hi\"\", ok\""
        );
    }

    #[test]
    fn test_expenses_to_csv_empty() {
        let csv = expenses_to_csv(&[]);
        assert_eq!(csv, "Date,Description,Category,Amount\n");
    }

    #[test]
    fn test_expenses_to_csv_rows() {
        let expenses = vec![
            expense("Lunch", 12.5, ExpenseCategory::Food, "2024-01-15"),
            expense("Taxi, airport", 40.0, ExpenseCategory::Transport, "2024-01-16"),
        ];
        let csv = expenses_to_csv(&expenses);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Date,Description,Category,Amount");
        assert_eq!(lines[1], "2024-01-15,Lunch,Food,12.50");
        assert_eq!(lines[2], "2024-01-16,\"Taxi, airport\",Transport,40.00");
    }

    #[test]
    fn test_summary_csv_sections() {
        let expenses = vec![
            expense("Groceries", 100.0, ExpenseCategory::Food, "2024-01-15"),
            expense("Bus", 20.0, ExpenseCategory::Transport, "2024-01-16"),
        ];
        let stats = build_stats(&expenses);
        let csv = summary_csv(&expenses, &stats);

        assert!(csv.starts_with("Expense Summary Report\n"));
        assert!(csv.contains("Total Expenses,2\n"));
        assert!(csv.contains("Total Amount,$120.00\n"));
        assert!(csv.contains("Average Amount,$60.00\n"));
        assert!(csv.contains("Category Breakdown\n"));
        assert!(csv.contains("Food,$100.00\n"));
        assert!(csv.contains("Transport,$20.00\n"));
        assert!(csv.contains("All Expenses\n"));
        assert!(csv.contains("2024-01-15,Groceries,Food,100.00\n"));
    }

    #[test]
    fn test_archive_serialization() {
        let expenses = vec![expense("Lunch", 12.5, ExpenseCategory::Food, "2024-01-15")];
        let archive = ExpenseArchive::new(expenses);
        assert_eq!(archive.metadata.expense_count, 1);

        let json = archive.to_json().expect("Failed to serialize archive");
        assert!(json.contains("\"version\": \"0.1.0\""));
        assert!(json.contains("Lunch"));

        let parsed = ExpenseArchive::from_json(&json).expect("Failed to parse archive");
        assert_eq!(parsed.expenses.len(), 1);
        assert_eq!(parsed.expenses[0].description, "Lunch");
    }

    #[test]
    fn test_archive_rejects_garbage() {
        assert!(ExpenseArchive::from_json("{not json").is_err());
        assert!(ExpenseArchive::from_json("{\"metadata\":{}}").is_err());
    }
}
