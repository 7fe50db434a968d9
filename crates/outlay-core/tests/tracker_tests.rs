//! Integration tests for outlay-core
//!
//! These tests exercise the full add → filter → stats → export workflow over
//! real file-backed storage, including reopening the store between steps the
//! way separate CLI invocations would.

use outlay_core::{
    build_stats, expenses_to_csv, render_pdf, sample_expenses, ExpenseArchive, ExpenseCategory,
    ExpenseFilter, ExpenseInput, ExpenseTracker, ExpenseUpdate, FileBackend, Store, Theme,
};
use tempfile::TempDir;

/// Helper returning the data dir guard and a tracker opened over it
fn open_tracker(dir: &TempDir) -> ExpenseTracker {
    let backend = FileBackend::new(dir.path()).expect("Failed to create file backend");
    ExpenseTracker::open(Store::new(backend))
}

/// Five expenses across three months and three categories.
/// Food carries 325.00 of the 450.00 total over three records.
fn fixture_inputs() -> Vec<ExpenseInput> {
    vec![
        ExpenseInput::new("Groceries", 100.0, "food", "2024-01-15"),
        ExpenseInput::new("Bus pass", 50.0, "transport", "2024-01-20"),
        ExpenseInput::new("Dinner party", 200.0, "food", "2024-02-10"),
        ExpenseInput::new("Cinema", 75.0, "entertainment", "2024-02-15"),
        ExpenseInput::new("Snacks", 25.0, "food", "2024-03-01"),
    ]
}

fn seed(tracker: &mut ExpenseTracker) {
    for input in fixture_inputs() {
        tracker.add(&input).expect("Failed to add fixture expense");
    }
}

// =============================================================================
// Persistence Tests
// =============================================================================

#[test]
fn test_collection_survives_reopen() {
    let dir = TempDir::new().expect("Failed to create temp dir");

    // First session: record two expenses
    let mut tracker = open_tracker(&dir);
    let kept = tracker
        .add(&ExpenseInput::new("Groceries", 42.50, "food", "2024-05-01"))
        .expect("Failed to add expense");
    tracker
        .add(&ExpenseInput::new("Bus pass", 30.0, "transport", "2024-05-02"))
        .expect("Failed to add expense");
    drop(tracker);

    // Second session: update one, delete the other
    let mut tracker = open_tracker(&dir);
    assert_eq!(tracker.expenses().len(), 2);
    let bus_id = tracker.expenses()[0].id.clone();
    tracker
        .update(&kept.id, &ExpenseUpdate::new().amount(45.00))
        .expect("Failed to update expense");
    tracker.delete(&bus_id).expect("Failed to delete expense");
    drop(tracker);

    // Third session: only the updated record remains
    let tracker = open_tracker(&dir);
    assert_eq!(tracker.expenses().len(), 1);
    let survivor = &tracker.expenses()[0];
    assert_eq!(survivor.id, kept.id);
    assert_eq!(survivor.amount, 45.00);
    assert_eq!(survivor.description, "Groceries");
}

#[test]
fn test_theme_preference_survives_reopen() {
    let dir = TempDir::new().expect("Failed to create temp dir");

    let tracker = open_tracker(&dir);
    tracker
        .store()
        .theme()
        .save(&Theme::Dark)
        .expect("Failed to save theme");
    drop(tracker);

    let tracker = open_tracker(&dir);
    assert_eq!(tracker.store().theme().load_or(Theme::default), Theme::Dark);
}

// =============================================================================
// Filter and Stats Workflow Tests
// =============================================================================

#[test]
fn test_filtered_stats_workflow() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut tracker = open_tracker(&dir);
    seed(&mut tracker);

    // Unfiltered totals
    let stats = tracker.stats();
    assert_eq!(stats.total_expenses, 5);
    assert_eq!(stats.total_amount, 450.0);
    assert_eq!(stats.average_amount, 90.0);
    assert_eq!(outlay_core::stats::median_amount(tracker.expenses()), 75.0);

    // Narrow to Food and recompute
    tracker.set_filter(ExpenseFilter::new().category(ExpenseCategory::Food));
    let food_stats = tracker.stats();
    assert_eq!(food_stats.total_expenses, 3);
    assert_eq!(food_stats.total_amount, 325.0);
    assert_eq!(food_stats.category_breakdown.len(), 1);
    assert!((food_stats.category_breakdown[0].percentage - 100.0).abs() < 1e-9);

    // Layer a date range on top of the category restriction
    let narrowed = tracker
        .filter()
        .clone()
        .start_date(outlay_core::dates::parse_date("2024-02-01"))
        .end_date(outlay_core::dates::parse_date("2024-02-28"));
    tracker.set_filter(narrowed);
    let feb_food = tracker.filtered();
    assert_eq!(feb_food.len(), 1);
    assert_eq!(feb_food[0].description, "Dinner party");

    // Clearing restores the full view
    tracker.clear_filter();
    assert_eq!(tracker.filtered().len(), 5);
}

#[test]
fn test_monthly_trends_from_fixture() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut tracker = open_tracker(&dir);
    seed(&mut tracker);

    let stats = tracker.stats();
    let labels: Vec<&str> = stats
        .monthly_trends
        .iter()
        .map(|t| t.label.as_str())
        .collect();
    assert_eq!(labels, vec!["Jan 2024", "Feb 2024", "Mar 2024"]);
    assert_eq!(stats.monthly_trends[0].total, 150.0);
    assert_eq!(stats.monthly_trends[1].total, 275.0);
    assert_eq!(stats.monthly_trends[2].total, 25.0);
}

// =============================================================================
// Archive Round Trip Tests
// =============================================================================

#[test]
fn test_archive_transfers_between_stores() {
    let source_dir = TempDir::new().expect("Failed to create temp dir");
    let mut source = open_tracker(&source_dir);
    seed(&mut source);

    let json = ExpenseArchive::new(source.expenses().to_vec())
        .to_json()
        .expect("Failed to serialize archive");

    // Import into a fresh store
    let target_dir = TempDir::new().expect("Failed to create temp dir");
    let mut target = open_tracker(&target_dir);
    let archive = ExpenseArchive::from_json(&json).expect("Failed to parse archive");
    assert_eq!(archive.metadata.expense_count, 5);

    let outcome = target
        .import(archive.expenses)
        .expect("Failed to import archive");
    assert_eq!(outcome.imported, 5);
    assert_eq!(outcome.skipped, 0);

    // Same ids, same totals, and the import persisted
    drop(target);
    let mut reopened = open_tracker(&target_dir);
    assert_eq!(reopened.expenses().len(), 5);
    assert_eq!(reopened.stats().total_amount, 450.0);

    // Importing the same archive again skips everything
    let archive = ExpenseArchive::from_json(&json).expect("Failed to parse archive");
    let outcome = reopened
        .import(archive.expenses)
        .expect("Failed to import archive");
    assert_eq!(outcome.imported, 0);
    assert_eq!(outcome.skipped, 5);
}

// =============================================================================
// Export Output Tests
// =============================================================================

#[test]
fn test_csv_export_of_filtered_view() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut tracker = open_tracker(&dir);
    seed(&mut tracker);

    tracker.set_filter(ExpenseFilter::new().category(ExpenseCategory::Food));
    let csv = expenses_to_csv(&tracker.filtered());

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "Date,Description,Category,Amount");
    assert_eq!(lines.len(), 4);
    for line in &lines[1..] {
        assert!(line.contains(",Food,"), "unexpected row: {}", line);
    }
}

#[test]
fn test_pdf_report_over_tracker_data() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut tracker = open_tracker(&dir);
    seed(&mut tracker);

    let expenses = tracker.filtered();
    let bytes = render_pdf(&expenses, &tracker.stats(), None);
    let text = String::from_utf8(bytes).expect("PDF output should be ASCII");
    assert!(text.starts_with("%PDF-1.4\n"));
    assert!(text.contains("(Total Expenses: 5)"));
    assert!(text.contains("(Total Amount: $450.00)"));
}

// =============================================================================
// Sample Data Tests
// =============================================================================

#[test]
fn test_seeding_samples_end_to_end() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut tracker = open_tracker(&dir);

    for input in sample_expenses() {
        tracker.add(&input).expect("Failed to add sample expense");
    }

    assert_eq!(tracker.expenses().len(), 20);
    let stats = build_stats(tracker.expenses());
    assert!(stats.total_amount > 0.0);
    assert!(!stats.category_breakdown.is_empty());
    assert!(!stats.monthly_trends.is_empty());
}
